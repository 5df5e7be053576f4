use crate::constants::UNASSIGNED_ID;
use crate::dtos::{CommandCreateDto, CommandReadDto, CommandUpdateDto};
use crate::entities::command;

impl From<command::Model> for CommandReadDto {
    fn from(model: command::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            platform: model.platform,
        }
    }
}

impl From<CommandCreateDto> for command::Model {
    fn from(dto: CommandCreateDto) -> Self {
        Self {
            id: UNASSIGNED_ID,
            title: dto.title,
            description: dto.description,
            platform: dto.platform,
        }
    }
}

impl CommandUpdateDto {
    /// Overwrite every mapped field of `target`. The id is left untouched.
    pub fn apply_to(self, target: &mut command::Model) {
        target.title = self.title;
        target.description = self.description;
        target.platform = self.platform;
    }
}
