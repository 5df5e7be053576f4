//! Caller-side flow around the command repository.
//!
//! This is what an API endpoint does with a request body: map the transfer
//! object onto the entity, stage the change, commit, and map the stored
//! record back out.

use log::info;
use sea_orm::DbErr;

use crate::dtos::{CommandCreateDto, CommandReadDto, CommandUpdateDto};
use crate::entities::command;
use crate::error::{RepoError, RepoResult};
use crate::repositories::CommandRepo;

pub struct CommandService<R> {
    repo: R,
}

impl<R: CommandRepo> CommandService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    pub async fn list(&self) -> RepoResult<Vec<CommandReadDto>> {
        let commands = self.repo.get_all_commands().await?;
        Ok(commands.into_iter().map(CommandReadDto::from).collect())
    }

    pub async fn get(&self, id: i32) -> RepoResult<Option<CommandReadDto>> {
        Ok(self.repo.get_command_by_id(id).await?.map(CommandReadDto::from))
    }

    /// Create a command and return it with its store-assigned id.
    pub async fn create(&self, dto: CommandCreateDto) -> RepoResult<CommandReadDto> {
        let cmd = command::Model::from(dto);
        self.repo.create_command(cmd).await?;

        let saved = self.repo.save_changes().await?;
        let created = saved
            .created
            .into_iter()
            .last()
            .ok_or_else(|| RepoError::Store(DbErr::RecordNotInserted))?;

        info!("Created command {} ({})", created.id, created.title);
        Ok(created.into())
    }

    /// Replace the fields of command `id`. Returns `None` when it does not exist.
    pub async fn update(&self, id: i32, dto: CommandUpdateDto) -> RepoResult<Option<CommandReadDto>> {
        let Some(mut cmd) = self.repo.get_command_by_id(id).await? else {
            return Ok(None);
        };

        dto.apply_to(&mut cmd);
        self.repo.update_command(cmd.clone()).await?;
        let saved = self.repo.save_changes().await?;

        let updated = saved.updated.into_iter().find(|c| c.id == id).unwrap_or(cmd);
        info!("Updated command {}", id);
        Ok(Some(updated.into()))
    }

    /// Remove command `id`. Returns `false` when it does not exist, including
    /// when it disappeared between the lookup and the commit.
    pub async fn delete(&self, id: i32) -> RepoResult<bool> {
        let Some(cmd) = self.repo.get_command_by_id(id).await? else {
            return Ok(false);
        };

        self.repo.delete_command(&cmd).await?;
        let saved = self.repo.save_changes().await?;

        let removed = saved.deleted.contains(&id);
        if removed {
            info!("Deleted command {}", id);
        }
        Ok(removed)
    }
}
