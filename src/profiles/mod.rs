//! Mapping rules between the command entity and its transfer objects.
//!
//! Source -> target:
//! * `command::Model` -> [`CommandReadDto`](crate::dtos::CommandReadDto)
//! * [`CommandCreateDto`](crate::dtos::CommandCreateDto) -> `command::Model`
//! * [`CommandUpdateDto`](crate::dtos::CommandUpdateDto) -> `command::Model` (in place)

pub mod command;
