//! Transfer objects exchanged with callers at the API boundary.
//!
//! None of these shapes are persisted; they are built per request from
//! (or into) [`crate::entities::command::Model`] through the mappings in
//! [`crate::profiles`].

pub mod command;

pub use command::{CommandCreateDto, CommandReadDto, CommandUpdateDto};
