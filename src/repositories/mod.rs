//! Repository layer for database operations.
//!
//! [`CommandRepo`] is the contract callers program against.
//! [`CommandRepository`] implements it over SeaORM, following the Data
//! Mapper pattern: entities stay plain data models while the repository
//! owns queries and a staging set that is committed as one unit of work.

pub mod command;
pub mod staging;

pub use command::{CommandRepo, CommandRepository};
pub use staging::{Batch, ChangeSet, SavedChanges, StagedChange};

#[cfg(test)]
pub use command::MockCommandRepo;
