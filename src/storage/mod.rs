//! Local storage module for the command store
//!
//! Opens the SeaORM connection, prepares the schema and hands out
//! request-scoped repositories.

pub mod db;

pub use db::Storage;
