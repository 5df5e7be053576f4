//! Commander - data access for a catalogue of command-line snippets
//!
//! This library provides the persistence layer behind a small command
//! catalogue API: a SeaORM entity, the transfer objects exchanged with
//! callers, the mapping between them, and a repository whose writes are
//! staged and committed as one unit of work.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`entities`] - SeaORM entity models
//! * [`dtos`] - Transfer objects for the API boundary
//! * [`profiles`] - Entity <-> transfer object mappings
//! * [`repositories`] - Repository contract and its SeaORM implementation
//! * [`service`] - Caller-side flow around the repository
//! * [`storage`] - Database connection and schema setup

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Transfer objects exchanged with callers
pub mod dtos;

/// SeaORM entity models for database tables
pub mod entities;

/// Repository error types
pub mod error;

/// Logging setup
pub mod logger;

/// Mapping rules between entities and transfer objects
pub mod profiles;

/// Repository layer for database operations
pub mod repositories;

/// Caller-side command operations
pub mod service;

/// Database connection and schema management
pub mod storage;

// Re-export entity models for convenient access
pub use entities::command;
pub use error::{RepoError, RepoResult};
