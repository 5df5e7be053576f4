//! Error types surfaced by the repository layer.

use sea_orm::DbErr;

/// Errors returned by [`CommandRepo`](crate::repositories::CommandRepo) operations.
///
/// A missing record is not an error: lookups return `None` instead.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Store failure: {0}")]
    Store(#[from] DbErr),
}

impl RepoError {
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

pub type RepoResult<T> = std::result::Result<T, RepoError>;
