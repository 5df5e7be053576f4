//! Command repository: the data-access contract and its SeaORM unit of work.

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use log::{debug, info, warn};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
    TransactionTrait,
};

use crate::entities::command;
use crate::error::{RepoError, RepoResult};

use super::staging::{ChangeSet, SavedChanges, StagedChange};

/// Operations available against the command store.
///
/// Reads go straight to the store. Writes are only staged; nothing is
/// durable until [`save_changes`](CommandRepo::save_changes) commits every
/// staged change as one transaction.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommandRepo: Send + Sync {
    /// Every stored command. Callers must not depend on the order.
    async fn get_all_commands(&self) -> RepoResult<Vec<command::Model>>;

    /// The command with `id`, or `None` when the store never assigned it.
    async fn get_command_by_id(&self, id: i32) -> RepoResult<Option<command::Model>>;

    /// Stage `cmd` for insertion. It must not carry an id yet.
    async fn create_command(&self, cmd: command::Model) -> RepoResult<()>;

    /// Stage a full overwrite of the stored command with `cmd.id`.
    async fn update_command(&self, cmd: command::Model) -> RepoResult<()>;

    /// Stage removal of the stored command with `cmd.id`.
    async fn delete_command(&self, cmd: &command::Model) -> RepoResult<()>;

    /// Commit all staged changes atomically.
    ///
    /// # Errors
    /// Returns [`RepoError::Store`] when the store rejects the batch. Nothing
    /// is written in that case and the changes stay staged.
    async fn save_changes(&self) -> RepoResult<SavedChanges>;

    /// Number of staged changes not yet committed.
    fn pending_changes(&self) -> usize;

    /// Drop every staged change without touching the store.
    fn discard_changes(&self);
}

/// Request-scoped [`CommandRepo`] over a SeaORM connection.
pub struct CommandRepository {
    conn: DatabaseConnection,
    staged: Mutex<ChangeSet>,
    /// Held for the whole of a commit so overlapping `save_changes` calls
    /// never replay the same batch.
    commit_lock: tokio::sync::Mutex<()>,
}

impl CommandRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self {
            conn,
            staged: Mutex::new(ChangeSet::new()),
            commit_lock: tokio::sync::Mutex::new(()),
        }
    }

    /// Get all commands ordered by id.
    pub async fn find_all<C>(conn: &C) -> Result<Vec<command::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        command::Entity::find().order_by_asc(command::Column::Id).all(conn).await
    }

    /// Get a single command by id.
    pub async fn find_by_id<C>(conn: &C, id: i32) -> Result<Option<command::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        command::Entity::find_by_id(id).one(conn).await
    }

    fn staged(&self) -> MutexGuard<'_, ChangeSet> {
        self.staged.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn stage(&self, change: StagedChange) {
        debug!("Staging {:?}", change);
        self.staged().push(change);
    }

    /// Replay `batch` in order against `conn`.
    async fn apply<C>(conn: &C, batch: &[StagedChange]) -> Result<SavedChanges, DbErr>
    where
        C: ConnectionTrait,
    {
        let mut saved = SavedChanges::default();

        for change in batch {
            match change {
                StagedChange::Insert(cmd) => {
                    let model = command::ActiveModel {
                        id: ActiveValue::NotSet,
                        title: ActiveValue::Set(cmd.title.clone()),
                        description: ActiveValue::Set(cmd.description.clone()),
                        platform: ActiveValue::Set(cmd.platform.clone()),
                    };
                    saved.created.push(model.insert(conn).await?);
                }
                StagedChange::Update(cmd) => {
                    let model = command::ActiveModel {
                        id: ActiveValue::Unchanged(cmd.id),
                        title: ActiveValue::Set(cmd.title.clone()),
                        description: ActiveValue::Set(cmd.description.clone()),
                        platform: ActiveValue::Set(cmd.platform.clone()),
                    };
                    saved.updated.push(model.update(conn).await?);
                }
                StagedChange::Delete(id) => {
                    let result = command::Entity::delete_by_id(*id).exec(conn).await?;
                    if result.rows_affected > 0 {
                        saved.deleted.push(*id);
                    } else {
                        debug!("Command {} was already gone at commit", id);
                    }
                }
            }
        }

        Ok(saved)
    }
}

#[async_trait]
impl CommandRepo for CommandRepository {
    async fn get_all_commands(&self) -> RepoResult<Vec<command::Model>> {
        Ok(Self::find_all(&self.conn).await?)
    }

    async fn get_command_by_id(&self, id: i32) -> RepoResult<Option<command::Model>> {
        Ok(Self::find_by_id(&self.conn, id).await?)
    }

    async fn create_command(&self, cmd: command::Model) -> RepoResult<()> {
        if cmd.is_persisted() {
            return Err(RepoError::InvalidArgument(format!(
                "cannot create command {}: it already has a store identity",
                cmd.id
            )));
        }
        self.stage(StagedChange::Insert(cmd));
        Ok(())
    }

    async fn update_command(&self, cmd: command::Model) -> RepoResult<()> {
        if !cmd.is_persisted() {
            return Err(RepoError::InvalidArgument(
                "cannot update a command that was never persisted".to_string(),
            ));
        }
        self.stage(StagedChange::Update(cmd));
        Ok(())
    }

    async fn delete_command(&self, cmd: &command::Model) -> RepoResult<()> {
        if !cmd.is_persisted() {
            return Err(RepoError::InvalidArgument(
                "cannot delete a command that was never persisted".to_string(),
            ));
        }
        self.stage(StagedChange::Delete(cmd.id));
        Ok(())
    }

    async fn save_changes(&self) -> RepoResult<SavedChanges> {
        let _commit = self.commit_lock.lock().await;

        let batch = self.staged().snapshot();
        if batch.is_empty() {
            return Ok(SavedChanges::default());
        }

        let txn = self.conn.begin().await?;
        let saved = match Self::apply(&txn, batch.changes()).await {
            Ok(saved) => saved,
            Err(err) => {
                warn!("Rolling back {} staged change(s): {}", batch.len(), err);
                if let Err(rollback_err) = txn.rollback().await {
                    warn!("Rollback failed: {}", rollback_err);
                }
                return Err(err.into());
            }
        };
        txn.commit().await?;

        self.staged().acknowledge(&batch);
        info!(
            "Committed {} created, {} updated, {} deleted command(s)",
            saved.created.len(),
            saved.updated.len(),
            saved.deleted.len()
        );
        Ok(saved)
    }

    fn pending_changes(&self) -> usize {
        self.staged().len()
    }

    fn discard_changes(&self) {
        let mut staged = self.staged();
        if !staged.is_empty() {
            debug!("Discarding {} staged change(s)", staged.len());
        }
        staged.clear();
    }
}
