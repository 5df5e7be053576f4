use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use log::{debug, info};
use sea_orm::sqlx::{Connection, SqliteConnection};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, EntityTrait, PaginatorTrait, Schema};
use uuid::Uuid;

use crate::config::DatabaseConfig;
use crate::constants::IN_MEMORY_DATABASE_PREFIX;
use crate::entities::command;
use crate::repositories::CommandRepository;

/// Owner of the SeaORM connection pool backing the command store
#[derive(Clone)]
pub struct Storage {
    pub(crate) conn: DatabaseConnection,
    url: String,
    /// Connection outside the pool that keeps a shared-cache in-memory
    /// database alive while pooled connections are recycled
    _anchor: Option<Arc<Mutex<SqliteConnection>>>,
}

impl Storage {
    /// Open the configured database and make sure the schema exists
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let mut options = ConnectOptions::new(config.url.clone());
        options
            .max_connections(config.max_connections)
            .min_connections(1)
            .sqlx_logging(config.sqlx_logging);

        let conn = Database::connect(options)
            .await
            .with_context(|| format!("Failed to connect to database: {}", config.url))?;

        let storage = Storage {
            conn,
            url: config.url.clone(),
            _anchor: None,
        };
        storage.init_schema().await?;
        info!("Opened command store at {}", config.url);

        Ok(storage)
    }

    /// Private in-memory database.
    ///
    /// The database is a uniquely named shared-cache memdb. SQLite drops it
    /// when its last connection closes, and the pool recycles connections
    /// on idle and lifetime timeouts, so an anchor connection is held open
    /// outside the pool for as long as this storage (or a clone) exists.
    pub async fn in_memory() -> Result<Self> {
        let url = format!(
            "sqlite:file:{}{}?mode=memory&cache=shared",
            IN_MEMORY_DATABASE_PREFIX,
            Uuid::new_v4().simple()
        );

        let anchor = SqliteConnection::connect(&url)
            .await
            .with_context(|| format!("Failed to open in-memory database: {}", url))?;

        let mut storage = Self::connect(&DatabaseConfig {
            url,
            max_connections: 1,
            sqlx_logging: false,
        })
        .await?;
        storage._anchor = Some(Arc::new(Mutex::new(anchor)));

        Ok(storage)
    }

    /// Create the `commands` table if it is missing
    async fn init_schema(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        let schema = Schema::new(backend);

        let mut create_commands = schema.create_table_from_entity(command::Entity);
        create_commands.if_not_exists();

        self.conn
            .execute(backend.build(&create_commands))
            .await
            .context("Failed to create commands table")?;
        debug!("Schema ready");

        Ok(())
    }

    /// A fresh unit of work sharing this storage's connection pool
    pub fn command_repo(&self) -> CommandRepository {
        CommandRepository::new(self.conn.clone())
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }

    /// Connection URL the pool was opened with
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Check if the database has any data
    pub async fn has_data(&self) -> Result<bool> {
        Ok(command::Entity::find().count(&self.conn).await? > 0)
    }

    /// Close the connection pool
    pub async fn close(self) -> Result<()> {
        self.conn.close().await?;
        Ok(())
    }
}
