use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

use log::error;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::error::StoreError;

/// Handle on the election database.
///
/// Constructed explicitly and passed to whatever serves requests; there is no
/// process-wide instance. Cloning shares the underlying pool.
#[derive(Clone)]
pub struct ElectionStore {
    pub(crate) pool: SqlitePool,
}

static MEMDB_COUNTER: AtomicU64 = AtomicU64::new(0);

impl ElectionStore {
    /// Open the election database at `url` and make sure the schema exists.
    ///
    /// A connection failure is logged once and returned as
    /// [`StoreError::Unavailable`]; there is no retry or later reconnection.
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(StoreError::Unavailable)?
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(max_connections)
            .connect_with(options)
            .await
            .map_err(|e| {
                error!("cannot connect to election database at {url}: {e}");
                StoreError::Unavailable(e)
            })?;

        let store = ElectionStore { pool };
        store.init_schema().await?;

        Ok(store)
    }

    /// Open a private in-memory database, mainly for tests.
    ///
    /// Each call gets its own shared-cache name so stores never see each
    /// other's data, with a single pooled connection keeping the database
    /// alive for the life of the handle.
    pub async fn open_in_memory() -> Result<Self, StoreError> {
        let n = MEMDB_COUNTER.fetch_add(1, Ordering::Relaxed);
        let url = format!("sqlite:file:escrutini_memdb_{n}?mode=memory&cache=shared");

        let options = SqliteConnectOptions::from_str(&url)
            .map_err(StoreError::Unavailable)?
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(StoreError::Unavailable)?;

        let store = ElectionStore { pool };
        store.init_schema().await?;

        Ok(store)
    }

    /// Connectivity check: runs a trivial query against the pool.
    pub async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Initialize database schema
    async fn init_schema(&self) -> Result<(), StoreError> {
        // Create comarques table
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS comarques (
                nom TEXT PRIMARY KEY
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        // Create demarcacions table
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS demarcacions (
                nom TEXT PRIMARY KEY,
                escons INTEGER NOT NULL CHECK (escons >= 0)
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        // Create poblacions table
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS poblacions (
                poblacio TEXT PRIMARY KEY,
                comarca TEXT NOT NULL REFERENCES comarques(nom),
                demarcacio TEXT NOT NULL REFERENCES demarcacions(nom)
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        // Create partits table
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS partits (
                curt TEXT PRIMARY KEY,
                nom TEXT NOT NULL,
                color TEXT NOT NULL DEFAULT ''
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        // Create candidatures table
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS candidatures (
                partit TEXT NOT NULL REFERENCES partits(curt),
                demarcacio TEXT NOT NULL REFERENCES demarcacions(nom),
                PRIMARY KEY (partit, demarcacio)
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        // Create vots table
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS vots (
                poblacio TEXT NOT NULL REFERENCES poblacions(poblacio),
                partit TEXT NOT NULL REFERENCES partits(curt),
                vots INTEGER NOT NULL CHECK (vots >= 0),
                PRIMARY KEY (poblacio, partit)
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        // Create escons table
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS escons (
                demarcacio TEXT NOT NULL REFERENCES demarcacions(nom),
                partit TEXT NOT NULL REFERENCES partits(curt),
                escons INTEGER NOT NULL CHECK (escons >= 0),
                PRIMARY KEY (demarcacio, partit),
                FOREIGN KEY (partit, demarcacio) REFERENCES candidatures(partit, demarcacio)
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
