use std::{collections::HashMap, str::FromStr, time::Duration};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{
    Pool, Row, Sqlite,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use tokio::sync::RwLock;

use crate::{
    error::AppError,
    types::{Track, TrackSnapshot},
};

/// Storage of one [`TrackSnapshot`] per user id.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Replaces the user's snapshot, or creates it, and refreshes its timestamp.
    async fn upsert_snapshot(
        &self,
        user_id: &str,
        tracks: Vec<Track>,
    ) -> Result<TrackSnapshot, AppError>;

    async fn get_snapshot(&self, user_id: &str) -> Result<Option<TrackSnapshot>, AppError>;

    /// Ids of every user with a stored snapshot, sorted.
    async fn user_ids(&self) -> Result<Vec<String>, AppError>;
}

/// Snapshot store backed by an sqlite database.
///
/// The tracks of a snapshot are kept as one JSON document per row.
pub struct SqliteSnapshotStore {
    pool: Pool<Sqlite>,
}

impl SqliteSnapshotStore {
    /// Opens the database at `database_url`, creating the file and the schema
    /// when missing.
    ///
    /// The parent directory of a database file is created as well.
    /// `sqlite::memory:` URLs are served by a single connection that is never
    /// recycled, since every new in-memory connection starts empty.
    pub async fn connect(database_url: &str) -> Result<Self, AppError> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        let in_memory = database_url.contains(":memory:");
        if !in_memory {
            if let Some(parent) = options.get_filename().parent() {
                if !parent.as_os_str().is_empty() {
                    async_fs::create_dir_all(parent).await?;
                }
            }
        }
        let mut pool_options = SqlitePoolOptions::new().min_connections(1);
        pool_options = if in_memory {
            pool_options
                .max_connections(1)
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>)
        } else {
            pool_options.max_connections(4)
        };

        let pool = pool_options.connect_with(options).await?;
        let this = Self { pool };
        this.ensure_schema().await?;
        Ok(this)
    }

    async fn ensure_schema(&self) -> Result<(), AppError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS top_tracks (
              user_id    TEXT PRIMARY KEY,
              timestamp  TEXT NOT NULL,
              tracks     TEXT NOT NULL
            );
            "#,
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

#[async_trait]
impl SnapshotStore for SqliteSnapshotStore {
    async fn upsert_snapshot(
        &self,
        user_id: &str,
        tracks: Vec<Track>,
    ) -> Result<TrackSnapshot, AppError> {
        let timestamp = Utc::now();
        let document = serde_json::to_string(&tracks)?;

        sqlx::query(
            r#"
            INSERT INTO top_tracks (user_id, timestamp, tracks)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(user_id) DO UPDATE SET
              timestamp = excluded.timestamp,
              tracks    = excluded.tracks;
            "#,
        )
        .bind(user_id)
        .bind(timestamp)
        .bind(document)
        .execute(&self.pool)
        .await?;

        Ok(TrackSnapshot {
            user_id: user_id.to_string(),
            timestamp,
            tracks,
        })
    }

    async fn get_snapshot(&self, user_id: &str) -> Result<Option<TrackSnapshot>, AppError> {
        let row = sqlx::query("SELECT user_id, timestamp, tracks FROM top_tracks WHERE user_id = ?1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let document: String = row.try_get("tracks")?;
        let timestamp: DateTime<Utc> = row.try_get("timestamp")?;
        Ok(Some(TrackSnapshot {
            user_id: row.try_get("user_id")?,
            timestamp,
            tracks: serde_json::from_str(&document)?,
        }))
    }

    async fn user_ids(&self) -> Result<Vec<String>, AppError> {
        let rows = sqlx::query("SELECT user_id FROM top_tracks ORDER BY user_id")
            .fetch_all(&self.pool)
            .await?;

        rows.iter()
            .map(|r| r.try_get::<String, _>("user_id").map_err(AppError::from))
            .collect()
    }
}

/// Process-local snapshot store.
#[derive(Default)]
pub struct MemorySnapshotStore {
    snapshots: RwLock<HashMap<String, TrackSnapshot>>,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SnapshotStore for MemorySnapshotStore {
    async fn upsert_snapshot(
        &self,
        user_id: &str,
        tracks: Vec<Track>,
    ) -> Result<TrackSnapshot, AppError> {
        let snapshot = TrackSnapshot {
            user_id: user_id.to_string(),
            timestamp: Utc::now(),
            tracks,
        };
        self.snapshots
            .write()
            .await
            .insert(user_id.to_string(), snapshot.clone());
        Ok(snapshot)
    }

    async fn get_snapshot(&self, user_id: &str) -> Result<Option<TrackSnapshot>, AppError> {
        Ok(self.snapshots.read().await.get(user_id).cloned())
    }

    async fn user_ids(&self) -> Result<Vec<String>, AppError> {
        let mut ids: Vec<String> = self.snapshots.read().await.keys().cloned().collect();
        ids.sort();
        Ok(ids)
    }
}
