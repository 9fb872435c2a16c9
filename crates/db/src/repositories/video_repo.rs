//! PostgreSQL implementation of the [`VideoStore`] contract.

use async_trait::async_trait;
use courtside_core::types::DbId;
use sqlx::PgPool;

use crate::models::video::{NewVideo, Video};
use crate::store::{StoreError, VideoStore};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "video_id, event_id, title, file_path, upload_date, duration, resolution, size, url";

/// Video metadata store backed by the `videos` table.
#[derive(Clone)]
pub struct PgVideoStore {
    pool: PgPool,
}

impl PgVideoStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VideoStore for PgVideoStore {
    async fn fetch_one(&self, video_id: DbId) -> Result<Video, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM videos WHERE video_id = $1");
        sqlx::query_as::<_, Video>(&query)
            .bind(video_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound { video_id })
    }

    async fn fetch_list(&self, event_id: DbId) -> Result<Vec<Video>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM videos WHERE event_id = $1");
        let videos = sqlx::query_as::<_, Video>(&query)
            .bind(event_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(videos)
    }

    async fn insert_batch(&self, videos: Vec<NewVideo>) -> Result<Vec<Video>, StoreError> {
        let query = format!(
            "INSERT INTO videos (event_id, title, file_path, upload_date, size, url)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );

        // One transaction for the whole batch: a failed insert drops the
        // transaction and rolls back every row inserted before it.
        let mut tx = self.pool.begin().await.map_err(StoreError::Database)?;

        let mut persisted = Vec::with_capacity(videos.len());
        for video in &videos {
            let row = sqlx::query_as::<_, Video>(&query)
                .bind(video.event_id)
                .bind(&video.title)
                .bind(&video.file_path)
                .bind(video.upload_date)
                .bind(video.size)
                .bind(&video.url)
                .fetch_one(&mut *tx)
                .await?;
            persisted.push(row);
        }

        tx.commit().await.map_err(StoreError::Database)?;
        tracing::debug!(count = persisted.len(), "Video batch committed");

        Ok(persisted)
    }
}
