//! Storage contract for video metadata.
//!
//! Handlers and the upload service depend on this trait rather than on a
//! concrete backend, so tests can substitute an in-memory store for
//! [`PgVideoStore`](crate::repositories::PgVideoStore).

use async_trait::async_trait;
use courtside_core::types::DbId;

use crate::models::video::{NewVideo, Video};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Video not found: {video_id}")]
    NotFound { video_id: DbId },

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

#[async_trait]
pub trait VideoStore: Send + Sync {
    /// Fetch a single video by id. Fails with [`StoreError::NotFound`]
    /// when no row matches.
    async fn fetch_one(&self, video_id: DbId) -> Result<Video, StoreError>;

    /// Fetch all videos for an event, in store-default order. An event
    /// with no videos yields an empty Vec, not an error.
    async fn fetch_list(&self, event_id: DbId) -> Result<Vec<Video>, StoreError>;

    /// Insert a batch of videos in one transaction.
    ///
    /// Either every row is persisted (and returned with its generated
    /// `video_id`) or none is: any failed insert rolls the whole batch
    /// back and discards the partial results. Individual rows are never
    /// retried.
    async fn insert_batch(&self, videos: Vec<NewVideo>) -> Result<Vec<Video>, StoreError>;
}
