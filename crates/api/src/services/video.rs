//! Upload orchestration over the video store.
//!
//! Validates the target event, stamps ownership and upload time onto each
//! record in a batch, and delegates persistence to the injected
//! [`VideoStore`]. Retrieval methods are pure delegation.

use std::sync::Arc;

use chrono::Utc;
use courtside_core::types::DbId;
use courtside_db::models::video::{NewVideo, Video};
use courtside_db::{StoreError, VideoStore};

#[derive(Debug, thiserror::Error)]
pub enum VideoServiceError {
    #[error("Invalid event_id: {0}")]
    InvalidEventId(DbId),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Orchestrates video uploads and lookups over an injected store.
#[derive(Clone)]
pub struct VideoService {
    store: Arc<dyn VideoStore>,
}

impl VideoService {
    pub fn new(store: Arc<dyn VideoStore>) -> Self {
        Self { store }
    }

    /// Persist a batch of uploaded videos for an event.
    ///
    /// Rejects non-positive event ids before touching the store. Every
    /// record in the batch is stamped with `event_id` and one shared
    /// upload instant, then handed to the store as a single transaction.
    pub async fn upload(
        &self,
        event_id: DbId,
        mut videos: Vec<NewVideo>,
    ) -> Result<Vec<Video>, VideoServiceError> {
        if event_id <= 0 {
            tracing::warn!(event_id, "Rejected upload with non-positive event_id");
            return Err(VideoServiceError::InvalidEventId(event_id));
        }

        let now = Utc::now();
        for video in &mut videos {
            video.event_id = event_id;
            video.upload_date = now;
        }

        tracing::debug!(event_id, count = videos.len(), "Uploading video batch");
        Ok(self.store.insert_batch(videos).await?)
    }

    pub async fn get_video(&self, video_id: DbId) -> Result<Video, VideoServiceError> {
        Ok(self.store.fetch_one(video_id).await?)
    }

    pub async fn get_video_list(&self, event_id: DbId) -> Result<Vec<Video>, VideoServiceError> {
        Ok(self.store.fetch_list(event_id).await?)
    }
}
