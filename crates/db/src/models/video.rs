//! Video entity model and insert DTO.

use courtside_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `videos` table.
///
/// `duration` and `resolution` are never populated by the upload flow;
/// they exist for out-of-band enrichment and stay `None` until then.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Video {
    pub video_id: DbId,
    pub event_id: DbId,
    pub title: String,
    pub file_path: String,
    pub upload_date: Timestamp,
    pub duration: Option<String>,
    pub resolution: Option<String>,
    pub size: i64,
    pub url: String,
}

/// Insert payload for a video row. `video_id` is assigned by the store.
///
/// `event_id` and `upload_date` are overwritten by the upload service
/// before the batch reaches the store.
#[derive(Debug, Clone)]
pub struct NewVideo {
    pub event_id: DbId,
    pub title: String,
    pub file_path: String,
    pub upload_date: Timestamp,
    pub size: i64,
    pub url: String,
}
