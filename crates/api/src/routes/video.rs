//! Route definitions for video upload and retrieval.
//!
//! Mounted at `/video`. All routes sit behind the bearer-token gate.
//!
//! ```text
//! POST /upload/{event_id}    upload_videos
//! GET  /{video_id}           get_video
//! GET  /event/{event_id}     get_video_list
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::video;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/upload/{event_id}", post(video::upload_videos))
        .route("/{video_id}", get(video::get_video))
        .route("/event/{event_id}", get(video::get_video_list))
}
