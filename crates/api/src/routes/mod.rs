pub mod health;
pub mod video;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /video/upload/{event_id}   POST  upload videos (multipart, field `videos`)
/// /video/{video_id}          GET   single video metadata
/// /video/event/{event_id}    GET   all videos for an event
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/video", video::router())
}
