//! Handlers for video upload and retrieval.
//!
//! Uploads are best-effort per file: a file that fails to read or write
//! is logged and skipped, and the batch continues with the survivors.
//! The metadata insert for the surviving files is a single all-or-nothing
//! transaction in the store. Files already on disk when that transaction
//! fails are not cleaned up.
//!
//! All endpoints require authentication via [`AuthUser`].

use axum::extract::{Multipart, Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use courtside_core::types::DbId;
use courtside_db::models::video::{NewVideo, Video};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Multipart field name carrying the uploaded files.
const VIDEO_FIELD: &str = "videos";

/// Response body for a successful upload.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: &'static str,
    pub videos: Vec<Video>,
}

/// Parse a path parameter as a positive id.
fn parse_positive_id(raw: &str, name: &str) -> Result<DbId, AppError> {
    raw.parse::<DbId>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::BadRequest(format!("Invalid {name}")))
}

/// POST /api/v1/video/upload/{event_id}
///
/// Accepts a multipart form with one or more files under the `videos`
/// field, writes each file into the upload directory under a
/// nanosecond-prefixed name, and persists one metadata row per surviving
/// file. Responds `201` with the persisted records.
pub async fn upload_videos(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let event_id = parse_positive_id(&event_id, "event_id")?;

    let upload_dir = &state.config.upload_dir;

    // Uploaded bytes are served back under /videos on the same host.
    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("localhost")
        .to_string();

    let mut file_count = 0usize;
    let mut dir_ready = false;
    let mut videos: Vec<NewVideo> = Vec::new();

    while let Some(field) = multipart.next_field().await.map_err(|err| {
        tracing::error!(error = %err, "Failed to parse multipart form");
        AppError::BadRequest("Invalid form data".into())
    })? {
        if field.name() != Some(VIDEO_FIELD) {
            continue;
        }
        let Some(original_name) = field.file_name().map(str::to_string) else {
            continue;
        };
        file_count += 1;

        let bytes = match field.bytes().await {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::warn!(filename = %original_name, error = %err, "Failed to read uploaded file");
                continue;
            }
        };

        // Only the final path component of the client-supplied name is
        // used on disk; a crafted filename must not escape the upload dir.
        let Some(base_name) = std::path::Path::new(&original_name)
            .file_name()
            .and_then(|n| n.to_str())
        else {
            tracing::warn!(filename = %original_name, "Skipping file with unusable name");
            continue;
        };

        // The directory is created only once a file has actually parsed,
        // so a rejected form leaves no trace on disk.
        if !dir_ready {
            tokio::fs::create_dir_all(upload_dir).await.map_err(|err| {
                tracing::error!(error = %err, dir = %upload_dir.display(), "Failed to create upload directory");
                AppError::InternalError("Failed to create upload directory".into())
            })?;
            dir_ready = true;
        }

        let nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default();
        let stored_name = format!("{nanos}_{base_name}");
        let dest = upload_dir.join(&stored_name);

        if let Err(err) = tokio::fs::write(&dest, &bytes).await {
            tracing::warn!(filename = %stored_name, error = %err, "Failed to write uploaded file");
            continue;
        }

        videos.push(NewVideo {
            event_id,
            title: original_name,
            file_path: dest.to_string_lossy().into_owned(),
            upload_date: Utc::now(),
            size: bytes.len() as i64,
            url: format!("http://{host}/videos/{stored_name}"),
        });
    }

    if file_count == 0 {
        return Err(AppError::BadRequest("No files uploaded".into()));
    }
    if videos.is_empty() {
        return Err(AppError::BadRequest("No valid videos uploaded".into()));
    }

    let videos = state.videos.upload(event_id, videos).await?;
    tracing::info!(event_id, count = videos.len(), "Videos uploaded successfully");

    Ok((
        StatusCode::CREATED,
        Json(UploadResponse {
            message: "Videos uploaded successfully",
            videos,
        }),
    ))
}

/// GET /api/v1/video/{video_id}
pub async fn get_video(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(video_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let video_id = parse_positive_id(&video_id, "video_id")?;

    let video = state.videos.get_video(video_id).await?;
    Ok(Json(video))
}

/// GET /api/v1/video/event/{event_id}
///
/// Returns the (possibly empty) list of videos for an event.
pub async fn get_video_list(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let event_id = parse_positive_id(&event_id, "event_id")?;

    let videos = state.videos.get_video_list(event_id).await?;
    Ok(Json(videos))
}
