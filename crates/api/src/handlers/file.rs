//! Handlers for `/file`: uploads to local disk and attachment downloads.

use axum::body::Body;
use axum::extract::{Multipart, Path, State};
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::{IntoResponse, Response};
use axum::Json;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::response::ApiResponse;
use crate::state::AppState;

/// Public URL prefix uploaded files are served under.
pub const UPLOAD_URL_PREFIX: &str = "/uploads/";

/// Multipart field carrying the file.
const FILE_FIELD: &str = "file";

/// POST /api/file/upload
///
/// Stores the `file` part as `<uuid>.<ext>` (original extension kept) and
/// returns its relative URL.
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<ApiResponse<String>>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let extension = field.file_name().and_then(file_extension);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("Failed to read upload: {e}")))?;
        if bytes.is_empty() {
            return Err(AppError::BadRequest("File is empty".into()));
        }

        let filename = match extension {
            Some(ext) => format!("{}.{ext}", Uuid::new_v4()),
            None => Uuid::new_v4().to_string(),
        };

        tokio::fs::create_dir_all(&state.config.upload_dir)
            .await
            .map_err(|e| AppError::InternalError(format!("Cannot create upload dir: {e}")))?;
        let dest = state.config.upload_dir.join(&filename);
        tokio::fs::write(&dest, &bytes)
            .await
            .map_err(|e| AppError::InternalError(format!("Upload failed: {e}")))?;

        tracing::info!(file = %filename, size = bytes.len(), "File uploaded");
        return Ok(ApiResponse::ok(format!("{UPLOAD_URL_PREFIX}{filename}")));
    }

    Err(AppError::BadRequest(format!(
        "Missing multipart field '{FILE_FIELD}'"
    )))
}

/// GET /api/file/download/{filename}
pub async fn download(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> AppResult<Response> {
    if !is_plain_file_name(&filename) {
        return Err(AppError::BadRequest("Invalid file name".into()));
    }

    let path = state.config.upload_dir.join(&filename);
    let bytes = match tokio::fs::read(&path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(AppError::NotFound(format!("File {filename} not found")));
        }
        Err(e) => return Err(AppError::InternalError(format!("Read failed: {e}"))),
    };

    Ok((
        [
            (CONTENT_TYPE, "application/octet-stream".to_string()),
            (
                CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        Body::from(bytes),
    )
        .into_response())
}

/// Lower-cased extension of an uploaded file name, if it has a usable one.
fn file_extension(name: &str) -> Option<String> {
    let (stem, ext) = name.rsplit_once('.')?;
    let valid = !stem.is_empty()
        && !ext.is_empty()
        && ext.len() <= 10
        && ext.chars().all(|c| c.is_ascii_alphanumeric());
    valid.then(|| ext.to_ascii_lowercase())
}

/// A bare file name with no path components.
fn is_plain_file_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\'])
        && !name.contains("..")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_is_kept_lowercase() {
        assert_eq!(file_extension("Drawing.PDF").as_deref(), Some("pdf"));
        assert_eq!(file_extension("a.tar.gz").as_deref(), Some("gz"));
        assert_eq!(file_extension("README"), None);
        assert_eq!(file_extension(".bashrc"), None);
        assert_eq!(file_extension("evil.p h p"), None);
    }

    #[test]
    fn download_names_cannot_escape_the_upload_dir() {
        assert!(is_plain_file_name("0b9c.png"));
        assert!(!is_plain_file_name("../secrets.env"));
        assert!(!is_plain_file_name("a/b.png"));
        assert!(!is_plain_file_name("a\\b.png"));
        assert!(!is_plain_file_name(""));
    }
}
