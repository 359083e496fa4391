use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};

use crate::errors::AppError;
use crate::resumes::{upload_resumes, IncomingFile, UploadLimits, UploadedResume};
use crate::state::AppState;

fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(e.body_text())
    } else {
        AppError::Validation(format!("Invalid multipart body: {}", e.body_text()))
    }
}

/// POST /api/v1/resumes
/// Multipart form with an `uploader_id` text field and one or more `file` parts.
pub async fn handle_upload_resumes(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<Vec<UploadedResume>>), AppError> {
    let limits = UploadLimits {
        max_files: state.config.max_upload_files,
        max_bytes: state.config.max_upload_bytes,
    };

    let mut uploader_id = None;
    let mut files = Vec::new();

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("uploader_id") => {
                let raw = field.text().await.map_err(multipart_error)?;
                let id = raw.trim().parse::<i32>().map_err(|_| {
                    AppError::Validation(format!("uploader_id must be an integer, got '{raw}'"))
                })?;
                uploader_id = Some(id);
            }
            Some("file") => {
                if files.len() == limits.max_files {
                    return Err(AppError::Validation(format!(
                        "At most {} files can be uploaded at once",
                        limits.max_files
                    )));
                }
                let file_name = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await.map_err(multipart_error)?;
                files.push(IncomingFile { file_name, bytes });
            }
            other => {
                tracing::debug!("Ignoring unexpected multipart field {other:?}");
            }
        }
    }

    let uploader_id = uploader_id
        .ok_or_else(|| AppError::Validation("uploader_id is required".to_string()))?;

    let uploaded = upload_resumes(
        state.store.as_ref(),
        state.objects.as_ref(),
        uploader_id,
        files,
        limits,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(uploaded)))
}
