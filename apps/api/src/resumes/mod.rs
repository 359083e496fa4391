//! Résumé upload: validate a batch, store the raw files, extract PDF text and
//! record one `curriculums` row per file.
//!
//! The whole batch is validated before anything is written. Files are then
//! processed in order; a failure part-way leaves earlier files stored.

pub mod handlers;

use bytes::Bytes;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::NewResume;
use crate::storage::ObjectStore;
use crate::store::RecruitingStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResumeFormat {
    Pdf,
    Doc,
    Docx,
}

impl ResumeFormat {
    /// Format from the file extension, case-insensitive.
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let (_, ext) = file_name.rsplit_once('.')?;
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(ResumeFormat::Pdf),
            "doc" => Some(ResumeFormat::Doc),
            "docx" => Some(ResumeFormat::Docx),
            _ => None,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ResumeFormat::Pdf => "pdf",
            ResumeFormat::Doc => "doc",
            ResumeFormat::Docx => "docx",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            ResumeFormat::Pdf => "application/pdf",
            ResumeFormat::Doc => "application/msword",
            ResumeFormat::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct UploadLimits {
    pub max_files: usize,
    pub max_bytes: usize,
}

/// A file part as received, before validation.
#[derive(Debug, Clone)]
pub struct IncomingFile {
    pub file_name: String,
    pub bytes: Bytes,
}

#[derive(Debug, Clone, Serialize)]
pub struct UploadedResume {
    pub cv_id: i32,
    pub file_name: String,
    pub format: ResumeFormat,
    pub size_bytes: i64,
    pub object_key: String,
    pub text_extracted: bool,
}

/// Checks batch size, formats and per-file size limits.
pub fn validate_batch(
    files: Vec<IncomingFile>,
    limits: UploadLimits,
) -> Result<Vec<(IncomingFile, ResumeFormat)>, AppError> {
    if files.is_empty() {
        return Err(AppError::Validation("At least one file is required".to_string()));
    }
    if files.len() > limits.max_files {
        return Err(AppError::Validation(format!(
            "At most {} files can be uploaded at once, got {}",
            limits.max_files,
            files.len()
        )));
    }

    files
        .into_iter()
        .map(|file| {
            let format = ResumeFormat::from_file_name(&file.file_name).ok_or_else(|| {
                AppError::UnsupportedMediaType(format!(
                    "'{}' is not a PDF, DOC or DOCX file",
                    file.file_name
                ))
            })?;
            if file.bytes.len() > limits.max_bytes {
                return Err(AppError::PayloadTooLarge(format!(
                    "'{}' is {} bytes; the limit is {} bytes",
                    file.file_name,
                    file.bytes.len(),
                    limits.max_bytes
                )));
            }
            Ok((file, format))
        })
        .collect()
}

/// Extracts plain text from a PDF. Returns `None` (and logs) when the document
/// cannot be read or holds no text.
pub async fn extract_pdf_text(file_name: &str, bytes: Bytes) -> Option<String> {
    // pdf-extract is CPU-bound and may panic on malformed input; a panic
    // surfaces here as a JoinError.
    let result = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes)).await;

    match result {
        Ok(Ok(text)) if !text.trim().is_empty() => Some(text),
        Ok(Ok(_)) => {
            warn!("No text found in '{file_name}'");
            None
        }
        Ok(Err(e)) => {
            warn!("Text extraction failed for '{file_name}': {e:?}");
            None
        }
        Err(e) => {
            warn!("Text extraction aborted for '{file_name}': {e}");
            None
        }
    }
}

pub async fn upload_resumes(
    store: &dyn RecruitingStore,
    objects: &dyn ObjectStore,
    uploader_id: i32,
    files: Vec<IncomingFile>,
    limits: UploadLimits,
) -> Result<Vec<UploadedResume>, AppError> {
    let files = validate_batch(files, limits)?;
    let mut uploaded = Vec::with_capacity(files.len());

    for (file, format) in files {
        let object_key = format!("resumes/{}.{}", Uuid::new_v4(), format.extension());
        let size_bytes = file.bytes.len() as i64;

        objects
            .put(&object_key, file.bytes.clone(), format.content_type())
            .await?;

        let text_content = match format {
            ResumeFormat::Pdf => extract_pdf_text(&file.file_name, file.bytes).await,
            ResumeFormat::Doc | ResumeFormat::Docx => None,
        };

        let row = store
            .insert_resume(NewResume {
                uploader_id,
                file_name: file.file_name,
                format: format.extension().to_string(),
                size_bytes,
                text_content,
            })
            .await?;

        info!(cv_id = row.id, %object_key, "Stored résumé '{}'", row.file_name);

        uploaded.push(UploadedResume {
            cv_id: row.id,
            file_name: row.file_name,
            format,
            size_bytes,
            object_key,
            text_extracted: row.text_content.is_some(),
        });
    }

    Ok(uploaded)
}
