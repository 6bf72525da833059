//! Common utilities for the upload handler

use crate::constants::VIDEO_FIELD_NAME;
use axum::extract::multipart::{Multipart, MultipartError};
use axum::http::StatusCode;
use clipdrop_core::AppError;

/// A file read out of a multipart form
#[derive(Debug)]
pub struct UploadedFile {
    pub data: Vec<u8>,
    pub filename: String,
    pub content_type: String,
}

fn multipart_error(err: MultipartError, what: &str) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge("File too big".to_string())
    } else {
        AppError::BadRequest(format!("{}: {}", what, err.body_text()))
    }
}

/// Extract the file from the `video` field of a multipart form.
///
/// Other fields are skipped. A second `video` field is rejected.
pub async fn extract_video_file(mut multipart: Multipart) -> Result<UploadedFile, AppError> {
    let mut file: Option<UploadedFile> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, "Failed to read multipart"))?
    {
        if field.name() != Some(VIDEO_FIELD_NAME) {
            continue;
        }
        if file.is_some() {
            return Err(AppError::InvalidInput(format!(
                "Multiple '{}' fields are not allowed",
                VIDEO_FIELD_NAME
            )));
        }

        let filename = field.file_name().unwrap_or("unknown").to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| multipart_error(e, "Failed to read file data"))?;

        file = Some(UploadedFile {
            data: data.to_vec(),
            filename,
            content_type,
        });
    }

    file.ok_or_else(|| AppError::InvalidInput("Invalid file".to_string()))
}

/// Validate file size
pub fn validate_file_size(file_size: usize, max_size: usize) -> Result<(), AppError> {
    if file_size == 0 {
        return Err(AppError::InvalidInput("File is empty".to_string()));
    }
    if file_size > max_size {
        return Err(AppError::PayloadTooLarge(format!(
            "File size exceeds maximum allowed size of {} MB",
            max_size / 1024 / 1024
        )));
    }
    Ok(())
}

/// Validate file extension against the allowlist. An empty allowlist accepts anything.
pub fn validate_file_extension(
    filename: &str,
    allowed_extensions: &[String],
) -> Result<(), AppError> {
    if allowed_extensions.is_empty() {
        return Ok(());
    }

    let extension = clipdrop_storage::keys::file_extension(filename).unwrap_or_default();
    if !allowed_extensions.contains(&extension) {
        return Err(AppError::InvalidInput(format!(
            "Invalid file extension. Allowed extensions: {}",
            allowed_extensions.join(", ")
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn allowed() -> Vec<String> {
        vec!["mp4".to_string(), "webm".to_string()]
    }

    #[test]
    fn test_validate_file_size() {
        assert!(validate_file_size(10, 100).is_ok());
        assert!(validate_file_size(100, 100).is_ok());
        assert!(matches!(
            validate_file_size(101, 100),
            Err(AppError::PayloadTooLarge(_))
        ));
        assert!(matches!(
            validate_file_size(0, 100),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension("clip.MP4", &allowed()).is_ok());
        assert!(validate_file_extension("clip.webm", &allowed()).is_ok());
        assert!(validate_file_extension("clip.exe", &allowed()).is_err());
        assert!(validate_file_extension("clip", &allowed()).is_err());
    }

    #[test]
    fn test_empty_allowlist_accepts_anything() {
        assert!(validate_file_extension("notes.txt", &[]).is_ok());
        assert!(validate_file_extension("noext", &[]).is_ok());
    }
}
