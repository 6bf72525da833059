//! Shared key generation for storage backends.

use std::path::Path;
use uuid::Uuid;

const MAX_EXTENSION_LEN: usize = 16;

/// Generate a fresh storage key for an uploaded file: `{uuid}{.ext}`.
///
/// Only short alphanumeric extensions are carried over; anything else is
/// dropped so client-supplied names can never shape the key.
pub fn generate_storage_key(filename: &str) -> String {
    match file_extension(filename) {
        Some(ext) => format!("{}.{}", Uuid::new_v4(), ext),
        None => Uuid::new_v4().to_string(),
    }
}

/// Lowercased extension of `filename`, if it is a plausible one.
pub fn file_extension(filename: &str) -> Option<String> {
    let ext = Path::new(filename).extension()?.to_str()?;
    if ext.is_empty()
        || ext.len() > MAX_EXTENSION_LEN
        || !ext.chars().all(|c| c.is_ascii_alphanumeric())
    {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}
