//! Profile picture storage.
//!
//! Uploaded files are written to the configured upload directory and referenced from the
//! user record by their public `/uploads/<file name>` path.

use std::path::Path;

use crate::server::error::Error;

/// Public URL prefix stored files are referenced by.
pub const UPLOADS_URL_PREFIX: &str = "/uploads";

/// Builds the stored file name for an upload.
///
/// Directory components are stripped from the client supplied name and any character
/// outside `[A-Za-z0-9._-]` is replaced, so the result can never escape the upload
/// directory. The user ID prefix keeps students uploading `photo.jpg` from overwriting
/// each other.
pub fn stored_file_name(user_id: i32, original_name: Option<&str>) -> String {
    let base = original_name
        .and_then(|name| Path::new(name).file_name())
        .and_then(|name| name.to_str())
        .unwrap_or_default();

    let sanitized: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let sanitized = sanitized.trim_start_matches('.');

    if sanitized.is_empty() {
        format!("{}-profile-picture", user_id)
    } else {
        format!("{}-{}", user_id, sanitized)
    }
}

/// Writes an uploaded profile picture and returns its public path.
///
/// # Arguments
/// - `upload_dir` - Directory to write the file into
/// - `user_id` - Owner of the picture
/// - `original_name` - File name supplied by the client, if any
/// - `bytes` - File contents
///
/// # Returns
/// - `Ok(String)` - Public path, e.g. `/uploads/12-me.png`
/// - `Err(Error::IoError)` - The file could not be written
pub async fn save_profile_picture(
    upload_dir: &Path,
    user_id: i32,
    original_name: Option<&str>,
    bytes: &[u8],
) -> Result<String, Error> {
    let file_name = stored_file_name(user_id, original_name);

    tokio::fs::write(upload_dir.join(&file_name), bytes).await?;

    tracing::debug!(user_id = %user_id, file_name = %file_name, "Stored profile picture");

    Ok(format!("{}/{}", UPLOADS_URL_PREFIX, file_name))
}

/// Removes a picture written by [`save_profile_picture`] whose profile update did not go
/// through.
///
/// Best effort: failures are logged and otherwise ignored.
pub async fn discard_profile_picture(upload_dir: &Path, public_path: &str) {
    let Some(file_name) = public_path
        .strip_prefix(UPLOADS_URL_PREFIX)
        .map(|name| name.trim_start_matches('/'))
        .filter(|name| !name.is_empty())
    else {
        tracing::warn!(path = %public_path, "Not an uploaded profile picture path");
        return;
    };

    if let Err(e) = tokio::fs::remove_file(upload_dir.join(file_name)).await {
        tracing::warn!(file_name = %file_name, "Failed to remove orphaned profile picture: {}", e);
    }
}
