use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;
use uuid::Uuid;

/// Writes an uploaded document into `dir`, creating it if needed.
///
/// Only the final path component of the client-supplied name is kept, and the
/// stored name is prefixed with a fresh UUID so concurrent uploads of the same
/// file never collide.
pub async fn store_upload(dir: &Path, file_name: &str, bytes: &[u8]) -> Result<PathBuf> {
    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("Failed to create upload directory {}", dir.display()))?;

    let stored_name = format!("{}-{}", Uuid::new_v4(), sanitize_file_name(file_name));
    let path = dir.join(stored_name);

    tokio::fs::write(&path, bytes)
        .await
        .with_context(|| format!("Failed to write upload {}", path.display()))?;

    debug!("Stored upload at {}", path.display());
    Ok(path)
}

/// Last path segment of a client file name, restricted to a safe charset.
fn sanitize_file_name(file_name: &str) -> String {
    let base = file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default();

    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    let cleaned = cleaned.trim_start_matches('.');
    if cleaned.is_empty() {
        "upload".to_string()
    } else {
        cleaned.to_string()
    }
}
