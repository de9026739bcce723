//! Attachment ingestion: raw files to inline data-URI payloads.

use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use futures::stream::{FuturesUnordered, StreamExt};

use crate::models::FileAttachment;

/// Read each path into a data-URI attachment and append the results to
/// the already-attached files.
///
/// Reads are independent: a failed read is logged and contributes
/// nothing, the others proceed. The returned list starts with `existing`
/// unchanged, followed by the new attachments in completion order. The
/// call resolves exactly once, after every read has settled; initiated
/// reads cannot be cancelled.
pub async fn ingest_files(
    existing: Vec<FileAttachment>,
    paths: Vec<PathBuf>,
) -> Vec<FileAttachment> {
    let mut files = existing;

    let mut reads: FuturesUnordered<_> = paths.into_iter().map(read_attachment).collect();
    while let Some(read) = reads.next().await {
        if let Some(attachment) = read {
            files.push(attachment);
        }
    }

    files
}

async fn read_attachment(path: PathBuf) -> Option<FileAttachment> {
    match tokio::fs::read(&path).await {
        Ok(bytes) => {
            let mime_type = mime_for_path(&path).to_string();
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            Some(FileAttachment {
                name,
                url: data_uri(&mime_type, &bytes),
                mime_type,
            })
        }
        Err(e) => {
            tracing::warn!("failed to read attachment {}: {}", path.display(), e);
            None
        }
    }
}

/// Encode bytes as a `data:` URI with a base64 payload.
pub fn data_uri(mime_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes))
}

/// MIME type from the file extension; octet-stream when unknown.
fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "pdf" => "application/pdf",
        "txt" => "text/plain",
        _ => "application/octet-stream",
    }
}
