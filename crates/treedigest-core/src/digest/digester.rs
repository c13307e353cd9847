//! Digester: Reads one entry and derives its digest and encoding

use std::path::Path;
use std::sync::Arc;

use data_encoding::BASE64;
use sha2::{Digest, Sha256};
use tokio::task;
use tracing::{debug, info};

use super::FileRecord;
use crate::error::DigestError;

/// Length of a SHA-256 digest in bytes
pub const DIGEST_LEN: usize = 32;

/// Compute the SHA-256 digest of `content`
#[must_use]
pub fn sha256(content: &[u8]) -> [u8; DIGEST_LEN] {
    Sha256::digest(content).into()
}

/// Encode `content` as padded, standard-alphabet base64
#[must_use]
pub fn encode_base64(content: &[u8]) -> String {
    BASE64.encode(content)
}

/// Digest a single entry
///
/// The whole content is read to end of stream, then hashed and encoded
/// concurrently on two blocking tasks sharing the same buffer.
///
/// # Errors
/// Returns an error if the entry cannot be opened or read (missing,
/// permission denied, a directory) or if either worker task fails.
pub async fn digest_file(path: &Path) -> Result<FileRecord, DigestError> {
    info!("start digesting: {}", path.display());

    let content: Arc<[u8]> = tokio::fs::read(path)
        .await
        .map_err(|source| DigestError::Read {
            path: path.to_path_buf(),
            source,
        })?
        .into();
    debug!("Read {} bytes from {}", content.len(), path.display());

    let hash_task = task::spawn_blocking({
        let content = Arc::clone(&content);
        move || sha256(&content)
    });
    let encode_task = task::spawn_blocking({
        let content = Arc::clone(&content);
        move || encode_base64(&content)
    });
    let (digest, encoded) = tokio::join!(hash_task, encode_task);

    let digest = digest.map_err(|source| DigestError::Task {
        task: "hash",
        path: path.to_path_buf(),
        source,
    })?;
    let encoded = encoded.map_err(|source| DigestError::Task {
        task: "encode",
        path: path.to_path_buf(),
        source,
    })?;

    info!("finished digesting: {}", path.display());
    Ok(FileRecord::new(path, digest, encoded))
}
