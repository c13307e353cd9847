//! The per-entry output record

use std::path::Path;

use data_encoding::HEXLOWER;
use serde::{Deserialize, Serialize};

use super::DIGEST_LEN;
use crate::error::DigestError;

/// One line of output, describing exactly one walked entry
///
/// `digest` serializes as an array of 32 integers and `encoded` as a
/// padded base64 string. Both are `null` on a degraded record, in which
/// case `error` carries the failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    pub path: String,
    pub digest: Option<[u8; DIGEST_LEN]>,
    pub encoded: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileRecord {
    /// Create a record for successfully read content
    #[must_use]
    pub fn new(path: &Path, digest: [u8; DIGEST_LEN], encoded: String) -> Self {
        Self {
            path: path.to_string_lossy().into_owned(),
            digest: Some(digest),
            encoded: Some(encoded),
            error: None,
        }
    }

    /// Create a record for the entry named by a digest failure
    #[must_use]
    pub fn degraded(err: &DigestError) -> Self {
        Self {
            path: err.path().to_string_lossy().into_owned(),
            digest: None,
            encoded: None,
            error: Some(err.to_string()),
        }
    }

    /// Whether this record is missing its digest and encoding
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        self.digest.is_none()
    }

    /// Lowercase hex form of the digest
    #[must_use]
    pub fn hex_digest(&self) -> Option<String> {
        self.digest.map(|digest| HEXLOWER.encode(&digest))
    }
}
