//! Entry filters applied before an entry is digested

use std::fmt;
use std::path::Path;

use super::media::{has_image_extension, IMAGE_EXTENSIONS};
use crate::limit::ByteSize;

/// Why an entry was not digested
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// `images_only` is set and the extension is not a known image type
    NotAnImage,
    /// A regular file larger than the configured limit
    TooLarge { size: u64, limit: ByteSize },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnImage => {
                write!(f, "extension is not one of {}", IMAGE_EXTENSIONS.join(", "))
            }
            Self::TooLarge { size, limit } => {
                write!(f, "{size} bytes exceeds limit of {limit}")
            }
        }
    }
}

/// Decides which walked entries are handed to the digester
///
/// The default filter accepts everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntryFilter {
    images_only: bool,
    max_file_size: Option<ByteSize>,
}

impl EntryFilter {
    /// Create a filter that accepts every entry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Only accept paths with an image extension
    #[must_use]
    pub fn with_images_only(mut self, images_only: bool) -> Self {
        self.images_only = images_only;
        self
    }

    /// Reject regular files strictly larger than `limit`
    #[must_use]
    pub fn with_max_file_size(mut self, limit: Option<ByteSize>) -> Self {
        self.max_file_size = limit;
        self
    }

    /// The configured size limit, if any
    #[must_use]
    pub fn max_file_size(&self) -> Option<ByteSize> {
        self.max_file_size
    }

    /// Check an entry against the filter
    ///
    /// `file_len` is the length of the entry when it is a regular file, and
    /// `None` for anything else (directories, special files, failed stats);
    /// the size limit never applies to those.
    #[must_use]
    pub fn skip_reason(&self, path: &Path, file_len: Option<u64>) -> Option<SkipReason> {
        if self.images_only && !has_image_extension(path) {
            return Some(SkipReason::NotAnImage);
        }
        match (self.max_file_size, file_len) {
            (Some(limit), Some(size)) if size > limit.as_u64() => {
                Some(SkipReason::TooLarge { size, limit })
            }
            _ => None,
        }
    }
}
