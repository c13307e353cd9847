//! treedigest-core: Core library for digesting directory trees
//!
//! Walks a directory depth-first and, for every entry, reads its content
//! once, computes a SHA-256 digest and a base64 encoding of the same bytes,
//! and emits the result as one line of JSON.
//!
//! # Components
//!
//! - **scanner** - depth-first walker and entry filters
//! - **digest** - per-file reading, hashing and encoding
//! - **limit** - human-readable byte sizes
//! - **pipeline** - the sequential walk → digest → print loop

pub mod digest;
pub mod error;
pub mod limit;
pub mod pipeline;
pub mod scanner;

// Re-export commonly used types
pub use digest::{digest_file, FileRecord};
pub use error::{DigestError, ScanError};
pub use limit::{ByteSize, ByteSizeError};
pub use pipeline::{run, ScanConfig, ScanSummary};
pub use scanner::{EntryFilter, SkipReason, Walker};
