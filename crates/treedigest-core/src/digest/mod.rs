//! Digest module: Per-entry hashing and encoding
//!
//! Reads an entry's content once and derives both the SHA-256 digest and
//! the base64 encoding from that single buffer.

mod digester;
mod record;

pub use digester::{digest_file, encode_base64, sha256, DIGEST_LEN};
pub use record::FileRecord;
