//! Scanner module: Directory traversal and entry filtering
//!
//! Responsible for walking a directory tree depth-first and deciding
//! which discovered entries get digested.

mod filter;
mod media;
mod walker;

pub use filter::{EntryFilter, SkipReason};
pub use walker::{Paths, Walker};
