//! Directory walker: Enumerates every entry under a root

use std::path::{Path, PathBuf};

use tokio::sync::mpsc;
use walkdir::WalkDir;

/// Depth-first walker over a directory tree
///
/// Yields the root first, then every descendant (files, directories,
/// symlinks and special files alike) with siblings sorted by file name.
/// Symlinks are reported but never followed, including a symlinked root.
#[derive(Debug, Clone)]
pub struct Walker {
    root: PathBuf,
}

impl Walker {
    /// Create a new walker for the given root
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Get the root being walked
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Walk the tree, returning a lazy iterator of discovered paths
    ///
    /// Traversal errors are discarded. The only exception is the root: it
    /// is yielded even when it cannot be stat'ed, so callers always see it.
    #[must_use]
    pub fn paths(&self) -> Paths {
        Paths {
            inner: WalkDir::new(&self.root)
                .follow_links(false)
                .follow_root_links(false)
                .sort_by_file_name()
                .into_iter(),
            root_seen: false,
        }
    }

    /// Walk the tree on a blocking background task
    ///
    /// Paths are handed over one at a time; the receiver yields `None` once
    /// the walk is complete. Dropping the receiver stops the walk early.
    /// Must be called from within a tokio runtime.
    #[must_use]
    pub fn spawn(self) -> mpsc::Receiver<PathBuf> {
        let (tx, rx) = mpsc::channel(1);
        tokio::task::spawn_blocking(move || {
            for path in self.paths() {
                if tx.blocking_send(path).is_err() {
                    tracing::debug!("Walk receiver dropped, stopping traversal");
                    return;
                }
            }
            tracing::debug!("Finished walking {}", self.root().display());
        });
        rx
    }
}

/// Iterator returned by [`Walker::paths`]
pub struct Paths {
    inner: walkdir::IntoIter,
    root_seen: bool,
}

impl Iterator for Paths {
    type Item = PathBuf;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let path = match self.inner.next()? {
                Ok(entry) => entry.into_path(),
                Err(err) if err.depth() == 0 && !self.root_seen => match err.path() {
                    Some(path) => path.to_path_buf(),
                    None => continue,
                },
                Err(_) => continue,
            };
            self.root_seen = true;
            return Some(path);
        }
    }
}
