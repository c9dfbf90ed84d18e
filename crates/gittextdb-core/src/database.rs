//! The text database handle.
//!
//! [`TextDatabase`] remembers a single directory path. It never opens files
//! and never holds locks; every query goes straight to the filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{CreateError, Result};

/// Handle on the directory backing a text database.
///
/// The directory is fixed at construction and cannot be changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDatabase {
    directory: PathBuf,
}

impl TextDatabase {
    pub(crate) fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Build a handle for `directory`, failing if it already exists.
    ///
    /// Nothing is written to disk: the call only checks whether the
    /// directory is present.
    ///
    /// # Errors
    ///
    /// Returns [`CreateError::AlreadyExists`] when
    /// [`structure_exists`](Self::structure_exists) is `true`. The error
    /// carries the constructed handle.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use gittextdb_core::TextDatabase;
    ///
    /// match TextDatabase::create("notes") {
    ///     Ok(db) => println!("ready at {}", db.directory().display()),
    ///     Err(e) => eprintln!("{e}"),
    /// }
    /// ```
    pub fn create(directory: impl Into<PathBuf>) -> Result<Self> {
        let db = Self::new(directory);
        if db.structure_exists() {
            debug!(directory = %db.directory.display(), "database directory already exists");
            return Err(CreateError::AlreadyExists(db));
        }
        debug!(directory = %db.directory.display(), "database directory is free");
        Ok(db)
    }

    /// The directory this handle points at.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Returns `true` only if the directory exists and is a directory.
    ///
    /// Symlinks are followed. Any stat failure, including permission
    /// errors, reads as `false`.
    pub fn structure_exists(&self) -> bool {
        match fs::metadata(&self.directory) {
            Ok(meta) => meta.is_dir(),
            Err(err) => {
                debug!(
                    directory = %self.directory.display(),
                    error = %err,
                    "stat failed, treating as absent"
                );
                false
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
