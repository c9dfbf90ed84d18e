//! Error types for database construction.

use crate::database::TextDatabase;

/// Errors returned by [`TextDatabase::create`].
#[derive(Debug, thiserror::Error)]
pub enum CreateError {
    /// The database directory is already present on disk.
    ///
    /// The handle built during the failed call is carried along so callers
    /// can still inspect or use it.
    #[error("directory already exists: {}", .0.directory().display())]
    AlreadyExists(TextDatabase),
}

/// Convenience alias used throughout the core crate.
pub type Result<T> = std::result::Result<T, CreateError>;

impl CreateError {
    /// Returns the database handle that was constructed before the error.
    pub fn database(&self) -> &TextDatabase {
        match self {
            Self::AlreadyExists(db) => db,
        }
    }

    /// Consumes the error, yielding the database handle it carries.
    pub fn into_database(self) -> TextDatabase {
        match self {
            Self::AlreadyExists(db) => db,
        }
    }

    /// Returns `true` if this is a [`CreateError::AlreadyExists`].
    pub fn is_already_exists(&self) -> bool {
        matches!(self, Self::AlreadyExists(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::Path;

    #[test]
    fn display_names_the_directory() {
        let err = CreateError::AlreadyExists(TextDatabase::new("some/dir"));
        assert_eq!(
            err.to_string(),
            format!("directory already exists: {}", Path::new("some/dir").display())
        );
    }

    #[test]
    fn into_database_returns_carried_handle() {
        let err = CreateError::AlreadyExists(TextDatabase::new("carried"));
        assert!(err.is_already_exists());
        assert_eq!(err.database().directory(), Path::new("carried"));
        assert_eq!(err.into_database().directory(), Path::new("carried"));
    }
}
