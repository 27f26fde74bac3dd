//=========================================================================
// Media Library
//=========================================================================
//
// Resolves media file names against the streaming assets directory.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::path::{Path, PathBuf};

//=== Internal Dependencies ===============================================

use crate::core::error::BehaviourError;

//=== MediaLibrary ========================================================

/// Root directory that media file names are resolved against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaLibrary {
    root: PathBuf,
}

impl MediaLibrary {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Joins `file_name` onto the root without touching the filesystem.
    pub fn path_of(&self, file_name: &str) -> PathBuf {
        self.root.join(file_name)
    }

    /// Resolves `file_name` to an existing file.
    ///
    /// Fails with [`BehaviourError::MissingResource`] carrying the full
    /// path when no regular file exists there.
    pub fn resolve(&self, file_name: &str) -> Result<PathBuf, BehaviourError> {
        let path = self.path_of(file_name);
        if path.is_file() {
            Ok(path)
        } else {
            Err(BehaviourError::MissingResource { path })
        }
    }
}

//=========================================================================
// Tests
//=========================================================================
