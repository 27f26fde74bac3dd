//=========================================================================
// Errors
//=========================================================================
//
// Error types shared by behaviours and configuration loading.
//
// BehaviourError values are never returned to the frame driver. They are
// handed to Diagnostics, which logs and records them once.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::path::PathBuf;

//=== BehaviourError ======================================================

/// Terminal failures of a behaviour operation.
///
/// Each variant is reported once and never retried. The affected
/// behaviour either stays inert (setup failures) or leaves the world
/// unchanged (transition failures).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BehaviourError {
    /// A collaborator the behaviour depends on was not found.
    #[error("{behaviour}: {collaborator} not found")]
    MissingCollaborator {
        behaviour: &'static str,
        collaborator: String,
    },

    /// A configured media resource does not exist on disk.
    #[error("media file not found at path: {}", path.display())]
    MissingResource { path: PathBuf },

    /// The configured target scene is not in the scene registry.
    #[error("scene '{scene}' does not exist in the scene registry")]
    UnknownTarget { scene: String },
}

//=== ConfigError =========================================================

/// Configuration loading and validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Reading the configuration file failed.
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid RON for the expected schema.
    #[error("config parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),

    /// A value parsed correctly but is out of range.
    #[error("invalid config: {0}")]
    Invalid(String),
}

//=========================================================================
// Tests
//=========================================================================
