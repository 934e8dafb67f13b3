//! Error types for prompt synchronization
//!
//! Every variant is a fatal precondition failure: it is raised before the
//! workflow document is written, so a failed run never leaves a partial file.
//! Mismatches between prompt files and steps are not errors; they are
//! reported through [`crate::sync::SyncOutcome`].

use std::io;
use std::path::PathBuf;

/// Result type for synchronization operations
pub type Result<T> = std::result::Result<T, SyncError>;

/// Errors that abort a synchronization run.
///
/// The display text of each variant is the single line shown to the user.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// `workflow.json` does not exist or is not a regular file
    #[error("Error: {} not found", path.display())]
    DocumentNotFound { path: PathBuf },

    #[error("Error: failed to read {}: {source}", path.display())]
    ReadDocument {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error: failed to parse {}: {source}", path.display())]
    ParseDocument {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The document has no `workflow.definition.steps` array
    #[error("Error: {} has no workflow.definition.steps array", path.display())]
    MissingSteps { path: PathBuf },

    /// A step is not an object with a string `id`
    #[error("Error: {}: step #{index} is not an object with a string \"id\"", path.display())]
    InvalidStep { path: PathBuf, index: usize },

    #[error("Error: failed to list {}: {source}", dir.display())]
    ReadDirectory {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error: failed to read prompt {}: {source}", path.display())]
    ReadPrompt {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("No prompt .md files found in {}", dir.display())]
    NoPrompts { dir: PathBuf },

    #[error("Error: failed to serialize workflow document: {0}")]
    SerializeDocument(#[source] serde_json::Error),

    #[error("Error: failed to write {}: {source}", path.display())]
    WriteDocument {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
