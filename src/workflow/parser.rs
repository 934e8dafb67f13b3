//! Workflow Document Loading and Saving
//!
//! Reads `workflow.json` into a [`WorkflowDocument`] and writes it back
//! pretty-printed with two-space indentation and a single trailing newline.

use std::fs;
use std::path::Path;

use log::{debug, info};

use super::model::WorkflowDocument;
use crate::error::{Result, SyncError};

/// Loads a workflow document from a JSON file.
///
/// # Returns
///
/// * `Ok(WorkflowDocument)` - Parsed document
/// * `Err(SyncError::DocumentNotFound)` - Path is missing or not a regular file
/// * `Err(SyncError::ParseDocument)` - Contents are not valid JSON
///
/// # Example
///
/// ```rust,no_run
/// use promptsync::workflow::load_document;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let mut doc = load_document("code-review/workflow.json")?;
///     let count = doc.with_steps(|steps| steps.len())?;
///     println!("{} steps", count);
///     Ok(())
/// }
/// ```
pub fn load_document(path: impl AsRef<Path>) -> Result<WorkflowDocument> {
    let path = path.as_ref();

    if !path.is_file() {
        return Err(SyncError::DocumentNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|source| SyncError::ReadDocument {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Workflow content loaded ({} bytes)", content.len());

    let document: WorkflowDocument =
        serde_json::from_str(&content).map_err(|source| SyncError::ParseDocument {
            path: path.to_path_buf(),
            source,
        })?;

    info!("Loaded workflow document from {}", path.display());
    Ok(document)
}

/// Renders a document the way it is stored on disk.
pub fn render_document(document: &WorkflowDocument) -> Result<String> {
    let mut json = serde_json::to_string_pretty(document).map_err(SyncError::SerializeDocument)?;
    json.push('\n');
    Ok(json)
}

/// Saves a document, overwriting the file in full.
pub fn save_document(document: &WorkflowDocument, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let json = render_document(document)?;

    fs::write(path, json).map_err(|source| SyncError::WriteDocument {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Workflow document saved to: {}", path.display());
    Ok(())
}
