//! Prompt Synchronization Module
//!
//! Ties the pieces of one run together:
//!
//! 1. load `<dir>/workflow.json`
//! 2. collect `<dir>/*.md` prompts
//! 3. reconcile prompts with `workflow.definition.steps`
//! 4. persist the document (unless dry-run)
//!
//! # Structure
//!
//! - [`prompts`]: Prompt file enumeration
//! - [`reconcile`]: Prompt/step matching
//! - [`report`]: Console summary

pub mod prompts;
pub mod reconcile;
pub mod report;

use std::path::PathBuf;

use log::info;

use crate::error::{Result, SyncError};
use crate::workflow::model::StepsError;
use crate::workflow::{load_document, save_document};

pub use prompts::{collect_prompts, PromptFile, PromptSet};
pub use reconcile::{reconcile, SyncOutcome};
pub use report::SyncReport;

/// Name of the workflow document inside a playbook directory.
pub const WORKFLOW_FILENAME: &str = "workflow.json";

/// Options for a synchronization run.
#[derive(Debug, Clone, Default)]
pub struct SyncOptions {
    /// Reconcile and report without writing the document
    pub dry_run: bool,
}

/// Synchronizes the prompt files of one playbook directory.
///
/// # Example
///
/// ```rust,no_run
/// use promptsync::Synchronizer;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let report = Synchronizer::new("code-review").run()?;
///     print!("{}", report);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Synchronizer {
    playbook_dir: PathBuf,
    options: SyncOptions,
}

impl Synchronizer {
    pub fn new(playbook_dir: impl Into<PathBuf>) -> Self {
        Self {
            playbook_dir: playbook_dir.into(),
            options: SyncOptions::default(),
        }
    }

    pub fn with_options(mut self, options: SyncOptions) -> Self {
        self.options = options;
        self
    }

    /// Path of the workflow document this synchronizer reads and writes.
    pub fn workflow_path(&self) -> PathBuf {
        self.playbook_dir.join(WORKFLOW_FILENAME)
    }

    /// Runs one synchronization pass.
    ///
    /// All errors are raised before the document is written. Mismatches are
    /// returned in the report, not as errors.
    pub fn run(&self) -> Result<SyncReport> {
        let workflow_path = self.workflow_path();

        let mut document = load_document(&workflow_path)?;
        let prompts = collect_prompts(&self.playbook_dir)?;
        info!(
            "Collected {} prompt(s) from {}",
            prompts.len(),
            self.playbook_dir.display()
        );

        let outcome = document
            .with_steps(|steps| reconcile(steps, &prompts))
            .map_err(|e| match e {
                StepsError::Missing => SyncError::MissingSteps {
                    path: workflow_path.clone(),
                },
                StepsError::InvalidStep { index } => SyncError::InvalidStep {
                    path: workflow_path.clone(),
                    index,
                },
            })?;

        if self.options.dry_run {
            info!("Dry run: {} left unchanged", workflow_path.display());
        } else {
            save_document(&document, &workflow_path)?;
        }

        Ok(SyncReport::new(workflow_path, outcome, self.options.dry_run))
    }
}
