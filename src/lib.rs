//! PromptSync - Playbook Prompt Synchronizer
//!
//! Keeps the step instructions of a playbook's `workflow.json` in line with
//! the human-edited `<step-id>.md` prompt files that sit next to it.
//!
//! # Architecture
//!
//! - [`workflow`]: Partial typed schema of `workflow.json`, loading and saving
//! - [`sync`]: Prompt collection, reconciliation and reporting
//! - [`error`]: Fatal error kinds
//!
//! # Example
//!
//! ```rust,no_run
//! use promptsync::Synchronizer;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let report = Synchronizer::new("break-down-ticket").run()?;
//!     print!("{}", report);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod sync;
pub mod workflow;

// Re-export commonly used types
pub use error::{Result, SyncError};
pub use sync::{SyncOptions, SyncOutcome, SyncReport, Synchronizer};
pub use workflow::model::{Step, WorkflowDocument};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "PromptSync";
