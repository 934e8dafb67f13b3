//! Workflow Document Module
//!
//! Access to the parts of `workflow.json` that prompt synchronization reads
//! and writes.
//!
//! # Structure
//!
//! - [`model`]: Ordered document tree and the typed step view
//! - [`parser`]: JSON loading and saving

pub mod model;
pub mod parser;

pub use model::{Step, StepsError, WorkflowDocument};
pub use parser::{load_document, render_document, save_document};
