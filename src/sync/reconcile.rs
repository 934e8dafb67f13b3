//! Prompt/Step Reconciliation
//!
//! Writes each prompt's content into the step with the same id and records
//! the mismatches in both directions.

use std::collections::HashSet;

use log::{debug, warn};

use super::prompts::PromptSet;
use crate::workflow::Step;

/// Result sets of one reconciliation pass. The three lists are disjoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncOutcome {
    /// Step ids whose instruction was written, in prompt order
    pub updated: Vec<String>,

    /// Prompt ids with no step of the same id, in prompt order
    pub unmatched_prompts: Vec<String>,

    /// Steps carrying a non-null instruction but no prompt file, in step order
    pub unmatched_steps: Vec<String>,
}

impl SyncOutcome {
    /// True when neither warning list has entries.
    pub fn in_sync(&self) -> bool {
        self.unmatched_prompts.is_empty() && self.unmatched_steps.is_empty()
    }
}

/// Applies `prompts` to `steps` in place.
///
/// Ids are compared exactly. When several steps share an id only the first is
/// updated. A step whose instruction is absent or `null` and has no prompt is
/// left alone and not reported.
pub fn reconcile(steps: &mut [Step], prompts: &PromptSet) -> SyncOutcome {
    let step_ids: HashSet<String> = steps.iter().map(|s| s.id().to_string()).collect();
    let mut outcome = SyncOutcome::default();

    for prompt in prompts.iter() {
        if !step_ids.contains(&prompt.step_id) {
            warn!("{} has no matching step", prompt.file_name());
            outcome.unmatched_prompts.push(prompt.step_id.clone());
            continue;
        }

        if let Some(step) = steps.iter_mut().find(|s| s.id() == prompt.step_id) {
            debug!("Updating instruction of step '{}'", step.id());
            step.set_instruction(prompt.content.as_str());
            outcome.updated.push(prompt.step_id.clone());
        }
    }

    for step in steps.iter() {
        if step.has_instruction() && !prompts.contains(step.id()) {
            warn!("Step '{}' has an instruction but no prompt file", step.id());
            outcome.unmatched_steps.push(step.id().to_string());
        }
    }

    outcome
}
