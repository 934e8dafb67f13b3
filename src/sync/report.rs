//! Console Report
//!
//! Human-readable summary of a [`SyncOutcome`], printed after the document has
//! been persisted.

use std::fmt;
use std::path::PathBuf;

use colored::Colorize;

use super::prompts::PROMPT_EXTENSION;
use super::reconcile::SyncOutcome;

/// Report for one synchronization run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    /// Path of the workflow document that was (or would be) written
    pub workflow_path: PathBuf,
    pub outcome: SyncOutcome,
    /// The document was not written
    pub dry_run: bool,
}

impl SyncReport {
    pub fn new(workflow_path: impl Into<PathBuf>, outcome: SyncOutcome, dry_run: bool) -> Self {
        Self {
            workflow_path: workflow_path.into(),
            outcome,
            dry_run,
        }
    }
}

impl fmt::Display for SyncReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = if self.dry_run { "Would sync" } else { "Synced" };
        writeln!(
            f,
            "{} {} prompt(s) into {}:",
            verb,
            self.outcome.updated.len(),
            self.workflow_path.display()
        )?;
        for step_id in &self.outcome.updated {
            writeln!(f, "  {}{} -> step '{}'", step_id, PROMPT_EXTENSION, step_id)?;
        }

        if !self.outcome.unmatched_prompts.is_empty() {
            writeln!(f)?;
            writeln!(
                f,
                "{}",
                "Warning: .md files with no matching step in workflow.json:".yellow()
            )?;
            for step_id in &self.outcome.unmatched_prompts {
                writeln!(f, "  {}{}", step_id, PROMPT_EXTENSION)?;
            }
        }

        if !self.outcome.unmatched_steps.is_empty() {
            writeln!(f)?;
            writeln!(
                f,
                "{}",
                "Warning: steps with instructions but no matching .md file:".yellow()
            )?;
            for step_id in &self.outcome.unmatched_steps {
                writeln!(f, "  {}", step_id)?;
            }
        }

        if self.outcome.in_sync() {
            writeln!(f)?;
            writeln!(f, "{}", "All prompts and steps are in sync.".green())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    fn outcome(updated: &[&str], prompts: &[&str], steps: &[&str]) -> SyncOutcome {
        SyncOutcome {
            updated: owned(updated),
            unmatched_prompts: owned(prompts),
            unmatched_steps: owned(steps),
        }
    }

    #[test]
    fn test_report_in_sync() {
        colored::control::set_override(false);

        let report = SyncReport::new("pb/workflow.json", outcome(&["a", "b"], &[], &[]), false);

        assert_eq!(
            report.to_string(),
            "Synced 2 prompt(s) into pb/workflow.json:\n\
             \x20 a.md -> step 'a'\n\
             \x20 b.md -> step 'b'\n\
             \n\
             All prompts and steps are in sync.\n"
        );
    }

    #[test]
    fn test_report_with_warnings() {
        colored::control::set_override(false);

        let report = SyncReport::new("pb/workflow.json", outcome(&["a"], &["c"], &["b"]), false);

        assert_eq!(
            report.to_string(),
            "Synced 1 prompt(s) into pb/workflow.json:\n\
             \x20 a.md -> step 'a'\n\
             \n\
             Warning: .md files with no matching step in workflow.json:\n\
             \x20 c.md\n\
             \n\
             Warning: steps with instructions but no matching .md file:\n\
             \x20 b\n"
        );
    }

    #[test]
    fn test_report_dry_run_header() {
        colored::control::set_override(false);

        let report = SyncReport::new("pb/workflow.json", outcome(&[], &["x"], &[]), true);
        let text = report.to_string();

        assert!(text.starts_with("Would sync 0 prompt(s) into pb/workflow.json:\n"));
        assert!(!text.contains("in sync"));
    }
}
