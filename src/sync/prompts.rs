//! Prompt File Collection
//!
//! Enumerates `<step-id>.md` files directly inside a playbook directory and
//! reads them into a [`PromptSet`] ordered by filename.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{Result, SyncError};

/// Suffix identifying prompt files.
pub const PROMPT_EXTENSION: &str = ".md";

/// Filename that is never treated as a prompt.
pub const RESERVED_FILENAME: &str = "README.md";

/// One prompt file and the step it targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptFile {
    /// Filename minus the `.md` suffix
    pub step_id: String,

    /// File content with trailing newlines stripped
    pub content: String,
}

impl PromptFile {
    /// The filename this prompt was read from, e.g. `summarize.md`.
    pub fn file_name(&self) -> String {
        format!("{}{}", self.step_id, PROMPT_EXTENSION)
    }
}

/// Prompts keyed by step id, kept in collection order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptSet {
    prompts: Vec<PromptFile>,
}

impl PromptSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a prompt, replacing the content of an existing one with the same id.
    pub fn insert(&mut self, step_id: impl Into<String>, content: impl Into<String>) {
        self.push(PromptFile {
            step_id: step_id.into(),
            content: content.into(),
        });
    }

    fn push(&mut self, prompt: PromptFile) {
        match self.prompts.iter_mut().find(|p| p.step_id == prompt.step_id) {
            Some(existing) => *existing = prompt,
            None => self.prompts.push(prompt),
        }
    }

    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }

    /// True when a prompt exists for `step_id` (exact match).
    pub fn contains(&self, step_id: &str) -> bool {
        self.get(step_id).is_some()
    }

    pub fn get(&self, step_id: &str) -> Option<&PromptFile> {
        self.prompts.iter().find(|p| p.step_id == step_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PromptFile> {
        self.prompts.iter()
    }
}

/// Normalizes line endings and strips trailing `\n` characters only.
///
/// Trailing spaces and tabs are kept.
pub fn prompt_text(raw: &str) -> String {
    let normalized = raw.replace("\r\n", "\n").replace('\r', "\n");
    normalized.trim_end_matches('\n').to_string()
}

/// Returns the step id for a directory entry name, or `None` if the entry is
/// not a prompt file.
///
/// Hidden names never match, matching is case-sensitive, and `README.md` is
/// excluded.
pub fn step_id_from_filename(name: &str) -> Option<&str> {
    if name.starts_with('.') || name == RESERVED_FILENAME {
        return None;
    }
    name.strip_suffix(PROMPT_EXTENSION)
}

/// Reads every prompt file directly under `dir`.
///
/// Files are visited in byte-wise filename order; subdirectories are not
/// searched.
///
/// # Errors
///
/// * `SyncError::ReadDirectory` - `dir` cannot be listed
/// * `SyncError::ReadPrompt` - a prompt file cannot be read as UTF-8 text
/// * `SyncError::NoPrompts` - no prompt files were found
pub fn collect_prompts(dir: impl AsRef<Path>) -> Result<PromptSet> {
    let dir = dir.as_ref();
    let read_dir_error = |source| SyncError::ReadDirectory {
        dir: dir.to_path_buf(),
        source,
    };

    let mut candidates: Vec<(String, PathBuf)> = Vec::new();

    for entry in fs::read_dir(dir).map_err(read_dir_error)? {
        let entry = entry.map_err(read_dir_error)?;
        let path = entry.path();

        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            debug!("Skipping non UTF-8 filename: {}", path.display());
            continue;
        };

        if step_id_from_filename(&name).is_none() {
            continue;
        }

        if !path.is_file() {
            debug!("Skipping {} (not a regular file)", path.display());
            continue;
        }

        candidates.push((name, path));
    }

    candidates.sort_by(|a, b| a.0.cmp(&b.0));

    let mut prompts = PromptSet::new();
    for (name, path) in candidates {
        let Some(step_id) = step_id_from_filename(&name) else {
            continue;
        };

        let raw = fs::read_to_string(&path).map_err(|source| SyncError::ReadPrompt {
            path: path.clone(),
            source,
        })?;

        debug!("Collected prompt '{}' ({} bytes)", step_id, raw.len());

        prompts.push(PromptFile {
            step_id: step_id.to_string(),
            content: prompt_text(&raw),
        });
    }

    if prompts.is_empty() {
        return Err(SyncError::NoPrompts {
            dir: dir.to_path_buf(),
        });
    }

    Ok(prompts)
}
