//! Workflow Document Model
//!
//! `workflow.json` is kept as an ordered JSON tree so that every key the
//! synchronizer does not touch is written back in its original position, with
//! numbers in their original textual form. The only typed part is the step
//! list at `workflow.definition.steps`, reached through
//! [`WorkflowDocument::with_steps`].
//!
//! # Example JSON Format
//!
//! ```json
//! {
//!   "name": "code-review",
//!   "workflow": {
//!     "definition": {
//!       "steps": [
//!         { "id": "gather-context", "type": "agent", "instruction": null },
//!         { "id": "summarize", "type": "agent", "instruction": "Summarize the diff." }
//!       ]
//!     }
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// JSON pointer to the step list.
pub const STEPS_POINTER: &str = "/workflow/definition/steps";

/// Structural problems found while reaching the step list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StepsError {
    #[error("no workflow.definition.steps array")]
    Missing,

    #[error("step #{index} is not an object with a string \"id\"")]
    InvalidStep { index: usize },
}

/// A parsed `workflow.json`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct WorkflowDocument {
    root: Value,
}

/// A single step object of the workflow definition.
///
/// Holds the whole JSON object, so fields keep their order. The `instruction`
/// key is tri-state: absent, `null`, or a value.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    id: String,
    fields: Map<String, Value>,
}

impl Step {
    /// Creates a step object holding only `id`.
    ///
    /// # Example
    ///
    /// ```
    /// use promptsync::workflow::Step;
    ///
    /// let step = Step::new("summarize").with_instruction("Summarize the diff.");
    /// assert!(step.has_instruction());
    /// ```
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        let mut fields = Map::new();
        fields.insert("id".to_string(), Value::String(id.clone()));
        Self { id, fields }
    }

    /// Wraps a JSON value, which must be an object with a string `id`.
    pub fn from_value(value: Value) -> Option<Self> {
        let Value::Object(fields) = value else {
            return None;
        };
        let id = fields.get("id")?.as_str()?.to_string();
        Some(Self { id, fields })
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }

    /// Sets a text instruction.
    pub fn with_instruction(mut self, text: impl Into<String>) -> Self {
        self.set_instruction(text);
        self
    }

    /// Sets an explicit `null` instruction.
    pub fn with_null_instruction(mut self) -> Self {
        self.fields.insert("instruction".to_string(), Value::Null);
        self
    }

    /// Adds an uninterpreted field.
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.fields.insert(key.into(), value);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// The raw `instruction` value; `None` when the key is absent.
    pub fn instruction(&self) -> Option<&Value> {
        self.fields.get("instruction")
    }

    /// True when the `instruction` key is present and not `null`.
    pub fn has_instruction(&self) -> bool {
        self.instruction().is_some_and(|value| !value.is_null())
    }

    /// The instruction as text, if it is a string.
    pub fn instruction_text(&self) -> Option<&str> {
        self.instruction().and_then(Value::as_str)
    }

    /// Overwrites the instruction in place, or appends the key if it was absent.
    pub fn set_instruction(&mut self, text: impl Into<String>) {
        self.fields
            .insert("instruction".to_string(), Value::String(text.into()));
    }
}

impl WorkflowDocument {
    pub fn from_value(root: Value) -> Self {
        Self { root }
    }

    /// Builds a minimal document holding only `workflow.definition.steps`.
    pub fn from_steps(steps: Vec<Step>) -> Self {
        let steps: Vec<Value> = steps.into_iter().map(Step::into_value).collect();
        Self::from_value(json!({ "workflow": { "definition": { "steps": steps } } }))
    }

    pub fn as_value(&self) -> &Value {
        &self.root
    }

    /// Runs `f` over the step list and stores the result back in place.
    ///
    /// Nothing is modified when the step list is missing or malformed.
    pub fn with_steps<R>(&mut self, f: impl FnOnce(&mut [Step]) -> R) -> Result<R, StepsError> {
        let slot = self
            .root
            .pointer_mut(STEPS_POINTER)
            .ok_or(StepsError::Missing)?;

        let mut steps = slot
            .as_array()
            .ok_or(StepsError::Missing)?
            .iter()
            .enumerate()
            .map(|(index, value)| {
                Step::from_value(value.clone()).ok_or(StepsError::InvalidStep { index })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let result = f(&mut steps);
        *slot = Value::Array(steps.into_iter().map(Step::into_value).collect());
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_builder() {
        let step = Step::new("plan")
            .with_instruction("Write a plan.")
            .with_field("type", json!("agent"));

        assert_eq!(step.id(), "plan");
        assert_eq!(step.instruction_text(), Some("Write a plan."));
        assert_eq!(step.fields()["type"], "agent");
    }

    #[test]
    fn test_has_instruction_states() {
        assert!(!Step::new("a").has_instruction());
        assert!(!Step::new("a").with_null_instruction().has_instruction());
        assert!(Step::new("a").with_instruction("").has_instruction());

        let numeric = Step::new("a").with_field("instruction", json!(3));
        assert!(numeric.has_instruction());
        assert_eq!(numeric.instruction_text(), None);
    }

    #[test]
    fn test_set_instruction_keeps_key_position() {
        let mut step = Step::from_value(json!({
            "type": "agent",
            "instruction": null,
            "id": "a",
            "next": "b"
        }))
        .unwrap();
        step.set_instruction("Hello");

        let keys: Vec<&str> = step.fields().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["type", "instruction", "id", "next"]);
    }

    #[test]
    fn test_set_instruction_appends_when_absent() {
        let mut step = Step::from_value(json!({"id": "a", "type": "agent"})).unwrap();
        step.set_instruction("Hello");

        let keys: Vec<&str> = step.fields().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["id", "type", "instruction"]);
    }

    #[test]
    fn test_from_value_requires_string_id() {
        assert!(Step::from_value(json!({"instruction": "x"})).is_none());
        assert!(Step::from_value(json!({"id": 7})).is_none());
        assert!(Step::from_value(json!("a")).is_none());
    }

    #[test]
    fn test_with_steps_missing_path() {
        for raw in [
            json!({"workflow": {}}),
            json!({"workflow": {"definition": {"name": "x"}}}),
            json!({"workflow": {"definition": {"steps": 3}}}),
            json!({"name": "x"}),
            json!([1, 2]),
        ] {
            let mut doc = WorkflowDocument::from_value(raw.clone());
            assert_eq!(doc.with_steps(|_| ()), Err(StepsError::Missing));
            assert_eq!(doc.as_value(), &raw);
        }
    }

    #[test]
    fn test_with_steps_invalid_step_leaves_document() {
        let raw = json!({"workflow": {"definition": {"steps": [{"id": "a"}, {"name": "b"}]}}});
        let mut doc = WorkflowDocument::from_value(raw.clone());

        assert_eq!(
            doc.with_steps(|_| ()),
            Err(StepsError::InvalidStep { index: 1 })
        );
        assert_eq!(doc.as_value(), &raw);
    }

    #[test]
    fn test_with_steps_updates_in_place() {
        let mut doc = WorkflowDocument::from_steps(vec![Step::new("a"), Step::new("b")]);
        let count = doc
            .with_steps(|steps| {
                steps[0].set_instruction("hi");
                steps.len()
            })
            .unwrap();

        assert_eq!(count, 2);
        assert_eq!(
            doc.as_value().pointer("/workflow/definition/steps/0/instruction"),
            Some(&json!("hi"))
        );
    }

    #[test]
    fn test_large_integers_survive() {
        let raw = r#"{"big":123456789012345678901234567890,"ratio":0.5,"workflow":{"definition":{"steps":[]}}}"#;
        let doc: WorkflowDocument = serde_json::from_str(raw).unwrap();

        assert_eq!(serde_json::to_string(&doc).unwrap(), raw);
    }
}
