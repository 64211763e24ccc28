//! Form values that drive snippet generation

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::FieldsError;

/// Values entered on the builder form
///
/// All fields are free-form text. Optional fields are absent when `None`
/// or empty; absent fields are left out of the generated run call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormFields {
    pub api_key: String,
    pub task: String,
    pub model: Option<String>,
    pub vault_id: Option<String>,
    pub session_id: Option<String>,
}

/// API key shown before the user types their own
pub const INITIAL_API_KEY: &str = "sk-...";

/// Task shown before the user types their own
pub const INITIAL_TASK: &str = "Find the latest job openings on notte.cc";

/// Model preselected in the model picker
pub const INITIAL_MODEL: &str = "gpt-4o";

impl FormFields {
    /// Create fields with the given API key and task and no optional values
    pub fn new(api_key: impl Into<String>, task: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            task: task.into(),
            ..Self::default()
        }
    }

    /// The state the builder form starts in
    pub fn initial() -> Self {
        Self::new(INITIAL_API_KEY, INITIAL_TASK).with_model(INITIAL_MODEL)
    }

    /// Load fields from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, FieldsError> {
        load_toml_file(path)
    }

    /// Load fields from a TOML string
    ///
    /// Missing keys keep their empty defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, FieldsError> {
        parse_toml(content, INLINE_SOURCE)
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    pub fn with_task(mut self, task: impl Into<String>) -> Self {
        self.task = task.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_vault_id(mut self, vault_id: impl Into<String>) -> Self {
        self.vault_id = Some(vault_id.into());
        self
    }

    pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    /// Apply every value the overlay sets
    ///
    /// A set value always wins, even when empty: an empty API key or task
    /// is written as `""`, an empty optional is left out of the run call.
    pub fn overlay(mut self, overlay: FieldsOverlay) -> Self {
        if let Some(api_key) = overlay.api_key {
            self.api_key = api_key;
        }
        if let Some(task) = overlay.task {
            self.task = task;
        }
        if overlay.model.is_some() {
            self.model = overlay.model;
        }
        if overlay.vault_id.is_some() {
            self.vault_id = overlay.vault_id;
        }
        if overlay.session_id.is_some() {
            self.session_id = overlay.session_id;
        }
        self
    }

    /// The model, if present and non-empty
    pub fn model(&self) -> Option<&str> {
        present(&self.model)
    }

    /// The vault id, if present and non-empty
    pub fn vault_id(&self) -> Option<&str> {
        present(&self.vault_id)
    }

    /// The session id, if present and non-empty
    pub fn session_id(&self) -> Option<&str> {
        present(&self.session_id)
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// A partial set of form values layered over existing fields
///
/// Unlike [`FormFields`], the API key and task are optional here, so an
/// explicitly empty value can be told apart from one that was never given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FieldsOverlay {
    pub api_key: Option<String>,
    pub task: Option<String>,
    pub model: Option<String>,
    pub vault_id: Option<String>,
    pub session_id: Option<String>,
}

impl FieldsOverlay {
    /// Load an overlay from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, FieldsError> {
        load_toml_file(path)
    }

    /// Load an overlay from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, FieldsError> {
        parse_toml(content, INLINE_SOURCE)
    }
}

/// Name reported for TOML that did not come from a file
const INLINE_SOURCE: &str = "<fields>";

fn load_toml_file<T: DeserializeOwned>(path: &Path) -> Result<T, FieldsError> {
    let content = std::fs::read_to_string(path).map_err(|source| FieldsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_toml(&content, &path.display().to_string())
}

fn parse_toml<T: DeserializeOwned>(content: &str, filename: &str) -> Result<T, FieldsError> {
    toml::from_str(content).map_err(|error| FieldsError::Toml {
        filename: filename.to_string(),
        text: content.to_string(),
        error,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_optional_is_absent() {
        let fields = FormFields::new("k", "t")
            .with_model("")
            .with_vault_id("v1");
        assert_eq!(fields.model(), None);
        assert_eq!(fields.vault_id(), Some("v1"));
        assert_eq!(fields.session_id(), None);
    }

    #[test]
    fn test_initial_state() {
        let fields = FormFields::initial();
        assert_eq!(fields.api_key, "sk-...");
        assert_eq!(fields.task, "Find the latest job openings on notte.cc");
        assert_eq!(fields.model(), Some("gpt-4o"));
        assert_eq!(fields.vault_id(), None);
    }

    #[test]
    fn test_parse_toml_partial() {
        let fields = FormFields::from_toml_str(
            r#"
task = "Book a table"
vault_id = "vault-7"
"#,
        )
        .expect("Should parse");
        assert_eq!(fields.api_key, "");
        assert_eq!(fields.task, "Book a table");
        assert_eq!(fields.model, None);
        assert_eq!(fields.vault_id(), Some("vault-7"));
    }

    #[test]
    fn test_parse_toml_invalid() {
        let result = FormFields::from_toml_str("task = ");
        assert!(matches!(result, Err(FieldsError::Toml { .. })));
    }

    #[test]
    fn test_parse_toml_wrong_type() {
        let result = FormFields::from_toml_str("model = 4");
        assert!(result.is_err());
    }

    #[test]
    fn test_overlay_overrides() {
        let overlay = FieldsOverlay {
            task: Some("Check the weather".to_string()),
            model: Some(String::new()),
            session_id: Some("s-1".to_string()),
            ..FieldsOverlay::default()
        };
        let fields = FormFields::initial().overlay(overlay);
        assert_eq!(fields.api_key, "sk-...");
        assert_eq!(fields.task, "Check the weather");
        assert_eq!(fields.model(), None);
        assert_eq!(fields.session_id(), Some("s-1"));
    }

    #[test]
    fn test_overlay_empty_required_values() {
        let overlay = FieldsOverlay {
            api_key: Some(String::new()),
            task: Some(String::new()),
            ..FieldsOverlay::default()
        };
        let fields = FormFields::initial().overlay(overlay);
        assert_eq!(fields.api_key, "");
        assert_eq!(fields.task, "");
        assert_eq!(fields.model(), Some("gpt-4o"));
    }

    #[test]
    fn test_overlay_from_toml_keeps_empty_strings() {
        let overlay = FieldsOverlay::from_toml_str("api_key = \"\"\nvault_id = \"v-1\"\n")
            .expect("Should parse");
        assert_eq!(overlay.api_key.as_deref(), Some(""));
        assert_eq!(overlay.task, None);

        let fields = FormFields::initial().overlay(overlay);
        assert_eq!(fields.api_key, "");
        assert_eq!(fields.task, INITIAL_TASK);
        assert_eq!(fields.vault_id(), Some("v-1"));
    }

    #[test]
    fn test_empty_overlay_changes_nothing() {
        let fields = FormFields::initial().overlay(FieldsOverlay::default());
        assert_eq!(fields, FormFields::initial());
    }
}
