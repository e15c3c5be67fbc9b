use crate::error::ModelError;
use serde::{Deserialize, Serialize};

/// Subsection name hotkeys are grouped under when they carry none.
pub const DEFAULT_SUBSECTION: &str = "General";

/// A single key binding and what it does.
///
/// Key, description and section are guaranteed non-empty; the subsection may be
/// empty, meaning the binding belongs to [`DEFAULT_SUBSECTION`]. Hotkeys are
/// immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawHotkey")]
pub struct Hotkey {
    key: String,
    description: String,
    section: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    subsection: String,
}

#[derive(Deserialize)]
struct RawHotkey {
    key: String,
    description: String,
    section: String,
    #[serde(default)]
    subsection: Option<String>,
}

impl TryFrom<RawHotkey> for Hotkey {
    type Error = ModelError;

    fn try_from(raw: RawHotkey) -> Result<Self, Self::Error> {
        Hotkey::new(
            raw.key,
            raw.description,
            raw.section,
            raw.subsection.unwrap_or_default(),
        )
    }
}

impl Hotkey {
    pub fn new(
        key: impl Into<String>,
        description: impl Into<String>,
        section: impl Into<String>,
        subsection: impl Into<String>,
    ) -> Result<Self, ModelError> {
        let hotkey = Self {
            key: key.into(),
            description: description.into(),
            section: section.into(),
            subsection: subsection.into(),
        };
        hotkey.check_required()?;
        Ok(hotkey)
    }

    fn check_required(&self) -> Result<(), ModelError> {
        let required = [
            ("key", &self.key),
            ("description", &self.description),
            ("section", &self.section),
        ];
        match required.iter().find(|(_, value)| value.is_empty()) {
            Some((field, _)) => Err(ModelError::EmptyField { field: *field }),
            None => Ok(()),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn section(&self) -> &str {
        &self.section
    }

    /// The raw subsection, empty when none was given.
    pub fn subsection(&self) -> &str {
        &self.subsection
    }

    /// The subsection this hotkey is grouped under.
    pub fn subsection_or_default(&self) -> &str {
        if self.subsection.is_empty() {
            DEFAULT_SUBSECTION
        } else {
            &self.subsection
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty_required_fields() {
        assert_eq!(
            Hotkey::new("", "Save", "File", ""),
            Err(ModelError::EmptyField { field: "key" })
        );
        assert_eq!(
            Hotkey::new("Ctrl+S", "", "File", ""),
            Err(ModelError::EmptyField { field: "description" })
        );
        assert_eq!(
            Hotkey::new("Ctrl+S", "Save", "", ""),
            Err(ModelError::EmptyField { field: "section" })
        );
    }

    #[test]
    fn test_missing_subsection_falls_back_to_general() {
        let hotkey = Hotkey::new("Ctrl+S", "Save", "File", "").unwrap();
        assert_eq!(hotkey.subsection(), "");
        assert_eq!(hotkey.subsection_or_default(), DEFAULT_SUBSECTION);

        let hotkey = Hotkey::new("Ctrl+S", "Save", "File", "Disk").unwrap();
        assert_eq!(hotkey.subsection_or_default(), "Disk");
    }

    #[test]
    fn test_deserialize_validates_fields() {
        let ok: Hotkey = serde_json::from_str(
            r#"{"key": "dd", "description": "Delete line", "section": "Editing"}"#,
        )
        .unwrap();
        assert_eq!(ok.key(), "dd");
        assert_eq!(ok.subsection(), "");

        let err = serde_json::from_str::<Hotkey>(
            r#"{"key": "dd", "description": "", "section": "Editing"}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("description"));
    }
}
