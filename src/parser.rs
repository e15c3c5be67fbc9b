//! Reads hotkey definition files.
//!
//! Both formats describe the same document:
//!
//! ```yaml
//! title: Vim
//! config:
//!   columns: 4
//!   paper_size: a4
//! hotkeys:
//!   - key: dd
//!     description: Delete line
//!     section: Editing
//!     subsection: Lines
//! ```
//!
//! The title may also be given inside `config`; a top-level title wins.
//! Unknown keys are ignored everywhere.

use crate::error::ParseError;
use hotsheet_types::{CheatSheet, DEFAULT_TITLE, Hotkey, LayoutConfig};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Yaml,
    Json,
}

impl InputFormat {
    /// JSON for a `.json` extension, YAML otherwise.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => InputFormat::Json,
            _ => InputFormat::Yaml,
        }
    }

    fn load(self, source: &str) -> Result<Value, ParseError> {
        Ok(match self {
            InputFormat::Yaml => serde_yaml::from_str(source)?,
            InputFormat::Json => serde_json::from_str(source)?,
        })
    }
}

pub struct SheetParser;

impl SheetParser {
    pub fn parse_file(path: impl AsRef<Path>) -> Result<CheatSheet, ParseError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)?;
        Self::parse_str(&source, InputFormat::from_path(path))
    }

    pub fn parse_str(source: &str, format: InputFormat) -> Result<CheatSheet, ParseError> {
        let document = format.load(source)?;
        let inspection = Inspection::of(&document);
        if !inspection.problems.is_empty() {
            return Err(ParseError::Invalid(inspection.problems));
        }
        log::debug!(
            "Parsed '{}' with {} hotkey(s)",
            inspection.title,
            inspection.hotkeys.len()
        );
        Ok(CheatSheet::with_config(
            inspection.title,
            inspection.hotkeys,
            inspection.config,
        ))
    }

    /// Every problem found in the file; empty when it is valid.
    ///
    /// Syntax errors are reported as problems. Only a file that cannot be read is an error.
    pub fn validate_file(path: impl AsRef<Path>) -> Result<Vec<String>, ParseError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)?;
        Ok(Self::validate_str(&source, InputFormat::from_path(path)))
    }

    pub fn validate_str(source: &str, format: InputFormat) -> Vec<String> {
        match format.load(source) {
            Ok(document) => Inspection::of(&document).problems,
            Err(err) => vec![err.to_string()],
        }
    }
}

/// The result of walking a loaded document once, collecting problems as it goes.
struct Inspection {
    title: String,
    config: LayoutConfig,
    hotkeys: Vec<Hotkey>,
    problems: Vec<String>,
}

impl Inspection {
    fn of(document: &Value) -> Self {
        let mut inspection = Inspection {
            title: DEFAULT_TITLE.to_string(),
            config: LayoutConfig::default(),
            hotkeys: Vec::new(),
            problems: Vec::new(),
        };

        let Some(root) = document.as_object() else {
            inspection
                .problems
                .push("the document must be a mapping with a 'hotkeys' list".to_string());
            return inspection;
        };

        let config_map = inspection.read_config(root.get("config"));
        inspection.read_title(root, config_map);
        inspection.read_hotkeys(root.get("hotkeys"));
        inspection
    }

    fn read_config<'v>(&mut self, value: Option<&'v Value>) -> Option<&'v Map<String, Value>> {
        match value {
            None | Some(Value::Null) => None,
            Some(Value::Object(map)) => {
                match serde_json::from_value::<LayoutConfig>(Value::Object(map.clone())) {
                    Ok(config) => {
                        self.problems
                            .extend(config.problems().into_iter().map(|p| format!("config: {p}")));
                        self.config = config;
                    }
                    Err(err) => self.problems.push(format!("config: {err}")),
                }
                Some(map)
            }
            Some(_) => {
                self.problems.push("'config' must be a mapping".to_string());
                None
            }
        }
    }

    fn read_title(&mut self, root: &Map<String, Value>, config: Option<&Map<String, Value>>) {
        let title = root
            .get("title")
            .or_else(|| config.and_then(|config| config.get("title")));
        match title {
            None | Some(Value::Null) => {}
            Some(value) => match scalar_text(value) {
                Some(title) => self.title = title,
                None => self.problems.push("'title' must be text".to_string()),
            },
        }
    }

    fn read_hotkeys(&mut self, value: Option<&Value>) {
        let entries = match value {
            Some(Value::Array(entries)) => entries,
            None | Some(Value::Null) => {
                self.problems.push("missing 'hotkeys' list".to_string());
                return;
            }
            Some(_) => {
                self.problems.push("'hotkeys' must be a list".to_string());
                return;
            }
        };

        for (i, entry) in entries.iter().enumerate() {
            let number = i + 1;
            let Some(entry) = entry.as_object() else {
                self.problems.push(format!("hotkey {number}: must be a mapping"));
                continue;
            };

            let mut fields = Vec::with_capacity(3);
            for field in ["key", "description", "section"] {
                match entry.get(field).and_then(scalar_text) {
                    Some(text) if !text.trim().is_empty() => fields.push(text),
                    _ => self
                        .problems
                        .push(format!("hotkey {number}: missing or empty '{field}'")),
                }
            }
            let subsection = match entry.get("subsection") {
                None | Some(Value::Null) => Some(String::new()),
                Some(value) => scalar_text(value),
            };
            let Some(subsection) = subsection else {
                self.problems
                    .push(format!("hotkey {number}: 'subsection' must be text"));
                continue;
            };

            if let Ok([key, description, section]) = <[String; 3]>::try_from(fields) {
                match Hotkey::new(key, description, section, subsection) {
                    Ok(hotkey) => self.hotkeys.push(hotkey),
                    Err(err) => self.problems.push(format!("hotkey {number}: {err}")),
                }
            }
        }
    }
}

/// Text of a scalar; YAML happily reads keys like `1` or `yes` as numbers or booleans.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotsheet_types::{Orientation, PaperSize};

    const VIM: &str = r#"
title: Vim
config:
  columns: 4
  paper_size: A4
  orientation: landscape
  unknown_option: 12
hotkeys:
  - key: dd
    description: Delete line
    section: Editing
    subsection: Lines
  - key: u
    description: Undo
    section: Editing
  - key: ":w"
    description: Save
    section: Files
"#;

    #[test]
    fn test_parse_yaml() {
        let sheet = SheetParser::parse_str(VIM, InputFormat::Yaml).unwrap();
        assert_eq!(sheet.title, "Vim");
        assert_eq!(sheet.hotkeys.len(), 3);
        assert_eq!(sheet.hotkeys[0].subsection(), "Lines");
        assert_eq!(sheet.hotkeys[1].subsection(), "");
        assert_eq!(sheet.config.columns, 4);
        assert_eq!(sheet.config.paper_size, PaperSize::A4);
        assert_eq!(sheet.config.orientation, Orientation::Landscape);
        assert_eq!(sheet.config.font_size, 7.0);
    }

    #[test]
    fn test_parse_json() {
        let source = r#"{
            "config": {"title": "From config", "fill_top_half": true},
            "hotkeys": [{"key": "Ctrl+S", "description": "Save", "section": "File"}]
        }"#;
        let sheet = SheetParser::parse_str(source, InputFormat::Json).unwrap();
        assert_eq!(sheet.title, "From config");
        assert!(sheet.config.fill_top_half);
    }

    #[test]
    fn test_default_title() {
        let sheet = SheetParser::parse_str("hotkeys: []", InputFormat::Yaml).unwrap();
        assert_eq!(sheet.title, DEFAULT_TITLE);
        assert!(sheet.hotkeys.is_empty());
    }

    #[test]
    fn test_numeric_keys_are_text() {
        let source = "hotkeys:\n  - {key: 1, description: First tab, section: Tabs}\n";
        let sheet = SheetParser::parse_str(source, InputFormat::Yaml).unwrap();
        assert_eq!(sheet.hotkeys[0].key(), "1");
    }

    #[test]
    fn test_validation_collects_every_problem() {
        let source = r#"
config:
  columns: 0
hotkeys:
  - key: dd
    section: Editing
  - key: ""
    description: Nothing
    section: Editing
  - just a string
"#;
        let problems = SheetParser::validate_str(source, InputFormat::Yaml);
        assert_eq!(
            problems,
            vec![
                "config: columns must be at least 1, got 0".to_string(),
                "hotkey 1: missing or empty 'description'".to_string(),
                "hotkey 2: missing or empty 'key'".to_string(),
                "hotkey 3: must be a mapping".to_string(),
            ]
        );

        let err = SheetParser::parse_str(source, InputFormat::Yaml).unwrap_err();
        assert!(matches!(err, ParseError::Invalid(ref problems) if problems.len() == 4));
    }

    #[test]
    fn test_missing_hotkeys() {
        let problems = SheetParser::validate_str("title: Empty", InputFormat::Yaml);
        assert_eq!(problems, vec!["missing 'hotkeys' list".to_string()]);
    }

    #[test]
    fn test_bad_paper_size_is_a_problem() {
        let problems =
            SheetParser::validate_str("config: {paper_size: a3}\nhotkeys: []", InputFormat::Yaml);
        assert_eq!(problems.len(), 1);
        assert!(problems[0].starts_with("config:"), "{}", problems[0]);
    }

    #[test]
    fn test_syntax_error_is_reported_as_problem() {
        let problems = SheetParser::validate_str("{ not json", InputFormat::Json);
        assert_eq!(problems.len(), 1);
        assert!(problems[0].starts_with("Invalid JSON"));
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(InputFormat::from_path(Path::new("keys.JSON")), InputFormat::Json);
        assert_eq!(InputFormat::from_path(Path::new("keys.yml")), InputFormat::Yaml);
        assert_eq!(InputFormat::from_path(Path::new("keys")), InputFormat::Yaml);
    }
}
