use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("Hotkey field '{field}' is required and must not be empty")]
    EmptyField { field: &'static str },

    #[error("Invalid layout configuration: {0}")]
    InvalidConfig(String),

    #[error("Unknown paper size '{0}' (expected 'letter' or 'a4')")]
    UnknownPaperSize(String),

    #[error("Unknown orientation '{0}' (expected 'portrait' or 'landscape')")]
    UnknownOrientation(String),
}
