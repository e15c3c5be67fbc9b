use hotsheet_layout::LayoutError;
use hotsheet_render_core::RenderError;
use hotsheet_types::ModelError;
use std::io;
use thiserror::Error;

/// Failure to read or understand an input file.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Input is invalid: {}", .0.join("; "))]
    Invalid(Vec<String>),
}

/// A comprehensive error type for the entire generation pipeline.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Parsing failed: {0}")]
    Parse(#[from] ParseError),

    #[error("Invalid cheat sheet: {0}")]
    Model(#[from] ModelError),

    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Could not move the finished PDF into place: {0}")]
    Persist(#[from] tempfile::PersistError),
}
