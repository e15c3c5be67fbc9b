use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("cannot write PDF output: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed PDF object: {0}")]
    Pdf(String),
    #[error("renderer has no open document (call begin_document first)")]
    NotStarted,
}

impl From<lopdf::Error> for RenderError {
    fn from(err: lopdf::Error) -> Self {
        RenderError::Pdf(err.to_string())
    }
}
