/// Metadata written to the document information dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentInfo {
    pub title: String,
    pub producer: String,
}

impl DocumentInfo {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            producer: concat!("hotsheet ", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}
