//! Streaming PDF renderer for cheat sheets using lopdf.
//!
//! Pages are written to the output as soon as they are rendered; only the
//! small shared objects (resources, page tree, catalog, info) are buffered
//! until the document is finished.

mod helpers;
mod renderer;
mod writer;

pub use helpers::render_elements_to_content;
pub use renderer::LopdfRenderer;
pub use writer::StreamingPdfWriter;
