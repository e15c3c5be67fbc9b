use crate::error::RenderError;
use crate::types::DocumentInfo;
use hotsheet_layout::{Page, PositionedElement, Size};
use lopdf::ObjectId;
use std::io::{Seek, Write};

/// A trait for document renderers, abstracting the PDF-writing primitives.
pub trait DocumentRenderer<W: Write + Seek + Send> {
    fn begin_document(&mut self, writer: W, info: &DocumentInfo) -> Result<(), RenderError>;

    fn render_page_content(
        &mut self,
        elements: &[PositionedElement],
        page_size: Size,
    ) -> Result<ObjectId, RenderError>;

    fn write_page_object(
        &mut self,
        content_stream_ids: Vec<ObjectId>,
        page_size: Size,
    ) -> Result<ObjectId, RenderError>;

    fn finish(self: Box<Self>, page_ids: Vec<ObjectId>) -> Result<W, RenderError>;

    /// Writes every page in order and returns their object ids.
    fn render_pages(&mut self, pages: &[Page], page_size: Size) -> Result<Vec<ObjectId>, RenderError> {
        let mut page_ids = Vec::with_capacity(pages.len());
        for page in pages {
            let content_id = self.render_page_content(&page.elements, page_size)?;
            page_ids.push(self.write_page_object(vec![content_id], page_size)?);
        }
        Ok(page_ids)
    }
}
