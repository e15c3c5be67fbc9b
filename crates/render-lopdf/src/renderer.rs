use crate::helpers;
use crate::writer::StreamingPdfWriter;
use hotsheet_layout::{PositionedElement, Size, StandardFont};
use hotsheet_render_core::utils::to_win_ansi;
use hotsheet_render_core::{DocumentInfo, DocumentRenderer, RenderError};
use lopdf::{Dictionary, Object, ObjectId, StringFormat, dictionary};
use std::collections::HashMap;
use std::io::{Seek, Write};

/// A PDF renderer using the `lopdf` library that streams pages as they are rendered.
///
/// Text is set in the standard Type1 fonts, which every PDF reader provides,
/// so nothing is embedded.
pub struct LopdfRenderer<W: Write + Seek + Send> {
    pub(crate) writer: Option<StreamingPdfWriter<W>>,
    font_map: HashMap<String, String>,
}

impl<W: Write + Seek + Send> Default for LopdfRenderer<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write + Seek + Send> LopdfRenderer<W> {
    pub fn new() -> Self {
        let font_map = StandardFont::ALL
            .iter()
            .enumerate()
            .map(|(i, font)| (font.postscript_name().to_string(), format!("F{}", i + 1)))
            .collect();

        Self {
            writer: None,
            font_map,
        }
    }

    fn writer_mut(&mut self) -> Result<&mut StreamingPdfWriter<W>, RenderError> {
        self.writer
            .as_mut()
            .ok_or(RenderError::NotStarted)
    }

    fn info_dictionary(info: &DocumentInfo) -> Dictionary {
        let created = chrono::Local::now().format("D:%Y%m%d%H%M%S").to_string();
        dictionary! {
            "Title" => Object::String(to_win_ansi(&info.title), StringFormat::Literal),
            "Producer" => Object::String(to_win_ansi(&info.producer), StringFormat::Literal),
            "CreationDate" => Object::String(created.into_bytes(), StringFormat::Literal),
        }
    }
}

impl<W: Write + Seek + Send> DocumentRenderer<W> for LopdfRenderer<W> {
    fn begin_document(&mut self, writer: W, info: &DocumentInfo) -> Result<(), RenderError> {
        let mut font_dict = Dictionary::new();

        for font in StandardFont::ALL {
            if let Some(internal_name) = self.font_map.get(font.postscript_name()) {
                let single_font_dict = dictionary! {
                    "Type" => "Font",
                    "Subtype" => "Type1",
                    "BaseFont" => font.postscript_name(),
                    "Encoding" => "WinAnsiEncoding",
                };
                font_dict.set(
                    internal_name.as_bytes(),
                    Object::Dictionary(single_font_dict),
                );
            }
        }

        let mut writer = StreamingPdfWriter::new(writer, "1.7", font_dict)?;
        writer.set_info(Self::info_dictionary(info));
        self.writer = Some(writer);
        log::debug!("Started PDF document '{}'", info.title);
        Ok(())
    }

    fn render_page_content(
        &mut self,
        elements: &[PositionedElement],
        page_size: Size,
    ) -> Result<ObjectId, RenderError> {
        let content =
            helpers::render_elements_to_content(elements, &self.font_map, page_size.height)?;
        self.writer_mut()?.write_content_stream(content)
    }

    fn write_page_object(
        &mut self,
        content_stream_ids: Vec<ObjectId>,
        page_size: Size,
    ) -> Result<ObjectId, RenderError> {
        let writer = self.writer_mut()?;

        let page_dict = dictionary! {
            "Type" => "Page",
            "Parent" => writer.pages_id,
            "MediaBox" => vec![0.0.into(), 0.0.into(), page_size.width.into(), page_size.height.into()],
            "Contents" => Object::Array(content_stream_ids.into_iter().map(Object::Reference).collect()),
            "Resources" => writer.resources_id,
        };

        let page_id = writer.write_object(page_dict.into())?;
        Ok(page_id)
    }

    fn finish(self: Box<Self>, page_ids: Vec<ObjectId>) -> Result<W, RenderError> {
        let mut renderer = *self;
        if let Some(mut internal_writer) = renderer.writer.take() {
            log::debug!("Finishing PDF document with {} page(s)", page_ids.len());
            internal_writer.set_page_ids(page_ids);
            let writer = internal_writer.finish()?;
            Ok(writer)
        } else {
            Err(RenderError::NotStarted)
        }
    }
}
