#![allow(dead_code)]

pub mod fixtures;
pub mod pdf_assertions;

use hotsheet::{CheatSheet, CheatSheetGenerator, GenerationReport, PipelineError};
use lopdf::Document as LopdfDocument;
use std::io::Cursor;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
    pub report: GenerationReport,
}

impl GeneratedPdf {
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Text of a single page (1-based)
    pub fn page_text(&self, page: u32) -> String {
        self.doc.extract_text(&[page]).unwrap_or_default()
    }

    /// Save PDF to a file for manual debugging
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

/// Render a sheet in memory and load the result back
pub fn generate_pdf(sheet: &CheatSheet) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let (cursor, report) = render(sheet)?;
    let bytes = cursor.into_inner();
    let doc = LopdfDocument::load_mem(&bytes)?;
    Ok(GeneratedPdf { bytes, doc, report })
}

fn render(sheet: &CheatSheet) -> Result<(Cursor<Vec<u8>>, GenerationReport), PipelineError> {
    CheatSheetGenerator::new(sheet)?.generate_to_writer(Cursor::new(Vec::new()))
}
