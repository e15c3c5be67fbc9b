//! The generation pipeline: plan frames, pack blocks, paginate, render, write.

use crate::error::PipelineError;
use hotsheet_layout::{Block, FramePlan, LayoutConstants, LayoutEngine};
use hotsheet_render_core::{DocumentInfo, DocumentRenderer};
use hotsheet_render_lopdf::LopdfRenderer;
use hotsheet_types::CheatSheet;
use std::io::{Seek, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Summary of one generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationReport {
    /// Pages actually written.
    pub pages: usize,
    /// The advisory estimate, computed before layout.
    pub estimated_pages: usize,
    /// Blocks produced by the flow packer, title included.
    pub blocks: usize,
}

/// Lays out and renders one cheat sheet.
///
/// The sheet is borrowed for the generator's lifetime, so its configuration
/// cannot change while a run is in progress.
pub struct CheatSheetGenerator<'a> {
    sheet: &'a CheatSheet,
    engine: LayoutEngine,
}

impl<'a> CheatSheetGenerator<'a> {
    /// Validates the sheet's configuration and plans its frames.
    pub fn new(sheet: &'a CheatSheet) -> Result<Self, PipelineError> {
        Self::with_constants(sheet, LayoutConstants::default())
    }

    pub fn with_constants(
        sheet: &'a CheatSheet,
        constants: LayoutConstants,
    ) -> Result<Self, PipelineError> {
        let engine = LayoutEngine::with_constants(&sheet.config, constants)?;
        Ok(Self { sheet, engine })
    }

    pub fn frame_plan(&self) -> &FramePlan {
        self.engine.plan()
    }

    /// Approximate page count; nothing is laid out.
    pub fn estimate_pages(&self) -> usize {
        self.engine.estimate_pages(&self.sheet.sections())
    }

    /// The keep-together blocks the sheet packs into.
    pub fn blocks(&self) -> Vec<Block> {
        self.engine.pack(&self.sheet.title, &self.sheet.sections())
    }

    /// Renders the sheet into `writer` and hands it back once the PDF is complete.
    pub fn generate_to_writer<W: Write + Seek + Send>(
        &self,
        writer: W,
    ) -> Result<(W, GenerationReport), PipelineError> {
        let layout = self.engine.layout(self.sheet)?;
        let page_size = self.engine.plan().page_size;

        let mut renderer: Box<LopdfRenderer<W>> = Box::new(LopdfRenderer::new());
        renderer.begin_document(writer, &DocumentInfo::new(&self.sheet.title))?;
        let page_ids = renderer.render_pages(&layout.pages, page_size)?;
        let writer = renderer.finish(page_ids)?;

        let report = GenerationReport {
            pages: layout.pages.len(),
            estimated_pages: layout.estimated_pages,
            blocks: layout.blocks.len(),
        };
        log::info!(
            "Rendered '{}': {} hotkey(s), {} block(s), {} page(s)",
            self.sheet.title,
            self.sheet.hotkeys.len(),
            report.blocks,
            report.pages
        );
        Ok((writer, report))
    }

    /// Writes the PDF to `path`.
    ///
    /// Output goes to a temporary file next to `path` that only replaces it once
    /// rendering succeeded; a failed run leaves no file behind.
    pub fn generate(&self, path: impl AsRef<Path>) -> Result<GenerationReport, PipelineError> {
        let path = path.as_ref();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let temp = NamedTempFile::new_in(dir)?;
        let (temp, report) = self.generate_to_writer(temp)?;
        temp.as_file().sync_all()?;
        temp.persist(path)?;

        log::info!("Wrote {}", path.display());
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotsheet_types::Hotkey;
    use std::io::Cursor;

    fn editing_sheet() -> CheatSheet {
        let hotkeys = vec![
            Hotkey::new("Ctrl+C", "Copy", "Editing", "").unwrap(),
            Hotkey::new("Ctrl+V", "Paste", "Editing", "").unwrap(),
        ];
        CheatSheet::new("Editor", hotkeys)
    }

    #[test]
    fn test_report_for_small_sheet() {
        let sheet = editing_sheet();
        let generator = CheatSheetGenerator::new(&sheet).unwrap();
        assert_eq!(generator.estimate_pages(), 1);
        assert_eq!(generator.blocks().len(), 2);

        let (cursor, report) = generator.generate_to_writer(Cursor::new(Vec::new())).unwrap();
        assert_eq!(
            report,
            GenerationReport {
                pages: 1,
                estimated_pages: 1,
                blocks: 2
            }
        );
        assert!(cursor.into_inner().starts_with(b"%PDF-"));
    }

    #[test]
    fn test_invalid_config_is_rejected_before_layout() {
        let mut sheet = editing_sheet();
        sheet.config.columns = 0;
        assert!(matches!(
            CheatSheetGenerator::new(&sheet),
            Err(PipelineError::Layout(_))
        ));
    }

    #[test]
    fn test_failed_run_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("huge.pdf");
        let hotkeys = vec![Hotkey::new("X", "word ".repeat(5000), "Editing", "").unwrap()];
        let sheet = CheatSheet::new("Huge", hotkeys);

        let result = CheatSheetGenerator::new(&sheet).unwrap().generate(&output);
        assert!(result.is_err());
        assert!(!output.exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
