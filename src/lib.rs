//! Hotkey cheat sheet generator.
//!
//! Reads a list of hotkeys grouped into sections and subsections and prints it
//! as a dense multi-column PDF. Sections are packed into keep-together blocks so
//! that no header is ever separated from its first rows, then flowed column by
//! column across as many pages as needed.
//!
//! ```no_run
//! use hotsheet::{CheatSheetGenerator, SheetParser};
//!
//! let sheet = SheetParser::parse_file("vim.yaml")?;
//! let report = CheatSheetGenerator::new(&sheet)?.generate("vim.pdf")?;
//! println!("{} page(s)", report.pages);
//! # Ok::<(), hotsheet::PipelineError>(())
//! ```

mod error;
pub mod generator;
pub mod parser;

pub use error::{ParseError, PipelineError};
pub use generator::{CheatSheetGenerator, GenerationReport};
pub use parser::{InputFormat, SheetParser};

pub use hotsheet_layout::{
    Block, BlockKind, FramePlan, LayoutConstants, LayoutEngine, LayoutError, Page,
};
pub use hotsheet_types::{
    CheatSheet, DEFAULT_SUBSECTION, DEFAULT_TITLE, Hotkey, LayoutConfig, ModelError, Orientation,
    PaperSize,
};
