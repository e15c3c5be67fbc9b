use hotsheet_types::ModelError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Element has a height of {0:.2} which exceeds the frame content height of {1:.2}.")]
    ElementTooLarge(f32, f32),
    #[error("Frame geometry leaves no room for content: {0}")]
    GeometryOverflow(String),
    #[error("Invalid configuration: {0}")]
    Config(#[from] ModelError),
}

pub mod algorithms;
pub mod constants;
pub mod elements;
pub mod engine;
pub mod estimate;
pub mod flow;
pub mod fonts;
pub mod frames;
pub mod pages;
pub mod style;
pub mod text;

pub use self::constants::LayoutConstants;
pub use self::elements::{LayoutElement, Page, PositionedElement, TextElement};
pub use self::engine::{LayoutEngine, SheetLayout};
pub use self::estimate::{estimate_document_height, estimate_section_height};
pub use self::flow::{Block, BlockKind, FlowPacker, Flowable, HotkeyRow, HotkeyTable, Spacer, SpacerPolicy};
pub use self::fonts::StandardFont;
pub use self::frames::{Frame, FramePlan, plan_frames};
pub use self::pages::estimate_pages;
pub use self::style::{SheetStyles, TextStyle};

pub use hotsheet_types::geometry::{Padding, Rect, Size};

#[cfg(test)]
mod test_utils;
