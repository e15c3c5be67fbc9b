//! Foundation types shared by every hotsheet crate.
//!
//! - [`Hotkey`], [`LayoutConfig`] and [`CheatSheet`] form the data model handed to
//!   the layout core by the parser.
//! - [`SectionIndex`] is the ordered section/subsection grouping derived from a sheet.
//! - [`geometry`] and [`color`] carry the primitive value types used by layout and rendering.

pub mod color;
pub mod config;
pub mod error;
pub mod geometry;
pub mod hotkey;
pub mod sheet;

pub use color::Color;
pub use config::{LayoutConfig, Orientation, PaperSize};
pub use error::ModelError;
pub use geometry::{Padding, Rect, Size};
pub use hotkey::{DEFAULT_SUBSECTION, Hotkey};
pub use sheet::{CheatSheet, DEFAULT_TITLE, Section, SectionIndex};
