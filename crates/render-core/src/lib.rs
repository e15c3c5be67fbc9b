//! Core rendering abstractions for cheat sheet PDFs.
//!
//! This crate provides the types shared by rendering backends:
//! - `DocumentRenderer` trait for abstracting PDF writing operations
//! - Error types for rendering operations
//! - Coordinate and text encoding helpers

mod error;
mod traits;
mod types;
pub mod utils;

pub use error::RenderError;
pub use traits::DocumentRenderer;
pub use types::DocumentInfo;
