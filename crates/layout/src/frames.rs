//! Column/frame geometry for a page.
//!
//! Frames are placed with a top-left origin. In the default mode a page holds
//! one row of `columns` full-height frames. With `fill_top_half` it holds two
//! stacked rows separated by the page margin; the top row comes first in flow
//! order, each row left to right.

use crate::LayoutError;
use crate::constants::LayoutConstants;
use hotsheet_types::{LayoutConfig, Padding, Rect, Size};

/// A rectangular region content flows into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub rect: Rect,
    pub padding: Padding,
    pub row: usize,
    pub column: usize,
}

impl Frame {
    /// The area inside the frame padding.
    pub fn interior(&self) -> Rect {
        self.rect.inset(self.padding)
    }

    pub fn interior_height(&self) -> f32 {
        self.rect.height - self.padding.vertical()
    }
}

/// The frames of one page, in flow order, plus the derived dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct FramePlan {
    pub page_size: Size,
    /// Page size minus the margin on every side.
    pub usable: Size,
    pub column_width: f32,
    pub frame_height: f32,
    pub rows: usize,
    pub frames: Vec<Frame>,
}

impl FramePlan {
    pub fn frames_per_page(&self) -> usize {
        self.frames.len()
    }

    /// Vertical padding shared by every frame.
    pub fn vertical_padding(&self) -> f32 {
        self.frames
            .first()
            .map(|frame| frame.padding.vertical())
            .unwrap_or_default()
    }

    /// Content height every frame offers when empty.
    pub fn interior_height(&self) -> f32 {
        self.frame_height - self.vertical_padding()
    }
}

pub fn plan_frames(
    config: &LayoutConfig,
    constants: &LayoutConstants,
) -> Result<FramePlan, LayoutError> {
    config.validate()?;

    let page_size = config.page_size();
    let margin = config.margin;
    let usable = Size::new(page_size.width - 2.0 * margin, page_size.height - 2.0 * margin);
    let columns = config.columns as usize;

    let total_column_spacing = (columns - 1) as f32 * constants.column_spacing;
    let column_width = (usable.width - total_column_spacing) / columns as f32;

    let (rows, frame_height) = if config.fill_top_half {
        (2, (usable.height - margin) / 2.0)
    } else {
        (1, usable.height)
    };

    let padding = constants.frame_padding;
    if column_width <= padding.horizontal() {
        return Err(LayoutError::GeometryOverflow(format!(
            "column width {column_width:.2} leaves no room inside {:.2} of horizontal padding \
             ({columns} columns on a {:.2}pt wide page)",
            padding.horizontal(),
            page_size.width
        )));
    }
    if frame_height <= padding.vertical() {
        return Err(LayoutError::GeometryOverflow(format!(
            "frame height {frame_height:.2} leaves no room inside {:.2} of vertical padding",
            padding.vertical()
        )));
    }

    let mut frames = Vec::with_capacity(rows * columns);
    for row in 0..rows {
        let y = margin + row as f32 * (frame_height + margin);
        for column in 0..columns {
            let x = margin + column as f32 * (column_width + constants.column_spacing);
            frames.push(Frame {
                rect: Rect::new(x, y, column_width, frame_height),
                padding,
                row,
                column,
            });
        }
    }

    log::debug!(
        "Planned {} frame(s) per page: {} row(s) x {} column(s), {:.2}x{:.2}pt each",
        frames.len(),
        rows,
        columns,
        column_width,
        frame_height
    );

    Ok(FramePlan {
        page_size,
        usable,
        column_width,
        frame_height,
        rows,
        frames,
    })
}
