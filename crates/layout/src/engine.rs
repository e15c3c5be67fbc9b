//! Pagination: places packed blocks into frames, page after page.

use crate::LayoutError;
use crate::algorithms::pagination::check_fit;
use crate::constants::LayoutConstants;
use crate::elements::{LayoutElement, Page, PositionedElement, TextElement};
use crate::flow::{Block, FlowPacker, Flowable, HotkeyTable, Spacer};
use crate::frames::{Frame, FramePlan, plan_frames};
use crate::pages::estimate_pages;
use crate::style::{SheetStyles, TextStyle};
use crate::text::wrap_text;
use hotsheet_types::{CheatSheet, LayoutConfig, SectionIndex};
use itertools::{Itertools, Position};

/// Everything produced by laying out one sheet.
#[derive(Debug, Clone)]
pub struct SheetLayout {
    pub blocks: Vec<Block>,
    pub pages: Vec<Page>,
    pub estimated_pages: usize,
}

/// Owns the frame plan and styles derived from one configuration.
#[derive(Debug, Clone)]
pub struct LayoutEngine {
    config: LayoutConfig,
    constants: LayoutConstants,
    plan: FramePlan,
    styles: SheetStyles,
}

impl LayoutEngine {
    pub fn new(config: &LayoutConfig) -> Result<Self, LayoutError> {
        Self::with_constants(config, LayoutConstants::default())
    }

    pub fn with_constants(
        config: &LayoutConfig,
        constants: LayoutConstants,
    ) -> Result<Self, LayoutError> {
        let plan = plan_frames(config, &constants)?;
        Ok(Self {
            config: config.clone(),
            styles: SheetStyles::from_config(config, &constants),
            constants,
            plan,
        })
    }

    pub fn plan(&self) -> &FramePlan {
        &self.plan
    }

    pub fn styles(&self) -> &SheetStyles {
        &self.styles
    }

    pub fn constants(&self) -> &LayoutConstants {
        &self.constants
    }

    pub fn estimate_pages(&self, index: &SectionIndex) -> usize {
        estimate_pages(index, &self.config, &self.plan, &self.constants)
    }

    pub fn pack(&self, title: &str, index: &SectionIndex) -> Vec<Block> {
        FlowPacker::new(&self.config, &self.constants, &self.plan).pack(title, index)
    }

    /// Packs and paginates a whole sheet.
    pub fn layout(&self, sheet: &CheatSheet) -> Result<SheetLayout, LayoutError> {
        let index = sheet.sections();
        let estimated_pages = self.estimate_pages(&index);
        let blocks = self.pack(&sheet.title, &index);
        let pages = self.paginate(&blocks)?;
        if pages.len() > estimated_pages {
            log::warn!(
                "Laid out {} page(s), more than the estimated {}",
                pages.len(),
                estimated_pages
            );
        } else {
            log::debug!(
                "Laid out {} page(s), estimated {}",
                pages.len(),
                estimated_pages
            );
        }
        Ok(SheetLayout {
            blocks,
            pages,
            estimated_pages,
        })
    }

    /// Places `blocks` in order into the frame sequence.
    ///
    /// A keep-together block that does not fit in the remaining height of a
    /// non-empty frame moves to the next frame. A block taller than an empty
    /// frame is flowed piece by piece instead. A single piece taller than an
    /// empty frame is an error.
    pub fn paginate(&self, blocks: &[Block]) -> Result<Vec<Page>, LayoutError> {
        let mut cursor = FlowCursor::new(&self.plan);

        for block in blocks {
            let pieces = self.measure_block(block);

            if block.keep_together {
                let height = stacked_height(&pieces, cursor.available_height());
                if !cursor.is_frame_empty()
                    && check_fit(cursor.cursor_y, height, cursor.interior_height())
                {
                    cursor.next_frame();
                }
                let height = stacked_height(&pieces, cursor.available_height());
                if height > cursor.interior_height() {
                    log::warn!(
                        "{:?} block of {:.2}pt exceeds the frame content height of {:.2}pt; splitting it",
                        block.kind,
                        height,
                        cursor.interior_height()
                    );
                }
            }

            for piece in pieces {
                match piece {
                    Piece::Spacer(spacer) => cursor.place_spacer(&spacer),
                    Piece::Content(content) => cursor.place(content)?,
                }
            }
        }

        let pages = cursor.finish();
        log::debug!("Laid out {} block(s) on {} page(s)", blocks.len(), pages.len());
        Ok(pages)
    }

    fn measure_block(&self, block: &Block) -> Vec<Piece> {
        let width = self.plan.column_width - self.constants.frame_padding.horizontal();
        let mut pieces = Vec::with_capacity(block.items.len());

        for item in &block.items {
            match item {
                Flowable::Spacer(spacer) => pieces.push(Piece::Spacer(*spacer)),
                Flowable::Title(text) => {
                    pieces.push(Piece::Content(self.paragraph(&self.styles.title, text, width)))
                }
                Flowable::SubsectionHeader(text) => pieces.push(Piece::Content(
                    self.paragraph(&self.styles.subsection_header, text, width),
                )),
                Flowable::SectionHeader(text) => {
                    pieces.push(Piece::Content(self.section_header(text, width)))
                }
                Flowable::Table(table) => pieces.extend(self.table_rows(table).map(Piece::Content)),
            }
        }
        pieces
    }

    fn paragraph(&self, style: &TextStyle, text: &str, width: f32) -> Content {
        let mut elements = Vec::new();
        let available = (width - style.indent).max(0.0);
        let lines = push_lines(
            &mut elements,
            style,
            text,
            style.indent,
            style.space_before,
            available,
        );
        Content {
            height: style.space_before + lines as f32 * style.leading + style.space_after,
            elements,
        }
    }

    /// A filled band with the header text centered inside its padding.
    fn section_header(&self, text: &str, width: f32) -> Content {
        let style = &self.styles.section_header;
        let padding = self.styles.section_header_padding;

        let mut text_elements = Vec::new();
        let lines = push_lines(
            &mut text_elements,
            style,
            text,
            padding.left,
            padding.top,
            (width - padding.horizontal()).max(0.0),
        );
        let height = lines.max(1) as f32 * style.leading + padding.vertical();

        let mut elements = vec![PositionedElement {
            x: 0.0,
            y: 0.0,
            width,
            height,
            element: LayoutElement::Fill(self.styles.section_header_fill),
        }];
        elements.append(&mut text_elements);
        Content { height, elements }
    }

    /// One piece per row; every row but the last carries a rule along its bottom edge.
    fn table_rows<'t>(&'t self, table: &'t HotkeyTable) -> impl Iterator<Item = Content> + 't {
        let key_style = &self.styles.key;
        let description_style = &self.styles.description;
        let padding = self.constants.cell_padding;

        table.rows.iter().with_position().map(move |(position, row)| {
            let mut elements = Vec::new();
            let key_lines = push_lines(
                &mut elements,
                key_style,
                &row.key,
                padding.left,
                padding.top,
                (table.key_width - padding.horizontal()).max(0.0),
            );
            let description_lines = push_lines(
                &mut elements,
                description_style,
                &row.description,
                table.key_width + padding.left,
                padding.top,
                (table.description_width - padding.horizontal()).max(0.0),
            );

            let key_height = key_lines as f32 * key_style.leading + key_style.space_after;
            let description_height =
                description_lines as f32 * description_style.leading + description_style.space_after;
            let height = key_height.max(description_height).max(key_style.leading)
                + padding.vertical();

            if !matches!(position, Position::Last | Position::Only) {
                elements.push(PositionedElement {
                    x: 0.0,
                    y: 0.0,
                    width: table.width(),
                    height,
                    element: LayoutElement::Rule {
                        color: self.styles.rule_color,
                        thickness: self.constants.row_rule_width,
                    },
                });
            }
            Content { height, elements }
        })
    }
}

/// Wraps `text` and pushes one text element per line, starting at `(x, y)`.
/// Returns the number of lines.
fn push_lines(
    elements: &mut Vec<PositionedElement>,
    style: &TextStyle,
    text: &str,
    x: f32,
    y: f32,
    max_width: f32,
) -> usize {
    let lines = wrap_text(text, style.font, style.font_size, max_width);
    for (i, line) in lines.iter().enumerate() {
        let line_width = style.font.measure(line, style.font_size);
        let offset = if style.centered {
            ((max_width - line_width) / 2.0).max(0.0)
        } else {
            0.0
        };
        elements.push(PositionedElement {
            x: x + offset,
            y: y + i as f32 * style.leading,
            width: line_width,
            height: style.leading,
            element: LayoutElement::Text(TextElement {
                content: line.clone(),
                font: style.font,
                font_size: style.font_size,
                color: style.color,
            }),
        });
    }
    lines.len()
}

/// An indivisible, measured piece of a block.
#[derive(Debug)]
enum Piece {
    Spacer(Spacer),
    Content(Content),
}

/// Elements positioned relative to the piece's top-left corner.
#[derive(Debug)]
struct Content {
    height: f32,
    elements: Vec<PositionedElement>,
}

/// Height of `pieces` stacked from a point with `available` height left.
fn stacked_height(pieces: &[Piece], available: f32) -> f32 {
    pieces.iter().fold(0.0, |used, piece| match piece {
        Piece::Spacer(spacer) => used + spacer.resolve(available - used),
        Piece::Content(content) => used + content.height,
    })
}

/// Tracks the current frame and the vertical position inside its interior.
struct FlowCursor<'a> {
    plan: &'a FramePlan,
    pages: Vec<Page>,
    frame_index: usize,
    cursor_y: f32,
}

impl<'a> FlowCursor<'a> {
    fn new(plan: &'a FramePlan) -> Self {
        Self {
            plan,
            pages: vec![Page::default()],
            frame_index: 0,
            cursor_y: 0.0,
        }
    }

    fn frame(&self) -> &Frame {
        &self.plan.frames[self.frame_index % self.plan.frames_per_page()]
    }

    fn page_index(&self) -> usize {
        self.frame_index / self.plan.frames_per_page()
    }

    fn interior_height(&self) -> f32 {
        self.frame().interior_height()
    }

    fn available_height(&self) -> f32 {
        (self.interior_height() - self.cursor_y).max(0.0)
    }

    fn is_frame_empty(&self) -> bool {
        self.cursor_y < 0.001
    }

    fn next_frame(&mut self) {
        self.frame_index += 1;
        self.cursor_y = 0.0;
    }

    /// A spacer that does not fit is consumed by the frame break.
    fn place_spacer(&mut self, spacer: &Spacer) {
        let height = spacer.resolve(self.available_height());
        if check_fit(self.cursor_y, height, self.interior_height()) {
            self.next_frame();
        } else {
            self.cursor_y += height;
        }
    }

    fn place(&mut self, content: Content) -> Result<(), LayoutError> {
        if check_fit(self.cursor_y, content.height, self.interior_height()) {
            if self.is_frame_empty() {
                return Err(LayoutError::ElementTooLarge(
                    content.height,
                    self.interior_height(),
                ));
            }
            self.next_frame();
            if content.height > self.interior_height() {
                return Err(LayoutError::ElementTooLarge(
                    content.height,
                    self.interior_height(),
                ));
            }
        }

        let interior = self.frame().interior();
        let (origin_x, origin_y) = (interior.x, interior.y + self.cursor_y);
        let page_index = self.page_index();
        if self.pages.len() <= page_index {
            self.pages.resize_with(page_index + 1, Page::default);
        }

        let page = &mut self.pages[page_index];
        page.elements.extend(content.elements.into_iter().map(|mut el| {
            el.x += origin_x;
            el.y += origin_y;
            el
        }));
        self.cursor_y += content.height;
        Ok(())
    }

    fn finish(self) -> Vec<Page> {
        self.pages
    }
}
