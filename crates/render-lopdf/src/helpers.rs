//! Turns positioned layout elements into a page content stream.

use hotsheet_layout::{LayoutElement, PositionedElement, TextElement};
use hotsheet_render_core::RenderError;
use hotsheet_render_core::utils::{baseline_y, flip_y, to_win_ansi};
use hotsheet_types::Color;
use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};
use once_cell::sync::Lazy;
use std::collections::HashMap;

static DEFAULT_LOPDF_FONT_NAME: Lazy<String> = Lazy::new(|| "F1".to_string());

/// Draws `elements` in order; later elements paint over earlier ones.
///
/// `font_map` maps PostScript font names to resource names (`F1`, ...).
pub fn render_elements_to_content(
    elements: &[PositionedElement],
    font_map: &HashMap<String, String>,
    page_height: f32,
) -> Result<Content, RenderError> {
    let mut page_ctx = PageContext::new(page_height, font_map);
    for el in elements {
        page_ctx.draw_element(el)?;
    }
    Ok(page_ctx.finish())
}

struct PageContext<'a> {
    page_height: f32,
    content: Content,
    state: LopdfPageRenderState,
    font_map: &'a HashMap<String, String>,
}

#[derive(Default, Clone, PartialEq)]
struct LopdfPageRenderState {
    font_name: String,
    font_size: f32,
    fill_color: Color,
    stroke_color: Color,
    line_width: Option<f32>,
}

impl<'a> PageContext<'a> {
    fn new(page_height: f32, font_map: &'a HashMap<String, String>) -> Self {
        Self {
            page_height,
            content: Content { operations: vec![] },
            state: Default::default(),
            font_map,
        }
    }

    fn finish(self) -> Content {
        self.content
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }

    fn draw_element(&mut self, el: &PositionedElement) -> Result<(), RenderError> {
        match &el.element {
            LayoutElement::Text(text) => self.draw_text(text, el),
            LayoutElement::Fill(color) => {
                self.draw_fill(*color, el);
                Ok(())
            }
            LayoutElement::Rule { color, thickness } => {
                self.draw_rule(*color, *thickness, el);
                Ok(())
            }
        }
    }

    fn draw_fill(&mut self, color: Color, el: &PositionedElement) {
        let y = flip_y(el.y + el.height, self.page_height);
        self.set_fill_color(color);
        self.push("re", vec![el.x.into(), y.into(), el.width.into(), el.height.into()]);
        self.push("f", vec![]);
    }

    /// A horizontal line along the bottom edge of the element box.
    fn draw_rule(&mut self, color: Color, thickness: f32, el: &PositionedElement) {
        if self.state.line_width != Some(thickness) {
            self.push("w", vec![thickness.into()]);
            self.state.line_width = Some(thickness);
        }
        if self.state.stroke_color != color {
            let [r, g, b] = color.to_unit_rgb();
            self.push("RG", vec![r.into(), g.into(), b.into()]);
            self.state.stroke_color = color;
        }
        let line_y = flip_y(el.y + el.height, self.page_height);
        self.push("m", vec![el.x.into(), line_y.into()]);
        self.push("l", vec![(el.x + el.width).into(), line_y.into()]);
        self.push("S", vec![]);
    }

    fn set_font(&mut self, text: &TextElement) {
        let internal_font_name = self
            .font_map
            .get(text.font.postscript_name())
            .unwrap_or(&DEFAULT_LOPDF_FONT_NAME);

        if self.state.font_name != *internal_font_name || self.state.font_size != text.font_size {
            self.content.operations.push(Operation::new(
                "Tf",
                vec![
                    Object::Name(internal_font_name.as_bytes().to_vec()),
                    text.font_size.into(),
                ],
            ));
            self.state.font_name = internal_font_name.to_string();
            self.state.font_size = text.font_size;
        }
    }

    fn set_fill_color(&mut self, color: Color) {
        if self.state.fill_color != color {
            let [r, g, b] = color.to_unit_rgb();
            self.push("rg", vec![r.into(), g.into(), b.into()]);
            self.state.fill_color = color;
        }
    }

    fn draw_text(&mut self, text: &TextElement, el: &PositionedElement) -> Result<(), RenderError> {
        if text.content.trim().is_empty() {
            return Ok(());
        }
        self.push("BT", vec![]);
        self.set_font(text);
        self.set_fill_color(text.color);
        let pdf_y = flip_y(baseline_y(el.y, el.height, text.font_size), self.page_height);
        self.push("Td", vec![el.x.into(), pdf_y.into()]);
        self.push(
            "Tj",
            vec![Object::String(to_win_ansi(&text.content), StringFormat::Literal)],
        );
        self.push("ET", vec![]);
        Ok(())
    }
}
