use crate::fonts::StandardFont;
use hotsheet_types::Color;

/// A drawable element placed on a page. Coordinates use a top-left origin.
#[derive(Clone, Debug, PartialEq)]
pub struct PositionedElement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub element: LayoutElement,
}

#[derive(Clone, Debug, PartialEq)]
pub enum LayoutElement {
    /// One line of text; `y` is the top of the line box.
    Text(TextElement),
    /// A filled rectangle covering the element box.
    Fill(Color),
    /// A horizontal rule along the bottom edge of the element box.
    Rule { color: Color, thickness: f32 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextElement {
    pub content: String,
    pub font: StandardFont,
    pub font_size: f32,
    pub color: Color,
}

/// The positioned elements of one page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Page {
    pub elements: Vec<PositionedElement>,
}

impl Page {
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.elements.iter().filter_map(|el| match &el.element {
            LayoutElement::Text(text) => Some(text.content.as_str()),
            _ => None,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
