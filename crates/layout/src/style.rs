//! Typography derived from the layout configuration.

use crate::constants::LayoutConstants;
use crate::fonts::StandardFont;
use hotsheet_types::{Color, LayoutConfig, Padding};

#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub font: StandardFont,
    pub font_size: f32,
    pub leading: f32,
    pub color: Color,
    pub space_before: f32,
    pub space_after: f32,
    pub indent: f32,
    pub centered: bool,
}

impl TextStyle {
    fn new(font: StandardFont, font_size: f32, leading_factor: f32) -> Self {
        Self {
            font,
            font_size,
            leading: font_size * leading_factor,
            color: Color::BLACK,
            space_before: 0.0,
            space_after: 0.0,
            indent: 0.0,
            centered: false,
        }
    }
}

/// The styles of every kind of text on a sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetStyles {
    pub title: TextStyle,
    pub section_header: TextStyle,
    /// Band drawn behind section headers.
    pub section_header_fill: Color,
    pub section_header_padding: Padding,
    pub subsection_header: TextStyle,
    pub key: TextStyle,
    pub description: TextStyle,
    pub rule_color: Color,
}

impl SheetStyles {
    pub fn from_config(config: &LayoutConfig, constants: &LayoutConstants) -> Self {
        let title = TextStyle {
            space_after: constants.title_space_after,
            centered: true,
            ..TextStyle::new(StandardFont::HelveticaBold, config.header_font_size + 3.0, 1.25)
        };

        let section_header = TextStyle {
            color: Color::WHITE,
            centered: true,
            ..TextStyle::new(StandardFont::HelveticaBold, config.header_font_size + 1.0, 1.0)
        };

        let subsection_header = TextStyle {
            space_before: constants.subsection_header_space_before,
            space_after: constants.subsection_header_space_after,
            indent: constants.subsection_header_indent,
            ..TextStyle::new(StandardFont::HelveticaBoldOblique, config.font_size + 1.0, 1.2)
        };

        Self {
            title,
            section_header,
            section_header_fill: Color::BLACK,
            section_header_padding: constants.section_header_padding,
            subsection_header,
            key: TextStyle {
                space_after: constants.row_text_space_after,
                ..TextStyle::new(StandardFont::CourierBold, config.font_size, 1.2)
            },
            description: TextStyle {
                space_after: constants.row_text_space_after,
                ..TextStyle::new(StandardFont::Helvetica, config.font_size, 1.2)
            },
            rule_color: Color::LIGHT_GREY,
        }
    }
}
