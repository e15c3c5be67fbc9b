//! Metrics for the standard PDF Type1 fonts a cheat sheet is set in.
//!
//! The standard fonts need no embedding, so text measurement works from static
//! advance-width tables (Adobe AFM values, 1/1000 em) rather than shaped glyphs.
//! Tables cover printable ASCII 0x20..=0x7E; other characters fall back to an
//! average width.

/// Width array slot layout: `widths[i]` is the advance of ASCII `(i + 32)`.
type WidthTable = [u16; 95];

#[rustfmt::skip]
static HELVETICA: WidthTable = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    278, 278, 584, 584, 584, 556, 1015,
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    278, 278, 278, 469, 556, 333,
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    334, 260, 334, 584,
];

#[rustfmt::skip]
static HELVETICA_BOLD: WidthTable = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    333, 333, 584, 584, 584, 611, 975,
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    333, 278, 333, 584, 556, 333,
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    389, 280, 389, 584,
];

const COURIER_WIDTH: u16 = 600;
const FALLBACK_WIDTH: u16 = 556;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
    HelveticaBoldOblique,
    CourierBold,
}

impl StandardFont {
    pub const ALL: [StandardFont; 4] = [
        StandardFont::Helvetica,
        StandardFont::HelveticaBold,
        StandardFont::HelveticaBoldOblique,
        StandardFont::CourierBold,
    ];

    pub fn postscript_name(&self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
            StandardFont::HelveticaBoldOblique => "Helvetica-BoldOblique",
            StandardFont::CourierBold => "Courier-Bold",
        }
    }

    /// Advance width of one character at 1000 units per em.
    pub fn char_width(&self, c: char) -> u16 {
        let table = match self {
            StandardFont::Helvetica => &HELVETICA,
            StandardFont::HelveticaBold | StandardFont::HelveticaBoldOblique => &HELVETICA_BOLD,
            StandardFont::CourierBold => return COURIER_WIDTH,
        };
        let code = c as usize;
        if (32..=126).contains(&code) {
            table[code - 32]
        } else {
            FALLBACK_WIDTH
        }
    }

    /// Rendered width of `text` at `font_size`, in points.
    pub fn measure(&self, text: &str, font_size: f32) -> f32 {
        let units: u32 = text.chars().map(|c| self.char_width(c) as u32).sum();
        units as f32 * font_size / 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_courier_is_monospaced() {
        let font = StandardFont::CourierBold;
        assert_eq!(font.measure("iiii", 10.0), font.measure("WWWW", 10.0));
        assert_eq!(font.measure("ab", 10.0), 12.0);
    }

    #[test]
    fn test_helvetica_widths() {
        let font = StandardFont::Helvetica;
        assert_eq!(font.char_width(' '), 278);
        assert_eq!(font.char_width('W'), 944);
        assert_eq!(font.char_width('~'), 584);
        assert_eq!(font.char_width('é'), FALLBACK_WIDTH);
        assert!(font.measure("Save", 7.0) < StandardFont::HelveticaBold.measure("Save", 7.0));
    }

    #[test]
    fn test_oblique_shares_bold_metrics() {
        assert_eq!(
            StandardFont::HelveticaBoldOblique.measure("Motions", 8.0),
            StandardFont::HelveticaBold.measure("Motions", 8.0)
        );
    }
}
