//! Greedy line breaking on top of the standard font metrics.

use crate::fonts::StandardFont;

/// Breaks `text` into lines no wider than `max_width`.
///
/// Breaks happen at spaces; explicit newlines always break. A single word wider
/// than the line is split between characters. Empty input yields no lines.
pub fn wrap_text(text: &str, font: StandardFont, font_size: f32, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let space_width = font.measure(" ", font_size);

    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0.0;

        for word in paragraph.split_whitespace() {
            let word_width = font.measure(word, font_size);

            if current.is_empty() {
                if word_width <= max_width {
                    current.push_str(word);
                    current_width = word_width;
                } else {
                    let (mut pieces, rest, rest_width) = split_word(word, font, font_size, max_width);
                    lines.append(&mut pieces);
                    current = rest;
                    current_width = rest_width;
                }
                continue;
            }

            if current_width + space_width + word_width <= max_width {
                current.push(' ');
                current.push_str(word);
                current_width += space_width + word_width;
            } else {
                lines.push(std::mem::take(&mut current));
                if word_width <= max_width {
                    current.push_str(word);
                    current_width = word_width;
                } else {
                    let (mut pieces, rest, rest_width) = split_word(word, font, font_size, max_width);
                    lines.append(&mut pieces);
                    current = rest;
                    current_width = rest_width;
                }
            }
        }

        if !current.is_empty() {
            lines.push(current);
        }
    }

    lines
}

/// Splits an over-long word into full lines plus a trailing remainder.
fn split_word(
    word: &str,
    font: StandardFont,
    font_size: f32,
    max_width: f32,
) -> (Vec<String>, String, f32) {
    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut width = 0.0;

    for c in word.chars() {
        let char_width = font.char_width(c) as f32 * font_size / 1000.0;
        // Every line keeps at least one character, even in a degenerate column.
        if width + char_width > max_width && !current.is_empty() {
            pieces.push(std::mem::take(&mut current));
            width = 0.0;
        }
        current.push(c);
        width += char_width;
    }

    (pieces, current, width)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FONT: StandardFont = StandardFont::Helvetica;

    #[test]
    fn test_short_text_is_one_line() {
        assert_eq!(wrap_text("Save file", FONT, 7.0, 100.0), vec!["Save file"]);
    }

    #[test]
    fn test_wraps_at_spaces() {
        let text = "Move the cursor to the beginning of the next word";
        let lines = wrap_text(text, FONT, 7.0, 60.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(FONT.measure(line, 7.0) <= 60.0, "line too wide: {line}");
        }
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn test_long_word_is_split() {
        let lines = wrap_text("Ctrl+Shift+Alt+PageDown", StandardFont::CourierBold, 10.0, 30.0);
        // Courier at 10pt is 6pt per char: 5 chars per line
        assert_eq!(lines[0], "Ctrl+");
        assert_eq!(lines.concat(), "Ctrl+Shift+Alt+PageDown");
    }

    #[test]
    fn test_newlines_force_breaks() {
        assert_eq!(wrap_text("one\ntwo", FONT, 7.0, 500.0), vec!["one", "two"]);
    }

    #[test]
    fn test_empty_text_has_no_lines() {
        assert!(wrap_text("", FONT, 7.0, 100.0).is_empty());
        assert!(wrap_text("   ", FONT, 7.0, 100.0).is_empty());
    }
}
