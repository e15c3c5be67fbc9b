/// Convert layout Y coordinate to PDF Y coordinate (flip origin)
pub fn flip_y(y: f32, page_height: f32) -> f32 {
    page_height - y
}

/// Baseline of a text line whose box starts at `top` and is `line_height` tall.
pub fn baseline_y(top: f32, line_height: f32, font_size: f32) -> f32 {
    top + (line_height - font_size) / 2.0 + font_size * 0.8
}

/// Encodes text for the standard fonts; characters outside Latin-1 become `?`.
pub fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| if c as u32 <= 255 { c as u8 } else { b'?' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flip_y() {
        assert_eq!(flip_y(25.0, 792.0), 767.0);
    }

    #[test]
    fn test_baseline_sits_inside_line_box() {
        let baseline = baseline_y(100.0, 8.4, 7.0);
        assert!(baseline > 100.0 && baseline < 108.4);
    }

    #[test]
    fn test_to_win_ansi() {
        assert_eq!(to_win_ansi("Ctrl+é"), b"Ctrl+\xe9".to_vec());
        assert_eq!(to_win_ansi("⌘K"), b"?K".to_vec());
    }
}
