/// Whether content of `height` overflows the frame when placed at `cursor_y`.
///
/// * `cursor_y`: The current Y position relative to the top of the frame interior.
/// * `height`: The required height for the content.
/// * `interior_height`: The content height of the frame.
pub fn check_fit(cursor_y: f32, height: f32, interior_height: f32) -> bool {
    let available = (interior_height - cursor_y).max(0.0);
    // Use a small epsilon to handle floating point inaccuracies
    const EPSILON: f32 = 0.01;
    height > available + EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_fit_does_not_break() {
        assert!(!check_fit(30.0, 70.0, 100.0));
        assert!(!check_fit(30.0, 70.005, 100.0));
    }

    #[test]
    fn test_overflow_breaks() {
        assert!(check_fit(30.0, 70.5, 100.0));
        assert!(check_fit(120.0, 1.0, 100.0));
    }
}
