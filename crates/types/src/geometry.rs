//! Geometry primitives in PDF points.
//!
//! Rectangles use a top-left origin with `y` growing downwards, the same convention
//! the layout engine positions elements in. Renderers flip to PDF space.

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Shrinks the rectangle by the given padding on each side.
    pub fn inset(&self, padding: Padding) -> Rect {
        Rect {
            x: self.x + padding.left,
            y: self.y + padding.top,
            width: self.width - padding.horizontal(),
            height: self.height - padding.vertical(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }

    /// Returns the same size with width and height swapped.
    pub fn transposed(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Padding {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Padding {
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Vertical padding first, horizontal second.
    pub fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inset_shrinks_every_side() {
        let rect = Rect::new(10.0, 20.0, 100.0, 200.0);
        let inner = rect.inset(Padding::symmetric(6.0, 3.0));
        assert_eq!(inner, Rect::new(13.0, 26.0, 94.0, 188.0));
        assert_eq!(inner.right(), 107.0);
        assert_eq!(inner.bottom(), 214.0);
    }

    #[test]
    fn test_transposed_swaps_dimensions() {
        assert_eq!(Size::new(612.0, 792.0).transposed(), Size::new(792.0, 612.0));
    }
}
