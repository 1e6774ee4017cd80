use crate::foundation::error::{InkError, InkResult};

/// Display dimensions in physical pixels (unrotated buffer space).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels. Must be even: two pixels share one byte.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::PANEL_7IN3
    }
}

impl Canvas {
    /// The 7.3" seven-colour panel: 800×480.
    pub const PANEL_7IN3: Canvas = Canvas {
        width: 800,
        height: 480,
    };

    /// Build a validated canvas.
    pub fn new(width: u32, height: u32) -> InkResult<Self> {
        let canvas = Self { width, height };
        canvas.validate()?;
        Ok(canvas)
    }

    /// Reject geometry the packed format cannot represent.
    pub fn validate(self) -> InkResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(InkError::validation("canvas width/height must be > 0"));
        }
        if !self.width.is_multiple_of(2) {
            return Err(InkError::validation(
                "canvas width must be even (two pixels per byte)",
            ));
        }
        if i32::try_from(self.width).is_err() || i32::try_from(self.height).is_err() {
            return Err(InkError::validation("canvas dimensions exceed i32 range"));
        }
        Ok(())
    }

    /// Bytes per row of packed pixels.
    pub fn stride(self) -> usize {
        (self.width / 2) as usize
    }

    /// Total packed frame size: `width * height / 2`.
    pub fn packed_len(self) -> usize {
        self.stride() * self.height as usize
    }

    /// Whether `(x, y)` addresses a pixel on this canvas.
    pub fn contains(self, x: i32, y: i32) -> bool {
        x >= 0
            && y >= 0
            && i64::from(x) < i64::from(self.width)
            && i64::from(y) < i64::from(self.height)
    }

    /// The whole canvas as a rectangle.
    pub fn bounds(self) -> Rect {
        Rect::new(0, 0, self.width as i32, self.height as i32)
    }
}

/// Axis-aligned integer rectangle; `x..x+width` by `y..y+height`, end-exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width in pixels (may be zero).
    pub width: i32,
    /// Height in pixels (may be zero).
    pub height: i32,
}

impl Rect {
    /// Build a rectangle; negative sizes collapse to zero.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width: width.max(0),
            height: height.max(0),
        }
    }

    /// Exclusive right edge.
    pub fn right(self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// Exclusive bottom edge.
    pub fn bottom(self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Whether the rectangle covers no pixels.
    pub fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Whether `(x, y)` lies inside.
    pub fn contains(self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Overlap of two rectangles, if any.
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = self.right().min(other.right());
        let y1 = self.bottom().min(other.bottom());
        if x1 <= x0 || y1 <= y0 {
            return None;
        }
        Some(Rect::new(x0, y0, x1 - x0, y1 - y0))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
