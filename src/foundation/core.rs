use crate::foundation::error::{FramecastError, FramecastResult};
use crate::foundation::math::{mul_div255_u8, unmul_div_u8};

pub use kurbo::Point;

/// Build a [`Point`] from integer pixel coordinates.
pub fn pt(x: i32, y: i32) -> Point {
    Point::new(f64::from(x), f64::from(y))
}

/// Canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Landscape 1920x1080 used by the slide deck.
    pub const LANDSCAPE_HD: Self = Self {
        width: 1920,
        height: 1080,
    };

    /// Portrait 1080x1920 used by vertical shorts.
    pub const PORTRAIT_HD: Self = Self {
        width: 1080,
        height: 1920,
    };

    /// Create a size value. Zero dimensions are rejected when a canvas is allocated.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Number of pixels covered by this size.
    pub fn pixel_count(self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Width and height as `u16`, the largest surface `vello_cpu` can rasterize.
    pub(crate) fn as_u16(self) -> FramecastResult<(u16, u16)> {
        let w: u16 = self
            .width
            .try_into()
            .map_err(|_| FramecastError::validation("canvas width exceeds u16"))?;
        let h: u16 = self
            .height
            .try_into()
            .map_err(|_| FramecastError::validation("canvas height exceeds u16"))?;
        if w == 0 || h == 0 {
            return Err(FramecastError::validation("canvas width/height must be > 0"));
        }
        Ok((w, h))
    }
}

/// Pixel layout a canvas is persisted with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Opaque RGB output.
    #[default]
    Rgb,
    /// RGB plus alpha channel.
    Rgba,
}

/// Straight-alpha RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color with explicit straight alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with a different alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Premultiplied `[r, g, b, a]` bytes.
    pub fn to_premul(self) -> [u8; 4] {
        let a = u16::from(self.a);
        [
            mul_div255_u8(u16::from(self.r), a),
            mul_div255_u8(u16::from(self.g), a),
            mul_div255_u8(u16::from(self.b), a),
            self.a,
        ]
    }

    /// Convert premultiplied bytes back to straight alpha.
    pub fn from_premul(px: [u8; 4]) -> Self {
        let [r, g, b, a] = px;
        if a == 0 {
            return Self::rgba(0, 0, 0, 0);
        }
        if a == 255 {
            return Self::rgb(r, g, b);
        }
        Self::rgba(unmul_div_u8(r, a), unmul_div_u8(g, a), unmul_div_u8(b, a), a)
    }
}

/// Axis-aligned pixel rectangle with inclusive corners `[x0, y0, x1, y1]`.
///
/// `[0, 0, 9, 0]` covers ten pixels of the first row. Corners may lie outside the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelRect {
    /// Left column (inclusive).
    pub x0: i32,
    /// Top row (inclusive).
    pub y0: i32,
    /// Right column (inclusive).
    pub x1: i32,
    /// Bottom row (inclusive).
    pub y1: i32,
}

impl PixelRect {
    /// Rectangle from inclusive corners.
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Square of half-size `r` around `(cx, cy)`, the bounding box of a circle.
    pub const fn around(cx: i32, cy: i32, r: i32) -> Self {
        Self::new(cx - r, cy - r, cx + r, cy + r)
    }

    /// Shrink every edge by `d` pixels.
    pub const fn inset(self, d: i32) -> Self {
        Self::new(self.x0 + d, self.y0 + d, self.x1 - d, self.y1 - d)
    }

    /// Return `true` when the rectangle covers no pixel.
    pub const fn is_empty(self) -> bool {
        self.x1 < self.x0 || self.y1 < self.y0
    }

    /// Intersect with a canvas of `size`, returning half-open `(x_range, y_range)` indices.
    pub(crate) fn clip(
        self,
        size: Size,
    ) -> Option<(std::ops::Range<usize>, std::ops::Range<usize>)> {
        if self.is_empty() {
            return None;
        }
        let clamp = |v: i64, hi: u32| v.clamp(0, i64::from(hi)) as usize;
        let x0 = clamp(i64::from(self.x0), size.width);
        let x1 = clamp(i64::from(self.x1) + 1, size.width);
        let y0 = clamp(i64::from(self.y0), size.height);
        let y1 = clamp(i64::from(self.y1) + 1, size.height);
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some((x0..x1, y0..y1))
    }

    /// The rectangle as `kurbo` geometry covering the same pixel squares.
    pub(crate) fn to_kurbo(self) -> kurbo::Rect {
        kurbo::Rect::new(
            f64::from(self.x0),
            f64::from(self.y0),
            f64::from(self.x1) + 1.0,
            f64::from(self.y1) + 1.0,
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
