use crate::foundation::error::{RetouchError, RetouchResult};

pub use kurbo::{Affine, Point, Rect, Vec2};

/// Pixel dimensions of an image or drawing surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Byte length of a tightly packed RGBA8 buffer of this size.
    pub fn rgba_len(self) -> RetouchResult<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)
            .and_then(|v| v.checked_mul(4))
            .ok_or_else(|| RetouchError::validation("rgba buffer size overflow"))
    }

    pub fn swapped(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }
}

/// Crop rectangle in original-image pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CropRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl CropRect {
    pub fn full(canvas: Canvas) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: f64::from(canvas.width),
            height: f64::from(canvas.height),
        }
    }

    pub fn to_rect(self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }

    /// Integer pixel size of the rectangle; fractional sizes truncate.
    pub fn pixel_size(self) -> Canvas {
        fn dim(v: f64) -> u32 {
            if !v.is_finite() || v <= 0.0 {
                0
            } else {
                v.trunc().min(f64::from(u32::MAX)) as u32
            }
        }
        Canvas::new(dim(self.width), dim(self.height))
    }
}
