use crate::foundation::core::Canvas;
use crate::foundation::error::{RetouchError, RetouchResult};

/// Owned straight-alpha RGBA8 pixel buffer, tightly packed and row-major.
///
/// Used for base images, rendered output, and snapshots handed to the histogram sampler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Surface {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// `width * height * 4` bytes.
    pub data: Vec<u8>,
}

impl Surface {
    /// Fully transparent surface.
    pub fn new(size: Canvas) -> RetouchResult<Self> {
        Ok(Self {
            width: size.width,
            height: size.height,
            data: vec![0; size.rgba_len()?],
        })
    }

    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> RetouchResult<Self> {
        let expected = Canvas::new(width, height).rgba_len()?;
        if data.len() != expected {
            return Err(RetouchError::validation(format!(
                "surface data length {} does not match {width}x{height} rgba ({expected})",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn from_image(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            data: img.into_raw(),
        }
    }

    pub fn into_image(self) -> RetouchResult<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.data)
            .ok_or_else(|| RetouchError::render("surface buffer too small for its dimensions"))
    }

    pub fn size(&self) -> Canvas {
        Canvas::new(self.width, self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.size().is_empty()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Zero the color of every fully transparent pixel, as a premultiplied store would.
    pub fn clear_transparent(&mut self) {
        for px in self.data.chunks_exact_mut(4).filter(|px| px[3] == 0) {
            px[..3].fill(0);
        }
    }

    /// Resize to `size`, clearing to transparent.
    pub fn reset(&mut self, size: Canvas) -> RetouchResult<()> {
        let len = size.rgba_len()?;
        self.width = size.width;
        self.height = size.height;
        self.data.clear();
        self.data.resize(len, 0);
        Ok(())
    }
}
