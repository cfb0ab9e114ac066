use std::io::Cursor;

use anyhow::Context;
use image::codecs::jpeg::JpegEncoder;

use crate::foundation::error::{RetouchError, RetouchResult};
use crate::render::surface::Surface;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Png,
    Jpeg,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ExportOptions {
    pub format: ExportFormat,
    /// JPEG quality in `[0, 1]`; ignored for PNG.
    pub quality: f32,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Png,
            quality: 0.92,
        }
    }
}

/// Encoded image plus the download name the editor suggests for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportedImage {
    pub bytes: Vec<u8>,
    pub file_name: String,
}

fn jpeg_quality(q: f32) -> u8 {
    let q = if q.is_finite() { q.clamp(0.0, 1.0) } else { 0.92 };
    ((q * 100.0).round() as u8).max(1)
}

pub fn encode_surface(surface: &Surface, opts: &ExportOptions) -> RetouchResult<ExportedImage> {
    if surface.is_empty() {
        return Err(RetouchError::validation("cannot export an empty surface"));
    }
    let img = surface.clone().into_image()?;
    let mut buf = Cursor::new(Vec::new());
    match opts.format {
        ExportFormat::Png => {
            image::DynamicImage::ImageRgba8(img)
                .write_to(&mut buf, image::ImageFormat::Png)
                .context("encode png")?;
        }
        ExportFormat::Jpeg => {
            let rgb = image::DynamicImage::ImageRgba8(img).to_rgb8();
            JpegEncoder::new_with_quality(&mut buf, jpeg_quality(opts.quality))
                .encode_image(&rgb)
                .context("encode jpeg")?;
        }
    }
    Ok(ExportedImage {
        bytes: buf.into_inner(),
        file_name: format!("edited-image.{}", opts.format.extension()),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/assets/export.rs"]
mod tests;
