use image::ImageFormat;
use image::imageops::{self, FilterType};

use crate::foundation::config::EditorConfig;
use crate::foundation::error::{IngestError, RetouchResult};
use crate::render::surface::Surface;

const ACCEPTED_MIME: [&str; 3] = ["image/jpeg", "image/png", "image/webp"];

/// Resolve the image format from a declared mime type, or sniff it from the magic bytes.
pub fn detect_format(bytes: &[u8], declared_mime: Option<&str>) -> Result<ImageFormat, IngestError> {
    let mime = match declared_mime {
        Some(m) => m.trim().to_ascii_lowercase(),
        None => image::guess_format(bytes)
            .map(|f| f.to_mime_type().to_string())
            .map_err(|_| IngestError::UnsupportedMime("unknown".to_string()))?,
    };
    if !ACCEPTED_MIME.contains(&mime.as_str()) {
        return Err(IngestError::UnsupportedMime(mime));
    }
    ImageFormat::from_mime_type(&mime).ok_or(IngestError::UnsupportedMime(mime))
}

/// Validate, decode, and size-cap an uploaded image.
///
/// Rejections happen before any decoding work: mime first, then byte size.
#[tracing::instrument(skip(bytes, config), fields(len = bytes.len()))]
pub fn ingest_image(
    bytes: &[u8],
    declared_mime: Option<&str>,
    config: &EditorConfig,
) -> RetouchResult<Surface> {
    let format = detect_format(bytes, declared_mime)?;
    if bytes.len() > config.max_upload_bytes {
        return Err(IngestError::TooLarge {
            size: bytes.len(),
            max: config.max_upload_bytes,
        }
        .into());
    }

    let decoded = image::load_from_memory_with_format(bytes, format)
        .map_err(|e| IngestError::Decode(e.to_string()))?;
    let rgba = decoded.to_rgba8();
    if rgba.width() == 0 || rgba.height() == 0 {
        return Err(IngestError::Decode("image has zero area".to_string()).into());
    }

    Ok(Surface::from_image(downsample_to_width(
        rgba,
        config.max_image_width,
    )))
}

/// Scale an image wider than `max_width` down to exactly `max_width`, keeping the aspect ratio.
pub fn downsample_to_width(img: image::RgbaImage, max_width: u32) -> image::RgbaImage {
    let (w, h) = img.dimensions();
    if w <= max_width {
        return img;
    }
    let ratio = f64::from(max_width) / f64::from(w);
    let new_h = ((f64::from(h) * ratio).round() as u32).max(1);
    tracing::debug!(from_w = w, from_h = h, to_w = max_width, to_h = new_h, "downsampling upload");
    imageops::resize(&img, max_width, new_h, FilterType::Triangle)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/ingest.rs"]
mod tests;
