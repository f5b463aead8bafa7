//! Image codec adapter backed by the `image` crate.

use std::io::Cursor;

use anyhow::{Context, Result};
use image::{DynamicImage, ImageFormat, RgbaImage};
use tracing::debug;

use ut_core::ports::ImageCodecPort;
use ut_core::transfer::{PixelLayout, RasterImage};

/// Maps encoded-format MIME types to the `image` crate's codecs and performs
/// the actual pixel ⇄ bytes conversion.
pub struct ImageCodec;

impl ImageCodec {
    pub fn new() -> Self {
        Self
    }

    fn format_for(mime: &str) -> Option<ImageFormat> {
        ImageFormat::from_mime_type(mime)
    }
}

impl Default for ImageCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageCodecPort for ImageCodec {
    fn has_decoder(&self, mime: &str) -> bool {
        Self::format_for(mime).is_some_and(|format| format.reading_enabled())
    }

    fn writer_mime_types(&self) -> Vec<String> {
        ImageFormat::all()
            .filter(ImageFormat::writing_enabled)
            .map(|format| format.to_mime_type().to_string())
            .collect()
    }

    fn can_encode(&self, mime: &str, _layout: &PixelLayout) -> bool {
        // Pixel data is converted to a color type the encoder accepts
        // before writing, so capability reduces to writer availability.
        Self::format_for(mime).is_some_and(|format| format.writing_enabled())
    }

    fn encode(&self, image: &RasterImage, mime: &str) -> Result<Vec<u8>> {
        let format =
            Self::format_for(mime).with_context(|| format!("no encoder registered for {mime}"))?;
        let rgba = RgbaImage::from_raw(image.width(), image.height(), image.rgba().to_vec())
            .context("raster buffer does not match its dimensions")?;

        // JPEG carries no alpha channel; strip it instead of failing.
        let dynamic = match format {
            ImageFormat::Jpeg => DynamicImage::ImageRgba8(rgba).to_rgb8().into(),
            _ => DynamicImage::ImageRgba8(rgba),
        };

        let mut bytes = Vec::new();
        dynamic
            .write_to(&mut Cursor::new(&mut bytes), format)
            .with_context(|| format!("encode image as {mime}"))?;
        debug!(mime, len = bytes.len(), "encoded image");
        Ok(bytes)
    }

    fn decode(&self, bytes: &[u8], mime: &str) -> Result<RasterImage> {
        let format =
            Self::format_for(mime).with_context(|| format!("no decoder registered for {mime}"))?;
        let decoded = image::load_from_memory_with_format(bytes, format)
            .with_context(|| format!("decode {mime} image bytes"))?;
        let rgba = decoded.to_rgba8();
        let (width, height) = rgba.dimensions();
        RasterImage::from_rgba8(width, height, rgba.into_raw())
    }
}
