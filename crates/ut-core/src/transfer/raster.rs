//! In-memory image model shared between the negotiation engine and the
//! codec adapters.

use anyhow::{ensure, Result};

/// A decoded image: RGBA8, row major, alpha premultiplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl RasterImage {
    pub fn from_rgba8(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * 4;
        ensure!(
            rgba.len() == expected,
            "raster buffer is {} bytes, expected {} for {}x{} RGBA8",
            rgba.len(),
            expected,
            width,
            height
        );
        Ok(Self {
            width,
            height,
            rgba,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }

    pub fn into_rgba(self) -> Vec<u8> {
        self.rgba
    }
}

/// The pixel layout a writer must handle, independent of actual pixel data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelLayout {
    pub width: u32,
    pub height: u32,
    pub channels: u8,
    pub alpha_premultiplied: bool,
}

/// The reference sample layout used to probe writer capability before
/// committing to a translation.
pub const REFERENCE_LAYOUT: PixelLayout = PixelLayout {
    width: 10,
    height: 10,
    channels: 4,
    alpha_premultiplied: true,
};
