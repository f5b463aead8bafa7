//! Image codec port - abstracts the registry of image encoders/decoders.

use crate::transfer::{PixelLayout, RasterImage};

/// Capability probe and byte-level translation facade over the image codec
/// registry.
///
/// Capability queries (`has_decoder`, `writer_mime_types`, `can_encode`)
/// never perform an actual conversion; they exist so negotiation can decide
/// whether a translation is possible before committing to it.
pub trait ImageCodecPort: Send + Sync {
    /// Whether at least one decoder claims this exact MIME type.
    fn has_decoder(&self, mime: &str) -> bool;

    /// The encoded-format MIME types known to the writer registry, in the
    /// registry's enumeration order.
    fn writer_mime_types(&self) -> Vec<String>;

    /// Whether at least one writer for `mime` can encode pixels in the
    /// given layout.
    fn can_encode(&self, mime: &str, layout: &PixelLayout) -> bool;

    /// Encode `image` into the given encoded format. Synchronous and
    /// CPU-bound.
    fn encode(&self, image: &RasterImage, mime: &str) -> anyhow::Result<Vec<u8>>;

    /// Decode encoded bytes in the given format back into an image.
    fn decode(&self, bytes: &[u8], mime: &str) -> anyhow::Result<RasterImage>;
}

#[cfg(test)]
mockall::mock! {
    pub ImageCodec {}

    impl ImageCodecPort for ImageCodec {
        fn has_decoder(&self, mime: &str) -> bool;
        fn writer_mime_types(&self) -> Vec<String>;
        fn can_encode(&self, mime: &str, layout: &PixelLayout) -> bool;
        fn encode(&self, image: &RasterImage, mime: &str) -> anyhow::Result<Vec<u8>>;
        fn decode(&self, bytes: &[u8], mime: &str) -> anyhow::Result<RasterImage>;
    }
}
