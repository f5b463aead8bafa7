//! Byte-level image translation.
//!
//! Invoked only after a flavor/native pairing has been chosen. Resolution
//! maps a native format id to a concrete encoded-format name; the actual
//! pixel ⇄ bytes conversion is delegated to the codec registry.

use std::io::Read;

use tracing::warn;

use crate::transfer::error::TransferError;
use crate::transfer::negotiator::Negotiator;
use crate::transfer::{NativeFormatId, RasterImage};

impl Negotiator {
    /// Encodes an in-memory image into bytes for the encoded format the
    /// native format resolves to.
    pub fn encode_image(
        &self,
        image: &RasterImage,
        id: NativeFormatId,
    ) -> Result<Vec<u8>, TransferError> {
        let mime = self.resolve_encoded_format(id)?;
        self.codecs()
            .encode(image, &mime)
            .map_err(TransferError::Codec)
    }

    /// Decodes encoded image bytes in the given native format back into an
    /// in-memory image.
    pub fn decode_image(
        &self,
        bytes: &[u8],
        id: NativeFormatId,
    ) -> Result<RasterImage, TransferError> {
        let mime = self.resolve_encoded_format(id)?;
        self.codecs()
            .decode(bytes, &mime)
            .map_err(TransferError::Codec)
    }

    /// Stream variant of [`decode_image`](Self::decode_image): buffers the
    /// reader to its end, then decodes.
    pub fn decode_image_from(
        &self,
        reader: &mut dyn Read,
        id: NativeFormatId,
    ) -> Result<RasterImage, TransferError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        self.decode_image(&bytes, id)
    }

    /// Resolves a native format to the encoded-format MIME type the codec
    /// registry understands. The two well-known image atoms resolve to
    /// fixed names; any other format must carry an `image/*` MIME name.
    fn resolve_encoded_format(&self, id: NativeFormatId) -> Result<String, TransferError> {
        if id == self.well_known.png {
            return Ok("image/png".to_string());
        }
        if id == self.well_known.jfif {
            return Ok("image/jpeg".to_string());
        }

        if let Some(mime) = self.parse_native(id) {
            if mime.primary() == "image" {
                return Ok(mime.base_type());
            }
        }

        let native = self.display_name(id);
        warn!(%native, "no encoded image format resolvable for native format");
        Err(TransferError::TranslationUnsupported { native })
    }
}
