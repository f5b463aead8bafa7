//! The negotiation engine: native → flavor and flavor → native mapping.

use std::sync::Arc;

use tracing::debug;

use crate::ports::{AtomRegistryPort, EncodingCatalogPort, ImageCodecPort};
use crate::transfer::atom::WellKnownAtoms;
use crate::transfer::flavor::{Flavor, FlavorCandidate};
use crate::transfer::mime::MimeType;
use crate::transfer::raster::REFERENCE_LAYOUT;
use crate::transfer::NativeFormatId;

/// Stateless negotiation service.
///
/// Constructed once at process start and shared by reference with every
/// caller; resolves the well-known atoms exactly once. All methods are
/// synchronous and side-effect-free apart from delegating reads to the
/// (append-only) atom registry and the codec registry.
pub struct Negotiator {
    atoms: Arc<dyn AtomRegistryPort>,
    codecs: Arc<dyn ImageCodecPort>,
    encodings: Arc<dyn EncodingCatalogPort>,
    pub(crate) well_known: WellKnownAtoms,
}

impl Negotiator {
    pub fn new(
        atoms: Arc<dyn AtomRegistryPort>,
        codecs: Arc<dyn ImageCodecPort>,
        encodings: Arc<dyn EncodingCatalogPort>,
    ) -> Self {
        let well_known = WellKnownAtoms::resolve(atoms.as_ref());
        Self {
            atoms,
            codecs,
            encodings,
            well_known,
        }
    }

    /// Intern a native format name.
    pub fn native_id(&self, name: &str) -> NativeFormatId {
        self.atoms.intern(name)
    }

    /// The name a native format id was interned under.
    pub fn native_name(&self, id: NativeFormatId) -> Option<String> {
        self.atoms.name_of(id)
    }

    pub(crate) fn codecs(&self) -> &dyn ImageCodecPort {
        self.codecs.as_ref()
    }

    /// Display name for diagnostics; falls back to the raw id when the
    /// registry has no binding.
    pub(crate) fn display_name(&self, id: NativeFormatId) -> String {
        self.atoms
            .name_of(id)
            .unwrap_or_else(|| format!("format #{}", id.raw()))
    }

    /// Computes the flavors the data behind a native format can be
    /// translated to.
    ///
    /// The transfer protocol prescribes that format names represent MIME
    /// types, so a name that does not parse as MIME offers no translation
    /// and yields an empty list. Text natives map to raw MIME strings
    /// instead of structured flavors so the caller can generate one
    /// flavor per supported character encoding; image natives with at
    /// least one registered decoder additionally offer the abstract image
    /// flavor ahead of the concrete one.
    pub fn flavors_for_native(&self, native: &str) -> Vec<FlavorCandidate> {
        let mut flavors = Vec::new();

        if native.is_empty() {
            return flavors;
        }

        let mime: MimeType = match native.parse() {
            Ok(mime) => mime,
            Err(err) => {
                debug!(native, %err, "native format name is not MIME-shaped");
                return flavors;
            }
        };

        let base_type = mime.base_type();

        if mime.primary() == "text" {
            flavors.push(FlavorCandidate::Mime(base_type));
            return flavors;
        }

        if mime.primary() == "image" && self.codecs.has_decoder(&base_type) {
            flavors.push(FlavorCandidate::Flavor(Flavor::image()));
        }

        flavors.push(FlavorCandidate::Flavor(Flavor::from_mime(mime)));
        flavors
    }

    /// Computes the native format names a flavor can be exposed as.
    ///
    /// Byte-oriented flavors are offered verbatim under their MIME type.
    /// The abstract image flavor expands to every encoded format whose
    /// writer can handle the reference pixel layout, in writer-registry
    /// order. Charset text flavors expand to one entry per standard
    /// encoding other than their own declared charset, followed by the
    /// bare base type if it is not in the list yet.
    pub fn natives_for_flavor(&self, flavor: &Flavor) -> Vec<String> {
        let mut natives = Vec::new();

        let charset = flavor.charset().map(str::to_owned);
        let mut base_type = flavor.base_type();
        let mut mime_type = base_type.clone();

        if let Some(charset) = &charset {
            if flavor.is_charset_text_type() {
                mime_type = format!("{base_type};charset={charset}");
            }
        }

        // The MIME native itself, whenever the representation requires no
        // structural translation.
        if flavor.is_byte_oriented() {
            natives.push(mime_type);
        }

        if flavor.is_abstract_image() {
            for mime in self.codecs.writer_mime_types() {
                if self.codecs.can_encode(&mime, &REFERENCE_LAYOUT) {
                    natives.push(mime);
                }
            }
        } else if flavor.is_charset_text_type() {
            // The generic string flavor is semantically equivalent to the
            // standard "text/plain" MIME type.
            if flavor.is_string() {
                base_type = "text/plain".to_string();
            }

            for encoding in self.encodings.standard_encodings() {
                let is_own_charset = charset
                    .as_deref()
                    .is_some_and(|cs| cs.eq_ignore_ascii_case(&encoding));
                if !is_own_charset {
                    natives.push(format!("{base_type};charset={encoding}"));
                }
            }

            // A MIME format without a specified charset.
            if !natives.contains(&base_type) {
                natives.push(base_type);
            }
        }

        natives
    }
}
