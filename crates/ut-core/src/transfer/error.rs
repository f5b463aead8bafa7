//! Typed failures surfaced by the image byte translator.
//!
//! MIME parse failures never appear here: negotiation and classification
//! recover from them locally and degrade to "no match".

#[derive(Debug, thiserror::Error)]
pub enum TransferError {
    /// No codec or resolution path exists for the requested format.
    #[error("translation to or from \"{native}\" is not supported")]
    TranslationUnsupported { native: String },

    /// The underlying encoder or decoder failed; propagated unchanged.
    #[error(transparent)]
    Codec(anyhow::Error),

    /// Reading the source byte stream failed.
    #[error("failed to read image data stream")]
    Io(#[from] std::io::Error),
}
