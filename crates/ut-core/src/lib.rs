//! # ut-core
//!
//! Core domain models and negotiation logic for UniTransfer.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod ports;
pub mod transfer;

// Re-export commonly used types at the crate root
pub use transfer::{
    Flavor, FlavorCandidate, FormatClass, MimeParseError, MimeType, NativeFormatId, Negotiator,
    PixelLayout, RasterImage, Representation, TransferError,
};
