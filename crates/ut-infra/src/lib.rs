//! # ut-infra
//!
//! Infrastructure adapters for UniTransfer: the in-process atom registry,
//! the image codec adapter over the `image` crate, and the standard
//! text-encoding catalog.

pub mod atoms;
pub mod codec;
pub mod encodings;

pub use atoms::AtomInterner;
pub use codec::ImageCodec;
pub use encodings::StandardEncodings;
