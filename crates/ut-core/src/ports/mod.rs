//! Port interfaces for the negotiation engine
//!
//! Ports define the contract between the core negotiation logic and the
//! platform facilities it delegates to. This follows Hexagonal Architecture
//! principles, allowing the core business logic to remain independent of
//! external dependencies.

mod atom_registry;
mod encodings;
mod image_codec;

pub use atom_registry::AtomRegistryPort;
pub use encodings::EncodingCatalogPort;
pub use image_codec::ImageCodecPort;

#[cfg(test)]
pub(crate) use encodings::MockEncodingCatalog;
#[cfg(test)]
pub(crate) use image_codec::MockImageCodec;
