//! Data-transfer domain models.
//!
//! This module defines the flavor ⇄ native-format negotiation model used by
//! the transfer subsystem.
//!
//! ## Design overview
//!
//! Transfer data is described at two distinct levels:
//!
//! - [`Flavor`] is the **application-level** description of a representation:
//!   a MIME-like type plus the shape the application consumes it in
//!   (raw bytes, a byte stream, decoded text, a decoded image).
//! - [`NativeFormatId`] is the **platform-level** identifier: an interned
//!   atom whose string name is, for most transferable data, a MIME type.
//!
//! The [`Negotiator`] computes, in either direction, which flavors a native
//! format can be translated to and which native formats a flavor can be
//! exposed as. It also performs the byte-level image translation once a
//! pairing has been chosen.
//!
//! The two mapping directions are **not** inverses of each other; a round
//! trip is only guaranteed for the fixed well-known formats (PNG, JFIF).

mod atom;
mod classify;
mod error;
mod flavor;
mod image;
mod mime;
mod negotiator;
mod raster;

#[cfg(test)]
mod tests;

pub use atom::{names, NativeFormatId, WellKnownAtoms};
pub use classify::FormatClass;
pub use error::TransferError;
pub use flavor::{Flavor, FlavorCandidate, Representation};
pub use mime::{MimeParseError, MimeType};
pub use negotiator::Negotiator;
pub use raster::{PixelLayout, RasterImage, REFERENCE_LAYOUT};
