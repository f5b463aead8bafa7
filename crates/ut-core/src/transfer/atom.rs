//! Native format identifiers.

use serde::{Deserialize, Serialize};

use crate::ports::AtomRegistryPort;

/// Well-known atom names used by the platform transfer protocol.
pub mod names {
    /// Generic file-name transfer format.
    pub const FILE_NAME: &str = "FILE_NAME";
    /// Desktop-specific network-file transfer format.
    pub const DT_NET_FILE: &str = "_DT_NETFILE";
    /// PNG encoded image data.
    pub const PNG: &str = "PNG";
    /// JFIF (JPEG) encoded image data.
    pub const JFIF: &str = "JFIF";
}

/// An opaque, stable identifier for a platform-native transfer format.
///
/// Bound 1:1 to a string name by the atom registry for the process lifetime;
/// never recycled. Equality is integer equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NativeFormatId(u64);

impl NativeFormatId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

/// The fixed well-known formats, resolved against the atom registry once at
/// negotiator construction instead of re-interned on every call.
#[derive(Debug, Clone, Copy)]
pub struct WellKnownAtoms {
    pub file_name: NativeFormatId,
    pub dt_net_file: NativeFormatId,
    pub png: NativeFormatId,
    pub jfif: NativeFormatId,
}

impl WellKnownAtoms {
    pub fn resolve(registry: &dyn AtomRegistryPort) -> Self {
        Self {
            file_name: registry.intern(names::FILE_NAME),
            dt_net_file: registry.intern(names::DT_NET_FILE),
            png: registry.intern(names::PNG),
            jfif: registry.intern(names::JFIF),
        }
    }
}
