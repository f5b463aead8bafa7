//! Atom registry port - abstracts the platform's name-interning service.

use crate::transfer::NativeFormatId;

/// The process-wide, append-only registry binding format names to stable
/// integer identifiers.
///
/// Implementations must serialize concurrent first-time registration of the
/// same name so exactly one id is ever created per distinct name; steady
/// state lookups are plain reads.
pub trait AtomRegistryPort: Send + Sync {
    /// Intern `name`, creating its id on first reference. The same name
    /// always yields the same id for the process lifetime.
    fn intern(&self, name: &str) -> NativeFormatId;

    /// Resolve an id back to its name. `None` if the id was never issued.
    fn name_of(&self, id: NativeFormatId) -> Option<String>;
}
