//! Test fixtures and helper functions for negotiation tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::ports::{AtomRegistryPort, MockEncodingCatalog, MockImageCodec};
use crate::transfer::{NativeFormatId, Negotiator};

/// Minimal in-memory atom registry with consistent intern/name_of behavior.
pub struct FakeAtomRegistry {
    inner: Mutex<FakeRegistryState>,
}

struct FakeRegistryState {
    by_name: HashMap<String, NativeFormatId>,
    names: Vec<String>,
}

impl FakeAtomRegistry {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(FakeRegistryState {
                by_name: HashMap::new(),
                names: Vec::new(),
            }),
        }
    }
}

impl AtomRegistryPort for FakeAtomRegistry {
    fn intern(&self, name: &str) -> NativeFormatId {
        let mut state = self.inner.lock().unwrap();
        if let Some(id) = state.by_name.get(name) {
            return *id;
        }
        state.names.push(name.to_string());
        let id = NativeFormatId::new(state.names.len() as u64);
        state.by_name.insert(name.to_string(), id);
        id
    }

    fn name_of(&self, id: NativeFormatId) -> Option<String> {
        let state = self.inner.lock().unwrap();
        let index = id.raw().checked_sub(1)? as usize;
        state.names.get(index).cloned()
    }
}

/// The catalog order the standard-encoding fixtures use.
pub const TEST_ENCODINGS: &[&str] = &[
    "US-ASCII",
    "ISO-8859-1",
    "UTF-8",
    "UTF-16BE",
    "UTF-16LE",
    "UTF-16",
];

/// A catalog mock serving [`TEST_ENCODINGS`].
pub fn standard_catalog() -> MockEncodingCatalog {
    let mut catalog = MockEncodingCatalog::new();
    catalog
        .expect_standard_encodings()
        .returning(|| TEST_ENCODINGS.iter().map(|s| s.to_string()).collect());
    catalog
}

/// Builds a negotiator over a fresh fake atom registry and the given mocks.
pub fn negotiator_with(codecs: MockImageCodec, encodings: MockEncodingCatalog) -> Negotiator {
    Negotiator::new(
        Arc::new(FakeAtomRegistry::new()),
        Arc::new(codecs),
        Arc::new(encodings),
    )
}

/// A negotiator whose codec and catalog ports must never be touched.
pub fn negotiator_without_codecs() -> Negotiator {
    negotiator_with(MockImageCodec::new(), MockEncodingCatalog::new())
}

/// Counts occurrences of `entry` in a native list.
pub fn count_of(natives: &[String], entry: &str) -> usize {
    natives.iter().filter(|n| *n == entry).count()
}
