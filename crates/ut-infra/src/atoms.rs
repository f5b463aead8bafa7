//! In-process atom registry.

use std::collections::HashMap;
use std::sync::RwLock;

use ut_core::ports::AtomRegistryPort;
use ut_core::transfer::NativeFormatId;

/// Append-only, process-wide name interner backing [`AtomRegistryPort`].
///
/// Lookups of already-interned names take the read lock only; first-time
/// registration takes the write lock and re-checks under it, so exactly one
/// id is ever created per distinct name. Ids start at 1 and are never
/// recycled.
pub struct AtomInterner {
    inner: RwLock<InternerState>,
}

struct InternerState {
    by_name: HashMap<String, NativeFormatId>,
    names: Vec<String>,
}

impl AtomInterner {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(InternerState {
                by_name: HashMap::new(),
                names: Vec::new(),
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.read_state().names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read_state(&self) -> std::sync::RwLockReadGuard<'_, InternerState> {
        self.inner.read().expect("atom registry lock poisoned")
    }
}

impl Default for AtomInterner {
    fn default() -> Self {
        Self::new()
    }
}

impl AtomRegistryPort for AtomInterner {
    fn intern(&self, name: &str) -> NativeFormatId {
        if let Some(id) = self.read_state().by_name.get(name) {
            return *id;
        }

        let mut state = self.inner.write().expect("atom registry lock poisoned");
        // Re-check: another thread may have interned the name between the
        // read and write locks.
        if let Some(id) = state.by_name.get(name) {
            return *id;
        }
        state.names.push(name.to_string());
        let id = NativeFormatId::new(state.names.len() as u64);
        state.by_name.insert(name.to_string(), id);
        id
    }

    fn name_of(&self, id: NativeFormatId) -> Option<String> {
        let state = self.read_state();
        let index = id.raw().checked_sub(1)? as usize;
        state.names.get(index).cloned()
    }
}
