use std::collections::HashMap;

use parking_lot::Mutex;
use tracing::warn;

use crate::handle::{ObjectKind, ScopeId};

/// How an object came to be tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    /// Produced by a Create*/Allocate* call; the application must destroy it.
    Created,
    /// Handed out by the implementation (enumeration, queue retrieval,
    /// swapchain images); owned by its parent and never leak-reported.
    Retrieved,
}

/// One live API object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectRecord {
    pub kind: ObjectKind,
    pub handle: u64,
    pub owning_scope: ScopeId,
    pub allocator_used: bool,
    /// Pool, swapchain or physical device this object was produced from.
    pub parent: Option<u64>,
    pub origin: Origin,
}

impl ObjectRecord {
    pub fn new(kind: ObjectKind, handle: u64, owning_scope: ScopeId, allocator_used: bool) -> Self {
        Self {
            kind,
            handle,
            owning_scope,
            allocator_used,
            parent: None,
            origin: Origin::Created,
        }
    }

    pub fn with_parent(mut self, parent: Option<u64>) -> Self {
        self.parent = parent;
        self
    }

    pub fn with_origin(mut self, origin: Origin) -> Self {
        self.origin = origin;
        self
    }
}

/// Live objects of one scope, keyed by kind then handle.
///
/// A single exclusive lock guards every lookup and mutation. Callbacks never
/// run under the lock, so they may call back into the table.
pub struct ObjectTable {
    scope: ScopeId,
    objects: Mutex<HashMap<ObjectKind, HashMap<u64, ObjectRecord>>>,
}

impl ObjectTable {
    pub fn new(scope: ScopeId) -> Self {
        Self {
            scope,
            objects: Mutex::new(HashMap::new()),
        }
    }

    pub fn scope(&self) -> ScopeId {
        self.scope
    }

    /// Record a new object. The implementation never creates a handle that
    /// is still live, so a collision between two created records means a
    /// destroy was missed; the newer record wins. Retrieved objects are
    /// simply refreshed.
    pub fn insert(&self, record: ObjectRecord) {
        let mut objects = self.objects.lock();
        let previous = objects
            .entry(record.kind)
            .or_default()
            .insert(record.handle, record);
        if let Some(previous) = previous
            .filter(|p| p.origin == Origin::Created && record.origin == Origin::Created)
        {
            warn!(
                kind = %previous.kind,
                handle = format_args!("{:#x}", previous.handle),
                scope = %self.scope,
                "replacing record for a handle that was never destroyed"
            );
        }
    }

    pub fn lookup(&self, kind: ObjectKind, handle: u64) -> Option<ObjectRecord> {
        self.objects
            .lock()
            .get(&kind)
            .and_then(|by_handle| by_handle.get(&handle))
            .copied()
    }

    pub fn contains(&self, kind: ObjectKind, handle: u64) -> bool {
        self.lookup(kind, handle).is_some()
    }

    pub fn remove(&self, kind: ObjectKind, handle: u64) -> Option<ObjectRecord> {
        self.objects
            .lock()
            .get_mut(&kind)
            .and_then(|by_handle| by_handle.remove(&handle))
    }

    /// Remove every object of `kind` whose parent is `parent`.
    pub fn remove_children(&self, kind: ObjectKind, parent: u64) -> Vec<ObjectRecord> {
        let mut objects = self.objects.lock();
        let Some(by_handle) = objects.get_mut(&kind) else {
            return Vec::new();
        };
        let handles: Vec<u64> = by_handle
            .values()
            .filter(|r| r.parent == Some(parent))
            .map(|r| r.handle)
            .collect();
        handles
            .into_iter()
            .filter_map(|h| by_handle.remove(&h))
            .collect()
    }

    /// Snapshot of all live records of one kind, sorted by handle.
    pub fn records_of_kind(&self, kind: ObjectKind) -> Vec<ObjectRecord> {
        let mut records: Vec<ObjectRecord> = self
            .objects
            .lock()
            .get(&kind)
            .map(|by_handle| by_handle.values().copied().collect())
            .unwrap_or_default();
        records.sort_by_key(|r| r.handle);
        records
    }

    /// Visit every live record of one kind in handle order.
    pub fn for_each_of_kind(&self, kind: ObjectKind, mut f: impl FnMut(&ObjectRecord)) {
        for record in self.records_of_kind(kind) {
            f(&record);
        }
    }

    /// Remove and return every record of one kind.
    pub fn drain_kind(&self, kind: ObjectKind) -> Vec<ObjectRecord> {
        let mut records: Vec<ObjectRecord> = self
            .objects
            .lock()
            .remove(&kind)
            .map(|by_handle| by_handle.into_values().collect())
            .unwrap_or_default();
        records.sort_by_key(|r| r.handle);
        records
    }

    pub fn count(&self, kind: ObjectKind) -> usize {
        self.objects.lock().get(&kind).map_or(0, HashMap::len)
    }

    pub fn len(&self) -> usize {
        self.objects.lock().values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
