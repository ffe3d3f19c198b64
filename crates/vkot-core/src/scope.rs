//! Instance and device scopes, and the registry that resolves dispatch keys
//! to them.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use dashmap::DashMap;
use tracing::debug;

use crate::error::CoreError;
use crate::handle::{ObjectKind, ScopeId, ScopeLevel};
use crate::object_table::{ObjectRecord, ObjectTable};

/// One tracking domain: an instance, or a logical device under an instance.
pub struct Scope {
    id: ScopeId,
    level: ScopeLevel,
    /// The VkInstance or VkDevice this scope was created for.
    handle: u64,
    /// Owning instance. Equal to `id` for instance scopes.
    instance_id: ScopeId,
    /// Non-owning back-reference from a device to its instance.
    instance: Weak<Scope>,
    table: ObjectTable,
}

impl Scope {
    pub fn id(&self) -> ScopeId {
        self.id
    }

    pub fn level(&self) -> ScopeLevel {
        self.level
    }

    pub fn handle(&self) -> u64 {
        self.handle
    }

    pub fn table(&self) -> &ObjectTable {
        &self.table
    }

    pub fn instance_id(&self) -> ScopeId {
        self.instance_id
    }

    /// The instance scope a device scope belongs to, if it is still alive.
    /// `None` for instance scopes.
    pub fn instance(&self) -> Option<Arc<Scope>> {
        self.instance.upgrade()
    }

    /// Root identity at `level`: the device scope for device-level
    /// comparisons, the owning instance for instance-level ones.
    pub fn root(&self, level: ScopeLevel) -> ScopeId {
        match level {
            ScopeLevel::Device => self.id,
            ScopeLevel::Instance => self.instance_id,
        }
    }

    /// Look `handle` up here, then in the owning instance for kinds that
    /// live at instance level.
    pub fn lookup(&self, kind: ObjectKind, handle: u64) -> Option<ObjectRecord> {
        if let Some(record) = self.table.lookup(kind, handle) {
            return Some(record);
        }
        if self.level == ScopeLevel::Device && kind.level() == ScopeLevel::Instance {
            return self.instance()?.table.lookup(kind, handle);
        }
        None
    }
}

/// Process-wide set of live scopes.
///
/// Every dispatchable handle (instance, physical device, device, queue,
/// command buffer) is bound to the scope whose table it selects. A binding
/// outlives the object: a freed command buffer still routes to its device
/// until the scope is torn down or emptied.
pub struct ScopeRegistry {
    scopes: DashMap<ScopeId, Arc<Scope>>,
    dispatch: DashMap<u64, ScopeId>,
    next_id: AtomicU64,
}

impl ScopeRegistry {
    pub fn new() -> Self {
        Self {
            scopes: DashMap::new(),
            dispatch: DashMap::new(),
            // Start from 1 so a zeroed id never names a scope
            next_id: AtomicU64::new(1),
        }
    }

    fn alloc_id(&self) -> ScopeId {
        ScopeId(self.next_id.fetch_add(1, Ordering::Relaxed))
    }

    /// Create the root scope for a new instance and bind its handle.
    pub fn create_instance_scope(&self, instance: u64) -> Arc<Scope> {
        let id = self.alloc_id();
        let scope = Arc::new(Scope {
            id,
            level: ScopeLevel::Instance,
            handle: instance,
            instance_id: id,
            instance: Weak::new(),
            table: ObjectTable::new(id),
        });
        self.scopes.insert(scope.id, Arc::clone(&scope));
        self.bind(instance, scope.id);
        debug!(scope = %scope.id, instance = format_args!("{:#x}", instance), "instance scope created");
        scope
    }

    /// Create a device scope under the instance that `parent_key` resolves to
    /// (normally the physical device the device was created from).
    pub fn create_device_scope(&self, device: u64, parent_key: u64) -> Result<Arc<Scope>, CoreError> {
        let parent = self
            .resolve(parent_key)
            .ok_or(CoreError::UnknownDispatchKey(parent_key))?;
        let instance = match parent.level {
            ScopeLevel::Instance => parent,
            ScopeLevel::Device => parent
                .instance()
                .ok_or(CoreError::NotAnInstanceScope(parent.id))?,
        };
        let id = self.alloc_id();
        let scope = Arc::new(Scope {
            id,
            level: ScopeLevel::Device,
            handle: device,
            instance_id: instance.id,
            instance: Arc::downgrade(&instance),
            table: ObjectTable::new(id),
        });
        self.scopes.insert(id, Arc::clone(&scope));
        self.bind(device, id);
        debug!(scope = %id, instance = %instance.id, device = format_args!("{:#x}", device), "device scope created");
        Ok(scope)
    }

    /// Route calls made through `key` to `scope`.
    pub fn bind(&self, key: u64, scope: ScopeId) {
        self.dispatch.insert(key, scope);
    }

    /// Drop `key`'s binding if it still routes to `scope`.
    pub fn unbind_from(&self, key: u64, scope: ScopeId) {
        self.dispatch.remove_if(&key, |_, bound| *bound == scope);
    }

    /// The scope a dispatchable handle belongs to.
    pub fn resolve(&self, key: u64) -> Option<Arc<Scope>> {
        let id = *self.dispatch.get(&key)?;
        self.get(id)
    }

    pub fn get(&self, id: ScopeId) -> Option<Arc<Scope>> {
        self.scopes.get(&id).map(|s| Arc::clone(s.value()))
    }

    /// Unregister a scope and every dispatch key bound to it.
    pub fn remove_scope(&self, id: ScopeId) -> Option<Arc<Scope>> {
        let (_, scope) = self.scopes.remove(&id)?;
        self.dispatch.retain(|_, bound| *bound != id);
        Some(scope)
    }

    /// Live device scopes created under `instance`, oldest first.
    pub fn devices_of(&self, instance: ScopeId) -> Vec<Arc<Scope>> {
        let mut devices: Vec<Arc<Scope>> = self
            .scopes
            .iter()
            .filter(|e| e.level == ScopeLevel::Device && e.instance_id == instance)
            .map(|e| Arc::clone(e.value()))
            .collect();
        devices.sort_by_key(|s| s.id);
        devices
    }

    /// A scope other than `exclude` (and other than `exclude`'s instance for
    /// instance-level kinds) that holds a live record for `handle`.
    pub fn find_elsewhere(&self, kind: ObjectKind, handle: u64, exclude: &Scope) -> Option<Arc<Scope>> {
        let excluded_root = exclude.root(kind.level());
        let mut candidates: Vec<Arc<Scope>> = self
            .scopes
            .iter()
            .filter(|e| e.level == kind.level() && e.root(kind.level()) != excluded_root)
            .map(|e| Arc::clone(e.value()))
            .collect();
        candidates.sort_by_key(|s| s.id);
        candidates
            .into_iter()
            .find(|scope| scope.table.contains(kind, handle))
    }

    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }
}

impl Default for ScopeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
