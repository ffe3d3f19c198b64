use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::{TeardownPolicy, TrackerConfig};
use crate::error::CoreError;
use crate::handle::{ObjectKind, ScopeLevel};
use crate::leak::{self, DEVICE_LEAK_VUID, INSTANCE_LEAK_VUID};
use crate::object_table::{ObjectRecord, Origin};
use crate::report::{Report, ReportSink, TracingSink, Violation, Vuid};
use crate::scope::{Scope, ScopeRegistry};

/// Scope-qualified validate/create/destroy operations over the registry.
///
/// Every operation takes a dispatch key: any dispatchable handle bound to
/// the scope the call runs against.
pub struct Tracker {
    registry: ScopeRegistry,
    sink: Arc<dyn ReportSink>,
    config: TrackerConfig,
}

impl Tracker {
    pub fn new(config: TrackerConfig, sink: Arc<dyn ReportSink>) -> Self {
        Self {
            registry: ScopeRegistry::new(),
            sink,
            config,
        }
    }

    pub fn with_sink(sink: Arc<dyn ReportSink>) -> Self {
        Self::new(TrackerConfig::default(), sink)
    }

    pub fn registry(&self) -> &ScopeRegistry {
        &self.registry
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn report(&self, report: Report) {
        self.sink.report(report);
    }

    // ── Scope lifecycle ─────────────────────────────────────

    /// Start tracking a new instance. The instance records itself.
    pub fn create_instance_scope(&self, instance: u64, allocator_used: bool) -> Arc<Scope> {
        let scope = self.registry.create_instance_scope(instance);
        scope
            .table()
            .insert(ObjectRecord::new(ObjectKind::Instance, instance, scope.id(), allocator_used));
        info!(scope = %scope.id(), "tracking instance {:#x}", instance);
        scope
    }

    /// Start tracking a device created from `physical_device`. The device is
    /// recorded in its instance's table and gets a table of its own.
    pub fn create_device_scope(
        &self,
        physical_device: u64,
        device: u64,
        allocator_used: bool,
    ) -> Result<Arc<Scope>, CoreError> {
        let scope = self.registry.create_device_scope(device, physical_device)?;
        let instance = scope
            .instance()
            .ok_or(CoreError::UnknownDispatchKey(physical_device))?;
        instance.table().insert(
            ObjectRecord::new(ObjectKind::Device, device, instance.id(), allocator_used)
                .with_parent(Some(physical_device)),
        );
        info!(scope = %scope.id(), instance = %instance.id(), "tracking device {:#x}", device);
        Ok(scope)
    }

    /// Stop tracking a device, accounting for everything it still owns.
    /// Returns the number of leaked objects.
    pub fn destroy_device_scope(&self, device: u64, policy: TeardownPolicy) -> usize {
        let Some(scope) = self.registry.resolve(device) else {
            debug!("destroy of untracked device {:#x}", device);
            return 0;
        };
        if scope.level() != ScopeLevel::Device {
            warn!(scope = %scope.id(), "dispatch key {:#x} is not a device", device);
            return 0;
        }
        if let Some(instance) = scope.instance() {
            instance.table().remove(ObjectKind::Device, scope.handle());
        }
        let leaked = self.teardown(&scope, policy, &Vuid::new(DEVICE_LEAK_VUID));
        self.registry.remove_scope(scope.id());
        info!(scope = %scope.id(), leaked, "device {:#x} torn down", scope.handle());
        leaked
    }

    /// Stop tracking an instance and every device still alive under it.
    /// Returns the number of leaked objects, devices included.
    pub fn destroy_instance_scope(&self, instance: u64, policy: TeardownPolicy) -> usize {
        let Some(scope) = self.registry.resolve(instance) else {
            debug!("destroy of untracked instance {:#x}", instance);
            return 0;
        };
        if scope.level() != ScopeLevel::Instance {
            warn!(scope = %scope.id(), "dispatch key {:#x} is not an instance", instance);
            return 0;
        }
        let mut leaked = self.teardown(&scope, policy, &Vuid::new(INSTANCE_LEAK_VUID));
        for device in self.registry.devices_of(scope.id()) {
            leaked += self.teardown(&device, policy, &Vuid::new(DEVICE_LEAK_VUID));
            self.registry.remove_scope(device.id());
        }
        scope.table().remove(ObjectKind::Instance, scope.handle());
        self.registry.remove_scope(scope.id());
        info!(scope = %scope.id(), leaked, "instance {:#x} torn down", scope.handle());
        leaked
    }

    fn teardown(&self, scope: &Scope, policy: TeardownPolicy, vuid: &Vuid) -> usize {
        match policy {
            TeardownPolicy::Report => {
                let reported = leak::report_undestroyed(scope, self.sink.as_ref(), vuid);
                leak::destroy_undestroyed(scope, &self.registry);
                reported
            }
            TeardownPolicy::Destroy => leak::destroy_undestroyed(scope, &self.registry),
        }
    }

    /// Non-destructive leak report for the scope `key` resolves to.
    pub fn report_undestroyed(&self, key: u64, vuid: &Vuid) -> usize {
        self.registry
            .resolve(key)
            .map_or(0, |scope| leak::report_undestroyed(&scope, self.sink.as_ref(), vuid))
    }

    /// Force-remove every surviving record in the scope `key` resolves to.
    /// The scope itself stays registered. Returns the number of leaked
    /// objects among them.
    pub fn destroy_undestroyed(&self, key: u64) -> usize {
        self.registry
            .resolve(key)
            .map_or(0, |scope| leak::destroy_undestroyed(&scope, &self.registry))
    }

    // ── Validation ──────────────────────────────────────────

    /// Record for `handle` as seen from the scope `key` resolves to.
    pub fn lookup(&self, key: u64, kind: ObjectKind, handle: u64) -> Option<ObjectRecord> {
        self.registry.resolve(key)?.lookup(kind, handle)
    }

    /// Returns `true` (skip recommended) when `handle` is null and null is not
    /// allowed, or non-null and not live in the resolved scope.
    pub fn validate_object(
        &self,
        key: u64,
        handle: u64,
        kind: ObjectKind,
        allow_null: bool,
        vuid_not_found: &Vuid,
        vuid_wrong_parent: &Vuid,
    ) -> bool {
        self.validate_object_at(None, key, handle, kind, allow_null, vuid_not_found, vuid_wrong_parent)
    }

    /// [`Tracker::validate_object`], tagging any report with the argument
    /// path the handle came from.
    #[allow(clippy::too_many_arguments)]
    pub fn validate_object_at(
        &self,
        location: Option<&str>,
        key: u64,
        handle: u64,
        kind: ObjectKind,
        allow_null: bool,
        vuid_not_found: &Vuid,
        vuid_wrong_parent: &Vuid,
    ) -> bool {
        if handle == 0 {
            if allow_null {
                return false;
            }
            self.report(
                Report::new(Violation::NullNotAllowed, vuid_not_found.clone(), kind, handle)
                    .at(location),
            );
            return true;
        }

        let Some(scope) = self.registry.resolve(key) else {
            self.report(Report::new(Violation::NotFound, vuid_not_found.clone(), kind, handle).at(location));
            return true;
        };
        if scope.lookup(kind, handle).is_some() {
            return false;
        }

        if self.config.report_wrong_parent && !vuid_wrong_parent.is_undefined() {
            if let Some(owner) = self.registry.find_elsewhere(kind, handle, &scope) {
                self.report(
                    Report::new(Violation::WrongParent, vuid_wrong_parent.clone(), kind, handle)
                        .in_scope(owner.id())
                        .at(location),
                );
                return true;
            }
        }

        self.report(
            Report::new(Violation::NotFound, vuid_not_found.clone(), kind, handle)
                .in_scope(scope.id())
                .at(location),
        );
        true
    }

    /// Validation for an object about to be destroyed: it must be null or
    /// live, and be destroyed with the allocator pattern it was created with.
    #[allow(clippy::too_many_arguments)]
    pub fn validate_destroy_object(
        &self,
        key: u64,
        handle: u64,
        kind: ObjectKind,
        custom_allocator: bool,
        vuid_not_found: &Vuid,
        vuid_custom_allocator: &Vuid,
        vuid_default_allocator: &Vuid,
    ) -> bool {
        if self.validate_object(key, handle, kind, true, vuid_not_found, &Vuid::Undefined) {
            return true;
        }
        self.validate_destroy_allocator(
            key,
            handle,
            kind,
            custom_allocator,
            vuid_custom_allocator,
            vuid_default_allocator,
        )
    }

    /// Only the allocator half of [`Tracker::validate_destroy_object`].
    /// Untracked and null handles pass; the dispatcher checks existence
    /// through the destroyed handle's own parameter.
    pub fn validate_destroy_allocator(
        &self,
        key: u64,
        handle: u64,
        kind: ObjectKind,
        custom_allocator: bool,
        vuid_custom_allocator: &Vuid,
        vuid_default_allocator: &Vuid,
    ) -> bool {
        if handle == 0 {
            return false;
        }
        let Some(record) = self.lookup(key, kind, handle) else {
            return false;
        };
        let vuid = match (record.allocator_used, custom_allocator) {
            (true, false) => vuid_custom_allocator,
            (false, true) => vuid_default_allocator,
            _ => return false,
        };
        self.report(
            Report::new(Violation::AllocatorMismatch, vuid.clone(), kind, handle)
                .in_scope(record.owning_scope),
        );
        true
    }

    /// Checks that a live child was produced from `expected_parent` (a pool
    /// or swapchain). Null and untracked handles pass.
    pub fn validate_parent(
        &self,
        location: Option<&str>,
        key: u64,
        handle: u64,
        kind: ObjectKind,
        expected_parent: u64,
        vuid: &Vuid,
    ) -> bool {
        if handle == 0 {
            return false;
        }
        match self.lookup(key, kind, handle) {
            Some(record) if record.parent != Some(expected_parent) => {
                self.report(
                    Report::new(Violation::WrongParent, vuid.clone(), kind, handle)
                        .in_scope(record.owning_scope)
                        .at(location),
                );
                true
            }
            _ => false,
        }
    }

    // ── Recording ───────────────────────────────────────────

    /// The scope whose table records objects of `kind` for calls through `key`.
    fn home_scope(&self, key: u64, kind: ObjectKind) -> Option<Arc<Scope>> {
        let scope = self.registry.resolve(key)?;
        match (scope.level(), kind.level()) {
            (ScopeLevel::Device, ScopeLevel::Instance) => scope.instance(),
            (ScopeLevel::Instance, ScopeLevel::Device) => {
                warn!(scope = %scope.id(), %kind, "device-level object used through an instance");
                None
            }
            _ => Some(scope),
        }
    }

    /// Record an object the implementation just created.
    pub fn create_object(&self, key: u64, handle: u64, kind: ObjectKind, allocator_used: bool) {
        self.create_object_with(key, handle, kind, allocator_used, None, Origin::Created);
    }

    /// Record an object together with its ancestry.
    pub fn create_object_with(
        &self,
        key: u64,
        handle: u64,
        kind: ObjectKind,
        allocator_used: bool,
        parent: Option<u64>,
        origin: Origin,
    ) {
        if handle == 0 {
            return;
        }
        let Some(home) = self.home_scope(key, kind) else {
            warn!(%kind, "cannot record {:#x}: no scope for dispatch key {:#x}", handle, key);
            return;
        };
        home.table().insert(
            ObjectRecord::new(kind, handle, home.id(), allocator_used)
                .with_parent(parent)
                .with_origin(origin),
        );
        if kind.is_dispatchable() {
            self.registry.bind(handle, home.id());
        }
    }

    /// Forget an object whose destroy call is about to be forwarded, along
    /// with anything it owns.
    pub fn record_destroy_object(&self, key: u64, handle: u64, kind: ObjectKind) {
        if handle == 0 {
            return;
        }
        let Some(home) = self.home_scope(key, kind) else {
            return;
        };
        if home.table().remove(kind, handle).is_none() {
            debug!(%kind, "destroy of untracked object {:#x}", handle);
            return;
        }
        // A destroyed dispatchable keeps routing to its scope until the
        // scope is torn down, so later calls through it still resolve.
        for &child in kind.children() {
            self.remove_children(&home, handle, child);
        }
    }

    /// Forget every `kind` object produced from `parent` (descriptor pool
    /// reset). Returns how many were removed.
    pub fn free_children(&self, key: u64, parent: u64, kind: ObjectKind) -> usize {
        match self.home_scope(key, kind) {
            Some(home) => self.remove_children(&home, parent, kind),
            None => 0,
        }
    }

    fn remove_children(&self, home: &Scope, parent: u64, kind: ObjectKind) -> usize {
        let removed = home.table().remove_children(kind, parent);
        for record in &removed {
            for &grandchild in kind.children() {
                self.remove_children(home, record.handle, grandchild);
            }
        }
        removed.len()
    }

    /// Live objects of `kind` in the table calls through `key` record into.
    pub fn live_count(&self, key: u64, kind: ObjectKind) -> usize {
        self.home_scope(key, kind)
            .map_or(0, |home| home.table().count(kind))
    }
}

impl Default for Tracker {
    fn default() -> Self {
        Self::with_sink(Arc::new(TracingSink))
    }
}
