//! The object-lifetime interceptor.
//!
//! Interprets the entry-point descriptors against a [`Tracker`]: the
//! validate hook checks every handle a call names, the record hooks keep the
//! object tables in step with what the implementation created or destroyed.

use std::sync::Arc;

use ash::vk;
use tracing::{debug, trace, warn};
use vkot_core::{ObjectKind, TeardownPolicy, Tracker, Vuid};

use crate::call::{ApiCall, Arg};
use crate::chassis::{Hooks, Interceptor};
use crate::entry_point::{self, EntryPoint, EntryPointTable, HandleParam, ParamKind, ParentRef, ScopeEvent};

pub struct ObjectTracker {
    tracker: Arc<Tracker>,
    table: &'static EntryPointTable,
}

impl ObjectTracker {
    pub fn new(tracker: Arc<Tracker>) -> Self {
        Self {
            tracker,
            table: entry_point::table(),
        }
    }

    pub fn tracker(&self) -> &Arc<Tracker> {
        &self.tracker
    }

    fn entry(&self, call: &ApiCall) -> Option<&'static EntryPoint> {
        let entry = self.table.get(call.command);
        if entry.is_none() {
            warn!("{} has no descriptor; passing through", call.command);
        }
        entry
    }

    fn teardown_policy(&self) -> TeardownPolicy {
        self.tracker.config().teardown
    }

    /// Validate one handle parameter at every position it occurs in.
    fn validate_param(&self, param: &HandleParam, call: &ApiCall) -> bool {
        let key = call.dispatch;
        let mut skip = false;
        param.path.visit(&call.args, &mut |indices, container, handle| {
            let kind = match param.kind {
                ParamKind::Fixed(kind) => kind,
                ParamKind::TaggedBy(field) => match tag(container.get(field)) {
                    Some(raw) => match ObjectKind::from_object_type(vk::ObjectType::from_raw(raw)) {
                        Some(kind) => kind,
                        // Types this layer does not track cannot be checked
                        None => return,
                    },
                    None => return,
                },
                ParamKind::ReportTaggedBy(field) => match tag(container.get(field)) {
                    Some(raw) => match ObjectKind::from_debug_report_object_type(
                        vk::DebugReportObjectTypeEXT::from_raw(raw),
                    ) {
                        Some(kind) => kind,
                        None => return,
                    },
                    None => return,
                },
            };
            let location = param.path.location(indices);
            let invalid = self.tracker.validate_object_at(
                Some(&location),
                key,
                handle,
                kind,
                param.null_ok,
                &param.vuid,
                &param.parent_vuid,
            );
            skip |= invalid;
            if invalid {
                return;
            }
            if let Some(pool) = param.pool.as_ref().and_then(|p| p.first(&call.args)) {
                skip |= self
                    .tracker
                    .validate_parent(Some(&location), key, handle, kind, pool, &param.pool_vuid);
            }
        });
        skip
    }

    fn validate_destroys(&self, entry: &EntryPoint, call: &ApiCall) -> bool {
        let key = call.dispatch;
        entry
            .destroys
            .iter()
            .filter(|target| target.check_allocator)
            .fold(false, |skip, target| {
                let handles = match &target.path {
                    Some(path) => path.handles(&call.args),
                    None => vec![key],
                };
                handles.into_iter().fold(skip, |skip, handle| {
                    skip | self.tracker.validate_destroy_allocator(
                        key,
                        handle,
                        target.kind,
                        call.custom_allocator,
                        &target.vuid_custom_allocator,
                        &target.vuid_default_allocator,
                    )
                })
            })
    }

    fn record_creates(&self, entry: &EntryPoint, call: &ApiCall, result: vk::Result) {
        let succeeded = result.as_raw() >= 0;
        let key = call.dispatch;
        for target in &entry.creates {
            if !succeeded && !target.partial {
                continue;
            }
            let parent = match &target.parent {
                Some(ParentRef::Dispatch) => Some(key),
                Some(ParentRef::Arg(path)) => path.first(&call.args),
                None => None,
            };
            for handle in target.path.handles(&call.args) {
                self.tracker.create_object_with(
                    key,
                    handle,
                    target.kind,
                    call.custom_allocator,
                    parent,
                    target.origin,
                );
            }
        }
    }

    fn record_scope_created(&self, event: ScopeEvent, call: &ApiCall, result: vk::Result) {
        if result != vk::Result::SUCCESS {
            return;
        }
        match event {
            ScopeEvent::CreateInstance => {
                let Some(instance) = call.get("pInstance").and_then(Arg::as_handle).filter(|h| *h != 0)
                else {
                    warn!("vkCreateInstance succeeded without returning an instance");
                    return;
                };
                self.tracker.create_instance_scope(instance, call.custom_allocator);
            }
            ScopeEvent::CreateDevice => {
                let Some(device) = call.get("pDevice").and_then(Arg::as_handle).filter(|h| *h != 0)
                else {
                    warn!("vkCreateDevice succeeded without returning a device");
                    return;
                };
                if let Err(e) = self
                    .tracker
                    .create_device_scope(call.dispatch, device, call.custom_allocator)
                {
                    warn!("cannot track device {:#x}: {}", device, e);
                }
            }
            ScopeEvent::DestroyInstance | ScopeEvent::DestroyDevice => {}
        }
    }
}

/// Raw enum value of an object type discriminator field.
fn tag(field: Option<&Arg>) -> Option<i32> {
    match field? {
        Arg::Value(raw) => Some(*raw as u32 as i32),
        _ => None,
    }
}

impl Interceptor for ObjectTracker {
    fn name(&self) -> &'static str {
        "object_tracker"
    }

    fn hooks(&self) -> Hooks {
        Hooks::all()
    }

    fn pre_call_validate(&self, call: &ApiCall) -> bool {
        let Some(entry) = self.entry(call) else {
            return false;
        };
        let mut skip = false;
        if let Some(dispatch) = &entry.dispatch {
            skip |= self.tracker.validate_object(
                call.dispatch,
                call.dispatch,
                dispatch.kind,
                false,
                &dispatch.vuid,
                &Vuid::Undefined,
            );
            // Nothing else can be resolved without a scope
            if skip && self.tracker.registry().resolve(call.dispatch).is_none() {
                return true;
            }
        }
        let skip = entry
            .params
            .iter()
            .fold(skip, |skip, param| skip | self.validate_param(param, call));
        let skip = skip | self.validate_destroys(entry, call);
        if skip {
            debug!("{} failed object validation", call.command);
        }
        skip
    }

    fn pre_call_record(&self, call: &ApiCall) {
        let Some(entry) = self.entry(call) else {
            return;
        };
        let key = call.dispatch;
        for target in &entry.destroys {
            if let Some(path) = &target.path {
                for handle in path.handles(&call.args) {
                    self.tracker.record_destroy_object(key, handle, target.kind);
                }
            }
        }
        for reset in &entry.resets {
            if let Some(pool) = reset.pool.first(&call.args) {
                let freed = self.tracker.free_children(key, pool, reset.kind);
                trace!(freed, "{} released {} objects", call.command, reset.kind);
            }
        }
        match entry.scope_event {
            Some(ScopeEvent::DestroyDevice) => {
                self.tracker.destroy_device_scope(key, self.teardown_policy());
            }
            Some(ScopeEvent::DestroyInstance) => {
                self.tracker.destroy_instance_scope(key, self.teardown_policy());
            }
            _ => {}
        }
    }

    fn post_call_record(&self, call: &ApiCall, result: vk::Result) {
        let Some(entry) = self.entry(call) else {
            return;
        };
        if let Some(event) = entry.scope_event {
            self.record_scope_created(event, call, result);
        }
        self.record_creates(entry, call, result);
    }
}
