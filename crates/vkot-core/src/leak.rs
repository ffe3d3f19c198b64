//! Undestroyed-object reporting at scope teardown.

use crate::handle::ObjectKind;
use crate::object_table::Origin;
use crate::report::{Report, ReportSink, Violation, Vuid};
use crate::scope::{Scope, ScopeRegistry};

/// Reported for objects still alive when their device is destroyed.
pub const DEVICE_LEAK_VUID: &str = "VUID-vkDestroyDevice-device-00378";
/// Reported for objects (including devices) still alive when their instance is destroyed.
pub const INSTANCE_LEAK_VUID: &str = "VUID-vkDestroyInstance-instance-00629";

/// Report every application-created object still in `scope`, walking kinds
/// in declaration order. Leaves the table untouched.
pub fn report_undestroyed(scope: &Scope, sink: &dyn ReportSink, vuid: &Vuid) -> usize {
    let mut reported = 0;
    for kind in ObjectKind::leak_kinds(scope.level()) {
        scope.table().for_each_of_kind(kind, |record| {
            if record.origin == Origin::Created {
                sink.report(
                    Report::new(Violation::StillInUse, vuid.clone(), kind, record.handle)
                        .in_scope(scope.id()),
                );
                reported += 1;
            }
        });
    }
    reported
}

/// Empty `scope`'s table. Dispatchable records other than the scope's own
/// handle stop routing to it. Returns how many removed records were leaks:
/// application-created objects of the kinds the reporter walks.
pub fn destroy_undestroyed(scope: &Scope, registry: &ScopeRegistry) -> usize {
    let mut leaked = 0;
    for &kind in ObjectKind::ALL {
        let counted = ObjectKind::leak_kinds(scope.level()).any(|k| k == kind);
        for record in scope.table().drain_kind(kind) {
            if kind.is_dispatchable() && record.handle != scope.handle() {
                registry.unbind_from(record.handle, scope.id());
            }
            if counted && record.origin == Origin::Created {
                leaked += 1;
            }
        }
    }
    leaked
}
