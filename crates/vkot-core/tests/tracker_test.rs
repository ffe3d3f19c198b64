//! Integration test: Tracker
//!
//! Drives the tracking engine directly (no interceptor chain): scope
//! lifecycle, existence and parentage checks, allocator matching, cascades
//! and teardown reporting.
//!
//! Run with: cargo test -p vkot-core --test tracker_test

use std::sync::Arc;

use vkot_core::{
    CollectSink, ObjectKind, Origin, TeardownPolicy, Tracker, TrackerConfig, Violation, Vuid,
};

const INSTANCE: u64 = 0x1000;
const PHYSICAL_DEVICE: u64 = 0x1100;
const DEVICE: u64 = 0x2000;
const DEVICE2: u64 = 0x3000;

fn make_tracker() -> (Tracker, Arc<CollectSink>) {
    make_tracker_with(TrackerConfig::default())
}

fn make_tracker_with(config: TrackerConfig) -> (Tracker, Arc<CollectSink>) {
    let sink = Arc::new(CollectSink::new());
    (Tracker::new(config, sink.clone()), sink)
}

/// Instance with one enumerated physical device.
fn with_instance(tracker: &Tracker) {
    tracker.create_instance_scope(INSTANCE, false);
    tracker.create_object_with(
        INSTANCE,
        PHYSICAL_DEVICE,
        ObjectKind::PhysicalDevice,
        false,
        Some(INSTANCE),
        Origin::Retrieved,
    );
}

fn with_device(tracker: &Tracker, device: u64) {
    tracker
        .create_device_scope(PHYSICAL_DEVICE, device, false)
        .expect("device scope");
}

fn not_found() -> Vuid {
    Vuid::new("VUID-test-parameter")
}

#[test]
fn test_created_object_is_valid_until_destroyed() {
    let (tracker, sink) = make_tracker();
    with_instance(&tracker);
    with_device(&tracker, DEVICE);

    let buffer = 0xB0;
    tracker.create_object(DEVICE, buffer, ObjectKind::Buffer, false);
    assert!(!tracker.validate_object(DEVICE, buffer, ObjectKind::Buffer, false, &not_found(), &Vuid::Undefined));
    assert!(sink.is_empty());

    tracker.record_destroy_object(DEVICE, buffer, ObjectKind::Buffer);
    assert!(tracker.validate_object(DEVICE, buffer, ObjectKind::Buffer, false, &not_found(), &Vuid::Undefined));

    let reports = sink.take();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].violation, Violation::NotFound);
    assert_eq!(reports[0].kind, ObjectKind::Buffer);
    assert_eq!(reports[0].handle, buffer);
    assert_eq!(reports[0].vuid.as_str(), "VUID-test-parameter");
}

#[test]
fn test_null_handle_policy() {
    let (tracker, sink) = make_tracker();
    with_instance(&tracker);
    with_device(&tracker, DEVICE);

    assert!(!tracker.validate_object(DEVICE, 0, ObjectKind::Fence, true, &not_found(), &Vuid::Undefined));
    assert!(sink.is_empty());

    assert!(tracker.validate_object(DEVICE, 0, ObjectKind::Fence, false, &not_found(), &Vuid::Undefined));
    assert_eq!(sink.count(Violation::NullNotAllowed), 1);
}

#[test]
fn test_scopes_are_independent() {
    let (tracker, sink) = make_tracker();
    with_instance(&tracker);
    with_device(&tracker, DEVICE);
    with_device(&tracker, DEVICE2);

    let buffer = 0xB1;
    tracker.create_object(DEVICE, buffer, ObjectKind::Buffer, false);

    assert!(tracker.validate_object(DEVICE2, buffer, ObjectKind::Buffer, false, &not_found(), &Vuid::Undefined));
    let reports = sink.take();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].violation, Violation::NotFound);

    // Still valid where it was created
    assert!(!tracker.validate_object(DEVICE, buffer, ObjectKind::Buffer, false, &not_found(), &Vuid::Undefined));
}

#[test]
fn test_wrong_parent_reported_when_identifier_defined() {
    let (tracker, sink) = make_tracker();
    with_instance(&tracker);
    with_device(&tracker, DEVICE);
    with_device(&tracker, DEVICE2);

    let buffer = 0xB2;
    tracker.create_object(DEVICE, buffer, ObjectKind::Buffer, false);

    let parent = Vuid::new("VUID-test-parent");
    assert!(tracker.validate_object(DEVICE2, buffer, ObjectKind::Buffer, false, &not_found(), &parent));
    let reports = sink.take();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].violation, Violation::WrongParent);
    assert_eq!(reports[0].vuid.as_str(), "VUID-test-parent");
}

#[test]
fn test_wrong_parent_search_can_be_disabled() {
    let config = TrackerConfig {
        report_wrong_parent: false,
        ..TrackerConfig::default()
    };
    let (tracker, sink) = make_tracker_with(config);
    with_instance(&tracker);
    with_device(&tracker, DEVICE);
    with_device(&tracker, DEVICE2);

    let buffer = 0xB3;
    tracker.create_object(DEVICE, buffer, ObjectKind::Buffer, false);
    assert!(tracker.validate_object(
        DEVICE2,
        buffer,
        ObjectKind::Buffer,
        false,
        &not_found(),
        &Vuid::new("VUID-test-parent"),
    ));
    assert_eq!(sink.count(Violation::NotFound), 1);
    assert_eq!(sink.count(Violation::WrongParent), 0);
}

#[test]
fn test_instance_level_objects_visible_from_device() {
    let (tracker, sink) = make_tracker();
    with_instance(&tracker);
    with_device(&tracker, DEVICE);

    let surface = 0x5005;
    tracker.create_object(INSTANCE, surface, ObjectKind::SurfaceKHR, false);
    assert!(!tracker.validate_object(DEVICE, surface, ObjectKind::SurfaceKHR, false, &not_found(), &Vuid::Undefined));
    // The device itself lives in the instance table
    assert!(!tracker.validate_object(DEVICE, DEVICE, ObjectKind::Device, false, &not_found(), &Vuid::Undefined));
    assert!(sink.is_empty());
}

#[test]
fn test_allocator_mismatch() {
    let (tracker, sink) = make_tracker();
    with_instance(&tracker);
    with_device(&tracker, DEVICE);

    let custom = Vuid::new("VUID-test-custom");
    let default = Vuid::new("VUID-test-default");

    let memory = 0xD0;
    tracker.create_object(DEVICE, memory, ObjectKind::DeviceMemory, true);
    assert!(tracker.validate_destroy_allocator(DEVICE, memory, ObjectKind::DeviceMemory, false, &custom, &default));
    let reports = sink.take();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].violation, Violation::AllocatorMismatch);
    assert_eq!(reports[0].vuid, custom);

    let image = 0xD1;
    tracker.create_object(DEVICE, image, ObjectKind::Image, false);
    assert!(tracker.validate_destroy_allocator(DEVICE, image, ObjectKind::Image, true, &custom, &default));
    assert_eq!(sink.take()[0].vuid, default);

    // Matching pattern, untracked and null handles all pass
    assert!(!tracker.validate_destroy_allocator(DEVICE, memory, ObjectKind::DeviceMemory, true, &custom, &default));
    assert!(!tracker.validate_destroy_allocator(DEVICE, 0xDEAD, ObjectKind::Buffer, true, &custom, &default));
    assert!(!tracker.validate_destroy_allocator(DEVICE, 0, ObjectKind::Buffer, true, &custom, &default));
    assert!(sink.is_empty());
}

#[test]
fn test_destroy_of_untracked_object() {
    let (tracker, sink) = make_tracker();
    with_instance(&tracker);
    with_device(&tracker, DEVICE);

    let not_found = Vuid::new("VUID-vkDestroyBuffer-buffer-parameter");
    let custom = Vuid::new("VUID-vkDestroyBuffer-buffer-00923");
    let default = Vuid::new("VUID-vkDestroyBuffer-buffer-00924");

    // Null is allowed and untracked is not
    assert!(!tracker.validate_destroy_object(DEVICE, 0, ObjectKind::Buffer, false, &not_found, &custom, &default));
    assert!(tracker.validate_destroy_object(DEVICE, 0xDEAD, ObjectKind::Buffer, false, &not_found, &custom, &default));
    let reports = sink.take();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].violation, Violation::NotFound);
    assert_eq!(reports[0].vuid, not_found);

    // A live object still has its allocator pattern checked
    let buffer = 0xB4;
    tracker.create_object(DEVICE, buffer, ObjectKind::Buffer, true);
    assert!(tracker.validate_destroy_object(DEVICE, buffer, ObjectKind::Buffer, false, &not_found, &custom, &default));
    assert_eq!(sink.take()[0].violation, Violation::AllocatorMismatch);
    assert!(!tracker.validate_destroy_object(DEVICE, buffer, ObjectKind::Buffer, true, &not_found, &custom, &default));
    assert!(sink.is_empty());
}

#[test]
fn test_undefined_identifier_still_detected() {
    let (tracker, sink) = make_tracker();
    with_instance(&tracker);
    with_device(&tracker, DEVICE);

    let memory = 0xD2;
    tracker.create_object(DEVICE, memory, ObjectKind::DeviceMemory, true);
    assert!(tracker.validate_destroy_allocator(
        DEVICE,
        memory,
        ObjectKind::DeviceMemory,
        false,
        &Vuid::Undefined,
        &Vuid::Undefined,
    ));
    let reports = sink.take();
    assert_eq!(reports.len(), 1);
    assert!(reports[0].vuid.is_undefined());
    assert_eq!(reports[0].vuid.as_str(), "VUID_Undefined");
}

#[test]
fn test_unknown_dispatch_key() {
    let (tracker, sink) = make_tracker();
    assert!(tracker.validate_object(0x9999, 0xB0, ObjectKind::Buffer, false, &not_found(), &Vuid::Undefined));
    assert_eq!(sink.count(Violation::NotFound), 1);
}

#[test]
fn test_command_pool_destroy_frees_command_buffers() {
    let (tracker, sink) = make_tracker();
    with_instance(&tracker);
    with_device(&tracker, DEVICE);

    let pool = 0xC0;
    tracker.create_object(DEVICE, pool, ObjectKind::CommandPool, false);
    for cb in [0xC1, 0xC2, 0xC3] {
        tracker.create_object_with(DEVICE, cb, ObjectKind::CommandBuffer, false, Some(pool), Origin::Created);
    }
    assert_eq!(tracker.live_count(DEVICE, ObjectKind::CommandBuffer), 3);
    // Command buffers resolve to the device scope
    assert!(tracker.registry().resolve(0xC1).is_some());

    tracker.record_destroy_object(DEVICE, pool, ObjectKind::CommandPool);
    assert_eq!(tracker.live_count(DEVICE, ObjectKind::CommandBuffer), 0);
    assert!(tracker.lookup(DEVICE, ObjectKind::CommandBuffer, 0xC1).is_none());

    // Freed command buffers keep routing to the device, so calls made
    // through them are still checked against its table
    assert!(tracker.registry().resolve(0xC1).is_some());
    assert!(tracker.validate_object(0xC1, 0xC1, ObjectKind::CommandBuffer, false, &not_found(), &Vuid::Undefined));
    assert!(tracker.validate_object(0xC1, 0xBAD0, ObjectKind::Pipeline, false, &not_found(), &Vuid::Undefined));
    assert_eq!(sink.count(Violation::NotFound), 2);
}

#[test]
fn test_descriptor_pool_reset_frees_sets() {
    let (tracker, _sink) = make_tracker();
    with_instance(&tracker);
    with_device(&tracker, DEVICE);

    let (pool_a, pool_b) = (0xE0, 0xF0);
    tracker.create_object(DEVICE, pool_a, ObjectKind::DescriptorPool, false);
    tracker.create_object(DEVICE, pool_b, ObjectKind::DescriptorPool, false);
    tracker.create_object_with(DEVICE, 0xE1, ObjectKind::DescriptorSet, false, Some(pool_a), Origin::Created);
    tracker.create_object_with(DEVICE, 0xE2, ObjectKind::DescriptorSet, false, Some(pool_a), Origin::Created);
    tracker.create_object_with(DEVICE, 0xF1, ObjectKind::DescriptorSet, false, Some(pool_b), Origin::Created);

    assert_eq!(tracker.free_children(DEVICE, pool_a, ObjectKind::DescriptorSet), 2);
    assert_eq!(tracker.live_count(DEVICE, ObjectKind::DescriptorSet), 1);
    assert_eq!(tracker.live_count(DEVICE, ObjectKind::DescriptorPool), 2);
}

#[test]
fn test_validate_parent() {
    let (tracker, sink) = make_tracker();
    with_instance(&tracker);
    with_device(&tracker, DEVICE);

    let (pool_a, pool_b, cb) = (0xC0, 0xC8, 0xC9);
    tracker.create_object(DEVICE, pool_a, ObjectKind::CommandPool, false);
    tracker.create_object(DEVICE, pool_b, ObjectKind::CommandPool, false);
    tracker.create_object_with(DEVICE, cb, ObjectKind::CommandBuffer, false, Some(pool_a), Origin::Created);

    let vuid = Vuid::new("VUID-vkFreeCommandBuffers-pCommandBuffers-parent");
    assert!(!tracker.validate_parent(None, DEVICE, cb, ObjectKind::CommandBuffer, pool_a, &vuid));
    assert!(tracker.validate_parent(Some("pCommandBuffers[0]"), DEVICE, cb, ObjectKind::CommandBuffer, pool_b, &vuid));

    let reports = sink.take();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].violation, Violation::WrongParent);
    assert_eq!(reports[0].location.as_deref(), Some("pCommandBuffers[0]"));
}

#[test]
fn test_device_teardown_reports_leaks_once() {
    let (tracker, sink) = make_tracker();
    with_instance(&tracker);
    with_device(&tracker, DEVICE);

    let pool = 0xC0;
    tracker.create_object(DEVICE, pool, ObjectKind::CommandPool, false);
    let queue = 0x0A;
    tracker.create_object_with(DEVICE, queue, ObjectKind::Queue, false, Some(DEVICE), Origin::Retrieved);

    let leaked = tracker.destroy_device_scope(DEVICE, TeardownPolicy::Report);
    assert_eq!(leaked, 1);

    let reports = sink.take();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].violation, Violation::StillInUse);
    assert_eq!(reports[0].kind, ObjectKind::CommandPool);
    assert_eq!(reports[0].handle, pool);
    assert_eq!(reports[0].vuid.as_str(), "VUID-vkDestroyDevice-device-00378");

    // Scope and device record are gone
    assert!(tracker.registry().resolve(DEVICE).is_none());
    assert!(tracker.registry().resolve(queue).is_none());
    assert!(tracker.lookup(INSTANCE, ObjectKind::Device, DEVICE).is_none());

    // A second teardown finds nothing
    assert_eq!(tracker.destroy_device_scope(DEVICE, TeardownPolicy::Report), 0);
    assert!(sink.is_empty());
}

#[test]
fn test_report_undestroyed_is_idempotent() {
    let (tracker, sink) = make_tracker();
    with_instance(&tracker);
    with_device(&tracker, DEVICE);
    tracker.create_object(DEVICE, 0xB0, ObjectKind::Buffer, false);

    let vuid = Vuid::new("VUID-vkDestroyDevice-device-00378");
    assert_eq!(tracker.report_undestroyed(DEVICE, &vuid), 1);
    assert_eq!(tracker.report_undestroyed(DEVICE, &vuid), 1);
    assert_eq!(sink.len(), 2);
    assert_eq!(tracker.live_count(DEVICE, ObjectKind::Buffer), 1);

    assert_eq!(tracker.destroy_undestroyed(DEVICE), 1);
    assert_eq!(tracker.live_count(DEVICE, ObjectKind::Buffer), 0);
}

#[test]
fn test_destroy_undestroyed_empties_scope() {
    let (tracker, _sink) = make_tracker();
    with_instance(&tracker);
    with_device(&tracker, DEVICE);

    let queue = 0x0A;
    tracker.create_object_with(DEVICE, queue, ObjectKind::Queue, false, Some(DEVICE), Origin::Retrieved);
    tracker.create_object(DEVICE, 0xB0, ObjectKind::Buffer, false);
    assert!(tracker.registry().resolve(queue).is_some());

    // Only the buffer counts as leaked, but the queue goes too
    assert_eq!(tracker.destroy_undestroyed(DEVICE), 1);
    let scope = tracker.registry().resolve(DEVICE).expect("device scope");
    assert!(scope.table().is_empty());
    assert!(tracker.registry().resolve(queue).is_none());
    assert_eq!(tracker.destroy_undestroyed(DEVICE), 0);
}

#[test]
fn test_destroy_policy_is_silent() {
    let (tracker, sink) = make_tracker();
    with_instance(&tracker);
    with_device(&tracker, DEVICE);
    tracker.create_object(DEVICE, 0xB0, ObjectKind::Buffer, false);

    assert_eq!(tracker.destroy_device_scope(DEVICE, TeardownPolicy::Destroy), 1);
    assert!(sink.is_empty());
}

#[test]
fn test_instance_teardown_covers_devices() {
    let (tracker, sink) = make_tracker();
    with_instance(&tracker);
    with_device(&tracker, DEVICE);
    tracker.create_object(DEVICE, 0xB0, ObjectKind::Buffer, false);
    tracker.create_object(INSTANCE, 0x5005, ObjectKind::SurfaceKHR, false);

    // surface + device at instance level, buffer at device level
    assert_eq!(tracker.destroy_instance_scope(INSTANCE, TeardownPolicy::Report), 3);

    let reports = sink.take();
    assert!(reports
        .iter()
        .any(|r| r.kind == ObjectKind::Device && r.vuid.as_str() == "VUID-vkDestroyInstance-instance-00629"));
    assert!(reports
        .iter()
        .any(|r| r.kind == ObjectKind::SurfaceKHR && r.vuid.as_str() == "VUID-vkDestroyInstance-instance-00629"));
    assert!(reports
        .iter()
        .any(|r| r.kind == ObjectKind::Buffer && r.vuid.as_str() == "VUID-vkDestroyDevice-device-00378"));
    // Physical devices are never reported
    assert!(reports.iter().all(|r| r.kind != ObjectKind::PhysicalDevice));
    assert!(tracker.registry().is_empty());
}

#[test]
fn test_create_device_under_unknown_physical_device() {
    let (tracker, _sink) = make_tracker();
    assert!(tracker.create_device_scope(0x4242, DEVICE, false).is_err());
    assert!(tracker.registry().is_empty());
}
