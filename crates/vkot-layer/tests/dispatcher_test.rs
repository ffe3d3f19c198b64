//! Integration test: ObjectTracker through the interceptor chain
//!
//! A fake driver stands in for the next layer: it mints handles and writes
//! them into the call's output parameters, so create/destroy bookkeeping is
//! exercised end to end through `Layer::call`.
//!
//! Run with: cargo test -p vkot-layer --test dispatcher_test -- --nocapture

use std::cell::Cell;
use std::sync::Arc;

use ash::vk;
use vkot_core::{CollectSink, LayerConfig, ObjectKind, TeardownPolicy, TrackerConfig, Violation};
use vkot_layer::{ApiCall, Arg, Args, CallOutcome, Command as C, Layer};

struct Harness {
    layer: Layer,
    sink: Arc<CollectSink>,
    next_handle: Cell<u64>,
    instance: u64,
    physical_device: u64,
    device: u64,
    queue: u64,
}

impl Harness {
    fn new() -> Self {
        Self::with_config(TrackerConfig::default())
    }

    /// Instance, one physical device, one device and its first queue.
    fn with_config(tracker: TrackerConfig) -> Self {
        let sink = Arc::new(CollectSink::new());
        let config = LayerConfig {
            object_tracker: tracker,
            ..LayerConfig::default()
        };
        let mut h = Harness {
            layer: Layer::new(config, sink.clone()),
            sink,
            next_handle: Cell::new(0x1000),
            instance: 0,
            physical_device: 0,
            device: 0,
            queue: 0,
        };
        h.instance = h.create(ApiCall::global(C::CreateInstance), "pInstance");
        h.physical_device = h.retrieve_many(
            ApiCall::with_raw_dispatch(C::EnumeratePhysicalDevices, h.instance),
            "pPhysicalDevices",
            1,
        )[0];
        h.device = h.create(
            ApiCall::with_raw_dispatch(C::CreateDevice, h.physical_device),
            "pDevice",
        );
        h.queue = h.create(
            ApiCall::with_raw_dispatch(C::GetDeviceQueue, h.device).value("queueFamilyIndex", 0),
            "pQueue",
        );
        assert!(h.sink.is_empty(), "setup reported {:?}", h.sink.reports());
        h
    }

    fn mint(&self) -> u64 {
        let handle = self.next_handle.get();
        self.next_handle.set(handle + 0x10);
        handle
    }

    /// Forward a call whose driver returns one new handle in `output`.
    fn create(&self, mut call: ApiCall, output: &'static str) -> u64 {
        let handle = self.mint();
        let outcome = self
            .layer
            .call(&mut call, |c| {
                c.set_handle(output, handle);
                vk::Result::SUCCESS
            })
            .expect("dispatch");
        assert_eq!(outcome, CallOutcome::Forwarded(vk::Result::SUCCESS));
        handle
    }

    /// Forward a call whose driver fills an array of `count` handles.
    fn retrieve_many(&self, mut call: ApiCall, output: &'static str, count: usize) -> Vec<u64> {
        let handles: Vec<u64> = (0..count).map(|_| self.mint()).collect();
        let written = handles.clone();
        let outcome = self
            .layer
            .call(&mut call, |c| {
                c.set_handles(output, written);
                vk::Result::SUCCESS
            })
            .expect("dispatch");
        assert_eq!(outcome, CallOutcome::Forwarded(vk::Result::SUCCESS));
        handles
    }

    /// Forward a call whose driver writes `arg` into `output` as is.
    fn fill(&self, mut call: ApiCall, output: &'static str, arg: Arg) {
        let outcome = self
            .layer
            .call(&mut call, |c| {
                c.set(output, arg);
                vk::Result::SUCCESS
            })
            .expect("dispatch");
        assert_eq!(outcome, CallOutcome::Forwarded(vk::Result::SUCCESS));
    }

    /// A second device on the same physical device.
    fn second_device(&self) -> u64 {
        self.create(
            ApiCall::with_raw_dispatch(C::CreateDevice, self.physical_device),
            "pDevice",
        )
    }

    /// Forward a call with no outputs; reports whether the driver ran.
    fn forward(&self, mut call: ApiCall) -> (CallOutcome, bool) {
        let mut called = false;
        let outcome = self
            .layer
            .call(&mut call, |_| {
                called = true;
                vk::Result::SUCCESS
            })
            .expect("dispatch");
        (outcome, called)
    }

    fn device_call(&self, command: C) -> ApiCall {
        ApiCall::with_raw_dispatch(command, self.device)
    }

    fn semaphore(&self) -> u64 {
        self.create(self.device_call(C::CreateSemaphore), "pSemaphore")
    }

    fn command_pool(&self) -> u64 {
        self.create(self.device_call(C::CreateCommandPool), "pCommandPool")
    }

    fn command_buffers(&self, pool: u64, count: usize) -> Vec<u64> {
        self.retrieve_many(
            self.device_call(C::AllocateCommandBuffers)
                .nested("pAllocateInfo", Args::new().raw_handle("commandPool", pool)),
            "pCommandBuffers",
            count,
        )
    }
}

fn raw_array(handles: &[u64]) -> Arg {
    Arg::Array(handles.iter().copied().map(Arg::Handle).collect())
}

#[test]
fn test_surface_usable_from_physical_device() {
    let h = Harness::new();
    let surface = h.create(
        ApiCall::with_raw_dispatch(C::CreateHeadlessSurfaceEXT, h.instance),
        "pSurface",
    );

    let (outcome, called) = h.forward(
        ApiCall::with_raw_dispatch(C::GetPhysicalDeviceSurfaceSupportKHR, h.physical_device)
            .value("queueFamilyIndex", 0)
            .raw_handle("surface", surface),
    );
    assert_eq!(outcome, CallOutcome::Forwarded(vk::Result::SUCCESS));
    assert!(called);
    assert!(h.sink.is_empty());

    // Also visible through the device (instance-level kind)
    let (outcome, _) = h.forward(
        h.device_call(C::CreateSwapchainKHR)
            .nested("pCreateInfo", Args::new().raw_handle("surface", surface)),
    );
    assert!(!outcome.is_skipped());
    assert!(h.sink.is_empty());
}

#[test]
fn test_submit_reports_each_bad_semaphore_once() {
    let h = Harness::new();
    let good_a = h.semaphore();
    let good_b = h.semaphore();
    let bogus = 0xBAD0;

    let submit = Args::new().with("pWaitSemaphores", raw_array(&[good_a, bogus, good_b]));
    let (outcome, called) = h.forward(
        ApiCall::with_raw_dispatch(C::QueueSubmit, h.queue).structs("pSubmits", vec![submit]),
    );

    assert!(outcome.is_skipped());
    assert_eq!(outcome.result(), vk::Result::ERROR_VALIDATION_FAILED_EXT);
    assert!(!called, "vetoed call must not reach the driver");

    let reports = h.sink.take();
    assert_eq!(reports.len(), 1, "got {:?}", reports);
    assert_eq!(reports[0].violation, Violation::NotFound);
    assert_eq!(reports[0].kind, ObjectKind::Semaphore);
    assert_eq!(reports[0].handle, bogus);
    assert_eq!(reports[0].vuid.as_str(), "VUID-VkSubmitInfo-pWaitSemaphores-parameter");
    assert_eq!(reports[0].location.as_deref(), Some("pSubmits[0].pWaitSemaphores[1]"));
}

#[test]
fn test_submit_with_valid_handles() {
    let h = Harness::new();
    let pool = h.command_pool();
    let cbs = h.command_buffers(pool, 2);
    let wait = h.semaphore();
    let signal = h.semaphore();
    let fence = h.create(h.device_call(C::CreateFence), "pFence");

    let submits = vec![
        Args::new()
            .with("pWaitSemaphores", raw_array(&[wait]))
            .with("pCommandBuffers", raw_array(&cbs[..1])),
        Args::new()
            .with("pCommandBuffers", raw_array(&cbs[1..]))
            .with("pSignalSemaphores", raw_array(&[signal])),
    ];
    let (outcome, called) = h.forward(
        ApiCall::with_raw_dispatch(C::QueueSubmit, h.queue)
            .structs("pSubmits", submits)
            .raw_handle("fence", fence),
    );
    assert_eq!(outcome, CallOutcome::Forwarded(vk::Result::SUCCESS));
    assert!(called);
    assert!(h.sink.is_empty(), "unexpected {:?}", h.sink.reports());
}

#[test]
fn test_veto_disabled_still_forwards() {
    let h = Harness::with_config(TrackerConfig {
        skip_on_violation: false,
        ..TrackerConfig::default()
    });

    let (outcome, called) = h.forward(h.device_call(C::DestroyBuffer).raw_handle("buffer", 0xDEAD0));
    assert_eq!(outcome, CallOutcome::Forwarded(vk::Result::SUCCESS));
    assert!(called);
    assert_eq!(h.sink.count(Violation::NotFound), 1);
    assert!(h.sink.has_vuid("VUID-vkDestroyBuffer-buffer-parameter"));
}

#[test]
fn test_unknown_dispatch_key_skips_remaining_checks() {
    let h = Harness::new();
    let (outcome, called) = h.forward(
        ApiCall::with_raw_dispatch(C::CmdBindPipeline, 0x7777).raw_handle("pipeline", 0xBAD0),
    );
    assert!(outcome.is_skipped());
    assert!(!called);
    // No scope to look the pipeline up in
    let reports = h.sink.take();
    assert_eq!(reports.len(), 1, "got {:?}", reports);
    assert_eq!(reports[0].kind, ObjectKind::CommandBuffer);
    assert_eq!(reports[0].vuid.as_str(), "VUID-vkCmdBindPipeline-commandBuffer-parameter");
}

#[test]
fn test_freed_command_buffer_still_validates_arguments() {
    let h = Harness::new();
    let pool = h.command_pool();
    let cb = h.command_buffers(pool, 1)[0];

    let (outcome, _) = h.forward(
        h.device_call(C::FreeCommandBuffers)
            .raw_handle("commandPool", pool)
            .with("pCommandBuffers", raw_array(&[cb])),
    );
    assert!(!outcome.is_skipped());

    let bogus = 0xBAD0;
    let (outcome, called) = h.forward(
        ApiCall::with_raw_dispatch(C::CmdBindPipeline, cb).raw_handle("pipeline", bogus),
    );
    assert!(outcome.is_skipped());
    assert!(!called);

    let reports = h.sink.take();
    assert_eq!(reports.len(), 2, "got {:?}", reports);
    assert_eq!(reports[0].violation, Violation::NotFound);
    assert_eq!(reports[0].kind, ObjectKind::CommandBuffer);
    assert_eq!(reports[0].handle, cb);
    assert_eq!(reports[0].vuid.as_str(), "VUID-vkCmdBindPipeline-commandBuffer-parameter");
    assert_eq!(reports[1].violation, Violation::NotFound);
    assert_eq!(reports[1].kind, ObjectKind::Pipeline);
    assert_eq!(reports[1].handle, bogus);
    assert_eq!(reports[1].vuid.as_str(), "VUID-vkCmdBindPipeline-pipeline-parameter");
}

#[test]
fn test_bind_sparse_reports_deep_memory_binding() {
    let h = Harness::new();
    let image = h.create(h.device_call(C::CreateImage), "pImage");
    let memory = h.create(h.device_call(C::AllocateMemory), "pMemory");
    let bogus = 0xBAD0;
    let bind = |m: u64| Args::new().raw_handle("memory", m);

    let image_binds = vec![
        Args::new()
            .raw_handle("image", image)
            .structs("pBinds", vec![bind(memory)]),
        Args::new()
            .raw_handle("image", image)
            .structs("pBinds", vec![bind(memory), bind(0), bind(bogus)]),
    ];
    let (outcome, called) = h.forward(
        ApiCall::with_raw_dispatch(C::QueueBindSparse, h.queue).structs(
            "pBindInfo",
            vec![Args::new().structs("pImageBinds", image_binds)],
        ),
    );
    assert!(outcome.is_skipped());
    assert!(!called);

    let reports = h.sink.take();
    assert_eq!(reports.len(), 1, "got {:?}", reports);
    assert_eq!(reports[0].violation, Violation::NotFound);
    assert_eq!(reports[0].kind, ObjectKind::DeviceMemory);
    assert_eq!(reports[0].handle, bogus);
    assert_eq!(reports[0].vuid.as_str(), "VUID-VkSparseImageMemoryBind-memory-parameter");
    assert_eq!(
        reports[0].location.as_deref(),
        Some("pBindInfo[0].pImageBinds[1].pBinds[2].memory")
    );
}

#[test]
fn test_display_plane_surface_from_retrieved_mode() {
    let h = Harness::new();
    let display = h.mint();
    h.fill(
        ApiCall::with_raw_dispatch(C::GetPhysicalDeviceDisplayPropertiesKHR, h.physical_device),
        "pProperties",
        Arg::structs(vec![Args::new().raw_handle("display", display)]),
    );
    let mode = h.mint();
    h.fill(
        ApiCall::with_raw_dispatch(C::GetDisplayModePropertiesKHR, h.physical_device)
            .raw_handle("display", display),
        "pProperties",
        Arg::structs(vec![Args::new().raw_handle("displayMode", mode)]),
    );

    let surface = h.create(
        ApiCall::with_raw_dispatch(C::CreateDisplayPlaneSurfaceKHR, h.instance)
            .nested("pCreateInfo", Args::new().raw_handle("displayMode", mode)),
        "pSurface",
    );
    assert_eq!(h.layer.tracker().live_count(h.instance, ObjectKind::SurfaceKHR), 1);

    let (outcome, called) = h.forward(
        ApiCall::with_raw_dispatch(C::GetPhysicalDeviceSurfaceSupportKHR, h.physical_device)
            .value("queueFamilyIndex", 0)
            .raw_handle("surface", surface),
    );
    assert_eq!(outcome, CallOutcome::Forwarded(vk::Result::SUCCESS));
    assert!(called);
    assert!(h.sink.is_empty(), "unexpected {:?}", h.sink.reports());
}

#[test]
fn test_copy_between_devices_reports_common_parent() {
    let h = Harness::new();
    let other = h.second_device();
    let foreign = h.create(ApiCall::with_raw_dispatch(C::CreateBuffer, other), "pBuffer");
    let local = h.create(h.device_call(C::CreateBuffer), "pBuffer");
    let pool = h.command_pool();
    let cb = h.command_buffers(pool, 1)[0];

    let (outcome, called) = h.forward(
        ApiCall::with_raw_dispatch(C::CmdCopyBuffer, cb)
            .raw_handle("srcBuffer", foreign)
            .raw_handle("dstBuffer", local),
    );
    assert!(outcome.is_skipped());
    assert!(!called);

    let reports = h.sink.take();
    assert_eq!(reports.len(), 1, "got {:?}", reports);
    assert_eq!(reports[0].violation, Violation::WrongParent);
    assert_eq!(reports[0].kind, ObjectKind::Buffer);
    assert_eq!(reports[0].handle, foreign);
    assert_eq!(reports[0].vuid.as_str(), "VUID-vkCmdCopyBuffer-commonparent");
}

#[test]
fn test_destroy_then_use() {
    let h = Harness::new();
    let buffer = h.create(h.device_call(C::CreateBuffer), "pBuffer");

    let (outcome, _) = h.forward(h.device_call(C::DestroyBuffer).raw_handle("buffer", buffer));
    assert!(!outcome.is_skipped());

    let (outcome, called) = h.forward(
        h.device_call(C::GetBufferMemoryRequirements).raw_handle("buffer", buffer),
    );
    assert!(outcome.is_skipped());
    assert!(!called);
    assert!(h.sink.has_vuid("VUID-vkGetBufferMemoryRequirements-buffer-parameter"));
}

#[test]
fn test_destroy_with_mismatched_allocator() {
    let h = Harness::new();
    let buffer = h.create(h.device_call(C::CreateBuffer).allocator(), "pBuffer");

    let (outcome, called) = h.forward(h.device_call(C::DestroyBuffer).raw_handle("buffer", buffer));
    assert!(outcome.is_skipped());
    assert!(!called);
    let reports = h.sink.take();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].violation, Violation::AllocatorMismatch);
    assert_eq!(reports[0].vuid.as_str(), "VUID-vkDestroyBuffer-buffer-00923");

    // The skipped destroy left the buffer tracked
    assert_eq!(h.layer.tracker().live_count(h.device, ObjectKind::Buffer), 1);
    let (outcome, _) = h.forward(
        h.device_call(C::DestroyBuffer).allocator().raw_handle("buffer", buffer),
    );
    assert!(!outcome.is_skipped());
    assert_eq!(h.layer.tracker().live_count(h.device, ObjectKind::Buffer), 0);
}

#[test]
fn test_failed_create_is_not_recorded() {
    let h = Harness::new();
    let mut call = h.device_call(C::CreateBuffer);
    let outcome = h
        .layer
        .call(&mut call, |c| {
            c.set_handle("pBuffer", 0xF00);
            vk::Result::ERROR_OUT_OF_DEVICE_MEMORY
        })
        .expect("dispatch");
    assert_eq!(outcome.result(), vk::Result::ERROR_OUT_OF_DEVICE_MEMORY);
    assert_eq!(h.layer.tracker().live_count(h.device, ObjectKind::Buffer), 0);
}

#[test]
fn test_partial_pipeline_creation() {
    let h = Harness::new();
    let layout = h.create(h.device_call(C::CreatePipelineLayout), "pPipelineLayout");
    let infos: Vec<Args> = (0..3)
        .map(|_| Args::new().raw_handle("layout", layout))
        .collect();

    let (p0, p2) = (h.mint(), h.mint());
    let mut call = h.device_call(C::CreateGraphicsPipelines).structs("pCreateInfos", infos);
    let outcome = h
        .layer
        .call(&mut call, |c| {
            c.set_handles("pPipelines", vec![p0, 0, p2]);
            vk::Result::ERROR_OUT_OF_HOST_MEMORY
        })
        .expect("dispatch");
    assert_eq!(outcome, CallOutcome::Forwarded(vk::Result::ERROR_OUT_OF_HOST_MEMORY));
    assert_eq!(h.layer.tracker().live_count(h.device, ObjectKind::Pipeline), 2);

    let (outcome, _) = h.forward(h.device_call(C::DestroyPipeline).raw_handle("pipeline", p2));
    assert!(!outcome.is_skipped());
    assert!(h.sink.is_empty());
}

#[test]
fn test_free_command_buffers_from_wrong_pool() {
    let h = Harness::new();
    let pool_a = h.command_pool();
    let pool_b = h.command_pool();
    let cbs = h.command_buffers(pool_a, 2);

    let (outcome, called) = h.forward(
        h.device_call(C::FreeCommandBuffers)
            .raw_handle("commandPool", pool_b)
            .with("pCommandBuffers", raw_array(&cbs)),
    );
    assert!(outcome.is_skipped());
    assert!(!called);

    let reports = h.sink.take();
    assert_eq!(reports.len(), 2);
    for (i, report) in reports.iter().enumerate() {
        assert_eq!(report.violation, Violation::WrongParent);
        assert_eq!(report.vuid.as_str(), "VUID-vkFreeCommandBuffers-pCommandBuffers-parent");
        assert_eq!(report.location.as_deref(), Some(format!("pCommandBuffers[{i}]").as_str()));
    }

    // Freeing from the right pool succeeds and tolerates null entries
    let (outcome, _) = h.forward(
        h.device_call(C::FreeCommandBuffers)
            .raw_handle("commandPool", pool_a)
            .with("pCommandBuffers", raw_array(&[cbs[0], 0, cbs[1]])),
    );
    assert!(!outcome.is_skipped());
    assert_eq!(h.layer.tracker().live_count(h.device, ObjectKind::CommandBuffer), 0);
}

#[test]
fn test_destroy_command_pool_frees_its_buffers() {
    let h = Harness::new();
    let pool = h.command_pool();
    let cbs = h.command_buffers(pool, 3);

    let (outcome, _) = h.forward(ApiCall::with_raw_dispatch(C::BeginCommandBuffer, cbs[0]));
    assert!(!outcome.is_skipped());

    let (outcome, _) = h.forward(h.device_call(C::DestroyCommandPool).raw_handle("commandPool", pool));
    assert!(!outcome.is_skipped());
    assert_eq!(h.layer.tracker().live_count(h.device, ObjectKind::CommandBuffer), 0);

    let (outcome, called) = h.forward(ApiCall::with_raw_dispatch(C::BeginCommandBuffer, cbs[1]));
    assert!(outcome.is_skipped());
    assert!(!called);
    assert!(h.sink.has_vuid("VUID-vkBeginCommandBuffer-commandBuffer-parameter"));
}

#[test]
fn test_reset_descriptor_pool_frees_sets() {
    let h = Harness::new();
    let pool = h.create(h.device_call(C::CreateDescriptorPool), "pDescriptorPool");
    let sets = h.retrieve_many(
        h.device_call(C::AllocateDescriptorSets)
            .nested("pAllocateInfo", Args::new().raw_handle("descriptorPool", pool)),
        "pDescriptorSets",
        4,
    );
    assert_eq!(sets.len(), 4);
    assert_eq!(h.layer.tracker().live_count(h.device, ObjectKind::DescriptorSet), 4);

    let (outcome, _) = h.forward(h.device_call(C::ResetDescriptorPool).raw_handle("descriptorPool", pool));
    assert!(!outcome.is_skipped());
    assert_eq!(h.layer.tracker().live_count(h.device, ObjectKind::DescriptorSet), 0);
    assert_eq!(h.layer.tracker().live_count(h.device, ObjectKind::DescriptorPool), 1);
}

#[test]
fn test_private_data_typed_by_object_type() {
    let h = Harness::new();
    let slot = h.create(h.device_call(C::CreatePrivateDataSlot), "pPrivateDataSlot");
    let buffer = h.create(h.device_call(C::CreateBuffer), "pBuffer");

    let set = |object_type: vk::ObjectType, handle: u64| {
        h.forward(
            h.device_call(C::SetPrivateData)
                .object_type("objectType", object_type)
                .raw_handle("objectHandle", handle)
                .raw_handle("privateDataSlot", slot)
                .value("data", 7),
        )
    };

    let (outcome, _) = set(vk::ObjectType::BUFFER, buffer);
    assert!(!outcome.is_skipped());

    // Same handle under the wrong type is not a live object of that type
    let (outcome, _) = set(vk::ObjectType::IMAGE, buffer);
    assert!(outcome.is_skipped());
    assert!(h.sink.has_vuid("VUID-vkSetPrivateData-objectHandle-parameter"));
    h.sink.take();

    // Types without a tracked kind are accepted as-is
    let (outcome, _) = set(vk::ObjectType::UNKNOWN, 0xABC0);
    assert!(!outcome.is_skipped());
    assert!(h.sink.is_empty());
}

#[test]
fn test_debug_marker_typed_by_report_object_type() {
    let h = Harness::new();
    let image = h.create(h.device_call(C::CreateImage), "pImage");

    let name = |object_type: vk::DebugReportObjectTypeEXT, object: u64| {
        h.forward(h.device_call(C::DebugMarkerSetObjectNameEXT).nested(
            "pNameInfo",
            Args::new()
                .value("objectType", object_type.as_raw() as u32 as u64)
                .raw_handle("object", object),
        ))
    };

    let (outcome, _) = name(vk::DebugReportObjectTypeEXT::IMAGE, image);
    assert!(!outcome.is_skipped());

    let (outcome, _) = name(vk::DebugReportObjectTypeEXT::IMAGE, 0xBAD0);
    assert!(outcome.is_skipped());
    let reports = h.sink.take();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].kind, ObjectKind::Image);
    assert_eq!(reports[0].vuid.as_str(), "VUID-VkDebugMarkerObjectNameInfoEXT-object-01491");
}

#[test]
fn test_swapchain_images_are_retrieved_not_leaked() {
    let h = Harness::new();
    let surface = h.create(
        ApiCall::with_raw_dispatch(C::CreateHeadlessSurfaceEXT, h.instance),
        "pSurface",
    );
    let swapchain = h.create(
        h.device_call(C::CreateSwapchainKHR)
            .nested("pCreateInfo", Args::new().raw_handle("surface", surface)),
        "pSwapchain",
    );
    let images = h.retrieve_many(
        h.device_call(C::GetSwapchainImagesKHR).raw_handle("swapchain", swapchain),
        "pSwapchainImages",
        3,
    );

    let (outcome, _) = h.forward(
        h.device_call(C::CreateImageView)
            .nested("pCreateInfo", Args::new().raw_handle("image", images[0])),
    );
    assert!(!outcome.is_skipped());

    let (outcome, _) = h.forward(h.device_call(C::DestroySwapchainKHR).raw_handle("swapchain", swapchain));
    assert!(!outcome.is_skipped());
    assert_eq!(h.layer.tracker().live_count(h.device, ObjectKind::Image), 0);
    assert!(h.sink.is_empty());
}

#[test]
fn test_destroy_device_reports_leaks() {
    let h = Harness::new();
    let buffer = h.create(h.device_call(C::CreateBuffer), "pBuffer");
    h.semaphore();

    let (outcome, called) = h.forward(h.device_call(C::DestroyDevice));
    assert!(!outcome.is_skipped());
    assert!(called);

    let reports = h.sink.take();
    assert_eq!(reports.len(), 2, "got {:?}", reports);
    assert!(reports.iter().all(|r| r.violation == Violation::StillInUse));
    assert!(reports
        .iter()
        .all(|r| r.vuid.as_str() == "VUID-vkDestroyDevice-device-00378"));
    assert!(reports.iter().any(|r| r.handle == buffer));

    // The device and its queue are gone
    let (outcome, _) = h.forward(h.device_call(C::DeviceWaitIdle));
    assert!(outcome.is_skipped());
}

#[test]
fn test_teardown_policy_destroy() {
    let h = Harness::with_config(TrackerConfig {
        teardown: TeardownPolicy::Destroy,
        ..TrackerConfig::default()
    });
    h.create(h.device_call(C::CreateBuffer), "pBuffer");

    let (outcome, _) = h.forward(ApiCall::with_raw_dispatch(C::DestroyInstance, h.instance));
    assert!(!outcome.is_skipped());
    assert!(h.sink.is_empty());
    assert!(h.layer.is_idle());
}

#[test]
fn test_destroy_instance_releases_everything() {
    let h = Harness::new();
    let (outcome, _) = h.forward(ApiCall::with_raw_dispatch(C::DestroyInstance, h.instance));
    assert!(!outcome.is_skipped());

    // The still-live device is reported against the instance
    let reports = h.sink.take();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].kind, ObjectKind::Device);
    assert_eq!(reports[0].vuid.as_str(), "VUID-vkDestroyInstance-instance-00629");
    assert!(h.layer.is_idle());
}

#[test]
fn test_tracker_disabled_passes_everything() {
    let h_config = LayerConfig {
        object_tracker: TrackerConfig {
            enabled: false,
            ..TrackerConfig::default()
        },
        ..LayerConfig::default()
    };
    let sink = Arc::new(CollectSink::new());
    let layer = Layer::new(h_config, sink.clone());

    let mut call = ApiCall::with_raw_dispatch(C::DestroyBuffer, 0x7777).raw_handle("buffer", 0xDEAD0);
    let outcome = layer.call(&mut call, |_| vk::Result::SUCCESS).expect("dispatch");
    assert_eq!(outcome, CallOutcome::Forwarded(vk::Result::SUCCESS));
    assert!(sink.is_empty());
}
