//! Device lifetime, queues, private data, debug naming and the smaller
//! device-level extensions.

use vkot_core::ObjectKind as K;

use crate::command::Command as C;
use crate::entry_point::{EntryPoint, HandleParam, ScopeEvent};

pub(crate) fn entry_points() -> Vec<EntryPoint> {
    let mut entries = vec![
        EntryPoint::device(C::DestroyDevice)
            .scope(ScopeEvent::DestroyDevice)
            .allocator_vuids(
                "VUID-vkDestroyDevice-device-00379",
                "VUID-vkDestroyDevice-device-00380",
            ),
        EntryPoint::device(C::GetDeviceProcAddr),
        EntryPoint::device(C::GetDeviceQueue).retrieves("pQueue", K::Queue),
        EntryPoint::device(C::GetDeviceQueue2).retrieves("pQueue", K::Queue),
        EntryPoint::device(C::DeviceWaitIdle),
        EntryPoint::queue(C::QueueWaitIdle),
        EntryPoint::device(C::GetDeviceGroupPeerMemoryFeatures),
        EntryPoint::device(C::GetDeviceGroupPeerMemoryFeaturesKHR),
        // VK_EXT_debug_utils object naming: the handle is typed by objectType
        EntryPoint::device(C::SetDebugUtilsObjectNameEXT).param(
            HandleParam::tagged("pNameInfo.objectHandle", "objectType")
                .owner("VkDebugUtilsObjectNameInfoEXT")
                .vuid("VUID-VkDebugUtilsObjectNameInfoEXT-objectType-02590"),
        ),
        EntryPoint::device(C::SetDebugUtilsObjectTagEXT).param(
            HandleParam::tagged("pTagInfo.objectHandle", "objectType")
                .owner("VkDebugUtilsObjectTagInfoEXT")
                .vuid("VUID-VkDebugUtilsObjectTagInfoEXT-objectHandle-01910"),
        ),
        EntryPoint::queue(C::QueueBeginDebugUtilsLabelEXT),
        EntryPoint::queue(C::QueueEndDebugUtilsLabelEXT),
        EntryPoint::queue(C::QueueInsertDebugUtilsLabelEXT),
        EntryPoint::command_buffer(C::CmdBeginDebugUtilsLabelEXT),
        EntryPoint::command_buffer(C::CmdEndDebugUtilsLabelEXT),
        EntryPoint::command_buffer(C::CmdInsertDebugUtilsLabelEXT),
        // VK_EXT_debug_marker objects are typed by VkDebugReportObjectTypeEXT
        EntryPoint::device(C::DebugMarkerSetObjectTagEXT).param(
            HandleParam::report_tagged("pTagInfo.object", "objectType")
                .owner("VkDebugMarkerObjectTagInfoEXT")
                .vuid("VUID-VkDebugMarkerObjectTagInfoEXT-object-01494"),
        ),
        EntryPoint::device(C::DebugMarkerSetObjectNameEXT).param(
            HandleParam::report_tagged("pNameInfo.object", "objectType")
                .owner("VkDebugMarkerObjectNameInfoEXT")
                .vuid("VUID-VkDebugMarkerObjectNameInfoEXT-object-01491"),
        ),
        EntryPoint::command_buffer(C::CmdDebugMarkerBeginEXT),
        EntryPoint::command_buffer(C::CmdDebugMarkerEndEXT),
        EntryPoint::command_buffer(C::CmdDebugMarkerInsertEXT),
        // VK_EXT_validation_cache
        EntryPoint::device(C::CreateValidationCacheEXT)
            .creates("pValidationCache", K::ValidationCacheEXT),
        EntryPoint::device(C::DestroyValidationCacheEXT)
            .destroys("validationCache", K::ValidationCacheEXT),
        EntryPoint::device(C::MergeValidationCachesEXT)
            .handle("dstCache", K::ValidationCacheEXT)
            .handle("pSrcCaches[]", K::ValidationCacheEXT),
        EntryPoint::device(C::GetValidationCacheDataEXT)
            .handle("validationCache", K::ValidationCacheEXT),
        // VK_EXT_calibrated_timestamps
        EntryPoint::device(C::GetCalibratedTimestampsEXT),
        // VK_INTEL_performance_query
        EntryPoint::device(C::InitializePerformanceApiINTEL),
        EntryPoint::device(C::UninitializePerformanceApiINTEL),
        EntryPoint::device(C::AcquirePerformanceConfigurationINTEL)
            .creates("pConfiguration", K::PerformanceConfigurationINTEL),
        EntryPoint::device(C::ReleasePerformanceConfigurationINTEL)
            .destroys("configuration", K::PerformanceConfigurationINTEL),
        EntryPoint::queue(C::QueueSetPerformanceConfigurationINTEL)
            .handle("configuration", K::PerformanceConfigurationINTEL),
        EntryPoint::device(C::GetPerformanceParameterINTEL),
        EntryPoint::command_buffer(C::CmdSetPerformanceMarkerINTEL),
        EntryPoint::command_buffer(C::CmdSetPerformanceStreamMarkerINTEL),
        EntryPoint::command_buffer(C::CmdSetPerformanceOverrideINTEL),
        // VK_KHR_performance_query
        EntryPoint::device(C::AcquireProfilingLockKHR),
        EntryPoint::device(C::ReleaseProfilingLockKHR),
        // VK_KHR_deferred_host_operations
        EntryPoint::device(C::CreateDeferredOperationKHR)
            .creates("pDeferredOperation", K::DeferredOperationKHR),
        EntryPoint::device(C::DestroyDeferredOperationKHR)
            .destroys("operation", K::DeferredOperationKHR)
            .allocator_vuids(
                "VUID-vkDestroyDeferredOperationKHR-operation-03434",
                "VUID-vkDestroyDeferredOperationKHR-operation-03435",
            ),
        EntryPoint::device(C::GetDeferredOperationMaxConcurrencyKHR)
            .handle("operation", K::DeferredOperationKHR),
        EntryPoint::device(C::GetDeferredOperationResultKHR)
            .handle("operation", K::DeferredOperationKHR),
        EntryPoint::device(C::DeferredOperationJoinKHR)
            .handle("operation", K::DeferredOperationKHR),
        EntryPoint::queue(C::GetQueueCheckpointDataNV),
    ];

    // Private data: core and VK_EXT_private_data share one shape
    for (create, destroy, set, get) in [
        (
            C::CreatePrivateDataSlot,
            C::DestroyPrivateDataSlot,
            C::SetPrivateData,
            C::GetPrivateData,
        ),
        (
            C::CreatePrivateDataSlotEXT,
            C::DestroyPrivateDataSlotEXT,
            C::SetPrivateDataEXT,
            C::GetPrivateDataEXT,
        ),
    ] {
        entries.push(EntryPoint::device(create).creates("pPrivateDataSlot", K::PrivateDataSlot));
        entries.push(
            EntryPoint::device(destroy)
                .destroys("privateDataSlot", K::PrivateDataSlot)
                .allocator_vuids(
                    "VUID-vkDestroyPrivateDataSlot-privateDataSlot-04062",
                    "VUID-vkDestroyPrivateDataSlot-privateDataSlot-04063",
                ),
        );
        for command in [set, get] {
            entries.push(
                EntryPoint::device(command)
                    .param(HandleParam::tagged("objectHandle", "objectType"))
                    .handle("privateDataSlot", K::PrivateDataSlot),
            );
        }
    }
    entries
}
