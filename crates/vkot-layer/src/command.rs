//! The intercepted API commands.

macro_rules! commands {
    ($($variant:ident,)*) => {
        /// One intercepted API entry point. The API name is the variant name
        /// with a `vk` prefix.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Command {
            $($variant,)*
        }

        impl Command {
            pub const ALL: &'static [Command] = &[$(Command::$variant,)*];

            /// API name, e.g. `vkCreateBuffer`.
            pub fn name(self) -> &'static str {
                match self {
                    $(Command::$variant => concat!("vk", stringify!($variant)),)*
                }
            }

            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $(concat!("vk", stringify!($variant)) => Some(Command::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

commands! {
    CreateInstance,
    EnumerateInstanceExtensionProperties,
    EnumerateInstanceLayerProperties,
    EnumerateInstanceVersion,
    DestroyInstance,
    EnumeratePhysicalDevices,
    EnumeratePhysicalDeviceGroups,
    EnumeratePhysicalDeviceGroupsKHR,
    CreateDebugReportCallbackEXT,
    DestroyDebugReportCallbackEXT,
    DebugReportMessageEXT,
    CreateDebugUtilsMessengerEXT,
    DestroyDebugUtilsMessengerEXT,
    SubmitDebugUtilsMessageEXT,
    GetPhysicalDeviceFeatures,
    GetPhysicalDeviceFormatProperties,
    GetPhysicalDeviceImageFormatProperties,
    GetPhysicalDeviceProperties,
    GetPhysicalDeviceQueueFamilyProperties,
    GetPhysicalDeviceMemoryProperties,
    GetPhysicalDeviceSparseImageFormatProperties,
    EnumerateDeviceExtensionProperties,
    EnumerateDeviceLayerProperties,
    GetPhysicalDeviceFeatures2,
    GetPhysicalDeviceFeatures2KHR,
    GetPhysicalDeviceProperties2,
    GetPhysicalDeviceProperties2KHR,
    GetPhysicalDeviceFormatProperties2,
    GetPhysicalDeviceFormatProperties2KHR,
    GetPhysicalDeviceImageFormatProperties2,
    GetPhysicalDeviceImageFormatProperties2KHR,
    GetPhysicalDeviceQueueFamilyProperties2,
    GetPhysicalDeviceQueueFamilyProperties2KHR,
    GetPhysicalDeviceMemoryProperties2,
    GetPhysicalDeviceMemoryProperties2KHR,
    GetPhysicalDeviceSparseImageFormatProperties2,
    GetPhysicalDeviceSparseImageFormatProperties2KHR,
    GetPhysicalDeviceExternalBufferProperties,
    GetPhysicalDeviceExternalBufferPropertiesKHR,
    GetPhysicalDeviceExternalSemaphoreProperties,
    GetPhysicalDeviceExternalSemaphorePropertiesKHR,
    GetPhysicalDeviceExternalFenceProperties,
    GetPhysicalDeviceExternalFencePropertiesKHR,
    GetPhysicalDeviceExternalImageFormatPropertiesNV,
    GetPhysicalDeviceToolPropertiesEXT,
    GetPhysicalDeviceMultisamplePropertiesEXT,
    GetPhysicalDeviceCalibrateableTimeDomainsEXT,
    GetPhysicalDeviceCooperativeMatrixPropertiesNV,
    GetPhysicalDeviceSupportedFramebufferMixedSamplesCombinationsNV,
    EnumeratePhysicalDeviceQueueFamilyPerformanceQueryCountersKHR,
    GetPhysicalDeviceQueueFamilyPerformanceQueryPassesKHR,
    GetPhysicalDeviceFragmentShadingRatesKHR,
    CreateDevice,
    DestroyDevice,
    GetDeviceProcAddr,
    GetDeviceQueue,
    GetDeviceQueue2,
    DeviceWaitIdle,
    QueueWaitIdle,
    GetDeviceGroupPeerMemoryFeatures,
    GetDeviceGroupPeerMemoryFeaturesKHR,
    SetDebugUtilsObjectNameEXT,
    SetDebugUtilsObjectTagEXT,
    QueueBeginDebugUtilsLabelEXT,
    QueueEndDebugUtilsLabelEXT,
    QueueInsertDebugUtilsLabelEXT,
    CmdBeginDebugUtilsLabelEXT,
    CmdEndDebugUtilsLabelEXT,
    CmdInsertDebugUtilsLabelEXT,
    DebugMarkerSetObjectTagEXT,
    DebugMarkerSetObjectNameEXT,
    CmdDebugMarkerBeginEXT,
    CmdDebugMarkerEndEXT,
    CmdDebugMarkerInsertEXT,
    CreateValidationCacheEXT,
    DestroyValidationCacheEXT,
    MergeValidationCachesEXT,
    GetValidationCacheDataEXT,
    GetCalibratedTimestampsEXT,
    InitializePerformanceApiINTEL,
    UninitializePerformanceApiINTEL,
    AcquirePerformanceConfigurationINTEL,
    ReleasePerformanceConfigurationINTEL,
    QueueSetPerformanceConfigurationINTEL,
    GetPerformanceParameterINTEL,
    CmdSetPerformanceMarkerINTEL,
    CmdSetPerformanceStreamMarkerINTEL,
    CmdSetPerformanceOverrideINTEL,
    AcquireProfilingLockKHR,
    ReleaseProfilingLockKHR,
    CreateDeferredOperationKHR,
    DestroyDeferredOperationKHR,
    GetDeferredOperationMaxConcurrencyKHR,
    GetDeferredOperationResultKHR,
    DeferredOperationJoinKHR,
    GetQueueCheckpointDataNV,
    CreatePrivateDataSlot,
    DestroyPrivateDataSlot,
    SetPrivateData,
    GetPrivateData,
    CreatePrivateDataSlotEXT,
    DestroyPrivateDataSlotEXT,
    SetPrivateDataEXT,
    GetPrivateDataEXT,
    AllocateMemory,
    FreeMemory,
    MapMemory,
    UnmapMemory,
    FlushMappedMemoryRanges,
    InvalidateMappedMemoryRanges,
    GetDeviceMemoryCommitment,
    SetDeviceMemoryPriorityEXT,
    BindBufferMemory,
    GetBufferMemoryRequirements,
    CreateBuffer,
    DestroyBuffer,
    CreateBufferView,
    DestroyBufferView,
    GetMemoryFdKHR,
    GetMemoryFdPropertiesKHR,
    GetMemoryHostPointerPropertiesEXT,
    GetMemoryWin32HandleKHR,
    GetMemoryWin32HandlePropertiesKHR,
    GetMemoryWin32HandleNV,
    GetMemoryAndroidHardwareBufferANDROID,
    GetAndroidHardwareBufferPropertiesANDROID,
    BindBufferMemory2,
    BindBufferMemory2KHR,
    GetBufferMemoryRequirements2,
    GetBufferMemoryRequirements2KHR,
    GetBufferDeviceAddress,
    GetBufferDeviceAddressKHR,
    GetBufferDeviceAddressEXT,
    GetBufferOpaqueCaptureAddress,
    GetBufferOpaqueCaptureAddressKHR,
    GetDeviceMemoryOpaqueCaptureAddress,
    GetDeviceMemoryOpaqueCaptureAddressKHR,
    CreateImage,
    DestroyImage,
    BindImageMemory,
    GetImageMemoryRequirements,
    GetImageSparseMemoryRequirements,
    GetImageSubresourceLayout,
    GetImageDrmFormatModifierPropertiesEXT,
    CreateImageView,
    DestroyImageView,
    CreateSampler,
    DestroySampler,
    BindImageMemory2,
    BindImageMemory2KHR,
    GetImageMemoryRequirements2,
    GetImageMemoryRequirements2KHR,
    GetImageSparseMemoryRequirements2,
    GetImageSparseMemoryRequirements2KHR,
    CreateSamplerYcbcrConversion,
    DestroySamplerYcbcrConversion,
    CreateSamplerYcbcrConversionKHR,
    DestroySamplerYcbcrConversionKHR,
    CreateFence,
    DestroyFence,
    ResetFences,
    GetFenceStatus,
    WaitForFences,
    CreateSemaphore,
    DestroySemaphore,
    CreateEvent,
    DestroyEvent,
    GetEventStatus,
    SetEvent,
    ResetEvent,
    CreateQueryPool,
    DestroyQueryPool,
    GetQueryPoolResults,
    ResetQueryPool,
    ResetQueryPoolEXT,
    QueueSubmit,
    QueueBindSparse,
    ImportSemaphoreFdKHR,
    GetSemaphoreFdKHR,
    ImportFenceFdKHR,
    GetFenceFdKHR,
    ImportSemaphoreWin32HandleKHR,
    GetSemaphoreWin32HandleKHR,
    ImportFenceWin32HandleKHR,
    GetFenceWin32HandleKHR,
    GetSemaphoreCounterValue,
    WaitSemaphores,
    SignalSemaphore,
    GetSemaphoreCounterValueKHR,
    WaitSemaphoresKHR,
    SignalSemaphoreKHR,
    QueueSubmit2,
    QueueSubmit2KHR,
    CreateShaderModule,
    DestroyShaderModule,
    CreatePipelineCache,
    DestroyPipelineCache,
    GetPipelineCacheData,
    MergePipelineCaches,
    CreatePipelineLayout,
    DestroyPipelineLayout,
    CreateGraphicsPipelines,
    CreateComputePipelines,
    DestroyPipeline,
    CmdBindPipeline,
    GetShaderInfoAMD,
    GetPipelineExecutablePropertiesKHR,
    GetPipelineExecutableStatisticsKHR,
    GetPipelineExecutableInternalRepresentationsKHR,
    CreateAccelerationStructureNV,
    DestroyAccelerationStructureNV,
    GetAccelerationStructureMemoryRequirementsNV,
    BindAccelerationStructureMemoryNV,
    GetAccelerationStructureHandleNV,
    CmdBuildAccelerationStructureNV,
    CmdCopyAccelerationStructureNV,
    CmdWriteAccelerationStructuresPropertiesNV,
    CmdTraceRaysNV,
    CreateRayTracingPipelinesNV,
    CompileDeferredNV,
    CreateAccelerationStructureKHR,
    DestroyAccelerationStructureKHR,
    GetAccelerationStructureDeviceAddressKHR,
    GetAccelerationStructureBuildSizesKHR,
    GetDeviceAccelerationStructureCompatibilityKHR,
    CopyAccelerationStructureKHR,
    CopyAccelerationStructureToMemoryKHR,
    CopyMemoryToAccelerationStructureKHR,
    CmdCopyAccelerationStructureKHR,
    CmdCopyAccelerationStructureToMemoryKHR,
    CmdCopyMemoryToAccelerationStructureKHR,
    WriteAccelerationStructuresPropertiesKHR,
    CmdWriteAccelerationStructuresPropertiesKHR,
    CreateRayTracingPipelinesKHR,
    GetRayTracingCaptureReplayShaderGroupHandlesKHR,
    GetRayTracingShaderGroupStackSizeKHR,
    CmdTraceRaysKHR,
    CmdTraceRaysIndirectKHR,
    CmdSetRayTracingPipelineStackSizeKHR,
    CreateIndirectCommandsLayoutNV,
    DestroyIndirectCommandsLayoutNV,
    GetGeneratedCommandsMemoryRequirementsNV,
    CmdBindPipelineShaderGroupNV,
    GetRayTracingShaderGroupHandlesKHR,
    GetRayTracingShaderGroupHandlesNV,
    CmdBuildAccelerationStructuresKHR,
    CmdBuildAccelerationStructuresIndirectKHR,
    BuildAccelerationStructuresKHR,
    CmdPreprocessGeneratedCommandsNV,
    CmdExecuteGeneratedCommandsNV,
    CreateDescriptorSetLayout,
    DestroyDescriptorSetLayout,
    CreateDescriptorPool,
    DestroyDescriptorPool,
    ResetDescriptorPool,
    AllocateDescriptorSets,
    FreeDescriptorSets,
    UpdateDescriptorSets,
    CmdBindDescriptorSets,
    CmdPushDescriptorSetKHR,
    CmdPushDescriptorSetWithTemplateKHR,
    GetDescriptorSetLayoutSupport,
    GetDescriptorSetLayoutSupportKHR,
    CreateDescriptorUpdateTemplate,
    DestroyDescriptorUpdateTemplate,
    UpdateDescriptorSetWithTemplate,
    CreateDescriptorUpdateTemplateKHR,
    DestroyDescriptorUpdateTemplateKHR,
    UpdateDescriptorSetWithTemplateKHR,
    CreateRenderPass,
    CreateRenderPass2,
    CreateRenderPass2KHR,
    DestroyRenderPass,
    GetRenderAreaGranularity,
    CreateFramebuffer,
    DestroyFramebuffer,
    CmdNextSubpass,
    CmdEndRenderPass,
    CmdBeginRenderPass,
    CmdBeginRenderPass2,
    CmdBeginRenderPass2KHR,
    CmdNextSubpass2,
    CmdNextSubpass2KHR,
    CmdEndRenderPass2,
    CmdEndRenderPass2KHR,
    CmdEndRendering,
    CmdEndRenderingKHR,
    CmdBeginRendering,
    CmdBeginRenderingKHR,
    CmdSetViewport,
    CmdSetScissor,
    CmdSetLineWidth,
    CmdSetDepthBias,
    CmdSetBlendConstants,
    CmdSetDepthBounds,
    CmdSetStencilCompareMask,
    CmdSetStencilWriteMask,
    CmdSetStencilReference,
    CmdDraw,
    CmdDrawIndexed,
    CmdDispatch,
    CmdDispatchBase,
    CmdDispatchBaseKHR,
    CmdClearAttachments,
    CmdSetDeviceMask,
    CmdSetDeviceMaskKHR,
    CmdSetCullModeEXT,
    CmdSetFrontFaceEXT,
    CmdSetPrimitiveTopologyEXT,
    CmdSetViewportWithCountEXT,
    CmdSetScissorWithCountEXT,
    CmdSetDepthTestEnableEXT,
    CmdSetDepthWriteEnableEXT,
    CmdSetDepthCompareOpEXT,
    CmdSetDepthBoundsTestEnableEXT,
    CmdSetStencilTestEnableEXT,
    CmdSetStencilOpEXT,
    CmdSetRasterizerDiscardEnableEXT,
    CmdSetDepthBiasEnableEXT,
    CmdSetPrimitiveRestartEnableEXT,
    CmdSetLineStippleEXT,
    CmdSetSampleLocationsEXT,
    CmdSetDiscardRectangleEXT,
    CmdSetViewportWScalingNV,
    CmdSetExclusiveScissorNV,
    CmdSetViewportShadingRatePaletteNV,
    CmdSetCoarseSampleOrderNV,
    CmdSetFragmentShadingRateKHR,
    CmdSetCheckpointNV,
    CmdDrawMeshTasksNV,
    CmdEndConditionalRenderingEXT,
    EndCommandBuffer,
    CreateCommandPool,
    DestroyCommandPool,
    ResetCommandPool,
    TrimCommandPool,
    TrimCommandPoolKHR,
    AllocateCommandBuffers,
    FreeCommandBuffers,
    BeginCommandBuffer,
    ResetCommandBuffer,
    CmdExecuteCommands,
    CmdPushConstants,
    CmdBindIndexBuffer,
    CmdBindVertexBuffers,
    CmdBindVertexBuffers2EXT,
    CmdDrawIndirect,
    CmdDrawIndexedIndirect,
    CmdDispatchIndirect,
    CmdDrawMeshTasksIndirectNV,
    CmdDrawMeshTasksIndirectCountNV,
    CmdCopyBuffer,
    CmdCopyImage,
    CmdBlitImage,
    CmdCopyBufferToImage,
    CmdCopyImageToBuffer,
    CmdResolveImage,
    CmdUpdateBuffer,
    CmdFillBuffer,
    CmdClearColorImage,
    CmdClearDepthStencilImage,
    CmdWriteBufferMarkerAMD,
    CmdWriteBufferMarker2AMD,
    CmdSetEvent,
    CmdResetEvent,
    CmdWaitEvents,
    CmdPipelineBarrier,
    CmdBeginQuery,
    CmdEndQuery,
    CmdBeginQueryIndexedEXT,
    CmdEndQueryIndexedEXT,
    CmdResetQueryPool,
    CmdWriteTimestamp,
    CmdCopyQueryPoolResults,
    CmdBindTransformFeedbackBuffersEXT,
    CmdBeginTransformFeedbackEXT,
    CmdEndTransformFeedbackEXT,
    CmdDrawIndirectByteCountEXT,
    CmdBeginConditionalRenderingEXT,
    CmdBindShadingRateImageNV,
    CmdDrawIndirectCount,
    CmdDrawIndirectCountKHR,
    CmdDrawIndirectCountAMD,
    CmdDrawIndexedIndirectCount,
    CmdDrawIndexedIndirectCountKHR,
    CmdDrawIndexedIndirectCountAMD,
    CmdCopyBuffer2,
    CmdCopyBuffer2KHR,
    CmdCopyImage2,
    CmdCopyImage2KHR,
    CmdCopyBufferToImage2,
    CmdCopyBufferToImage2KHR,
    CmdCopyImageToBuffer2,
    CmdCopyImageToBuffer2KHR,
    CmdBlitImage2,
    CmdBlitImage2KHR,
    CmdResolveImage2,
    CmdResolveImage2KHR,
    CmdSetEvent2,
    CmdResetEvent2,
    CmdWaitEvents2,
    CmdPipelineBarrier2,
    CmdWriteTimestamp2,
    CmdSetEvent2KHR,
    CmdResetEvent2KHR,
    CmdWaitEvents2KHR,
    CmdPipelineBarrier2KHR,
    CmdWriteTimestamp2KHR,
    DestroySurfaceKHR,
    GetPhysicalDeviceSurfaceSupportKHR,
    GetPhysicalDeviceSurfaceCapabilitiesKHR,
    GetPhysicalDeviceSurfaceFormatsKHR,
    GetPhysicalDeviceSurfacePresentModesKHR,
    GetPhysicalDeviceSurfaceCapabilities2KHR,
    GetPhysicalDeviceSurfaceFormats2KHR,
    GetPhysicalDeviceSurfaceCapabilities2EXT,
    GetPhysicalDevicePresentRectanglesKHR,
    GetPhysicalDeviceSurfacePresentModes2EXT,
    CreateHeadlessSurfaceEXT,
    CreateSwapchainKHR,
    CreateSharedSwapchainsKHR,
    DestroySwapchainKHR,
    GetSwapchainImagesKHR,
    AcquireNextImageKHR,
    AcquireNextImage2KHR,
    QueuePresentKHR,
    GetDeviceGroupPresentCapabilitiesKHR,
    GetDeviceGroupSurfacePresentModesKHR,
    GetDeviceGroupSurfacePresentModes2EXT,
    GetSwapchainStatusKHR,
    GetSwapchainCounterEXT,
    SetHdrMetadataEXT,
    SetLocalDimmingAMD,
    AcquireFullScreenExclusiveModeEXT,
    ReleaseFullScreenExclusiveModeEXT,
    GetPhysicalDeviceDisplayPropertiesKHR,
    GetPhysicalDeviceDisplayPlanePropertiesKHR,
    GetPhysicalDeviceDisplayProperties2KHR,
    GetPhysicalDeviceDisplayPlaneProperties2KHR,
    GetDisplayPlaneSupportedDisplaysKHR,
    GetDisplayModePropertiesKHR,
    GetDisplayModeProperties2KHR,
    CreateDisplayModeKHR,
    GetDisplayPlaneCapabilitiesKHR,
    GetDisplayPlaneCapabilities2KHR,
    CreateDisplayPlaneSurfaceKHR,
    ReleaseDisplayEXT,
    AcquireXlibDisplayEXT,
    GetRandROutputDisplayEXT,
    DisplayPowerControlEXT,
    RegisterDeviceEventEXT,
    RegisterDisplayEventEXT,
    CreateXlibSurfaceKHR,
    GetPhysicalDeviceXlibPresentationSupportKHR,
    CreateXcbSurfaceKHR,
    GetPhysicalDeviceXcbPresentationSupportKHR,
    CreateWaylandSurfaceKHR,
    GetPhysicalDeviceWaylandPresentationSupportKHR,
    CreateWin32SurfaceKHR,
    GetPhysicalDeviceWin32PresentationSupportKHR,
    CreateAndroidSurfaceKHR,
    CreateMacOSSurfaceMVK,
    CreateIOSSurfaceMVK,
    CreateMetalSurfaceEXT,
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
