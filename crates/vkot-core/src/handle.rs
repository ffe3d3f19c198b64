use std::fmt;

use ash::vk;

/// Identifies one instance or device scope for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScopeId(pub u64);

impl fmt::Display for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "scope#{}", self.0)
    }
}

/// The tracking domain an object kind is recorded in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScopeLevel {
    Instance,
    Device,
}

/// Raw 64-bit value of any `ash` handle. Dispatchable handles are pointers,
/// non-dispatchable ones are opaque integers; both fit.
pub fn raw<H: vk::Handle>(handle: H) -> u64 {
    handle.as_raw()
}

macro_rules! object_kinds {
    ($($kind:ident => $object_type:ident, $level:ident, $type_name:literal;)*) => {
        /// Every trackable API object category.
        ///
        /// Declaration order is the order the leak reporter walks kinds in.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum ObjectKind {
            $($kind,)*
        }

        impl ObjectKind {
            pub const ALL: &'static [ObjectKind] = &[$(ObjectKind::$kind,)*];

            /// Matching `VkObjectType`.
            pub fn object_type(self) -> vk::ObjectType {
                match self {
                    $(ObjectKind::$kind => vk::ObjectType::$object_type,)*
                }
            }

            /// Maps a `VkObjectType` back to a kind. `None` for types this
            /// layer does not track (including `UNKNOWN`).
            pub fn from_object_type(object_type: vk::ObjectType) -> Option<Self> {
                $(
                    if object_type == vk::ObjectType::$object_type {
                        return Some(ObjectKind::$kind);
                    }
                )*
                None
            }

            /// Which table records objects of this kind.
            pub fn level(self) -> ScopeLevel {
                match self {
                    $(ObjectKind::$kind => ScopeLevel::$level,)*
                }
            }

            /// API type name, e.g. `VkBuffer`.
            pub fn type_name(self) -> &'static str {
                match self {
                    $(ObjectKind::$kind => $type_name,)*
                }
            }
        }
    };
}

object_kinds! {
    Instance => INSTANCE, Instance, "VkInstance";
    PhysicalDevice => PHYSICAL_DEVICE, Instance, "VkPhysicalDevice";
    Device => DEVICE, Instance, "VkDevice";
    SurfaceKHR => SURFACE_KHR, Instance, "VkSurfaceKHR";
    DisplayKHR => DISPLAY_KHR, Instance, "VkDisplayKHR";
    DisplayModeKHR => DISPLAY_MODE_KHR, Instance, "VkDisplayModeKHR";
    DebugReportCallbackEXT => DEBUG_REPORT_CALLBACK_EXT, Instance, "VkDebugReportCallbackEXT";
    DebugUtilsMessengerEXT => DEBUG_UTILS_MESSENGER_EXT, Instance, "VkDebugUtilsMessengerEXT";
    Queue => QUEUE, Device, "VkQueue";
    CommandBuffer => COMMAND_BUFFER, Device, "VkCommandBuffer";
    Semaphore => SEMAPHORE, Device, "VkSemaphore";
    Fence => FENCE, Device, "VkFence";
    DeviceMemory => DEVICE_MEMORY, Device, "VkDeviceMemory";
    Buffer => BUFFER, Device, "VkBuffer";
    Image => IMAGE, Device, "VkImage";
    Event => EVENT, Device, "VkEvent";
    QueryPool => QUERY_POOL, Device, "VkQueryPool";
    BufferView => BUFFER_VIEW, Device, "VkBufferView";
    ImageView => IMAGE_VIEW, Device, "VkImageView";
    ShaderModule => SHADER_MODULE, Device, "VkShaderModule";
    PipelineCache => PIPELINE_CACHE, Device, "VkPipelineCache";
    PipelineLayout => PIPELINE_LAYOUT, Device, "VkPipelineLayout";
    RenderPass => RENDER_PASS, Device, "VkRenderPass";
    Pipeline => PIPELINE, Device, "VkPipeline";
    DescriptorSetLayout => DESCRIPTOR_SET_LAYOUT, Device, "VkDescriptorSetLayout";
    Sampler => SAMPLER, Device, "VkSampler";
    DescriptorPool => DESCRIPTOR_POOL, Device, "VkDescriptorPool";
    DescriptorSet => DESCRIPTOR_SET, Device, "VkDescriptorSet";
    Framebuffer => FRAMEBUFFER, Device, "VkFramebuffer";
    CommandPool => COMMAND_POOL, Device, "VkCommandPool";
    SamplerYcbcrConversion => SAMPLER_YCBCR_CONVERSION, Device, "VkSamplerYcbcrConversion";
    DescriptorUpdateTemplate => DESCRIPTOR_UPDATE_TEMPLATE, Device, "VkDescriptorUpdateTemplate";
    PrivateDataSlot => PRIVATE_DATA_SLOT, Device, "VkPrivateDataSlot";
    SwapchainKHR => SWAPCHAIN_KHR, Device, "VkSwapchainKHR";
    ValidationCacheEXT => VALIDATION_CACHE_EXT, Device, "VkValidationCacheEXT";
    AccelerationStructureKHR => ACCELERATION_STRUCTURE_KHR, Device, "VkAccelerationStructureKHR";
    AccelerationStructureNV => ACCELERATION_STRUCTURE_NV, Device, "VkAccelerationStructureNV";
    PerformanceConfigurationINTEL => PERFORMANCE_CONFIGURATION_INTEL, Device, "VkPerformanceConfigurationINTEL";
    DeferredOperationKHR => DEFERRED_OPERATION_KHR, Device, "VkDeferredOperationKHR";
    IndirectCommandsLayoutNV => INDIRECT_COMMANDS_LAYOUT_NV, Device, "VkIndirectCommandsLayoutNV";
}

impl ObjectKind {
    /// Dispatchable kinds carry a loader dispatch table and can select a scope.
    pub fn is_dispatchable(self) -> bool {
        matches!(
            self,
            ObjectKind::Instance
                | ObjectKind::PhysicalDevice
                | ObjectKind::Device
                | ObjectKind::Queue
                | ObjectKind::CommandBuffer
        )
    }

    /// Kinds walked by the leak reporter for a scope of the given level.
    ///
    /// Instances, physical devices and queues are owned by the implementation
    /// rather than the application and are never reported.
    pub fn leak_kinds(level: ScopeLevel) -> impl Iterator<Item = ObjectKind> {
        Self::ALL.iter().copied().filter(move |kind| {
            kind.level() == level
                && !matches!(
                    kind,
                    ObjectKind::Instance | ObjectKind::PhysicalDevice | ObjectKind::Queue
                )
        })
    }

    /// Maps the older `VkDebugReportObjectTypeEXT` tag used by
    /// VK_EXT_debug_marker. Core types share `VkObjectType` numbering;
    /// extension types do not.
    pub fn from_debug_report_object_type(object_type: vk::DebugReportObjectTypeEXT) -> Option<Self> {
        type R = vk::DebugReportObjectTypeEXT;
        let kind = match object_type {
            R::SURFACE_KHR => ObjectKind::SurfaceKHR,
            R::SWAPCHAIN_KHR => ObjectKind::SwapchainKHR,
            R::DEBUG_REPORT_CALLBACK_EXT => ObjectKind::DebugReportCallbackEXT,
            R::DISPLAY_KHR => ObjectKind::DisplayKHR,
            R::DISPLAY_MODE_KHR => ObjectKind::DisplayModeKHR,
            R::VALIDATION_CACHE_EXT => ObjectKind::ValidationCacheEXT,
            R::SAMPLER_YCBCR_CONVERSION => ObjectKind::SamplerYcbcrConversion,
            R::DESCRIPTOR_UPDATE_TEMPLATE => ObjectKind::DescriptorUpdateTemplate,
            R::ACCELERATION_STRUCTURE_KHR => ObjectKind::AccelerationStructureKHR,
            R::ACCELERATION_STRUCTURE_NV => ObjectKind::AccelerationStructureNV,
            other if (1..=25).contains(&other.as_raw()) => {
                return Self::from_object_type(vk::ObjectType::from_raw(other.as_raw()));
            }
            _ => return None,
        };
        Some(kind)
    }

    /// Kinds whose objects disappear together with an object of this kind.
    pub fn children(self) -> &'static [ObjectKind] {
        match self {
            ObjectKind::CommandPool => &[ObjectKind::CommandBuffer],
            ObjectKind::DescriptorPool => &[ObjectKind::DescriptorSet],
            ObjectKind::SwapchainKHR => &[ObjectKind::Image],
            ObjectKind::DisplayKHR => &[ObjectKind::DisplayModeKHR],
            _ => &[],
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}
