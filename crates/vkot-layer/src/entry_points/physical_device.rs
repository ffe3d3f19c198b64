//! Physical device queries and logical device creation.

use crate::command::Command as C;
use crate::entry_point::{EntryPoint, ScopeEvent};

/// Queries that take nothing but the physical device.
const QUERIES: &[C] = &[
    C::GetPhysicalDeviceFeatures,
    C::GetPhysicalDeviceFormatProperties,
    C::GetPhysicalDeviceImageFormatProperties,
    C::GetPhysicalDeviceProperties,
    C::GetPhysicalDeviceQueueFamilyProperties,
    C::GetPhysicalDeviceMemoryProperties,
    C::GetPhysicalDeviceSparseImageFormatProperties,
    C::EnumerateDeviceExtensionProperties,
    C::EnumerateDeviceLayerProperties,
    C::GetPhysicalDeviceFeatures2,
    C::GetPhysicalDeviceFeatures2KHR,
    C::GetPhysicalDeviceProperties2,
    C::GetPhysicalDeviceProperties2KHR,
    C::GetPhysicalDeviceFormatProperties2,
    C::GetPhysicalDeviceFormatProperties2KHR,
    C::GetPhysicalDeviceImageFormatProperties2,
    C::GetPhysicalDeviceImageFormatProperties2KHR,
    C::GetPhysicalDeviceQueueFamilyProperties2,
    C::GetPhysicalDeviceQueueFamilyProperties2KHR,
    C::GetPhysicalDeviceMemoryProperties2,
    C::GetPhysicalDeviceMemoryProperties2KHR,
    C::GetPhysicalDeviceSparseImageFormatProperties2,
    C::GetPhysicalDeviceSparseImageFormatProperties2KHR,
    C::GetPhysicalDeviceExternalBufferProperties,
    C::GetPhysicalDeviceExternalBufferPropertiesKHR,
    C::GetPhysicalDeviceExternalSemaphoreProperties,
    C::GetPhysicalDeviceExternalSemaphorePropertiesKHR,
    C::GetPhysicalDeviceExternalFenceProperties,
    C::GetPhysicalDeviceExternalFencePropertiesKHR,
    C::GetPhysicalDeviceExternalImageFormatPropertiesNV,
    C::GetPhysicalDeviceToolPropertiesEXT,
    C::GetPhysicalDeviceMultisamplePropertiesEXT,
    C::GetPhysicalDeviceCalibrateableTimeDomainsEXT,
    C::GetPhysicalDeviceCooperativeMatrixPropertiesNV,
    C::GetPhysicalDeviceSupportedFramebufferMixedSamplesCombinationsNV,
    C::EnumeratePhysicalDeviceQueueFamilyPerformanceQueryCountersKHR,
    C::GetPhysicalDeviceQueueFamilyPerformanceQueryPassesKHR,
    C::GetPhysicalDeviceFragmentShadingRatesKHR,
];

pub(crate) fn entry_points() -> Vec<EntryPoint> {
    let mut entries: Vec<EntryPoint> = QUERIES
        .iter()
        .map(|&command| EntryPoint::physical_device(command))
        .collect();
    entries.push(EntryPoint::physical_device(C::CreateDevice).scope(ScopeEvent::CreateDevice));
    entries
}
