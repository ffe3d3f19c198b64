//! Global and instance-level commands: instance lifetime, physical device
//! enumeration and the debug callbacks.

use vkot_core::ObjectKind as K;

use crate::command::Command as C;
use crate::entry_point::{EntryPoint, ScopeEvent};

pub(crate) fn entry_points() -> Vec<EntryPoint> {
    vec![
        EntryPoint::global(C::CreateInstance).scope(ScopeEvent::CreateInstance),
        EntryPoint::global(C::EnumerateInstanceExtensionProperties),
        EntryPoint::global(C::EnumerateInstanceLayerProperties),
        EntryPoint::global(C::EnumerateInstanceVersion),
        EntryPoint::instance(C::DestroyInstance)
            .scope(ScopeEvent::DestroyInstance)
            .allocator_vuids(
                "VUID-vkDestroyInstance-instance-00630",
                "VUID-vkDestroyInstance-instance-00631",
            ),
        EntryPoint::instance(C::EnumeratePhysicalDevices)
            .retrieves("pPhysicalDevices[]", K::PhysicalDevice),
        EntryPoint::instance(C::EnumeratePhysicalDeviceGroups)
            .retrieves("pPhysicalDeviceGroupProperties[].physicalDevices[]", K::PhysicalDevice),
        EntryPoint::instance(C::EnumeratePhysicalDeviceGroupsKHR)
            .retrieves("pPhysicalDeviceGroupProperties[].physicalDevices[]", K::PhysicalDevice),
        // VK_EXT_debug_report
        EntryPoint::instance(C::CreateDebugReportCallbackEXT)
            .creates("pCallback", K::DebugReportCallbackEXT),
        EntryPoint::instance(C::DestroyDebugReportCallbackEXT)
            .destroys("callback", K::DebugReportCallbackEXT)
            .allocator_vuids(
                "VUID-vkDestroyDebugReportCallbackEXT-instance-01242",
                "VUID-vkDestroyDebugReportCallbackEXT-instance-01243",
            ),
        EntryPoint::instance(C::DebugReportMessageEXT),
        // VK_EXT_debug_utils
        EntryPoint::instance(C::CreateDebugUtilsMessengerEXT)
            .creates("pMessenger", K::DebugUtilsMessengerEXT),
        EntryPoint::instance(C::DestroyDebugUtilsMessengerEXT)
            .destroys("messenger", K::DebugUtilsMessengerEXT)
            .allocator_vuids(
                "VUID-vkDestroyDebugUtilsMessengerEXT-messenger-01915",
                "VUID-vkDestroyDebugUtilsMessengerEXT-messenger-01916",
            ),
        EntryPoint::instance(C::SubmitDebugUtilsMessageEXT),
    ]
}
