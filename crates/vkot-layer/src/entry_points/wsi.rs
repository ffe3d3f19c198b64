//! Window-system integration: surfaces, swapchains, displays and the
//! platform-specific surface constructors.

use vkot_common::Platform;
use vkot_core::ObjectKind as K;

use crate::command::Command as C;
use crate::entry_point::EntryPoint;

pub(crate) fn entry_points() -> Vec<EntryPoint> {
    let mut entries = vec![
        EntryPoint::instance(C::DestroySurfaceKHR)
            .destroys("surface", K::SurfaceKHR)
            .allocator_vuids(
                "VUID-vkDestroySurfaceKHR-surface-01267",
                "VUID-vkDestroySurfaceKHR-surface-01268",
            ),
        EntryPoint::physical_device(C::GetPhysicalDeviceSurfaceSupportKHR)
            .handle("surface", K::SurfaceKHR)
            .common_parent(),
        EntryPoint::physical_device(C::GetPhysicalDeviceSurfaceCapabilitiesKHR)
            .handle("surface", K::SurfaceKHR)
            .common_parent(),
        EntryPoint::physical_device(C::GetPhysicalDeviceSurfaceFormatsKHR)
            .handle("surface", K::SurfaceKHR)
            .common_parent(),
        EntryPoint::physical_device(C::GetPhysicalDeviceSurfacePresentModesKHR)
            .handle("surface", K::SurfaceKHR)
            .common_parent(),
        EntryPoint::physical_device(C::GetPhysicalDeviceSurfaceCapabilities2KHR).nested(
            "VkPhysicalDeviceSurfaceInfo2KHR",
            "pSurfaceInfo.surface",
            K::SurfaceKHR,
        ),
        EntryPoint::physical_device(C::GetPhysicalDeviceSurfaceFormats2KHR).nested(
            "VkPhysicalDeviceSurfaceInfo2KHR",
            "pSurfaceInfo.surface",
            K::SurfaceKHR,
        ),
        EntryPoint::physical_device(C::GetPhysicalDeviceSurfaceCapabilities2EXT)
            .handle("surface", K::SurfaceKHR),
        EntryPoint::physical_device(C::GetPhysicalDevicePresentRectanglesKHR)
            .handle("surface", K::SurfaceKHR)
            .common_parent(),
        EntryPoint::physical_device(C::GetPhysicalDeviceSurfacePresentModes2EXT)
            .nested(
                "VkPhysicalDeviceSurfaceInfo2KHR",
                "pSurfaceInfo.surface",
                K::SurfaceKHR,
            )
            .platform(Platform::Win32),
        EntryPoint::instance(C::CreateHeadlessSurfaceEXT).creates("pSurface", K::SurfaceKHR),
        // Swapchains
        EntryPoint::device(C::CreateSwapchainKHR)
            .nested("VkSwapchainCreateInfoKHR", "pCreateInfo.surface", K::SurfaceKHR)
            .nested_optional(
                "VkSwapchainCreateInfoKHR",
                "pCreateInfo.oldSwapchain",
                K::SwapchainKHR,
            )
            .common_parent()
            .creates("pSwapchain", K::SwapchainKHR),
        EntryPoint::device(C::CreateSharedSwapchainsKHR)
            .nested("VkSwapchainCreateInfoKHR", "pCreateInfos[].surface", K::SurfaceKHR)
            .nested_optional(
                "VkSwapchainCreateInfoKHR",
                "pCreateInfos[].oldSwapchain",
                K::SwapchainKHR,
            )
            .common_parent()
            .creates("pSwapchains[]", K::SwapchainKHR),
        // Destroying a swapchain releases the images retrieved from it
        EntryPoint::device(C::DestroySwapchainKHR)
            .destroys("swapchain", K::SwapchainKHR)
            .allocator_vuids(
                "VUID-vkDestroySwapchainKHR-swapchain-01283",
                "VUID-vkDestroySwapchainKHR-swapchain-01284",
            ),
        EntryPoint::device(C::GetSwapchainImagesKHR)
            .handle("swapchain", K::SwapchainKHR)
            .retrieves_child("pSwapchainImages[]", K::Image, "swapchain"),
        EntryPoint::device(C::AcquireNextImageKHR)
            .handle("swapchain", K::SwapchainKHR)
            .optional("semaphore", K::Semaphore)
            .optional("fence", K::Fence)
            .common_parent(),
        EntryPoint::device(C::AcquireNextImage2KHR)
            .nested("VkAcquireNextImageInfoKHR", "pAcquireInfo.swapchain", K::SwapchainKHR)
            .nested_optional("VkAcquireNextImageInfoKHR", "pAcquireInfo.semaphore", K::Semaphore)
            .nested_optional("VkAcquireNextImageInfoKHR", "pAcquireInfo.fence", K::Fence)
            .common_parent(),
        EntryPoint::queue(C::QueuePresentKHR)
            .nested("VkPresentInfoKHR", "pPresentInfo.pWaitSemaphores[]", K::Semaphore)
            .nested("VkPresentInfoKHR", "pPresentInfo.pSwapchains[]", K::SwapchainKHR)
            .common_parent(),
        EntryPoint::device(C::GetDeviceGroupPresentCapabilitiesKHR),
        EntryPoint::device(C::GetDeviceGroupSurfacePresentModesKHR)
            .handle("surface", K::SurfaceKHR)
            .common_parent(),
        EntryPoint::device(C::GetDeviceGroupSurfacePresentModes2EXT)
            .nested(
                "VkPhysicalDeviceSurfaceInfo2KHR",
                "pSurfaceInfo.surface",
                K::SurfaceKHR,
            )
            .platform(Platform::Win32),
        EntryPoint::device(C::GetSwapchainStatusKHR).handle("swapchain", K::SwapchainKHR),
        EntryPoint::device(C::GetSwapchainCounterEXT).handle("swapchain", K::SwapchainKHR),
        EntryPoint::device(C::SetHdrMetadataEXT).handle("pSwapchains[]", K::SwapchainKHR),
        EntryPoint::device(C::SetLocalDimmingAMD).handle("swapChain", K::SwapchainKHR),
        EntryPoint::device(C::AcquireFullScreenExclusiveModeEXT)
            .handle("swapchain", K::SwapchainKHR)
            .platform(Platform::Win32),
        EntryPoint::device(C::ReleaseFullScreenExclusiveModeEXT)
            .handle("swapchain", K::SwapchainKHR)
            .platform(Platform::Win32),
        // Displays: handed out by the implementation, owned by the physical device
        EntryPoint::physical_device(C::GetPhysicalDeviceDisplayPropertiesKHR)
            .retrieves("pProperties[].display", K::DisplayKHR),
        EntryPoint::physical_device(C::GetPhysicalDeviceDisplayPlanePropertiesKHR)
            .retrieves("pProperties[].currentDisplay", K::DisplayKHR),
        EntryPoint::physical_device(C::GetPhysicalDeviceDisplayProperties2KHR)
            .retrieves("pProperties[].displayProperties.display", K::DisplayKHR),
        EntryPoint::physical_device(C::GetPhysicalDeviceDisplayPlaneProperties2KHR)
            .retrieves("pProperties[].displayPlaneProperties.currentDisplay", K::DisplayKHR),
        EntryPoint::physical_device(C::GetDisplayPlaneSupportedDisplaysKHR)
            .retrieves("pDisplays[]", K::DisplayKHR),
        EntryPoint::physical_device(C::GetDisplayModePropertiesKHR)
            .handle("display", K::DisplayKHR)
            .retrieves_child("pProperties[].displayMode", K::DisplayModeKHR, "display"),
        EntryPoint::physical_device(C::GetDisplayModeProperties2KHR)
            .handle("display", K::DisplayKHR)
            .retrieves_child(
                "pProperties[].displayModeProperties.displayMode",
                K::DisplayModeKHR,
                "display",
            ),
        // Display modes cannot be destroyed; they go away with their display
        EntryPoint::physical_device(C::CreateDisplayModeKHR)
            .handle("display", K::DisplayKHR)
            .retrieves_child("pMode", K::DisplayModeKHR, "display"),
        EntryPoint::physical_device(C::GetDisplayPlaneCapabilitiesKHR)
            .handle("mode", K::DisplayModeKHR),
        EntryPoint::physical_device(C::GetDisplayPlaneCapabilities2KHR).nested(
            "VkDisplayPlaneInfo2KHR",
            "pDisplayPlaneInfo.mode",
            K::DisplayModeKHR,
        ),
        EntryPoint::instance(C::CreateDisplayPlaneSurfaceKHR)
            .nested(
                "VkDisplaySurfaceCreateInfoKHR",
                "pCreateInfo.displayMode",
                K::DisplayModeKHR,
            )
            .creates("pSurface", K::SurfaceKHR),
        EntryPoint::physical_device(C::ReleaseDisplayEXT).handle("display", K::DisplayKHR),
        EntryPoint::physical_device(C::AcquireXlibDisplayEXT)
            .handle("display", K::DisplayKHR)
            .platform(Platform::Xlib),
        EntryPoint::physical_device(C::GetRandROutputDisplayEXT)
            .retrieves("pDisplay", K::DisplayKHR)
            .platform(Platform::Xlib),
        EntryPoint::device(C::DisplayPowerControlEXT).handle("display", K::DisplayKHR),
        EntryPoint::device(C::RegisterDeviceEventEXT).creates("pFence", K::Fence),
        EntryPoint::device(C::RegisterDisplayEventEXT)
            .handle("display", K::DisplayKHR)
            .creates("pFence", K::Fence),
    ];

    // Platform surface constructors and presentation-support queries
    for (create, support, platform) in [
        (
            C::CreateXlibSurfaceKHR,
            Some(C::GetPhysicalDeviceXlibPresentationSupportKHR),
            Platform::Xlib,
        ),
        (
            C::CreateXcbSurfaceKHR,
            Some(C::GetPhysicalDeviceXcbPresentationSupportKHR),
            Platform::Xcb,
        ),
        (
            C::CreateWaylandSurfaceKHR,
            Some(C::GetPhysicalDeviceWaylandPresentationSupportKHR),
            Platform::Wayland,
        ),
        (
            C::CreateWin32SurfaceKHR,
            Some(C::GetPhysicalDeviceWin32PresentationSupportKHR),
            Platform::Win32,
        ),
        (C::CreateAndroidSurfaceKHR, None, Platform::Android),
        (C::CreateMacOSSurfaceMVK, None, Platform::MacOs),
        (C::CreateIOSSurfaceMVK, None, Platform::Ios),
        (C::CreateMetalSurfaceEXT, None, Platform::Metal),
    ] {
        entries.push(
            EntryPoint::instance(create)
                .creates("pSurface", K::SurfaceKHR)
                .platform(platform),
        );
        if let Some(support) = support {
            entries.push(EntryPoint::physical_device(support).platform(platform));
        }
    }
    entries
}
