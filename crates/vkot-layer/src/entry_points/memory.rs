//! Device memory, buffers and buffer views.

use vkot_common::Platform;
use vkot_core::ObjectKind as K;

use crate::command::Command as C;
use crate::entry_point::EntryPoint;

pub(crate) fn entry_points() -> Vec<EntryPoint> {
    let mut entries = vec![
        EntryPoint::device(C::AllocateMemory).creates("pMemory", K::DeviceMemory),
        EntryPoint::device(C::FreeMemory).destroys("memory", K::DeviceMemory),
        EntryPoint::device(C::MapMemory).handle("memory", K::DeviceMemory),
        EntryPoint::device(C::UnmapMemory).handle("memory", K::DeviceMemory),
        EntryPoint::device(C::FlushMappedMemoryRanges).nested(
            "VkMappedMemoryRange",
            "pMemoryRanges[].memory",
            K::DeviceMemory,
        ),
        EntryPoint::device(C::InvalidateMappedMemoryRanges).nested(
            "VkMappedMemoryRange",
            "pMemoryRanges[].memory",
            K::DeviceMemory,
        ),
        EntryPoint::device(C::GetDeviceMemoryCommitment).handle("memory", K::DeviceMemory),
        EntryPoint::device(C::SetDeviceMemoryPriorityEXT).handle("memory", K::DeviceMemory),
        EntryPoint::device(C::BindBufferMemory)
            .handle("buffer", K::Buffer)
            .handle("memory", K::DeviceMemory),
        EntryPoint::device(C::GetBufferMemoryRequirements).handle("buffer", K::Buffer),
        EntryPoint::device(C::CreateBuffer).creates("pBuffer", K::Buffer),
        EntryPoint::device(C::DestroyBuffer)
            .destroys("buffer", K::Buffer)
            .allocator_vuids(
                "VUID-vkDestroyBuffer-buffer-00923",
                "VUID-vkDestroyBuffer-buffer-00924",
            ),
        EntryPoint::device(C::CreateBufferView)
            .nested("VkBufferViewCreateInfo", "pCreateInfo.buffer", K::Buffer)
            .creates("pView", K::BufferView),
        EntryPoint::device(C::DestroyBufferView)
            .destroys("bufferView", K::BufferView)
            .allocator_vuids(
                "VUID-vkDestroyBufferView-bufferView-00937",
                "VUID-vkDestroyBufferView-bufferView-00938",
            ),
        EntryPoint::device(C::GetMemoryFdKHR).nested(
            "VkMemoryGetFdInfoKHR",
            "pGetFdInfo.memory",
            K::DeviceMemory,
        ),
        EntryPoint::device(C::GetMemoryFdPropertiesKHR),
        EntryPoint::device(C::GetMemoryHostPointerPropertiesEXT),
        EntryPoint::device(C::GetMemoryWin32HandleKHR)
            .nested(
                "VkMemoryGetWin32HandleInfoKHR",
                "pGetWin32HandleInfo.memory",
                K::DeviceMemory,
            )
            .platform(Platform::Win32),
        EntryPoint::device(C::GetMemoryWin32HandlePropertiesKHR).platform(Platform::Win32),
        EntryPoint::device(C::GetMemoryWin32HandleNV)
            .handle("memory", K::DeviceMemory)
            .platform(Platform::Win32),
        EntryPoint::device(C::GetMemoryAndroidHardwareBufferANDROID)
            .nested(
                "VkMemoryGetAndroidHardwareBufferInfoANDROID",
                "pInfo.memory",
                K::DeviceMemory,
            )
            .platform(Platform::Android),
        EntryPoint::device(C::GetAndroidHardwareBufferPropertiesANDROID).platform(Platform::Android),
    ];

    // Core 1.1/1.2 entry points and their KHR/EXT aliases
    for command in [C::BindBufferMemory2, C::BindBufferMemory2KHR] {
        entries.push(
            EntryPoint::device(command)
                .nested("VkBindBufferMemoryInfo", "pBindInfos[].buffer", K::Buffer)
                .nested("VkBindBufferMemoryInfo", "pBindInfos[].memory", K::DeviceMemory)
                .common_parent(),
        );
    }
    for command in [C::GetBufferMemoryRequirements2, C::GetBufferMemoryRequirements2KHR] {
        entries.push(EntryPoint::device(command).nested(
            "VkBufferMemoryRequirementsInfo2",
            "pInfo.buffer",
            K::Buffer,
        ));
    }
    for command in [
        C::GetBufferDeviceAddress,
        C::GetBufferDeviceAddressKHR,
        C::GetBufferDeviceAddressEXT,
        C::GetBufferOpaqueCaptureAddress,
        C::GetBufferOpaqueCaptureAddressKHR,
    ] {
        entries.push(EntryPoint::device(command).nested(
            "VkBufferDeviceAddressInfo",
            "pInfo.buffer",
            K::Buffer,
        ));
    }
    for command in [
        C::GetDeviceMemoryOpaqueCaptureAddress,
        C::GetDeviceMemoryOpaqueCaptureAddressKHR,
    ] {
        entries.push(EntryPoint::device(command).nested(
            "VkDeviceMemoryOpaqueCaptureAddressInfo",
            "pInfo.memory",
            K::DeviceMemory,
        ));
    }
    entries
}
