//! Fences, semaphores, events, query pools and queue submission.

use vkot_common::Platform;
use vkot_core::ObjectKind as K;

use crate::command::Command as C;
use crate::entry_point::EntryPoint;

pub(crate) fn entry_points() -> Vec<EntryPoint> {
    let mut entries = vec![
        EntryPoint::device(C::CreateFence).creates("pFence", K::Fence),
        EntryPoint::device(C::DestroyFence)
            .destroys("fence", K::Fence)
            .allocator_vuids(
                "VUID-vkDestroyFence-fence-01121",
                "VUID-vkDestroyFence-fence-01122",
            ),
        EntryPoint::device(C::ResetFences).handle("pFences[]", K::Fence),
        EntryPoint::device(C::GetFenceStatus).handle("fence", K::Fence),
        EntryPoint::device(C::WaitForFences).handle("pFences[]", K::Fence),
        EntryPoint::device(C::CreateSemaphore).creates("pSemaphore", K::Semaphore),
        EntryPoint::device(C::DestroySemaphore)
            .destroys("semaphore", K::Semaphore)
            .allocator_vuids(
                "VUID-vkDestroySemaphore-semaphore-01138",
                "VUID-vkDestroySemaphore-semaphore-01139",
            ),
        EntryPoint::device(C::CreateEvent).creates("pEvent", K::Event),
        EntryPoint::device(C::DestroyEvent)
            .destroys("event", K::Event)
            .allocator_vuids(
                "VUID-vkDestroyEvent-event-01146",
                "VUID-vkDestroyEvent-event-01147",
            ),
        EntryPoint::device(C::GetEventStatus).handle("event", K::Event),
        EntryPoint::device(C::SetEvent).handle("event", K::Event),
        EntryPoint::device(C::ResetEvent).handle("event", K::Event),
        EntryPoint::device(C::CreateQueryPool).creates("pQueryPool", K::QueryPool),
        EntryPoint::device(C::DestroyQueryPool)
            .destroys("queryPool", K::QueryPool)
            .allocator_vuids(
                "VUID-vkDestroyQueryPool-queryPool-00794",
                "VUID-vkDestroyQueryPool-queryPool-00795",
            ),
        EntryPoint::device(C::GetQueryPoolResults).handle("queryPool", K::QueryPool),
        EntryPoint::device(C::ResetQueryPool).handle("queryPool", K::QueryPool),
        EntryPoint::device(C::ResetQueryPoolEXT).handle("queryPool", K::QueryPool),
        EntryPoint::queue(C::QueueSubmit)
            .nested("VkSubmitInfo", "pSubmits[].pWaitSemaphores[]", K::Semaphore)
            .nested("VkSubmitInfo", "pSubmits[].pCommandBuffers[]", K::CommandBuffer)
            .nested("VkSubmitInfo", "pSubmits[].pSignalSemaphores[]", K::Semaphore)
            .optional("fence", K::Fence)
            .common_parent(),
        EntryPoint::queue(C::QueueBindSparse)
            .nested("VkBindSparseInfo", "pBindInfo[].pWaitSemaphores[]", K::Semaphore)
            .nested(
                "VkSparseBufferMemoryBindInfo",
                "pBindInfo[].pBufferBinds[].buffer",
                K::Buffer,
            )
            .nested_optional(
                "VkSparseMemoryBind",
                "pBindInfo[].pBufferBinds[].pBinds[].memory",
                K::DeviceMemory,
            )
            .nested(
                "VkSparseImageOpaqueMemoryBindInfo",
                "pBindInfo[].pImageOpaqueBinds[].image",
                K::Image,
            )
            .nested_optional(
                "VkSparseMemoryBind",
                "pBindInfo[].pImageOpaqueBinds[].pBinds[].memory",
                K::DeviceMemory,
            )
            .nested(
                "VkSparseImageMemoryBindInfo",
                "pBindInfo[].pImageBinds[].image",
                K::Image,
            )
            .nested_optional(
                "VkSparseImageMemoryBind",
                "pBindInfo[].pImageBinds[].pBinds[].memory",
                K::DeviceMemory,
            )
            .nested("VkBindSparseInfo", "pBindInfo[].pSignalSemaphores[]", K::Semaphore)
            .optional("fence", K::Fence)
            .common_parent(),
        EntryPoint::device(C::ImportSemaphoreFdKHR).nested(
            "VkImportSemaphoreFdInfoKHR",
            "pImportSemaphoreFdInfo.semaphore",
            K::Semaphore,
        ),
        EntryPoint::device(C::GetSemaphoreFdKHR).nested(
            "VkSemaphoreGetFdInfoKHR",
            "pGetFdInfo.semaphore",
            K::Semaphore,
        ),
        EntryPoint::device(C::ImportFenceFdKHR).nested(
            "VkImportFenceFdInfoKHR",
            "pImportFenceFdInfo.fence",
            K::Fence,
        ),
        EntryPoint::device(C::GetFenceFdKHR).nested(
            "VkFenceGetFdInfoKHR",
            "pGetFdInfo.fence",
            K::Fence,
        ),
        EntryPoint::device(C::ImportSemaphoreWin32HandleKHR)
            .nested(
                "VkImportSemaphoreWin32HandleInfoKHR",
                "pImportSemaphoreWin32HandleInfo.semaphore",
                K::Semaphore,
            )
            .platform(Platform::Win32),
        EntryPoint::device(C::GetSemaphoreWin32HandleKHR)
            .nested(
                "VkSemaphoreGetWin32HandleInfoKHR",
                "pGetWin32HandleInfo.semaphore",
                K::Semaphore,
            )
            .platform(Platform::Win32),
        EntryPoint::device(C::ImportFenceWin32HandleKHR)
            .nested(
                "VkImportFenceWin32HandleInfoKHR",
                "pImportFenceWin32HandleInfo.fence",
                K::Fence,
            )
            .platform(Platform::Win32),
        EntryPoint::device(C::GetFenceWin32HandleKHR)
            .nested(
                "VkFenceGetWin32HandleInfoKHR",
                "pGetWin32HandleInfo.fence",
                K::Fence,
            )
            .platform(Platform::Win32),
    ];

    // Timeline semaphores
    for (value, wait, signal) in [
        (C::GetSemaphoreCounterValue, C::WaitSemaphores, C::SignalSemaphore),
        (C::GetSemaphoreCounterValueKHR, C::WaitSemaphoresKHR, C::SignalSemaphoreKHR),
    ] {
        entries.push(EntryPoint::device(value).handle("semaphore", K::Semaphore));
        entries.push(EntryPoint::device(wait).nested(
            "VkSemaphoreWaitInfo",
            "pWaitInfo.pSemaphores[]",
            K::Semaphore,
        ));
        entries.push(EntryPoint::device(signal).nested(
            "VkSemaphoreSignalInfo",
            "pSignalInfo.semaphore",
            K::Semaphore,
        ));
    }
    for command in [C::QueueSubmit2, C::QueueSubmit2KHR] {
        entries.push(
            EntryPoint::queue(command)
                .nested(
                    "VkSemaphoreSubmitInfo",
                    "pSubmits[].pWaitSemaphoreInfos[].semaphore",
                    K::Semaphore,
                )
                .nested(
                    "VkCommandBufferSubmitInfo",
                    "pSubmits[].pCommandBufferInfos[].commandBuffer",
                    K::CommandBuffer,
                )
                .nested(
                    "VkSemaphoreSubmitInfo",
                    "pSubmits[].pSignalSemaphoreInfos[].semaphore",
                    K::Semaphore,
                )
                .optional("fence", K::Fence)
                .common_parent(),
        );
    }
    entries
}
