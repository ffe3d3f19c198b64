//! Command pools, command buffers and vkCmd* recording.

use vkot_core::ObjectKind as K;

use crate::command::Command as C;
use crate::entry_point::EntryPoint;

/// Recording commands that name no handle besides the command buffer.
const STATE_ONLY: &[C] = &[
    C::CmdSetViewport,
    C::CmdSetScissor,
    C::CmdSetLineWidth,
    C::CmdSetDepthBias,
    C::CmdSetBlendConstants,
    C::CmdSetDepthBounds,
    C::CmdSetStencilCompareMask,
    C::CmdSetStencilWriteMask,
    C::CmdSetStencilReference,
    C::CmdDraw,
    C::CmdDrawIndexed,
    C::CmdDispatch,
    C::CmdDispatchBase,
    C::CmdDispatchBaseKHR,
    C::CmdClearAttachments,
    C::CmdSetDeviceMask,
    C::CmdSetDeviceMaskKHR,
    C::CmdSetCullModeEXT,
    C::CmdSetFrontFaceEXT,
    C::CmdSetPrimitiveTopologyEXT,
    C::CmdSetViewportWithCountEXT,
    C::CmdSetScissorWithCountEXT,
    C::CmdSetDepthTestEnableEXT,
    C::CmdSetDepthWriteEnableEXT,
    C::CmdSetDepthCompareOpEXT,
    C::CmdSetDepthBoundsTestEnableEXT,
    C::CmdSetStencilTestEnableEXT,
    C::CmdSetStencilOpEXT,
    C::CmdSetRasterizerDiscardEnableEXT,
    C::CmdSetDepthBiasEnableEXT,
    C::CmdSetPrimitiveRestartEnableEXT,
    C::CmdSetLineStippleEXT,
    C::CmdSetSampleLocationsEXT,
    C::CmdSetDiscardRectangleEXT,
    C::CmdSetViewportWScalingNV,
    C::CmdSetExclusiveScissorNV,
    C::CmdSetViewportShadingRatePaletteNV,
    C::CmdSetCoarseSampleOrderNV,
    C::CmdSetFragmentShadingRateKHR,
    C::CmdSetCheckpointNV,
    C::CmdDrawMeshTasksNV,
    C::CmdEndConditionalRenderingEXT,
    C::EndCommandBuffer,
];

pub(crate) fn entry_points() -> Vec<EntryPoint> {
    let mut entries = vec![
        EntryPoint::device(C::CreateCommandPool).creates("pCommandPool", K::CommandPool),
        // Destroying the pool frees every command buffer allocated from it
        EntryPoint::device(C::DestroyCommandPool)
            .destroys("commandPool", K::CommandPool)
            .allocator_vuids(
                "VUID-vkDestroyCommandPool-commandPool-00042",
                "VUID-vkDestroyCommandPool-commandPool-00043",
            ),
        EntryPoint::device(C::ResetCommandPool).handle("commandPool", K::CommandPool),
        EntryPoint::device(C::TrimCommandPool).handle("commandPool", K::CommandPool),
        EntryPoint::device(C::TrimCommandPoolKHR).handle("commandPool", K::CommandPool),
        EntryPoint::device(C::AllocateCommandBuffers)
            .nested(
                "VkCommandBufferAllocateInfo",
                "pAllocateInfo.commandPool",
                K::CommandPool,
            )
            .creates_child("pCommandBuffers[]", K::CommandBuffer, "pAllocateInfo.commandPool"),
        EntryPoint::device(C::FreeCommandBuffers)
            .handle("commandPool", K::CommandPool)
            .frees(
                "pCommandBuffers[]",
                K::CommandBuffer,
                "commandPool",
                "VUID-vkFreeCommandBuffers-pCommandBuffers-parent",
            ),
        EntryPoint::command_buffer(C::BeginCommandBuffer)
            .nested_optional(
                "VkCommandBufferInheritanceInfo",
                "pBeginInfo.pInheritanceInfo.renderPass",
                K::RenderPass,
            )
            .nested_optional(
                "VkCommandBufferInheritanceInfo",
                "pBeginInfo.pInheritanceInfo.framebuffer",
                K::Framebuffer,
            )
            .common_parent(),
        EntryPoint::command_buffer(C::ResetCommandBuffer),
        EntryPoint::command_buffer(C::CmdExecuteCommands)
            .handle("pCommandBuffers[]", K::CommandBuffer)
            .common_parent(),
        EntryPoint::command_buffer(C::CmdPushConstants).handle("layout", K::PipelineLayout),
        // Buffers and vertex input
        EntryPoint::command_buffer(C::CmdBindIndexBuffer).handle("buffer", K::Buffer),
        EntryPoint::command_buffer(C::CmdBindVertexBuffers)
            .handle("pBuffers[]", K::Buffer)
            .common_parent(),
        EntryPoint::command_buffer(C::CmdBindVertexBuffers2EXT)
            .optional("pBuffers[]", K::Buffer)
            .common_parent(),
        EntryPoint::command_buffer(C::CmdDrawIndirect).handle("buffer", K::Buffer),
        EntryPoint::command_buffer(C::CmdDrawIndexedIndirect).handle("buffer", K::Buffer),
        EntryPoint::command_buffer(C::CmdDispatchIndirect).handle("buffer", K::Buffer),
        EntryPoint::command_buffer(C::CmdDrawMeshTasksIndirectNV).handle("buffer", K::Buffer),
        EntryPoint::command_buffer(C::CmdDrawMeshTasksIndirectCountNV)
            .handle("buffer", K::Buffer)
            .handle("countBuffer", K::Buffer)
            .common_parent(),
        // Transfer
        EntryPoint::command_buffer(C::CmdCopyBuffer)
            .handle("srcBuffer", K::Buffer)
            .handle("dstBuffer", K::Buffer)
            .common_parent(),
        EntryPoint::command_buffer(C::CmdCopyImage)
            .handle("srcImage", K::Image)
            .handle("dstImage", K::Image)
            .common_parent(),
        EntryPoint::command_buffer(C::CmdBlitImage)
            .handle("srcImage", K::Image)
            .handle("dstImage", K::Image)
            .common_parent(),
        EntryPoint::command_buffer(C::CmdCopyBufferToImage)
            .handle("srcBuffer", K::Buffer)
            .handle("dstImage", K::Image)
            .common_parent(),
        EntryPoint::command_buffer(C::CmdCopyImageToBuffer)
            .handle("srcImage", K::Image)
            .handle("dstBuffer", K::Buffer)
            .common_parent(),
        EntryPoint::command_buffer(C::CmdResolveImage)
            .handle("srcImage", K::Image)
            .handle("dstImage", K::Image)
            .common_parent(),
        EntryPoint::command_buffer(C::CmdUpdateBuffer).handle("dstBuffer", K::Buffer),
        EntryPoint::command_buffer(C::CmdFillBuffer).handle("dstBuffer", K::Buffer),
        EntryPoint::command_buffer(C::CmdClearColorImage).handle("image", K::Image),
        EntryPoint::command_buffer(C::CmdClearDepthStencilImage).handle("image", K::Image),
        EntryPoint::command_buffer(C::CmdWriteBufferMarkerAMD).handle("dstBuffer", K::Buffer),
        EntryPoint::command_buffer(C::CmdWriteBufferMarker2AMD).handle("dstBuffer", K::Buffer),
        // Synchronization
        EntryPoint::command_buffer(C::CmdSetEvent).handle("event", K::Event),
        EntryPoint::command_buffer(C::CmdResetEvent).handle("event", K::Event),
        barriers(EntryPoint::command_buffer(C::CmdWaitEvents).handle("pEvents[]", K::Event)),
        barriers(EntryPoint::command_buffer(C::CmdPipelineBarrier)),
        // Queries
        EntryPoint::command_buffer(C::CmdBeginQuery).handle("queryPool", K::QueryPool),
        EntryPoint::command_buffer(C::CmdEndQuery).handle("queryPool", K::QueryPool),
        EntryPoint::command_buffer(C::CmdBeginQueryIndexedEXT).handle("queryPool", K::QueryPool),
        EntryPoint::command_buffer(C::CmdEndQueryIndexedEXT).handle("queryPool", K::QueryPool),
        EntryPoint::command_buffer(C::CmdResetQueryPool).handle("queryPool", K::QueryPool),
        EntryPoint::command_buffer(C::CmdWriteTimestamp).handle("queryPool", K::QueryPool),
        EntryPoint::command_buffer(C::CmdCopyQueryPoolResults)
            .handle("queryPool", K::QueryPool)
            .handle("dstBuffer", K::Buffer)
            .common_parent(),
        // VK_EXT_transform_feedback
        EntryPoint::command_buffer(C::CmdBindTransformFeedbackBuffersEXT)
            .handle("pBuffers[]", K::Buffer)
            .common_parent(),
        EntryPoint::command_buffer(C::CmdBeginTransformFeedbackEXT)
            .optional("pCounterBuffers[]", K::Buffer)
            .common_parent(),
        EntryPoint::command_buffer(C::CmdEndTransformFeedbackEXT)
            .optional("pCounterBuffers[]", K::Buffer)
            .common_parent(),
        EntryPoint::command_buffer(C::CmdDrawIndirectByteCountEXT).handle("counterBuffer", K::Buffer),
        // VK_EXT_conditional_rendering
        EntryPoint::command_buffer(C::CmdBeginConditionalRenderingEXT).nested(
            "VkConditionalRenderingBeginInfoEXT",
            "pConditionalRenderingBegin.buffer",
            K::Buffer,
        ),
        // VK_NV_shading_rate_image
        EntryPoint::command_buffer(C::CmdBindShadingRateImageNV).optional("imageView", K::ImageView),
    ];

    entries.extend(STATE_ONLY.iter().map(|&command| EntryPoint::command_buffer(command)));

    for command in [
        C::CmdDrawIndirectCount,
        C::CmdDrawIndirectCountKHR,
        C::CmdDrawIndirectCountAMD,
        C::CmdDrawIndexedIndirectCount,
        C::CmdDrawIndexedIndirectCountKHR,
        C::CmdDrawIndexedIndirectCountAMD,
    ] {
        entries.push(
            EntryPoint::command_buffer(command)
                .handle("buffer", K::Buffer)
                .handle("countBuffer", K::Buffer)
                .common_parent(),
        );
    }

    // VK_KHR_copy_commands2 and its core promotion
    for command in [C::CmdCopyBuffer2, C::CmdCopyBuffer2KHR] {
        entries.push(
            EntryPoint::command_buffer(command)
                .nested("VkCopyBufferInfo2", "pCopyBufferInfo.srcBuffer", K::Buffer)
                .nested("VkCopyBufferInfo2", "pCopyBufferInfo.dstBuffer", K::Buffer)
                .common_parent(),
        );
    }
    for command in [C::CmdCopyImage2, C::CmdCopyImage2KHR] {
        entries.push(
            EntryPoint::command_buffer(command)
                .nested("VkCopyImageInfo2", "pCopyImageInfo.srcImage", K::Image)
                .nested("VkCopyImageInfo2", "pCopyImageInfo.dstImage", K::Image)
                .common_parent(),
        );
    }
    for command in [C::CmdCopyBufferToImage2, C::CmdCopyBufferToImage2KHR] {
        entries.push(
            EntryPoint::command_buffer(command)
                .nested("VkCopyBufferToImageInfo2", "pCopyBufferToImageInfo.srcBuffer", K::Buffer)
                .nested("VkCopyBufferToImageInfo2", "pCopyBufferToImageInfo.dstImage", K::Image)
                .common_parent(),
        );
    }
    for command in [C::CmdCopyImageToBuffer2, C::CmdCopyImageToBuffer2KHR] {
        entries.push(
            EntryPoint::command_buffer(command)
                .nested("VkCopyImageToBufferInfo2", "pCopyImageToBufferInfo.srcImage", K::Image)
                .nested("VkCopyImageToBufferInfo2", "pCopyImageToBufferInfo.dstBuffer", K::Buffer)
                .common_parent(),
        );
    }
    for command in [C::CmdBlitImage2, C::CmdBlitImage2KHR] {
        entries.push(
            EntryPoint::command_buffer(command)
                .nested("VkBlitImageInfo2", "pBlitImageInfo.srcImage", K::Image)
                .nested("VkBlitImageInfo2", "pBlitImageInfo.dstImage", K::Image)
                .common_parent(),
        );
    }
    for command in [C::CmdResolveImage2, C::CmdResolveImage2KHR] {
        entries.push(
            EntryPoint::command_buffer(command)
                .nested("VkResolveImageInfo2", "pResolveImageInfo.srcImage", K::Image)
                .nested("VkResolveImageInfo2", "pResolveImageInfo.dstImage", K::Image)
                .common_parent(),
        );
    }

    // VK_KHR_synchronization2 and its core promotion
    for (set, reset, wait, barrier, timestamp) in [
        (
            C::CmdSetEvent2,
            C::CmdResetEvent2,
            C::CmdWaitEvents2,
            C::CmdPipelineBarrier2,
            C::CmdWriteTimestamp2,
        ),
        (
            C::CmdSetEvent2KHR,
            C::CmdResetEvent2KHR,
            C::CmdWaitEvents2KHR,
            C::CmdPipelineBarrier2KHR,
            C::CmdWriteTimestamp2KHR,
        ),
    ] {
        entries.push(dependency_info(EntryPoint::command_buffer(set).handle("event", K::Event)));
        entries.push(EntryPoint::command_buffer(reset).handle("event", K::Event));
        entries.push(
            EntryPoint::command_buffer(wait)
                .handle("pEvents[]", K::Event)
                .nested(
                    "VkBufferMemoryBarrier2",
                    "pDependencyInfos[].pBufferMemoryBarriers[].buffer",
                    K::Buffer,
                )
                .nested(
                    "VkImageMemoryBarrier2",
                    "pDependencyInfos[].pImageMemoryBarriers[].image",
                    K::Image,
                ),
        );
        entries.push(dependency_info(EntryPoint::command_buffer(barrier)));
        entries.push(EntryPoint::command_buffer(timestamp).handle("queryPool", K::QueryPool));
    }
    entries
}

/// Buffer and image memory barriers passed directly as parameters.
fn barriers(entry: EntryPoint) -> EntryPoint {
    entry
        .nested("VkBufferMemoryBarrier", "pBufferMemoryBarriers[].buffer", K::Buffer)
        .nested("VkImageMemoryBarrier", "pImageMemoryBarriers[].image", K::Image)
}

/// Barriers carried in a single VkDependencyInfo.
fn dependency_info(entry: EntryPoint) -> EntryPoint {
    entry
        .nested(
            "VkBufferMemoryBarrier2",
            "pDependencyInfo.pBufferMemoryBarriers[].buffer",
            K::Buffer,
        )
        .nested(
            "VkImageMemoryBarrier2",
            "pDependencyInfo.pImageMemoryBarriers[].image",
            K::Image,
        )
}
