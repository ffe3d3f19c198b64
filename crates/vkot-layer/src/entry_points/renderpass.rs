//! Render passes, framebuffers and the render pass / dynamic rendering
//! recording commands.

use vkot_core::ObjectKind as K;

use crate::command::Command as C;
use crate::entry_point::EntryPoint;

pub(crate) fn entry_points() -> Vec<EntryPoint> {
    let mut entries = vec![
        EntryPoint::device(C::CreateRenderPass).creates("pRenderPass", K::RenderPass),
        EntryPoint::device(C::CreateRenderPass2).creates("pRenderPass", K::RenderPass),
        EntryPoint::device(C::CreateRenderPass2KHR).creates("pRenderPass", K::RenderPass),
        EntryPoint::device(C::DestroyRenderPass)
            .destroys("renderPass", K::RenderPass)
            .allocator_vuids(
                "VUID-vkDestroyRenderPass-renderPass-00874",
                "VUID-vkDestroyRenderPass-renderPass-00875",
            ),
        EntryPoint::device(C::GetRenderAreaGranularity).handle("renderPass", K::RenderPass),
        EntryPoint::device(C::CreateFramebuffer)
            .nested("VkFramebufferCreateInfo", "pCreateInfo.renderPass", K::RenderPass)
            .nested("VkFramebufferCreateInfo", "pCreateInfo.pAttachments[]", K::ImageView)
            .common_parent()
            .creates("pFramebuffer", K::Framebuffer),
        EntryPoint::device(C::DestroyFramebuffer)
            .destroys("framebuffer", K::Framebuffer)
            .allocator_vuids(
                "VUID-vkDestroyFramebuffer-framebuffer-00893",
                "VUID-vkDestroyFramebuffer-framebuffer-00894",
            ),
        EntryPoint::command_buffer(C::CmdNextSubpass),
        EntryPoint::command_buffer(C::CmdEndRenderPass),
    ];

    for command in [C::CmdBeginRenderPass, C::CmdBeginRenderPass2, C::CmdBeginRenderPass2KHR] {
        entries.push(
            EntryPoint::command_buffer(command)
                .nested("VkRenderPassBeginInfo", "pRenderPassBegin.renderPass", K::RenderPass)
                .nested("VkRenderPassBeginInfo", "pRenderPassBegin.framebuffer", K::Framebuffer)
                .common_parent(),
        );
    }
    for command in [
        C::CmdNextSubpass2,
        C::CmdNextSubpass2KHR,
        C::CmdEndRenderPass2,
        C::CmdEndRenderPass2KHR,
        C::CmdEndRendering,
        C::CmdEndRenderingKHR,
    ] {
        entries.push(EntryPoint::command_buffer(command));
    }
    for command in [C::CmdBeginRendering, C::CmdBeginRenderingKHR] {
        let mut entry = EntryPoint::command_buffer(command);
        for path in [
            "pRenderingInfo.pColorAttachments[].imageView",
            "pRenderingInfo.pColorAttachments[].resolveImageView",
            "pRenderingInfo.pDepthAttachment.imageView",
            "pRenderingInfo.pDepthAttachment.resolveImageView",
            "pRenderingInfo.pStencilAttachment.imageView",
            "pRenderingInfo.pStencilAttachment.resolveImageView",
        ] {
            entry = entry.nested_optional("VkRenderingAttachmentInfo", path, K::ImageView);
        }
        entries.push(entry.common_parent());
    }
    entries
}
