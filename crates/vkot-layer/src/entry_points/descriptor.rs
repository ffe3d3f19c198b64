//! Descriptor set layouts, pools, sets and update templates.

use vkot_core::ObjectKind as K;

use crate::command::Command as C;
use crate::entry_point::EntryPoint;

pub(crate) fn entry_points() -> Vec<EntryPoint> {
    let mut entries = vec![
        EntryPoint::device(C::CreateDescriptorSetLayout)
            .nested_optional(
                "VkDescriptorSetLayoutBinding",
                "pCreateInfo.pBindings[].pImmutableSamplers[]",
                K::Sampler,
            )
            .creates("pSetLayout", K::DescriptorSetLayout),
        EntryPoint::device(C::DestroyDescriptorSetLayout)
            .destroys("descriptorSetLayout", K::DescriptorSetLayout)
            .allocator_vuids(
                "VUID-vkDestroyDescriptorSetLayout-descriptorSetLayout-00284",
                "VUID-vkDestroyDescriptorSetLayout-descriptorSetLayout-00285",
            ),
        EntryPoint::device(C::CreateDescriptorPool).creates("pDescriptorPool", K::DescriptorPool),
        // Destroying the pool frees every set allocated from it
        EntryPoint::device(C::DestroyDescriptorPool)
            .destroys("descriptorPool", K::DescriptorPool)
            .allocator_vuids(
                "VUID-vkDestroyDescriptorPool-descriptorPool-00304",
                "VUID-vkDestroyDescriptorPool-descriptorPool-00305",
            ),
        EntryPoint::device(C::ResetDescriptorPool)
            .handle("descriptorPool", K::DescriptorPool)
            .resets("descriptorPool", K::DescriptorSet),
        EntryPoint::device(C::AllocateDescriptorSets)
            .nested(
                "VkDescriptorSetAllocateInfo",
                "pAllocateInfo.descriptorPool",
                K::DescriptorPool,
            )
            .nested(
                "VkDescriptorSetAllocateInfo",
                "pAllocateInfo.pSetLayouts[]",
                K::DescriptorSetLayout,
            )
            .common_parent()
            .creates_child("pDescriptorSets[]", K::DescriptorSet, "pAllocateInfo.descriptorPool"),
        EntryPoint::device(C::FreeDescriptorSets)
            .handle("descriptorPool", K::DescriptorPool)
            .frees(
                "pDescriptorSets[]",
                K::DescriptorSet,
                "descriptorPool",
                "VUID-vkFreeDescriptorSets-pDescriptorSets-parent",
            ),
        EntryPoint::device(C::UpdateDescriptorSets)
            .nested("VkWriteDescriptorSet", "pDescriptorWrites[].dstSet", K::DescriptorSet)
            .nested_optional(
                "VkDescriptorImageInfo",
                "pDescriptorWrites[].pImageInfo[].sampler",
                K::Sampler,
            )
            .nested_optional(
                "VkDescriptorImageInfo",
                "pDescriptorWrites[].pImageInfo[].imageView",
                K::ImageView,
            )
            .nested_optional(
                "VkDescriptorBufferInfo",
                "pDescriptorWrites[].pBufferInfo[].buffer",
                K::Buffer,
            )
            .nested_optional(
                "VkWriteDescriptorSet",
                "pDescriptorWrites[].pTexelBufferView[]",
                K::BufferView,
            )
            .nested("VkCopyDescriptorSet", "pDescriptorCopies[].srcSet", K::DescriptorSet)
            .nested("VkCopyDescriptorSet", "pDescriptorCopies[].dstSet", K::DescriptorSet)
            .common_parent(),
        EntryPoint::command_buffer(C::CmdBindDescriptorSets)
            .handle("layout", K::PipelineLayout)
            .handle("pDescriptorSets[]", K::DescriptorSet)
            .common_parent(),
        // Push descriptors have no destination set
        EntryPoint::command_buffer(C::CmdPushDescriptorSetKHR)
            .handle("layout", K::PipelineLayout)
            .nested_optional(
                "VkDescriptorImageInfo",
                "pDescriptorWrites[].pImageInfo[].sampler",
                K::Sampler,
            )
            .nested_optional(
                "VkDescriptorImageInfo",
                "pDescriptorWrites[].pImageInfo[].imageView",
                K::ImageView,
            )
            .nested_optional(
                "VkDescriptorBufferInfo",
                "pDescriptorWrites[].pBufferInfo[].buffer",
                K::Buffer,
            )
            .nested_optional(
                "VkWriteDescriptorSet",
                "pDescriptorWrites[].pTexelBufferView[]",
                K::BufferView,
            )
            .common_parent(),
        EntryPoint::command_buffer(C::CmdPushDescriptorSetWithTemplateKHR)
            .handle("descriptorUpdateTemplate", K::DescriptorUpdateTemplate)
            .handle("layout", K::PipelineLayout)
            .common_parent(),
    ];

    for command in [C::GetDescriptorSetLayoutSupport, C::GetDescriptorSetLayoutSupportKHR] {
        entries.push(EntryPoint::device(command).nested_optional(
            "VkDescriptorSetLayoutBinding",
            "pCreateInfo.pBindings[].pImmutableSamplers[]",
            K::Sampler,
        ));
    }
    for (create, destroy, update) in [
        (
            C::CreateDescriptorUpdateTemplate,
            C::DestroyDescriptorUpdateTemplate,
            C::UpdateDescriptorSetWithTemplate,
        ),
        (
            C::CreateDescriptorUpdateTemplateKHR,
            C::DestroyDescriptorUpdateTemplateKHR,
            C::UpdateDescriptorSetWithTemplateKHR,
        ),
    ] {
        entries.push(
            EntryPoint::device(create)
                // which of the two is used depends on templateType
                .nested_optional(
                    "VkDescriptorUpdateTemplateCreateInfo",
                    "pCreateInfo.descriptorSetLayout",
                    K::DescriptorSetLayout,
                )
                .nested_optional(
                    "VkDescriptorUpdateTemplateCreateInfo",
                    "pCreateInfo.pipelineLayout",
                    K::PipelineLayout,
                )
                .common_parent()
                .creates("pDescriptorUpdateTemplate", K::DescriptorUpdateTemplate),
        );
        entries.push(
            EntryPoint::device(destroy)
                .destroys("descriptorUpdateTemplate", K::DescriptorUpdateTemplate)
                .allocator_vuids(
                    "VUID-vkDestroyDescriptorUpdateTemplate-descriptorSetLayout-00356",
                    "VUID-vkDestroyDescriptorUpdateTemplate-descriptorSetLayout-00357",
                ),
        );
        entries.push(
            EntryPoint::device(update)
                .handle("descriptorSet", K::DescriptorSet)
                .handle("descriptorUpdateTemplate", K::DescriptorUpdateTemplate),
        );
    }
    entries
}
