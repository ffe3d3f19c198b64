//! Images, image views, samplers and YCbCr conversions.

use vkot_core::ObjectKind as K;

use crate::command::Command as C;
use crate::entry_point::EntryPoint;

pub(crate) fn entry_points() -> Vec<EntryPoint> {
    let mut entries = vec![
        EntryPoint::device(C::CreateImage).creates("pImage", K::Image),
        EntryPoint::device(C::DestroyImage)
            .destroys("image", K::Image)
            .allocator_vuids(
                "VUID-vkDestroyImage-image-01001",
                "VUID-vkDestroyImage-image-01002",
            ),
        EntryPoint::device(C::BindImageMemory)
            .handle("image", K::Image)
            .handle("memory", K::DeviceMemory),
        EntryPoint::device(C::GetImageMemoryRequirements).handle("image", K::Image),
        EntryPoint::device(C::GetImageSparseMemoryRequirements).handle("image", K::Image),
        EntryPoint::device(C::GetImageSubresourceLayout).handle("image", K::Image),
        EntryPoint::device(C::GetImageDrmFormatModifierPropertiesEXT).handle("image", K::Image),
        EntryPoint::device(C::CreateImageView)
            .nested("VkImageViewCreateInfo", "pCreateInfo.image", K::Image)
            .creates("pView", K::ImageView),
        EntryPoint::device(C::DestroyImageView)
            .destroys("imageView", K::ImageView)
            .allocator_vuids(
                "VUID-vkDestroyImageView-imageView-01027",
                "VUID-vkDestroyImageView-imageView-01028",
            ),
        EntryPoint::device(C::CreateSampler).creates("pSampler", K::Sampler),
        EntryPoint::device(C::DestroySampler)
            .destroys("sampler", K::Sampler)
            .allocator_vuids(
                "VUID-vkDestroySampler-sampler-01083",
                "VUID-vkDestroySampler-sampler-01084",
            ),
    ];

    for command in [C::BindImageMemory2, C::BindImageMemory2KHR] {
        entries.push(
            EntryPoint::device(command)
                .nested("VkBindImageMemoryInfo", "pBindInfos[].image", K::Image)
                // null when binding swapchain memory
                .nested_optional("VkBindImageMemoryInfo", "pBindInfos[].memory", K::DeviceMemory)
                .common_parent(),
        );
    }
    for command in [C::GetImageMemoryRequirements2, C::GetImageMemoryRequirements2KHR] {
        entries.push(EntryPoint::device(command).nested(
            "VkImageMemoryRequirementsInfo2",
            "pInfo.image",
            K::Image,
        ));
    }
    for command in [
        C::GetImageSparseMemoryRequirements2,
        C::GetImageSparseMemoryRequirements2KHR,
    ] {
        entries.push(EntryPoint::device(command).nested(
            "VkImageSparseMemoryRequirementsInfo2",
            "pInfo.image",
            K::Image,
        ));
    }
    for (create, destroy) in [
        (C::CreateSamplerYcbcrConversion, C::DestroySamplerYcbcrConversion),
        (C::CreateSamplerYcbcrConversionKHR, C::DestroySamplerYcbcrConversionKHR),
    ] {
        entries.push(EntryPoint::device(create).creates("pYcbcrConversion", K::SamplerYcbcrConversion));
        entries.push(EntryPoint::device(destroy).destroys("ycbcrConversion", K::SamplerYcbcrConversion));
    }
    entries
}
