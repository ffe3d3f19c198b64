//! Shader modules, pipeline caches, layouts and pipelines, including the
//! ray tracing and device-generated-commands extensions.

use vkot_core::ObjectKind as K;

use crate::command::Command as C;
use crate::entry_point::EntryPoint;

pub(crate) fn entry_points() -> Vec<EntryPoint> {
    let mut entries = vec![
        EntryPoint::device(C::CreateShaderModule).creates("pShaderModule", K::ShaderModule),
        EntryPoint::device(C::DestroyShaderModule)
            .destroys("shaderModule", K::ShaderModule)
            .allocator_vuids(
                "VUID-vkDestroyShaderModule-shaderModule-01092",
                "VUID-vkDestroyShaderModule-shaderModule-01093",
            ),
        EntryPoint::device(C::CreatePipelineCache).creates("pPipelineCache", K::PipelineCache),
        EntryPoint::device(C::DestroyPipelineCache)
            .destroys("pipelineCache", K::PipelineCache)
            .allocator_vuids(
                "VUID-vkDestroyPipelineCache-pipelineCache-00771",
                "VUID-vkDestroyPipelineCache-pipelineCache-00772",
            ),
        EntryPoint::device(C::GetPipelineCacheData).handle("pipelineCache", K::PipelineCache),
        EntryPoint::device(C::MergePipelineCaches)
            .handle("dstCache", K::PipelineCache)
            .handle("pSrcCaches[]", K::PipelineCache),
        EntryPoint::device(C::CreatePipelineLayout)
            .nested(
                "VkPipelineLayoutCreateInfo",
                "pCreateInfo.pSetLayouts[]",
                K::DescriptorSetLayout,
            )
            .creates("pPipelineLayout", K::PipelineLayout),
        EntryPoint::device(C::DestroyPipelineLayout)
            .destroys("pipelineLayout", K::PipelineLayout)
            .allocator_vuids(
                "VUID-vkDestroyPipelineLayout-pipelineLayout-00299",
                "VUID-vkDestroyPipelineLayout-pipelineLayout-00300",
            ),
        EntryPoint::device(C::CreateGraphicsPipelines)
            .optional("pipelineCache", K::PipelineCache)
            .nested(
                "VkPipelineShaderStageCreateInfo",
                "pCreateInfos[].pStages[].module",
                K::ShaderModule,
            )
            .nested("VkGraphicsPipelineCreateInfo", "pCreateInfos[].layout", K::PipelineLayout)
            // null under dynamic rendering
            .nested_optional("VkGraphicsPipelineCreateInfo", "pCreateInfos[].renderPass", K::RenderPass)
            .nested_optional(
                "VkGraphicsPipelineCreateInfo",
                "pCreateInfos[].basePipelineHandle",
                K::Pipeline,
            )
            .creates_partial("pPipelines[]", K::Pipeline),
        EntryPoint::device(C::CreateComputePipelines)
            .optional("pipelineCache", K::PipelineCache)
            .nested(
                "VkPipelineShaderStageCreateInfo",
                "pCreateInfos[].stage.module",
                K::ShaderModule,
            )
            .nested("VkComputePipelineCreateInfo", "pCreateInfos[].layout", K::PipelineLayout)
            .nested_optional(
                "VkComputePipelineCreateInfo",
                "pCreateInfos[].basePipelineHandle",
                K::Pipeline,
            )
            .creates_partial("pPipelines[]", K::Pipeline),
        EntryPoint::device(C::DestroyPipeline)
            .destroys("pipeline", K::Pipeline)
            .allocator_vuids(
                "VUID-vkDestroyPipeline-pipeline-00766",
                "VUID-vkDestroyPipeline-pipeline-00767",
            ),
        EntryPoint::command_buffer(C::CmdBindPipeline).handle("pipeline", K::Pipeline),
        EntryPoint::device(C::GetShaderInfoAMD).handle("pipeline", K::Pipeline),
        // VK_KHR_pipeline_executable_properties
        EntryPoint::device(C::GetPipelineExecutablePropertiesKHR).nested(
            "VkPipelineInfoKHR",
            "pPipelineInfo.pipeline",
            K::Pipeline,
        ),
        EntryPoint::device(C::GetPipelineExecutableStatisticsKHR).nested(
            "VkPipelineExecutableInfoKHR",
            "pExecutableInfo.pipeline",
            K::Pipeline,
        ),
        EntryPoint::device(C::GetPipelineExecutableInternalRepresentationsKHR).nested(
            "VkPipelineExecutableInfoKHR",
            "pExecutableInfo.pipeline",
            K::Pipeline,
        ),
        // VK_NV_ray_tracing
        EntryPoint::device(C::CreateAccelerationStructureNV)
            .nested_optional(
                "VkGeometryTrianglesNV",
                "pCreateInfo.info.pGeometries[].geometry.triangles.vertexData",
                K::Buffer,
            )
            .nested_optional(
                "VkGeometryTrianglesNV",
                "pCreateInfo.info.pGeometries[].geometry.triangles.indexData",
                K::Buffer,
            )
            .nested_optional(
                "VkGeometryTrianglesNV",
                "pCreateInfo.info.pGeometries[].geometry.triangles.transformData",
                K::Buffer,
            )
            .nested_optional(
                "VkGeometryAABBNV",
                "pCreateInfo.info.pGeometries[].geometry.aabbs.aabbData",
                K::Buffer,
            )
            .creates("pAccelerationStructure", K::AccelerationStructureNV),
        EntryPoint::device(C::DestroyAccelerationStructureNV)
            .destroys("accelerationStructure", K::AccelerationStructureNV)
            .allocator_vuids(
                "VUID-vkDestroyAccelerationStructureNV-accelerationStructure-03753",
                "VUID-vkDestroyAccelerationStructureNV-accelerationStructure-03754",
            ),
        EntryPoint::device(C::GetAccelerationStructureMemoryRequirementsNV).nested(
            "VkAccelerationStructureMemoryRequirementsInfoNV",
            "pInfo.accelerationStructure",
            K::AccelerationStructureNV,
        ),
        EntryPoint::device(C::BindAccelerationStructureMemoryNV)
            .nested(
                "VkBindAccelerationStructureMemoryInfoNV",
                "pBindInfos[].accelerationStructure",
                K::AccelerationStructureNV,
            )
            .nested(
                "VkBindAccelerationStructureMemoryInfoNV",
                "pBindInfos[].memory",
                K::DeviceMemory,
            )
            .common_parent(),
        EntryPoint::device(C::GetAccelerationStructureHandleNV)
            .handle("accelerationStructure", K::AccelerationStructureNV),
        EntryPoint::command_buffer(C::CmdBuildAccelerationStructureNV)
            .optional("instanceData", K::Buffer)
            .handle("dst", K::AccelerationStructureNV)
            .optional("src", K::AccelerationStructureNV)
            .handle("scratch", K::Buffer)
            .nested_optional(
                "VkGeometryTrianglesNV",
                "pInfo.pGeometries[].geometry.triangles.vertexData",
                K::Buffer,
            )
            .nested_optional(
                "VkGeometryTrianglesNV",
                "pInfo.pGeometries[].geometry.triangles.indexData",
                K::Buffer,
            )
            .nested_optional(
                "VkGeometryTrianglesNV",
                "pInfo.pGeometries[].geometry.triangles.transformData",
                K::Buffer,
            )
            .nested_optional(
                "VkGeometryAABBNV",
                "pInfo.pGeometries[].geometry.aabbs.aabbData",
                K::Buffer,
            )
            .common_parent(),
        EntryPoint::command_buffer(C::CmdCopyAccelerationStructureNV)
            .handle("dst", K::AccelerationStructureNV)
            .handle("src", K::AccelerationStructureNV)
            .common_parent(),
        EntryPoint::command_buffer(C::CmdWriteAccelerationStructuresPropertiesNV)
            .handle("pAccelerationStructures[]", K::AccelerationStructureNV)
            .handle("queryPool", K::QueryPool)
            .common_parent(),
        EntryPoint::command_buffer(C::CmdTraceRaysNV)
            .handle("raygenShaderBindingTableBuffer", K::Buffer)
            .optional("missShaderBindingTableBuffer", K::Buffer)
            .optional("hitShaderBindingTableBuffer", K::Buffer)
            .optional("callableShaderBindingTableBuffer", K::Buffer)
            .common_parent(),
        EntryPoint::device(C::CreateRayTracingPipelinesNV)
            .optional("pipelineCache", K::PipelineCache)
            .nested(
                "VkPipelineShaderStageCreateInfo",
                "pCreateInfos[].pStages[].module",
                K::ShaderModule,
            )
            .nested("VkRayTracingPipelineCreateInfoNV", "pCreateInfos[].layout", K::PipelineLayout)
            .nested_optional(
                "VkRayTracingPipelineCreateInfoNV",
                "pCreateInfos[].basePipelineHandle",
                K::Pipeline,
            )
            .creates_partial("pPipelines[]", K::Pipeline),
        EntryPoint::device(C::CompileDeferredNV).handle("pipeline", K::Pipeline),
        // VK_KHR_acceleration_structure
        EntryPoint::device(C::CreateAccelerationStructureKHR)
            .nested("VkAccelerationStructureCreateInfoKHR", "pCreateInfo.buffer", K::Buffer)
            .creates("pAccelerationStructure", K::AccelerationStructureKHR),
        EntryPoint::device(C::DestroyAccelerationStructureKHR)
            .destroys("accelerationStructure", K::AccelerationStructureKHR)
            .allocator_vuids(
                "VUID-vkDestroyAccelerationStructureKHR-accelerationStructure-02443",
                "VUID-vkDestroyAccelerationStructureKHR-accelerationStructure-02444",
            ),
        EntryPoint::device(C::GetAccelerationStructureDeviceAddressKHR).nested(
            "VkAccelerationStructureDeviceAddressInfoKHR",
            "pInfo.accelerationStructure",
            K::AccelerationStructureKHR,
        ),
        EntryPoint::device(C::GetAccelerationStructureBuildSizesKHR),
        EntryPoint::device(C::GetDeviceAccelerationStructureCompatibilityKHR),
        EntryPoint::device(C::CopyAccelerationStructureKHR)
            .optional("deferredOperation", K::DeferredOperationKHR)
            .nested("VkCopyAccelerationStructureInfoKHR", "pInfo.src", K::AccelerationStructureKHR)
            .nested("VkCopyAccelerationStructureInfoKHR", "pInfo.dst", K::AccelerationStructureKHR),
        EntryPoint::device(C::CopyAccelerationStructureToMemoryKHR)
            .optional("deferredOperation", K::DeferredOperationKHR)
            .nested(
                "VkCopyAccelerationStructureToMemoryInfoKHR",
                "pInfo.src",
                K::AccelerationStructureKHR,
            ),
        EntryPoint::device(C::CopyMemoryToAccelerationStructureKHR)
            .optional("deferredOperation", K::DeferredOperationKHR)
            .nested(
                "VkCopyMemoryToAccelerationStructureInfoKHR",
                "pInfo.dst",
                K::AccelerationStructureKHR,
            ),
        EntryPoint::command_buffer(C::CmdCopyAccelerationStructureKHR)
            .nested("VkCopyAccelerationStructureInfoKHR", "pInfo.src", K::AccelerationStructureKHR)
            .nested("VkCopyAccelerationStructureInfoKHR", "pInfo.dst", K::AccelerationStructureKHR),
        EntryPoint::command_buffer(C::CmdCopyAccelerationStructureToMemoryKHR).nested(
            "VkCopyAccelerationStructureToMemoryInfoKHR",
            "pInfo.src",
            K::AccelerationStructureKHR,
        ),
        EntryPoint::command_buffer(C::CmdCopyMemoryToAccelerationStructureKHR).nested(
            "VkCopyMemoryToAccelerationStructureInfoKHR",
            "pInfo.dst",
            K::AccelerationStructureKHR,
        ),
        EntryPoint::device(C::WriteAccelerationStructuresPropertiesKHR)
            .handle("pAccelerationStructures[]", K::AccelerationStructureKHR),
        EntryPoint::command_buffer(C::CmdWriteAccelerationStructuresPropertiesKHR)
            .handle("pAccelerationStructures[]", K::AccelerationStructureKHR)
            .handle("queryPool", K::QueryPool)
            .common_parent(),
        // VK_KHR_ray_tracing_pipeline
        EntryPoint::device(C::CreateRayTracingPipelinesKHR)
            .optional("deferredOperation", K::DeferredOperationKHR)
            .optional("pipelineCache", K::PipelineCache)
            .nested(
                "VkPipelineShaderStageCreateInfo",
                "pCreateInfos[].pStages[].module",
                K::ShaderModule,
            )
            .nested(
                "VkPipelineLibraryCreateInfoKHR",
                "pCreateInfos[].pLibraryInfo.pLibraries[]",
                K::Pipeline,
            )
            .nested("VkRayTracingPipelineCreateInfoKHR", "pCreateInfos[].layout", K::PipelineLayout)
            .nested_optional(
                "VkRayTracingPipelineCreateInfoKHR",
                "pCreateInfos[].basePipelineHandle",
                K::Pipeline,
            )
            .creates_partial("pPipelines[]", K::Pipeline),
        EntryPoint::device(C::GetRayTracingCaptureReplayShaderGroupHandlesKHR)
            .handle("pipeline", K::Pipeline),
        EntryPoint::device(C::GetRayTracingShaderGroupStackSizeKHR).handle("pipeline", K::Pipeline),
        EntryPoint::command_buffer(C::CmdTraceRaysKHR),
        EntryPoint::command_buffer(C::CmdTraceRaysIndirectKHR),
        EntryPoint::command_buffer(C::CmdSetRayTracingPipelineStackSizeKHR),
        // VK_NV_device_generated_commands
        EntryPoint::device(C::CreateIndirectCommandsLayoutNV)
            .nested_optional(
                "VkIndirectCommandsLayoutTokenNV",
                "pCreateInfo.pTokens[].pushconstantPipelineLayout",
                K::PipelineLayout,
            )
            .creates("pIndirectCommandsLayout", K::IndirectCommandsLayoutNV),
        EntryPoint::device(C::DestroyIndirectCommandsLayoutNV)
            .destroys("indirectCommandsLayout", K::IndirectCommandsLayoutNV),
        EntryPoint::device(C::GetGeneratedCommandsMemoryRequirementsNV)
            .nested("VkGeneratedCommandsMemoryRequirementsInfoNV", "pInfo.pipeline", K::Pipeline)
            .nested(
                "VkGeneratedCommandsMemoryRequirementsInfoNV",
                "pInfo.indirectCommandsLayout",
                K::IndirectCommandsLayoutNV,
            )
            .common_parent(),
        EntryPoint::command_buffer(C::CmdBindPipelineShaderGroupNV).handle("pipeline", K::Pipeline),
    ];

    for command in [C::GetRayTracingShaderGroupHandlesKHR, C::GetRayTracingShaderGroupHandlesNV] {
        entries.push(EntryPoint::device(command).handle("pipeline", K::Pipeline));
    }
    for command in [
        C::CmdBuildAccelerationStructuresKHR,
        C::CmdBuildAccelerationStructuresIndirectKHR,
    ] {
        entries.push(build_acceleration_structures(EntryPoint::command_buffer(command)));
    }
    entries.push(build_acceleration_structures(
        EntryPoint::device(C::BuildAccelerationStructuresKHR)
            .optional("deferredOperation", K::DeferredOperationKHR),
    ));
    for command in [C::CmdPreprocessGeneratedCommandsNV, C::CmdExecuteGeneratedCommandsNV] {
        entries.push(
            EntryPoint::command_buffer(command)
                .nested("VkGeneratedCommandsInfoNV", "pGeneratedCommandsInfo.pipeline", K::Pipeline)
                .nested(
                    "VkGeneratedCommandsInfoNV",
                    "pGeneratedCommandsInfo.indirectCommandsLayout",
                    K::IndirectCommandsLayoutNV,
                )
                .nested(
                    "VkIndirectCommandsStreamNV",
                    "pGeneratedCommandsInfo.pStreams[].buffer",
                    K::Buffer,
                )
                .nested(
                    "VkGeneratedCommandsInfoNV",
                    "pGeneratedCommandsInfo.preprocessBuffer",
                    K::Buffer,
                )
                .nested_optional(
                    "VkGeneratedCommandsInfoNV",
                    "pGeneratedCommandsInfo.sequencesCountBuffer",
                    K::Buffer,
                )
                .nested_optional(
                    "VkGeneratedCommandsInfoNV",
                    "pGeneratedCommandsInfo.sequencesIndexBuffer",
                    K::Buffer,
                )
                .common_parent(),
        );
    }
    entries
}

fn build_acceleration_structures(entry: EntryPoint) -> EntryPoint {
    entry
        .nested_optional(
            "VkAccelerationStructureBuildGeometryInfoKHR",
            "pInfos[].srcAccelerationStructure",
            K::AccelerationStructureKHR,
        )
        .nested(
            "VkAccelerationStructureBuildGeometryInfoKHR",
            "pInfos[].dstAccelerationStructure",
            K::AccelerationStructureKHR,
        )
        .common_parent()
}
