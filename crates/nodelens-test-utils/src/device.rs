//! Trait abstracting the GPU resource creation the preview cache performs.

use crate::gpu_types::*;
use wgpu::{SamplerDescriptor, ShaderModuleDescriptor, TextureDescriptor};

/// Descriptor for a single-target render pipeline.
///
/// `wgpu::RenderPipelineDescriptor` embeds `&wgpu::ShaderModule`, which a
/// mock module cannot produce; this descriptor references the opaque
/// wrapper instead and real devices convert it when building the pipeline.
pub struct RenderPipelineDesc<'a> {
    /// Debug label.
    pub label: Option<&'a str>,
    /// Shader module providing both entry points.
    pub shader: &'a GpuShaderModule,
    /// Vertex entry point name.
    pub vertex_entry: &'a str,
    /// Fragment entry point name.
    pub fragment_entry: &'a str,
    /// Color target format.
    pub format: wgpu::TextureFormat,
}

/// Object-safe abstraction over GPU resource creation.
///
/// Methods take `&self` and return owned wrapper types, so implementations
/// with interior mutability (the mock records its calls) and real devices
/// share one call surface and no lifetime parameters propagate into the
/// preview cache.
pub trait RenderDevice: Send + Sync {
    /// Creates a texture.
    fn create_texture(&self, desc: &TextureDescriptor) -> GpuTexture;

    /// Creates a shader module from WGSL source.
    fn create_shader_module(&self, desc: &ShaderModuleDescriptor) -> GpuShaderModule;

    /// Creates a render pipeline with a single color target and no vertex
    /// buffers.
    fn create_render_pipeline(&self, desc: &RenderPipelineDesc<'_>) -> GpuRenderPipeline;

    /// Creates a texture sampler.
    fn create_sampler(&self, desc: &SamplerDescriptor) -> GpuSampler;
}
