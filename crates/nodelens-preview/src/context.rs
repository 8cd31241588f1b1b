//! Global wgpu context backing the preview cache.

use nodelens_test_utils::{
    GpuRenderPipeline, GpuSampler, GpuShaderModule, GpuTexture, RenderDevice, RenderPipelineDesc,
};

use crate::capability::{report_timestamp_support, timestamp_queries_supported};

/// A globally shared graphics context.
pub struct GraphicsContext {
    pub instance: wgpu::Instance,
    pub adapter: wgpu::Adapter,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
}

impl GraphicsContext {
    /// Creates a new graphics context synchronously.
    ///
    /// See [`GraphicsContext::new`] for the asynchronous version.
    pub fn new_sync() -> &'static Self {
        pollster::block_on(Self::new())
    }

    /// Creates a new graphics context asynchronously.
    ///
    /// This returns a static reference to simplify the public API and lifecycle
    pub async fn new() -> &'static Self {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: None,
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to find a suitable GPU adapter");

        report_timestamp_support(timestamp_queries_supported(adapter.features()));

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                label: None,
                ..Default::default()
            })
            .await
            .expect("Failed to create device");

        Box::leak(Box::new(Self {
            instance,
            adapter,
            device,
            queue,
        }))
    }
}

impl RenderDevice for GraphicsContext {
    fn create_texture(&self, desc: &wgpu::TextureDescriptor) -> GpuTexture {
        GpuTexture::from_wgpu(self.device.create_texture(desc))
    }

    fn create_shader_module(&self, desc: &wgpu::ShaderModuleDescriptor) -> GpuShaderModule {
        GpuShaderModule::from_wgpu(self.device.create_shader_module(desc.clone()))
    }

    fn create_render_pipeline(&self, desc: &RenderPipelineDesc<'_>) -> GpuRenderPipeline {
        let module = desc.shader.as_wgpu();
        let pipeline = self
            .device
            .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: desc.label,
                layout: None,
                vertex: wgpu::VertexState {
                    module,
                    entry_point: Some(desc.vertex_entry),
                    buffers: &[],
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module,
                    entry_point: Some(desc.fragment_entry),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: desc.format,
                        blend: None,
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                }),
                primitive: wgpu::PrimitiveState::default(),
                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
                cache: None,
            });
        GpuRenderPipeline::from_wgpu(pipeline)
    }

    fn create_sampler(&self, desc: &wgpu::SamplerDescriptor) -> GpuSampler {
        GpuSampler::from_wgpu(self.device.create_sampler(desc))
    }
}
