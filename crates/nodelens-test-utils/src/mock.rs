//! Recording mock implementation of [`RenderDevice`].
//!
//! Records every resource creation without touching a GPU, so cache
//! behavior can be asserted in plain unit tests.

use crate::device::{RenderDevice, RenderPipelineDesc};
use crate::gpu_types::*;
use parking_lot::Mutex;
use wgpu::{SamplerDescriptor, ShaderModuleDescriptor, TextureDescriptor, TextureFormat};

/// One recorded resource creation, for test assertions.
#[derive(Debug, Clone)]
pub enum DeviceCall {
    CreateTexture {
        label: Option<String>,
        width: u32,
        height: u32,
        format: TextureFormat,
    },
    CreateShaderModule {
        label: Option<String>,
    },
    CreateRenderPipeline {
        label: Option<String>,
        format: TextureFormat,
    },
    CreateSampler {
        label: Option<String>,
    },
}

/// Mock [`RenderDevice`] recording calls with interior mutability.
///
/// A `Mutex` rather than `RefCell` because the trait is `Send + Sync`.
#[derive(Default)]
pub struct MockRenderDevice {
    calls: Mutex<Vec<DeviceCall>>,
    next_id: Mutex<usize>,
}

impl MockRenderDevice {
    /// Creates an empty mock device.
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&self) -> usize {
        let mut id = self.next_id.lock();
        let current = *id;
        *id += 1;
        current
    }

    /// A copy of all recorded calls.
    pub fn calls(&self) -> Vec<DeviceCall> {
        self.calls.lock().clone()
    }

    /// Total number of recorded calls.
    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Number of texture creations recorded.
    pub fn count_texture_creates(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| matches!(call, DeviceCall::CreateTexture { .. }))
            .count()
    }

    /// Number of shader module creations recorded.
    pub fn count_shader_creates(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| matches!(call, DeviceCall::CreateShaderModule { .. }))
            .count()
    }

    /// Number of render pipeline creations recorded.
    pub fn count_pipeline_creates(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| matches!(call, DeviceCall::CreateRenderPipeline { .. }))
            .count()
    }

    /// Clears recorded calls between test steps.
    pub fn clear_calls(&self) {
        self.calls.lock().clear();
    }
}

impl RenderDevice for MockRenderDevice {
    fn create_texture(&self, desc: &TextureDescriptor) -> GpuTexture {
        let id = self.next_id();
        self.calls.lock().push(DeviceCall::CreateTexture {
            label: desc.label.map(|s| s.to_string()),
            width: desc.size.width,
            height: desc.size.height,
            format: desc.format,
        });
        GpuTexture::mock(id, desc.size.width, desc.size.height, desc.format)
    }

    fn create_shader_module(&self, desc: &ShaderModuleDescriptor) -> GpuShaderModule {
        let id = self.next_id();
        self.calls.lock().push(DeviceCall::CreateShaderModule {
            label: desc.label.map(|s| s.to_string()),
        });
        GpuShaderModule::mock(id)
    }

    fn create_render_pipeline(&self, desc: &RenderPipelineDesc<'_>) -> GpuRenderPipeline {
        let id = self.next_id();
        self.calls.lock().push(DeviceCall::CreateRenderPipeline {
            label: desc.label.map(|s| s.to_string()),
            format: desc.format,
        });
        GpuRenderPipeline::mock(id)
    }

    fn create_sampler(&self, desc: &SamplerDescriptor) -> GpuSampler {
        let id = self.next_id();
        self.calls.lock().push(DeviceCall::CreateSampler {
            label: desc.label.map(|s| s.to_string()),
        });
        GpuSampler::mock(id)
    }
}
