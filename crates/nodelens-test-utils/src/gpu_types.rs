//! Owned GPU resource wrappers that can be real or mock.
//!
//! Wrapping the wgpu types keeps lifetimes out of the preview cache and lets
//! tests substitute mock resources without the cache knowing.

/// Wrapper around a GPU texture that can be real or mock.
#[derive(Clone, Debug)]
pub struct GpuTexture {
    inner: GpuTextureInner,
}

#[derive(Clone, Debug)]
enum GpuTextureInner {
    Real(wgpu::Texture),
    #[cfg(feature = "mock")]
    Mock {
        id: usize,
        width: u32,
        height: u32,
        format: wgpu::TextureFormat,
    },
}

impl GpuTexture {
    /// Wraps a real wgpu texture.
    pub fn from_wgpu(texture: wgpu::Texture) -> Self {
        Self {
            inner: GpuTextureInner::Real(texture),
        }
    }

    /// Creates a mock texture for tests.
    #[cfg(feature = "mock")]
    pub fn mock(id: usize, width: u32, height: u32, format: wgpu::TextureFormat) -> Self {
        Self {
            inner: GpuTextureInner::Mock {
                id,
                width,
                height,
                format,
            },
        }
    }

    /// Texture width in pixels.
    pub fn width(&self) -> u32 {
        match &self.inner {
            GpuTextureInner::Real(texture) => texture.width(),
            #[cfg(feature = "mock")]
            GpuTextureInner::Mock { width, .. } => *width,
        }
    }

    /// Texture height in pixels.
    pub fn height(&self) -> u32 {
        match &self.inner {
            GpuTextureInner::Real(texture) => texture.height(),
            #[cfg(feature = "mock")]
            GpuTextureInner::Mock { height, .. } => *height,
        }
    }

    /// Texture format.
    pub fn format(&self) -> wgpu::TextureFormat {
        match &self.inner {
            GpuTextureInner::Real(texture) => texture.format(),
            #[cfg(feature = "mock")]
            GpuTextureInner::Mock { format, .. } => *format,
        }
    }

    /// The underlying wgpu texture.
    ///
    /// # Panics
    /// Panics if this is a mock texture; test code never calls this.
    pub fn as_wgpu(&self) -> &wgpu::Texture {
        match &self.inner {
            GpuTextureInner::Real(texture) => texture,
            #[cfg(feature = "mock")]
            GpuTextureInner::Mock { .. } => {
                panic!("Attempted to get wgpu::Texture from a mock texture")
            }
        }
    }

    /// Whether this is a mock resource.
    #[cfg(feature = "mock")]
    pub fn is_mock(&self) -> bool {
        matches!(self.inner, GpuTextureInner::Mock { .. })
    }

    /// Mock id for test assertions.
    #[cfg(feature = "mock")]
    pub fn mock_id(&self) -> Option<usize> {
        match &self.inner {
            GpuTextureInner::Mock { id, .. } => Some(*id),
            _ => None,
        }
    }
}

/// Wrapper around a GPU shader module that can be real or mock.
#[derive(Clone, Debug)]
pub struct GpuShaderModule {
    inner: GpuShaderModuleInner,
}

#[derive(Clone, Debug)]
enum GpuShaderModuleInner {
    Real(wgpu::ShaderModule),
    #[cfg(feature = "mock")]
    Mock { id: usize },
}

impl GpuShaderModule {
    /// Wraps a real wgpu shader module.
    pub fn from_wgpu(module: wgpu::ShaderModule) -> Self {
        Self {
            inner: GpuShaderModuleInner::Real(module),
        }
    }

    /// Creates a mock shader module for tests.
    #[cfg(feature = "mock")]
    pub fn mock(id: usize) -> Self {
        Self {
            inner: GpuShaderModuleInner::Mock { id },
        }
    }

    /// The underlying wgpu shader module.
    ///
    /// # Panics
    /// Panics if this is a mock module.
    pub fn as_wgpu(&self) -> &wgpu::ShaderModule {
        match &self.inner {
            GpuShaderModuleInner::Real(module) => module,
            #[cfg(feature = "mock")]
            GpuShaderModuleInner::Mock { .. } => {
                panic!("Attempted to get wgpu::ShaderModule from a mock module")
            }
        }
    }

    /// Whether this is a mock resource.
    #[cfg(feature = "mock")]
    pub fn is_mock(&self) -> bool {
        matches!(self.inner, GpuShaderModuleInner::Mock { .. })
    }

    /// Mock id for test assertions.
    #[cfg(feature = "mock")]
    pub fn mock_id(&self) -> Option<usize> {
        match &self.inner {
            GpuShaderModuleInner::Mock { id } => Some(*id),
            _ => None,
        }
    }
}

/// Wrapper around a GPU render pipeline that can be real or mock.
#[derive(Clone, Debug)]
pub struct GpuRenderPipeline {
    inner: GpuRenderPipelineInner,
}

#[derive(Clone, Debug)]
enum GpuRenderPipelineInner {
    Real(wgpu::RenderPipeline),
    #[cfg(feature = "mock")]
    Mock { id: usize },
}

impl GpuRenderPipeline {
    /// Wraps a real wgpu render pipeline.
    pub fn from_wgpu(pipeline: wgpu::RenderPipeline) -> Self {
        Self {
            inner: GpuRenderPipelineInner::Real(pipeline),
        }
    }

    /// Creates a mock render pipeline for tests.
    #[cfg(feature = "mock")]
    pub fn mock(id: usize) -> Self {
        Self {
            inner: GpuRenderPipelineInner::Mock { id },
        }
    }

    /// The underlying wgpu render pipeline.
    ///
    /// # Panics
    /// Panics if this is a mock pipeline.
    pub fn as_wgpu(&self) -> &wgpu::RenderPipeline {
        match &self.inner {
            GpuRenderPipelineInner::Real(pipeline) => pipeline,
            #[cfg(feature = "mock")]
            GpuRenderPipelineInner::Mock { .. } => {
                panic!("Attempted to get wgpu::RenderPipeline from a mock pipeline")
            }
        }
    }

    /// Whether this is a mock resource.
    #[cfg(feature = "mock")]
    pub fn is_mock(&self) -> bool {
        matches!(self.inner, GpuRenderPipelineInner::Mock { .. })
    }

    /// Mock id for test assertions.
    #[cfg(feature = "mock")]
    pub fn mock_id(&self) -> Option<usize> {
        match &self.inner {
            GpuRenderPipelineInner::Mock { id } => Some(*id),
            _ => None,
        }
    }
}

/// Wrapper around a GPU sampler that can be real or mock.
#[derive(Clone, Debug)]
pub struct GpuSampler {
    inner: GpuSamplerInner,
}

#[derive(Clone, Debug)]
enum GpuSamplerInner {
    Real(wgpu::Sampler),
    #[cfg(feature = "mock")]
    Mock { id: usize },
}

impl GpuSampler {
    /// Wraps a real wgpu sampler.
    pub fn from_wgpu(sampler: wgpu::Sampler) -> Self {
        Self {
            inner: GpuSamplerInner::Real(sampler),
        }
    }

    /// Creates a mock sampler for tests.
    #[cfg(feature = "mock")]
    pub fn mock(id: usize) -> Self {
        Self {
            inner: GpuSamplerInner::Mock { id },
        }
    }

    /// The underlying wgpu sampler.
    ///
    /// # Panics
    /// Panics if this is a mock sampler.
    pub fn as_wgpu(&self) -> &wgpu::Sampler {
        match &self.inner {
            GpuSamplerInner::Real(sampler) => sampler,
            #[cfg(feature = "mock")]
            GpuSamplerInner::Mock { .. } => {
                panic!("Attempted to get wgpu::Sampler from a mock sampler")
            }
        }
    }

    /// Whether this is a mock resource.
    #[cfg(feature = "mock")]
    pub fn is_mock(&self) -> bool {
        matches!(self.inner, GpuSamplerInner::Mock { .. })
    }
}
