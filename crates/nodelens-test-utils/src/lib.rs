//! GPU test infrastructure for nodelens.
//!
//! The preview cache allocates GPU resources but must stay testable without
//! a GPU. This crate provides:
//!
//! - [`RenderDevice`] — an object-safe trait over the resource creation the
//!   preview cache performs
//! - Owned opaque wrapper types ([`GpuTexture`], [`GpuShaderModule`],
//!   [`GpuRenderPipeline`], [`GpuSampler`]) that can hold real or mock
//!   resources
//! - [`MockRenderDevice`] — a recording implementation behind the `mock`
//!   feature
//!
//! Wrapper types are owned and carry no lifetimes; mocks record calls with
//! interior mutability, so `&self` methods work on both implementations.

pub mod device;
pub mod gpu_types;
#[cfg(feature = "mock")]
pub mod mock;

pub use device::{RenderDevice, RenderPipelineDesc};
pub use gpu_types::*;
#[cfg(feature = "mock")]
pub use mock::{DeviceCall, MockRenderDevice};
