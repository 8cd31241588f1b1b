//! Preview resource bundles.

use nodelens_telemetry::NodeId;
use nodelens_test_utils::{GpuRenderPipeline, GpuShaderModule, GpuTexture};

/// Logical side length of a preview target, in logical pixels. The physical
/// allocation is scaled by the live device pixel ratio.
pub const PREVIEW_BASE_SIZE: u32 = 256;

/// Color format used for preview targets.
pub const PREVIEW_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;

/// WGSL for the preview pass: a full-screen triangle whose fragment stage
/// writes the node's bound output value as a color.
pub const PREVIEW_SHADER: &str = r#"
struct VertexOutput {
    @builtin(position) position: vec4<f32>,
    @location(0) uv: vec2<f32>,
};

@group(0) @binding(0)
var<uniform> node_value: vec4<f32>;

@vertex
fn vs_main(@builtin(vertex_index) index: u32) -> VertexOutput {
    // Full-screen triangle, no vertex buffer.
    let x = f32(i32(index) / 2) * 4.0 - 1.0;
    let y = f32(i32(index) % 2) * 4.0 - 1.0;
    var out: VertexOutput;
    out.position = vec4<f32>(x, y, 0.0, 1.0);
    out.uv = vec2<f32>((x + 1.0) * 0.5, 1.0 - (y + 1.0) * 0.5);
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    return node_value;
}
"#;

/// How downstream color management should treat a render output.
///
/// Preview targets are inspector output: tone mapping and output transforms
/// meant for the final framebuffer must not be applied to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    /// Inspector-facing thumbnail output.
    Inspector,
    /// Final framebuffer output.
    Final,
}

/// Cached preview resources for a single node.
///
/// Built once on the first preview request for a node and returned
/// unchanged on every later lookup; name, path, and shader are never
/// re-derived.
#[derive(Debug, Clone)]
pub struct PreviewBundle {
    /// Per-instance identity of the previewed node.
    pub id: NodeId,
    /// Leaf display name derived from the node label.
    pub name: String,
    /// Structural breadcrumb derived from the node label.
    pub path: String,
    /// Offscreen color target sized to the device pixel ratio.
    pub target: GpuTexture,
    /// Shader module for the full-screen triangle pass.
    pub shader: GpuShaderModule,
    /// Pipeline rendering the node's output value into `target`.
    pub pipeline: GpuRenderPipeline,
    /// Always [`OutputKind::Inspector`] for cached previews.
    pub output: OutputKind,
}
