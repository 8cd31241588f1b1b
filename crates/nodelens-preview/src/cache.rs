//! Per-node preview cache.

use std::collections::hash_map::Entry;

use nodelens_core::alloc::HashMap;
use nodelens_telemetry::NodeId;
use nodelens_test_utils::{RenderDevice, RenderPipelineDesc};
use wgpu::{Extent3d, TextureDescriptor, TextureDimension, TextureUsages};

use crate::bundle::{OutputKind, PreviewBundle, PREVIEW_BASE_SIZE, PREVIEW_FORMAT, PREVIEW_SHADER};
use crate::label::split_label;

/// Errors building a single preview entry.
///
/// A failed entry is local: the cache stays usable and other nodes'
/// previews are unaffected.
#[derive(Debug, Clone, PartialEq)]
pub enum PreviewError {
    /// The device pixel ratio scaled the target to zero pixels.
    InvalidDimensions {
        /// Physical side length the scale factor produced.
        size: u32,
        /// The offending scale factor.
        scale_factor: f64,
    },
}

impl std::fmt::Display for PreviewError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDimensions { size, scale_factor } => write!(
                f,
                "preview target would be {size}px at scale factor {scale_factor}"
            ),
        }
    }
}

impl std::error::Error for PreviewError {}

/// Lazy, memoized cache of preview bundles keyed by node instance identity.
///
/// The first lookup for a node derives its display name and breadcrumb from
/// the label, allocates the offscreen target at the live device pixel
/// ratio, builds the value-to-color pipeline, and stores the bundle; every
/// later lookup returns the same bundle untouched. Entries are never
/// evicted — a debugging session inspects a bounded node set. Hosts that
/// track node removal can call [`PreviewCache::clear`].
#[derive(Default)]
pub struct PreviewCache {
    entries: HashMap<NodeId, PreviewBundle>,
}

impl PreviewCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the bundle for `id`, building it on first request.
    ///
    /// `label` is the node's optional human-readable label; unlabeled nodes
    /// are named after their id. `scale_factor` is the live device pixel
    /// ratio used to size the physical allocation.
    pub fn get_or_create(
        &mut self,
        device: &dyn RenderDevice,
        id: NodeId,
        label: Option<&str>,
        scale_factor: f64,
    ) -> Result<&PreviewBundle, PreviewError> {
        match self.entries.entry(id) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(slot) => {
                let bundle = Self::build(device, id, label, scale_factor)?;
                Ok(slot.insert(bundle))
            }
        }
    }

    /// Looks up a bundle without creating it.
    pub fn get(&self, id: NodeId) -> Option<&PreviewBundle> {
        self.entries.get(&id)
    }

    /// Number of cached bundles.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no bundle has been built yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every cached bundle.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn build(
        device: &dyn RenderDevice,
        id: NodeId,
        label: Option<&str>,
        scale_factor: f64,
    ) -> Result<PreviewBundle, PreviewError> {
        let size = (f64::from(PREVIEW_BASE_SIZE) * scale_factor).round() as u32;
        if size == 0 {
            return Err(PreviewError::InvalidDimensions { size, scale_factor });
        }

        let owned_label;
        let label = match label {
            Some(label) if !label.is_empty() => label,
            _ => {
                owned_label = format!("Node{}", id.0);
                &owned_label
            }
        };
        let (path, name) = split_label(label);

        let target = device.create_texture(&TextureDescriptor {
            label: Some("Preview Target"),
            size: Extent3d {
                width: size,
                height: size,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: TextureDimension::D2,
            format: PREVIEW_FORMAT,
            usage: TextureUsages::RENDER_ATTACHMENT | TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        });

        let shader = device.create_shader_module(&wgpu::ShaderModuleDescriptor {
            label: Some("Preview Shader"),
            source: wgpu::ShaderSource::Wgsl(PREVIEW_SHADER.into()),
        });

        let pipeline = device.create_render_pipeline(&RenderPipelineDesc {
            label: Some("Preview Pipeline"),
            shader: &shader,
            vertex_entry: "vs_main",
            fragment_entry: "fs_main",
            format: PREVIEW_FORMAT,
        });

        Ok(PreviewBundle {
            id,
            name,
            path,
            target,
            shader,
            pipeline,
            output: OutputKind::Inspector,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nodelens_test_utils::MockRenderDevice;

    #[test]
    fn test_miss_builds_bundle() {
        let device = MockRenderDevice::new();
        let mut cache = PreviewCache::new();

        let bundle = cache
            .get_or_create(&device, NodeId(1), Some("GlTextureBlur"), 1.0)
            .unwrap();

        assert_eq!(bundle.name, "Blur");
        assert_eq!(bundle.path, "Gl/Texture");
        assert_eq!(bundle.output, OutputKind::Inspector);
        assert_eq!(bundle.target.width(), PREVIEW_BASE_SIZE);
        assert_eq!(device.count_texture_creates(), 1);
        assert_eq!(device.count_shader_creates(), 1);
        assert_eq!(device.count_pipeline_creates(), 1);
    }

    #[test]
    fn test_hit_is_idempotent_and_allocation_free() {
        let device = MockRenderDevice::new();
        let mut cache = PreviewCache::new();

        let first_target = cache
            .get_or_create(&device, NodeId(1), Some("Noise"), 1.0)
            .unwrap()
            .target
            .mock_id();
        let calls_after_first = device.call_count();

        // Second lookup returns the identical bundle without touching the
        // device, even with a different label and scale factor.
        let second = cache
            .get_or_create(&device, NodeId(1), Some("SomethingElse"), 2.0)
            .unwrap();
        assert_eq!(second.name, "Noise");
        assert_eq!(second.target.mock_id(), first_target);
        assert_eq!(device.call_count(), calls_after_first);
    }

    #[test]
    fn test_distinct_nodes_never_share_bundles() {
        let device = MockRenderDevice::new();
        let mut cache = PreviewCache::new();

        let a = cache
            .get_or_create(&device, NodeId(1), Some("Noise"), 1.0)
            .unwrap()
            .target
            .mock_id();
        let b = cache
            .get_or_create(&device, NodeId(2), Some("Noise"), 1.0)
            .unwrap()
            .target
            .mock_id();

        assert_ne!(a, b);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_scale_factor_sizes_target() {
        let device = MockRenderDevice::new();
        let mut cache = PreviewCache::new();

        let bundle = cache
            .get_or_create(&device, NodeId(3), Some("Osc"), 2.0)
            .unwrap();
        assert_eq!(bundle.target.width(), PREVIEW_BASE_SIZE * 2);
        assert_eq!(bundle.target.height(), PREVIEW_BASE_SIZE * 2);
    }

    #[test]
    fn test_invalid_scale_is_local_to_the_entry() {
        let device = MockRenderDevice::new();
        let mut cache = PreviewCache::new();

        let err = cache
            .get_or_create(&device, NodeId(4), Some("Osc"), 0.0)
            .unwrap_err();
        assert!(matches!(err, PreviewError::InvalidDimensions { .. }));
        assert!(cache.is_empty());

        // Other nodes still build fine afterwards.
        assert!(cache.get_or_create(&device, NodeId(5), Some("Osc"), 1.0).is_ok());
        assert_eq!(cache.len(), 1);
        assert!(cache.get(NodeId(4)).is_none());

        // A failed entry leaves no residue: the same node builds on retry.
        let retried = cache
            .get_or_create(&device, NodeId(4), Some("Osc"), 1.0)
            .unwrap();
        assert_eq!(retried.name, "Osc");
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_unlabeled_node_gets_fallback_name() {
        let device = MockRenderDevice::new();
        let mut cache = PreviewCache::new();

        let bundle = cache.get_or_create(&device, NodeId(9), None, 1.0).unwrap();
        assert_eq!(bundle.name, "Node9");
        assert_eq!(bundle.path, "");
    }

    #[test]
    fn test_clear_drops_entries() {
        let device = MockRenderDevice::new();
        let mut cache = PreviewCache::new();
        cache.get_or_create(&device, NodeId(1), Some("Osc"), 1.0).unwrap();

        cache.clear();
        assert!(cache.is_empty());
    }
}
