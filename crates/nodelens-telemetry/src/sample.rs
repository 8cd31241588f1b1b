//! Input sample tree supplied by the host renderer.

/// Category identity shared by every instance of the same kind of render
/// call. Aggregated stat entries are keyed by this, so repeated node types
/// accumulate into a shared entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CategoryId(pub u32);

/// Per-instance node identity. Preview resources are keyed by this.
///
/// Deliberately a separate type from [`CategoryId`]: the two keyspaces must
/// never be unified, or unrelated nodes end up sharing cached resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u64);

/// One node of the per-frame cost sample tree, mirroring the host's
/// render-call hierarchy.
///
/// Supplied fresh each frame and only borrowed during resolution. Children
/// are owned, so the tree is finite and acyclic by construction.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleNode {
    /// Aggregation key for this node's kind of render call.
    pub cid: CategoryId,
    /// CPU cost of this node's own work, in milliseconds.
    pub cpu: f64,
    /// GPU cost of this node's own work, in milliseconds.
    pub gpu: f64,
    /// Child samples, in render order.
    pub children: Vec<SampleNode>,
}

impl SampleNode {
    /// Creates a sample with no children.
    pub fn leaf(cid: CategoryId, cpu: f64, gpu: f64) -> Self {
        Self {
            cid,
            cpu,
            gpu,
            children: Vec::new(),
        }
    }

    /// Creates a sample with the given children.
    pub fn with_children(cid: CategoryId, cpu: f64, gpu: f64, children: Vec<SampleNode>) -> Self {
        Self {
            cid,
            cpu,
            gpu,
            children,
        }
    }

    /// Number of nodes in this subtree, including self.
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(SampleNode::node_count)
            .sum::<usize>()
    }
}
