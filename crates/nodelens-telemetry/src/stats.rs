//! Per-category stat accumulators and the recursive subtree aggregator.

use nodelens_core::alloc::HashMap;
use static_assertions::assert_impl_all;

use crate::sample::{CategoryId, SampleNode};

/// Mutable accumulator for one category of render call.
///
/// Created on the first observation of its [`CategoryId`], never evicted,
/// and fully overwritten every frame thereafter. After aggregation,
/// `total == cpu + gpu` exactly.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StatEntry {
    /// Cumulative CPU cost of the subtree, in milliseconds.
    pub cpu: f64,
    /// Cumulative GPU cost of the subtree, in milliseconds.
    pub gpu: f64,
    /// Cumulative cost, always `cpu + gpu`.
    pub total: f64,
    /// Whether the entry has ever been observed by the aggregator.
    pub initialized: bool,
}

assert_impl_all!(StatEntry: Copy, Send, Sync);

/// Aggregated figures returned for one subtree.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StatTotals {
    pub cpu: f64,
    pub gpu: f64,
    pub total: f64,
}

/// Mapping from category identity to its accumulator.
///
/// Leaf dependency of the aggregator; no logic beyond get-or-create.
#[derive(Debug, Default)]
pub struct StatEntryStore {
    entries: HashMap<CategoryId, StatEntry>,
}

impl StatEntryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the entry for `cid`, creating it on first observation.
    pub fn entry_mut(&mut self, cid: CategoryId) -> &mut StatEntry {
        self.entries.entry(cid).or_default()
    }

    /// Looks up the entry for `cid`, if it has ever been observed.
    pub fn get(&self, cid: CategoryId) -> Option<&StatEntry> {
        self.entries.get(&cid)
    }

    /// Number of categories observed so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no category has been observed yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over all observed entries.
    pub fn iter(&self) -> impl Iterator<Item = (&CategoryId, &StatEntry)> {
        self.entries.iter()
    }
}

/// Rolls a sample tree into cumulative CPU/GPU/total figures.
///
/// Safe to run every frame over the same categories: each call fully
/// overwrites the touched entries rather than accumulating into them.
#[derive(Debug, Default)]
pub struct StatsAggregator {
    store: StatEntryStore,
}

impl StatsAggregator {
    /// Creates an aggregator with an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to the per-category store.
    pub fn store(&self) -> &StatEntryStore {
        &self.store
    }

    /// Aggregates `node`'s subtree in post-order and returns its totals.
    ///
    /// The entry for `node.cid` is created on first observation and
    /// overwritten with the node's own `cpu`/`gpu`; each child is aggregated
    /// recursively in sequence order and its figures added to the running
    /// totals, which are written back to the entry. Sibling order affects
    /// traversal cost only, never the resulting values.
    ///
    /// The caller supplies a finite tree; [`SampleNode`] owns its children,
    /// so cycles cannot occur.
    pub fn aggregate(&mut self, node: &SampleNode) -> StatTotals {
        let entry = self.store.entry_mut(node.cid);
        entry.initialized = true;
        entry.cpu = node.cpu;
        entry.gpu = node.gpu;
        entry.total = entry.cpu + entry.gpu;

        let mut cpu = node.cpu;
        let mut gpu = node.gpu;
        for child in &node.children {
            let child_totals = self.aggregate(child);
            cpu += child_totals.cpu;
            gpu += child_totals.gpu;
        }

        // Deriving total from the summed components keeps the
        // `total == cpu + gpu` invariant exact under floating point.
        let total = cpu + gpu;
        let entry = self.store.entry_mut(node.cid);
        entry.cpu = cpu;
        entry.gpu = gpu;
        entry.total = total;

        StatTotals { cpu, gpu, total }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> SampleNode {
        SampleNode::with_children(
            CategoryId(10),
            1.0,
            2.0,
            vec![
                SampleNode::leaf(CategoryId(11), 0.5, 0.25),
                SampleNode::with_children(
                    CategoryId(12),
                    0.25,
                    0.0,
                    vec![SampleNode::leaf(CategoryId(13), 1.0, 1.0)],
                ),
            ],
        )
    }

    #[test]
    fn test_leaf_totals() {
        let mut agg = StatsAggregator::new();
        let totals = agg.aggregate(&SampleNode::leaf(CategoryId(1), 2.0, 3.0));
        assert_eq!(totals, StatTotals { cpu: 2.0, gpu: 3.0, total: 5.0 });

        let entry = agg.store().get(CategoryId(1)).unwrap();
        assert!(entry.initialized);
        assert_eq!(entry.total, entry.cpu + entry.gpu);
    }

    #[test]
    fn test_tree_sum_invariant() {
        let mut agg = StatsAggregator::new();
        let totals = agg.aggregate(&tree());

        // Own sample total plus the sum of all descendant totals.
        assert_eq!(totals.cpu, 1.0 + 0.5 + 0.25 + 1.0);
        assert_eq!(totals.gpu, 2.0 + 0.25 + 0.0 + 1.0);
        assert_eq!(totals.total, totals.cpu + totals.gpu);

        // Interior child rolled up its own leaf.
        let interior = agg.store().get(CategoryId(12)).unwrap();
        assert_eq!(interior.cpu, 0.25 + 1.0);
        assert_eq!(interior.gpu, 1.0);
        assert_eq!(interior.total, interior.cpu + interior.gpu);
    }

    #[test]
    fn test_sibling_order_does_not_change_values() {
        let mut forward = StatsAggregator::new();
        let forward_totals = forward.aggregate(&tree());

        let mut reversed_tree = tree();
        reversed_tree.children.reverse();
        let mut reversed = StatsAggregator::new();
        let reversed_totals = reversed.aggregate(&reversed_tree);

        assert_eq!(forward_totals, reversed_totals);
    }

    #[test]
    fn test_reaggregation_overwrites() {
        let mut agg = StatsAggregator::new();
        agg.aggregate(&SampleNode::leaf(CategoryId(5), 4.0, 4.0));
        let totals = agg.aggregate(&SampleNode::leaf(CategoryId(5), 1.0, 1.0));

        assert_eq!(totals.total, 2.0);
        // Single entry, overwritten in place.
        assert_eq!(agg.store().len(), 1);
        assert_eq!(agg.store().get(CategoryId(5)).unwrap().total, 2.0);
    }

    #[test]
    fn test_entries_persist_across_frames() {
        let mut agg = StatsAggregator::new();
        agg.aggregate(&tree());
        agg.aggregate(&SampleNode::leaf(CategoryId(99), 0.1, 0.1));

        // Earlier categories are still present, no eviction.
        assert_eq!(agg.store().len(), 5);
        assert!(agg.store().get(CategoryId(13)).is_some());
    }
}
