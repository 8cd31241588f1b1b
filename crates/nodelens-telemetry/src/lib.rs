//! Frame telemetry aggregation for node-graph renderers.
//!
//! Each rendered frame the host reports a tree of per-node CPU/GPU timing
//! samples. This crate rolls the tree into cumulative subtree totals,
//! reconciles the frame's wall-clock delta against the next frame's start
//! timestamp, smooths the resulting frame rate, and gates two independently
//! paced UI refresh cadences so that expensive visual updates do not run
//! every frame.
//!
//! Everything here is single-threaded and frame-driven: the host renderer
//! calls into the resolver once per frame from its frame-completion path,
//! and no other execution context touches the shared stores.
//!
//! # Example
//!
//! ```
//! use nodelens_telemetry::{FrameHistory, FrameRecord, RefreshSink, SampleNode, CategoryId};
//!
//! struct Overlay;
//! impl RefreshSink for Overlay {
//!     fn refresh_text(&mut self, frame: &FrameRecord, fps: f64) {
//!         println!("frame {} {:.1} fps", frame.frame_id, fps);
//!     }
//!     fn refresh_graph(&mut self, _frame: &FrameRecord, _fps: f64) {}
//! }
//!
//! let mut history = FrameHistory::new(120);
//! let mut overlay = Overlay;
//! let samples = vec![SampleNode::leaf(CategoryId(1), 2.0, 3.0)];
//! history.push(FrameRecord::new(0, 0.0, samples), 1.0 / 60.0, &mut overlay);
//! history.push(FrameRecord::new(1, 20.0, Vec::new()), 1.0 / 60.0, &mut overlay);
//! assert_eq!(history.get(0).unwrap().total, 5.0);
//! ```

pub mod cadence;
pub mod frame;
pub mod history;
pub mod sample;
pub mod smoothing;
pub mod stats;

pub use cadence::{CycleTimer, UpdateScheduler};
pub use frame::{FrameRecord, FrameResolver, RefreshSink};
pub use history::FrameHistory;
pub use sample::{CategoryId, NodeId, SampleNode};
pub use smoothing::DeltaSmoother;
pub use stats::{StatEntry, StatEntryStore, StatTotals, StatsAggregator};
