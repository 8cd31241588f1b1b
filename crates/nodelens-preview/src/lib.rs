//! Live node-preview resources for the nodelens inspector.
//!
//! When a node is selected for live preview, the viewer needs an offscreen
//! render target and a shader pipeline that evaluates that node's output
//! value as a color. Both are expensive to build, so this crate lazily
//! materializes them once per node and memoizes the bundle for the life of
//! the process.
//!
//! Bundles are keyed by per-instance [`NodeId`], never by the telemetry
//! aggregation key ([`CategoryId`]): conflating the two would silently share
//! cached resources between unrelated nodes.
//!
//! [`NodeId`]: nodelens_telemetry::NodeId
//! [`CategoryId`]: nodelens_telemetry::CategoryId

pub mod bundle;
pub mod cache;
pub mod capability;
pub mod context;
pub mod label;

pub use bundle::{OutputKind, PreviewBundle, PREVIEW_BASE_SIZE};
pub use cache::{PreviewCache, PreviewError};
pub use capability::{report_timestamp_support, timestamp_queries_supported};
pub use context::GraphicsContext;
