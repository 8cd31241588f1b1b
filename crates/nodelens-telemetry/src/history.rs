//! Bounded history of resolved frames.

use std::collections::VecDeque;

use crate::frame::{FrameRecord, FrameResolver, RefreshSink};

/// Append-only ring of resolved frames with lookup by frame id.
///
/// The host pushes each frame record as it is produced; since resolution
/// needs the next frame's start timestamp, every push resolves the
/// previously pushed frame against the new one, keeping the history exactly
/// one frame behind real time. Graph redraw reads the retained window;
/// nothing is persisted across process restarts.
#[derive(Debug)]
pub struct FrameHistory {
    capacity: usize,
    frames: VecDeque<FrameRecord>,
    pending: Option<FrameRecord>,
    resolver: FrameResolver,
}

impl FrameHistory {
    /// Creates a history retaining at most `capacity` resolved frames.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            frames: VecDeque::with_capacity(capacity),
            pending: None,
            resolver: FrameResolver::new(),
        }
    }

    /// Creates a history around an explicitly configured resolver.
    pub fn with_resolver(capacity: usize, resolver: FrameResolver) -> Self {
        Self {
            capacity,
            frames: VecDeque::with_capacity(capacity),
            pending: None,
            resolver,
        }
    }

    /// The resolver driving this history.
    pub fn resolver(&self) -> &FrameResolver {
        &self.resolver
    }

    /// Pushes a freshly produced frame record.
    ///
    /// Resolves the previously pushed frame against `frame` (advancing the
    /// refresh cadences by `sim_dt` seconds and dispatching to `sink` on
    /// cadence boundaries), then retains `frame` as the new pending frame.
    pub fn push(&mut self, frame: FrameRecord, sim_dt: f32, sink: &mut dyn RefreshSink) {
        if let Some(mut previous) = self.pending.take() {
            self.resolver.resolve(&mut previous, Some(&frame), sim_dt, sink);
            self.frames.push_back(previous);
            while self.frames.len() > self.capacity {
                self.frames.pop_front();
            }
        }
        self.pending = Some(frame);
    }

    /// Looks up a resolved frame by id.
    pub fn get(&self, frame_id: u64) -> Option<&FrameRecord> {
        self.frames.iter().find(|f| f.frame_id == frame_id)
    }

    /// The most recently resolved frame.
    pub fn latest(&self) -> Option<&FrameRecord> {
        self.frames.back()
    }

    /// Number of resolved frames currently retained.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether no frame has been resolved yet.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Iterates over the retained frames, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &FrameRecord> {
        self.frames.iter()
    }

    /// Average resolved frame delta over the retained window, in ms.
    pub fn average_delta_ms(&self) -> f64 {
        if self.frames.is_empty() {
            return 0.0;
        }
        let total: f64 = self.frames.iter().map(|f| f.delta_time).sum();
        total / self.frames.len() as f64
    }

    /// Average frame rate over the retained window.
    pub fn average_fps(&self) -> f64 {
        let avg = self.average_delta_ms();
        if avg == 0.0 { 0.0 } else { 1000.0 / avg }
    }

    /// Formatted one-shot report for the performance tab.
    pub fn summary(&self) -> String {
        let Some(latest) = self.latest() else {
            return "No resolved frames yet".to_string();
        };

        format!(
            r#"=== Frame Telemetry Summary ===
Delta: {:.2}ms avg | FPS: {:.1} avg | {:.1} smoothed
Frame {}: cpu {:.2}ms | gpu {:.2}ms | total {:.2}ms | misc {:.2}ms
History: {} of {} frames
"#,
            self.average_delta_ms(),
            self.average_fps(),
            self.resolver.smoothed_fps(),
            latest.frame_id,
            latest.cpu,
            latest.gpu,
            latest.total,
            latest.miscellaneous,
            self.frames.len(),
            self.capacity,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::{CategoryId, SampleNode};

    struct NullSink;
    impl RefreshSink for NullSink {
        fn refresh_text(&mut self, _frame: &FrameRecord, _fps: f64) {}
        fn refresh_graph(&mut self, _frame: &FrameRecord, _fps: f64) {}
    }

    fn frame(id: u64, start: f64) -> FrameRecord {
        FrameRecord::new(id, start, vec![SampleNode::leaf(CategoryId(1), 2.0, 2.0)])
    }

    #[test]
    fn test_history_runs_one_frame_behind() {
        let mut history = FrameHistory::new(8);
        let mut sink = NullSink;

        history.push(frame(0, 0.0), 0.016, &mut sink);
        assert!(history.is_empty(), "first frame has no successor yet");

        history.push(frame(1, 16.0), 0.016, &mut sink);
        assert_eq!(history.len(), 1);
        let resolved = history.get(0).unwrap();
        assert_eq!(resolved.delta_time, 16.0);
        assert_eq!(resolved.total, 4.0);
        assert_eq!(resolved.miscellaneous, 12.0);
    }

    #[test]
    fn test_lookup_by_id_and_latest() {
        let mut history = FrameHistory::new(8);
        let mut sink = NullSink;
        for i in 0..5u64 {
            history.push(frame(i, i as f64 * 10.0), 0.01, &mut sink);
        }

        assert_eq!(history.len(), 4);
        assert_eq!(history.get(2).unwrap().frame_id, 2);
        assert!(history.get(4).is_none(), "frame 4 is still pending");
        assert_eq!(history.latest().unwrap().frame_id, 3);
    }

    #[test]
    fn test_capacity_trims_oldest() {
        let mut history = FrameHistory::new(3);
        let mut sink = NullSink;
        for i in 0..10u64 {
            history.push(frame(i, i as f64 * 10.0), 0.01, &mut sink);
        }

        assert_eq!(history.len(), 3);
        assert!(history.get(0).is_none());
        assert_eq!(history.iter().next().unwrap().frame_id, 6);
    }

    #[test]
    fn test_averages_over_window() {
        let mut history = FrameHistory::new(16);
        let mut sink = NullSink;
        for i in 0..6u64 {
            history.push(frame(i, i as f64 * 20.0), 0.02, &mut sink);
        }

        assert_eq!(history.average_delta_ms(), 20.0);
        assert_eq!(history.average_fps(), 50.0);
    }

    #[test]
    fn test_summary_mentions_latest_frame() {
        let mut history = FrameHistory::new(4);
        let mut sink = NullSink;
        assert_eq!(history.summary(), "No resolved frames yet");

        history.push(frame(0, 0.0), 0.02, &mut sink);
        history.push(frame(1, 20.0), 0.02, &mut sink);
        let summary = history.summary();
        assert!(summary.contains("Frame 0:"));
        assert!(summary.contains("total 4.00ms"));
    }
}
