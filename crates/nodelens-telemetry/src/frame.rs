//! Frame records and the per-frame resolution step.

use nodelens_core::logging::WarnOnce;
#[cfg(feature = "profiling")]
use nodelens_core::profiling::profile_function;

use crate::cadence::UpdateScheduler;
use crate::sample::SampleNode;
use crate::smoothing::{self, DeltaSmoother};
use crate::stats::StatsAggregator;

/// One rendered frame's report, produced by the host at end-of-frame.
///
/// The cost and timing fields are computed exactly once by
/// [`FrameResolver::resolve`]; until then they hold zero.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameRecord {
    /// Monotonic frame counter.
    pub frame_id: u64,
    /// Frame start timestamp in milliseconds.
    pub start_time: f64,
    /// Top-level cost samples for the frame.
    pub children: Vec<SampleNode>,
    /// Aggregated CPU cost in milliseconds.
    pub cpu: f64,
    /// Aggregated GPU cost in milliseconds.
    pub gpu: f64,
    /// Aggregated cost, always `cpu + gpu`.
    pub total: f64,
    /// Wall-clock time until the next frame started, in milliseconds.
    pub delta_time: f64,
    /// Wall-clock time not accounted for by any sample (idle, stall, or
    /// unmeasured work). Never negative.
    pub miscellaneous: f64,
}

impl FrameRecord {
    /// Creates an unresolved frame record.
    pub fn new(frame_id: u64, start_time: f64, children: Vec<SampleNode>) -> Self {
        Self {
            frame_id,
            start_time,
            children,
            cpu: 0.0,
            gpu: 0.0,
            total: 0.0,
            delta_time: 0.0,
            miscellaneous: 0.0,
        }
    }

    /// Instantaneous frame rate derived from the resolved delta.
    pub fn fps(&self) -> f64 {
        smoothing::fps(self.delta_time)
    }
}

/// External UI collaborators notified on cadence boundaries.
///
/// Implementors draw the numbers; the telemetry core only decides when they
/// run and with which values.
pub trait RefreshSink {
    /// Called on the fast text cadence with the newest resolved frame.
    fn refresh_text(&mut self, frame: &FrameRecord, smoothed_fps: f64);
    /// Called on the slow graph cadence with the newest resolved frame.
    fn refresh_graph(&mut self, frame: &FrameRecord, smoothed_fps: f64);
}

/// Resolves completed frames against their chronological successor.
///
/// Resolution is always one frame behind real time: frame `N`'s wall-clock
/// delta needs frame `N + 1`'s start timestamp.
#[derive(Debug, Default)]
pub struct FrameResolver {
    aggregator: StatsAggregator,
    smoother: DeltaSmoother,
    scheduler: UpdateScheduler,
    advisories: WarnOnce,
}

impl FrameResolver {
    /// Creates a resolver with default smoothing and refresh intervals.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a resolver with an explicit scheduler configuration.
    pub fn with_scheduler(scheduler: UpdateScheduler) -> Self {
        Self {
            scheduler,
            ..Self::default()
        }
    }

    /// Read access to the per-category stat store.
    pub fn aggregator(&self) -> &StatsAggregator {
        &self.aggregator
    }

    /// Current smoothed frame delta in milliseconds.
    pub fn soft_delta_ms(&self) -> f64 {
        self.smoother.soft_delta_ms()
    }

    /// Current smoothed frame rate.
    pub fn smoothed_fps(&self) -> f64 {
        self.smoother.smoothed_fps()
    }

    /// Resolves `frame` against the chronologically next frame.
    ///
    /// A no-op while `next` is absent. Otherwise aggregates the frame's
    /// sample trees, derives `delta_time` from the two start timestamps and
    /// `miscellaneous` as the unaccounted remainder (clamped at zero, since
    /// asynchronous GPU timestamps can arrive out of order and push the
    /// measured subtotal past the measured wall time), feeds the smoother,
    /// advances both refresh cadences by `sim_dt` seconds, and invokes the
    /// sink for each cadence that fired.
    pub fn resolve(
        &mut self,
        frame: &mut FrameRecord,
        next: Option<&FrameRecord>,
        sim_dt: f32,
        sink: &mut dyn RefreshSink,
    ) {
        #[cfg(feature = "profiling")]
        profile_function!();

        let Some(next) = next else {
            return;
        };

        frame.cpu = 0.0;
        frame.gpu = 0.0;
        for child in &frame.children {
            let totals = self.aggregator.aggregate(child);
            frame.cpu += totals.cpu;
            frame.gpu += totals.gpu;
        }
        // Derived from the summed components so `total == cpu + gpu` holds
        // exactly under floating point.
        frame.total = frame.cpu + frame.gpu;

        frame.delta_time = next.start_time - frame.start_time;
        frame.miscellaneous = (frame.delta_time - frame.total).max(0.0);

        if frame.delta_time <= 0.0 {
            self.advisories.warn(
                "non-increasing-timestamps",
                "frame start timestamps are not strictly increasing; rate values will be unreliable",
            );
        }

        self.smoother.push(frame.delta_time, sim_dt);

        if self.scheduler.text.advance(sim_dt) {
            sink.refresh_text(frame, self.smoother.smoothed_fps());
            self.scheduler.text.consume();
        }
        if self.scheduler.graph.advance(sim_dt) {
            sink.refresh_graph(frame, self.smoother.smoothed_fps());
            self.scheduler.graph.consume();
        }
    }
}
