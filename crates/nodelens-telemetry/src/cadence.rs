//! Refresh cadences for the overlay UI.
//!
//! Numeric text is cheap to redraw and stays responsive on a short cadence;
//! graph redraws are expensive and run on a longer one. Both timers advance
//! every frame by the host-supplied simulation delta.

/// Default interval between numeric-text refreshes, in seconds.
pub const TEXT_REFRESH_INTERVAL: f32 = 0.25;

/// Default interval between graph redraws, in seconds.
pub const GRAPH_REFRESH_INTERVAL: f32 = 1.0;

/// Accumulating timer converting continuous elapsed time into discrete
/// "refresh now" signals.
///
/// On fire the accumulator resets to zero rather than subtracting the
/// duration, so any overshoot past the threshold is discarded and the
/// firing phase drifts slowly relative to wall-clock multiples of the
/// duration. Immediately after a firing is consumed, `time < duration`
/// always holds.
#[derive(Debug, Clone)]
pub struct CycleTimer {
    duration: f32,
    time: f32,
    needs_update: bool,
}

impl CycleTimer {
    /// Creates a timer that fires every `duration` seconds.
    pub fn new(duration: f32) -> Self {
        Self {
            duration,
            time: 0.0,
            needs_update: false,
        }
    }

    /// Accumulates `dt` seconds; returns whether the timer fired.
    pub fn advance(&mut self, dt: f32) -> bool {
        self.time += dt;
        if self.time >= self.duration {
            self.needs_update = true;
            self.time = 0.0;
            true
        } else {
            false
        }
    }

    /// Whether a firing is pending consumption.
    pub fn needs_update(&self) -> bool {
        self.needs_update
    }

    /// Clears a pending firing after the refresh callback ran.
    pub fn consume(&mut self) {
        self.needs_update = false;
    }

    /// Configured firing interval in seconds.
    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Accumulated time since the last firing, in seconds.
    pub fn time(&self) -> f32 {
        self.time
    }
}

/// The two independent refresh cadences driven once per frame.
#[derive(Debug, Clone)]
pub struct UpdateScheduler {
    /// Short cadence for numeric-text refresh.
    pub text: CycleTimer,
    /// Long cadence for graph redraw.
    pub graph: CycleTimer,
}

impl UpdateScheduler {
    /// Creates a scheduler with the default intervals.
    pub fn new() -> Self {
        Self::with_intervals(TEXT_REFRESH_INTERVAL, GRAPH_REFRESH_INTERVAL)
    }

    /// Creates a scheduler with explicit intervals in seconds.
    pub fn with_intervals(text: f32, graph: f32) -> Self {
        Self {
            text: CycleTimer::new(text),
            graph: CycleTimer::new(graph),
        }
    }
}

impl Default for UpdateScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_sum_fires_once_and_resets() {
        let mut timer = CycleTimer::new(0.5);
        assert!(!timer.advance(0.2));
        assert!(!timer.advance(0.2));
        assert!(timer.advance(0.1));
        assert_eq!(timer.time(), 0.0);
        assert!(timer.needs_update());

        timer.consume();
        assert!(!timer.needs_update());
        assert!(timer.time() < timer.duration());
    }

    #[test]
    fn test_under_duration_never_fires() {
        let mut timer = CycleTimer::new(1.0);
        for _ in 0..9 {
            assert!(!timer.advance(0.1));
        }
        assert!(!timer.needs_update());
    }

    #[test]
    fn test_text_cadence_scenario() {
        // duration 0.25, advanced by 0.1 three times: fires on the third
        // call (0.30 >= 0.25) and resets to zero.
        let mut timer = CycleTimer::new(0.25);
        assert!(!timer.advance(0.1));
        assert!(!timer.advance(0.1));
        assert!(timer.advance(0.1));
        assert_eq!(timer.time(), 0.0);
    }

    #[test]
    fn test_overshoot_is_discarded() {
        let mut timer = CycleTimer::new(0.25);
        assert!(timer.advance(0.4));
        // Reset-to-zero policy: the 0.15 overshoot does not carry over.
        assert_eq!(timer.time(), 0.0);
        assert!(!timer.advance(0.2));
    }

    #[test]
    fn test_scheduler_cadences_are_independent() {
        let mut sched = UpdateScheduler::with_intervals(0.25, 1.0);
        let mut text_fires = 0;
        let mut graph_fires = 0;
        for _ in 0..20 {
            if sched.text.advance(0.1) {
                text_fires += 1;
                sched.text.consume();
            }
            if sched.graph.advance(0.1) {
                graph_fires += 1;
                sched.graph.consume();
            }
        }
        assert!(text_fires > graph_fires);
        assert_eq!(graph_fires, 2);
    }
}
