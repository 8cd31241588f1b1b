//! Logging setup and advisory-warning deduplication.

use crate::alloc::HashSet;

/// Installs the global tracing subscriber for inspector binaries.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter("info,wgpu_core=warn,wgpu_hal=warn,naga=warn")
        .init();
}

/// Keyed one-shot memo for advisory warnings.
///
/// Conditions that recur every frame (e.g. resolving while the renderer has
/// not reported its capabilities) would otherwise flood the log sink. Each
/// key is reported once for the lifetime of the owning component; later
/// occurrences are silently dropped.
///
/// Owned by whoever needs deduplication rather than living in process-global
/// state, so independent components keep independent memos.
#[derive(Debug, Default)]
pub struct WarnOnce {
    seen: HashSet<&'static str>,
}

impl WarnOnce {
    /// Creates an empty memo.
    pub fn new() -> Self {
        Self::default()
    }

    /// Emits `message` as a warning the first time `key` is seen.
    ///
    /// Returns true when the warning was actually emitted.
    pub fn warn(&mut self, key: &'static str, message: &str) -> bool {
        if self.seen.insert(key) {
            tracing::warn!(key, "{message}");
            true
        } else {
            false
        }
    }

    /// Returns whether `key` has already been reported.
    pub fn reported(&self, key: &'static str) -> bool {
        self.seen.contains(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warn_once_suppresses_repeats() {
        let mut memo = WarnOnce::new();
        assert!(memo.warn("compute-in-loop", "compute called while a loop is active"));
        assert!(!memo.warn("compute-in-loop", "compute called while a loop is active"));
        assert!(memo.reported("compute-in-loop"));
    }

    #[test]
    fn test_warn_once_keys_are_independent() {
        let mut memo = WarnOnce::new();
        assert!(memo.warn("a", "first"));
        assert!(memo.warn("b", "second"));
        assert!(!memo.warn("a", "first again"));
    }
}
