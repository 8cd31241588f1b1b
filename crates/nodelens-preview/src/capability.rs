//! Adapter capability probing for telemetry-related GPU features.
//!
//! Timestamp queries are what allow per-node GPU timings to come from the
//! device rather than from CPU-side estimates, so the context reports their
//! availability once at startup.

/// Returns whether the adapter supports GPU timestamp queries.
pub fn timestamp_queries_supported(features: wgpu::Features) -> bool {
    features.contains(wgpu::Features::TIMESTAMP_QUERY)
}

/// Logs the outcome of the timestamp probe.
///
/// Missing support is a warning rather than an error: the pipeline still
/// runs, GPU timings just degrade to whatever the caller samples itself.
pub fn report_timestamp_support(supported: bool) {
    if supported {
        tracing::info!("GPU timestamp queries available, per-node GPU timings enabled");
    } else {
        tracing::warn!("GPU timestamp queries unsupported on this adapter, GPU timings degraded");
    }
}
