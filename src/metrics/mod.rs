// Private module declaration
mod server;

use prometheus::{HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry};

// Re-export for public API
pub use server::start_metrics_server;

// ============================================================================
// Metrics Module - Prometheus metrics for observability
// ============================================================================
//
// Per-RPC request counts (by status code) and latency. Recorded by the
// handlers in src/rpc/, scraped via /metrics.
//
// ============================================================================

pub struct Metrics {
    registry: Registry,

    pub rpc_requests_total: IntCounterVec,
    pub rpc_request_duration: HistogramVec,
}

impl Metrics {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let rpc_requests_total = IntCounterVec::new(
            Opts::new("rpc_requests_total", "Total RPC requests handled"),
            &["method", "code"],
        )?;
        registry.register(Box::new(rpc_requests_total.clone()))?;

        let rpc_request_duration = HistogramVec::new(
            HistogramOpts::new("rpc_request_duration_seconds", "RPC handling duration")
                .buckets(vec![0.0005, 0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0]),
            &["method"],
        )?;
        registry.register(Box::new(rpc_request_duration.clone()))?;

        Ok(Self {
            registry,
            rpc_requests_total,
            rpc_request_duration,
        })
    }

    /// Get the Prometheus registry for exposing metrics via HTTP
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Record one handled RPC with its outcome code ("Ok", "NotFound", ...)
    pub fn record_rpc(&self, method: &str, code: &str, duration_secs: f64) {
        self.rpc_requests_total.with_label_values(&[method, code]).inc();
        self.rpc_request_duration
            .with_label_values(&[method])
            .observe(duration_secs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_creation() {
        let metrics = Metrics::new().unwrap();
        metrics.record_rpc("ListProducts", "Ok", 0.001);
        assert_eq!(metrics.registry().gather().len(), 2);
    }

    #[test]
    fn test_record_rpc_by_code() {
        let metrics = Metrics::new().unwrap();
        metrics.record_rpc("GetProduct", "Ok", 0.002);
        metrics.record_rpc("GetProduct", "Ok", 0.001);
        metrics.record_rpc("GetProduct", "NotFound", 0.001);

        let gathered = metrics.registry().gather();
        let requests = gathered
            .iter()
            .find(|m| m.name() == "rpc_requests_total")
            .unwrap();
        assert_eq!(requests.metric.len(), 2); // Ok and NotFound labels

        let durations = gathered
            .iter()
            .find(|m| m.name() == "rpc_request_duration_seconds")
            .unwrap();
        assert_eq!(durations.metric[0].histogram.sample_count, Some(3));
    }
}
