//! Prometheus metrics for the invoice composer.

use prometheus::{Encoder, IntCounterVec, Opts, Registry, TextEncoder};
use std::sync::OnceLock;

static METRICS: OnceLock<Metrics> = OnceLock::new();

pub struct Metrics {
    registry: Registry,
    pub http_requests_total: IntCounterVec,
    pub mutations_total: IntCounterVec,
}

/// Process-wide metrics handle, created on first use so router tests never
/// need an explicit init step.
pub fn metrics() -> &'static Metrics {
    METRICS.get_or_init(|| {
        let registry = Registry::new();

        let http_requests_total = IntCounterVec::new(
            Opts::new("http_requests_total", "Total number of HTTP requests"),
            &["method", "path", "status"],
        )
        .expect("metric can be created");

        let mutations_total = IntCounterVec::new(
            Opts::new(
                "invoice_mutations_total",
                "Invoice state mutations by operation",
            ),
            &["operation"],
        )
        .expect("metric can be created");

        registry
            .register(Box::new(http_requests_total.clone()))
            .expect("collector can be registered");
        registry
            .register(Box::new(mutations_total.clone()))
            .expect("collector can be registered");

        Metrics {
            registry,
            http_requests_total,
            mutations_total,
        }
    })
}

/// Count one applied state mutation.
pub fn record_mutation(operation: &str) {
    metrics()
        .mutations_total
        .with_label_values(&[operation])
        .inc();
}

/// Render the registry in the Prometheus text exposition format.
pub fn encode() -> String {
    let mut buffer = Vec::new();
    let encoder = TextEncoder::new();
    let metric_families = metrics().registry.gather();
    encoder
        .encode(&metric_families, &mut buffer)
        .expect("metrics encode to an in-memory buffer");
    String::from_utf8(buffer).unwrap_or_default()
}
