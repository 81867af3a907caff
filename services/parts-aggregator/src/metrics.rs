//! Prometheus counters for the parts service.

use breadboard_models::SourceSupplier;
use breadboard_utils::{BreadboardError, BreadboardResult};
use prometheus::{IntCounter, IntCounterVec, Opts, Registry, TextEncoder};

#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    part_requests: IntCounter,
    fetch_failures: IntCounterVec,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new_custom(Some("breadboard".to_string()), None)?;

        let part_requests =
            IntCounter::new("part_requests_total", "Part aggregation requests served")?;
        let fetch_failures = IntCounterVec::new(
            Opts::new(
                "supplier_fetch_failures_total",
                "Supplier documents that could not be fetched or decoded",
            ),
            &["supplier"],
        )?;

        registry.register(Box::new(part_requests.clone()))?;
        registry.register(Box::new(fetch_failures.clone()))?;

        Ok(Self {
            registry,
            part_requests,
            fetch_failures,
        })
    }

    pub fn record_part_request(&self) {
        self.part_requests.inc();
    }

    pub fn record_fetch_failure(&self, supplier: SourceSupplier) {
        self.fetch_failures
            .with_label_values(&[supplier.as_str()])
            .inc();
    }

    #[cfg(test)]
    pub fn fetch_failures(&self, supplier: SourceSupplier) -> u64 {
        self.fetch_failures
            .with_label_values(&[supplier.as_str()])
            .get()
    }

    /// Text exposition format.
    pub fn encode(&self) -> BreadboardResult<String> {
        TextEncoder::new()
            .encode_to_string(&self.registry.gather())
            .map_err(|e| BreadboardError::internal(format!("Failed to encode metrics: {}", e)))
    }
}
