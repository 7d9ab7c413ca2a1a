// Private module declaration
mod server;

use prometheus::{Histogram, HistogramOpts, IntCounter, IntCounterVec, Opts, Registry};

pub use server::start_metrics_server;

// ============================================================================
// Metrics Module - Prometheus metrics for observability
// ============================================================================
//
// Provides metrics for:
// - Reconciliation outcomes (applied path or rejection reason)
// - Reconciliation latency
// - Address email propagation
// - Emitted notification events
//
// All metrics are registered with Prometheus and can be scraped via /metrics
// ============================================================================

pub struct Metrics {
    registry: Registry,

    pub reconciliations_total: IntCounterVec,
    pub reconciliation_duration: Histogram,
    pub address_updates_total: IntCounter,
    pub events_emitted_total: IntCounterVec,
}

impl Metrics {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let reconciliations_total = IntCounterVec::new(
            Opts::new(
                "order_email_reconciliations_total",
                "Order email change requests by outcome",
            ),
            &["outcome"],
        )?;
        registry.register(Box::new(reconciliations_total.clone()))?;

        let reconciliation_duration = Histogram::with_opts(
            HistogramOpts::new(
                "order_email_reconciliation_duration_seconds",
                "Order email change request duration",
            )
            .buckets(vec![0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0, 5.0]),
        )?;
        registry.register(Box::new(reconciliation_duration.clone()))?;

        let address_updates_total = IntCounter::new(
            "order_email_address_updates_total",
            "Order addresses rewritten with a new email",
        )?;
        registry.register(Box::new(address_updates_total.clone()))?;

        let events_emitted_total = IntCounterVec::new(
            Opts::new("order_email_events_emitted_total", "Notification events emitted"),
            &["event_name"],
        )?;
        registry.register(Box::new(events_emitted_total.clone()))?;

        Ok(Self {
            registry,
            reconciliations_total,
            reconciliation_duration,
            address_updates_total,
            events_emitted_total,
        })
    }

    /// Get the Prometheus registry for exposing metrics via HTTP
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn record_outcome(&self, outcome: &str, duration_secs: f64) {
        self.reconciliations_total.with_label_values(&[outcome]).inc();
        self.reconciliation_duration.observe(duration_secs);
    }

    pub fn record_address_updates(&self, count: usize) {
        self.address_updates_total.inc_by(count as u64);
    }

    pub fn record_event(&self, event_name: &str) {
        self.events_emitted_total.with_label_values(&[event_name]).inc();
    }
}
