//! Prometheus metrics for the timelock ledger.
//!
//! All metrics follow the naming convention: `tl_<area>_<metric>_<unit>`

use lazy_static::lazy_static;
use prometheus::{
    exponential_buckets, Encoder, Histogram, HistogramOpts, IntCounter, IntCounterVec, IntGauge,
    Opts, Registry, TextEncoder,
};

use crate::TelemetryError;

lazy_static! {
    /// Global metrics registry
    pub static ref REGISTRY: Registry = Registry::new();

    /// Operations scheduled, by kind (issue/redeem)
    pub static ref OPERATIONS_SCHEDULED: IntCounterVec = IntCounterVec::new(
        Opts::new("tl_operations_scheduled_total", "Total operations scheduled"),
        &["kind"]
    ).expect("metric creation failed");

    /// Operations executed, by kind (issue/redeem)
    pub static ref OPERATIONS_EXECUTED: IntCounterVec = IntCounterVec::new(
        Opts::new("tl_operations_executed_total", "Total operations executed"),
        &["kind"]
    ).expect("metric creation failed");

    /// Operations cancelled while pending
    pub static ref OPERATIONS_CANCELLED: IntCounter = IntCounter::new(
        "tl_operations_cancelled_total",
        "Total pending operations cancelled"
    ).expect("metric creation failed");

    /// Rejected calls, by error kind
    pub static ref REQUESTS_REJECTED: IntCounterVec = IntCounterVec::new(
        Opts::new("tl_requests_rejected_total", "Calls rejected by a precondition"),
        &["reason"]
    ).expect("metric creation failed");

    /// Operations currently pending
    pub static ref PENDING_OPERATIONS: IntGauge = IntGauge::new(
        "tl_operations_pending",
        "Number of scheduled operations not yet executed"
    ).expect("metric creation failed");

    /// Time spent inside the exclusive section of an execution
    pub static ref EXECUTION_DURATION: Histogram = Histogram::with_opts(
        HistogramOpts::new(
            "tl_execution_duration_seconds",
            "Time spent applying an operation to the ledger"
        ).buckets(exponential_buckets(0.000_01, 2.0, 12).expect("valid buckets"))
    ).expect("metric creation failed");
}

/// Register all metrics with the global registry.
///
/// Safe to call more than once; already-registered collectors are skipped.
pub fn register_metrics() -> Result<(), TelemetryError> {
    let metrics: Vec<Box<dyn prometheus::core::Collector>> = vec![
        Box::new(OPERATIONS_SCHEDULED.clone()),
        Box::new(OPERATIONS_EXECUTED.clone()),
        Box::new(OPERATIONS_CANCELLED.clone()),
        Box::new(REQUESTS_REJECTED.clone()),
        Box::new(PENDING_OPERATIONS.clone()),
        Box::new(EXECUTION_DURATION.clone()),
    ];

    for metric in metrics {
        match REGISTRY.register(metric) {
            Ok(()) | Err(prometheus::Error::AlreadyReg) => {}
            Err(e) => return Err(TelemetryError::MetricsInit(e.to_string())),
        }
    }

    Ok(())
}

/// Encode all metrics as Prometheus text format.
pub fn encode_metrics() -> Result<String, TelemetryError> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| TelemetryError::MetricsInit(e.to_string()))
}

/// Timer guard for automatic histogram observation.
pub struct HistogramTimer {
    histogram: Histogram,
    start: std::time::Instant,
}

impl HistogramTimer {
    /// Start a new timer for the given histogram.
    pub fn new(histogram: &Histogram) -> Self {
        Self {
            histogram: histogram.clone(),
            start: std::time::Instant::now(),
        }
    }
}

impl Drop for HistogramTimer {
    fn drop(&mut self) {
        let duration = self.start.elapsed().as_secs_f64();
        self.histogram.observe(duration);
    }
}
