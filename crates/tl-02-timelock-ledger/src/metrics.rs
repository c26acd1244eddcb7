//! Prometheus hooks. No-ops unless the `metrics` feature is enabled.

use crate::domain::ErrorKind;
use shared_types::entities::OperationKind;

#[cfg(feature = "metrics")]
mod imp {
    use super::*;
    use timelock_telemetry::{
        HistogramTimer, EXECUTION_DURATION, OPERATIONS_CANCELLED, OPERATIONS_EXECUTED,
        OPERATIONS_SCHEDULED, PENDING_OPERATIONS, REQUESTS_REJECTED,
    };

    pub(crate) type ExecutionTimer = HistogramTimer;

    pub(crate) fn execution_timer() -> ExecutionTimer {
        HistogramTimer::new(&EXECUTION_DURATION)
    }

    pub(crate) fn record_scheduled(kind: OperationKind) {
        OPERATIONS_SCHEDULED.with_label_values(&[kind.as_str()]).inc();
        PENDING_OPERATIONS.inc();
    }

    pub(crate) fn record_executed(kind: OperationKind) {
        OPERATIONS_EXECUTED.with_label_values(&[kind.as_str()]).inc();
        PENDING_OPERATIONS.dec();
    }

    pub(crate) fn record_cancelled() {
        OPERATIONS_CANCELLED.inc();
        PENDING_OPERATIONS.dec();
    }

    pub(crate) fn record_restored(pending: usize) {
        PENDING_OPERATIONS.add(i64::try_from(pending).unwrap_or(i64::MAX));
    }

    pub(crate) fn record_rejected(kind: Option<ErrorKind>) {
        let reason = kind.map_or("other", |k| k.as_str());
        REQUESTS_REJECTED.with_label_values(&[reason]).inc();
    }
}

#[cfg(not(feature = "metrics"))]
mod imp {
    use super::*;

    pub(crate) struct ExecutionTimer;

    pub(crate) fn execution_timer() -> ExecutionTimer {
        ExecutionTimer
    }

    pub(crate) fn record_scheduled(_kind: OperationKind) {}

    pub(crate) fn record_executed(_kind: OperationKind) {}

    pub(crate) fn record_cancelled() {}

    pub(crate) fn record_restored(_pending: usize) {}

    pub(crate) fn record_rejected(_kind: Option<ErrorKind>) {}
}

pub(crate) use imp::*;
