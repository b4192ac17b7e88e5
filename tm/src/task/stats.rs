//! Per-task counters

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Counters updated by the worker thread, readable from anywhere
#[derive(Debug, Default)]
pub struct TaskStats {
    iterations: AtomicU64,
    received: AtomicU64,
    applied: AtomicU64,
    rejected: AtomicU64,
    sent: AtomicU64,
    dropped: AtomicU64,
    missing_queue: AtomicU64,
}

/// Plain copy of [`TaskStats`]
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct TaskStatsSnapshot {
    pub iterations: u64,
    pub received: u64,
    pub applied: u64,
    pub rejected: u64,
    pub sent: u64,
    pub dropped: u64,
    pub missing_queue: u64,
}

impl TaskStats {
    pub(crate) fn record_iteration(&self) {
        self.iterations.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_received(&self) {
        self.received.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_applied(&self) {
        self.applied.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_rejected(&self) {
        self.rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_sent(&self) {
        self.sent.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_dropped(&self) {
        self.dropped.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_missing_queue(&self) {
        self.missing_queue.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> TaskStatsSnapshot {
        TaskStatsSnapshot {
            iterations: self.iterations.load(Ordering::Relaxed),
            received: self.received.load(Ordering::Relaxed),
            applied: self.applied.load(Ordering::Relaxed),
            rejected: self.rejected.load(Ordering::Relaxed),
            sent: self.sent.load(Ordering::Relaxed),
            dropped: self.dropped.load(Ordering::Relaxed),
            missing_queue: self.missing_queue.load(Ordering::Relaxed),
        }
    }
}
