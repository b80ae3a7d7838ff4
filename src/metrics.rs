//! Per-queue metrics. One instance lives per [`crate::Queue`] rather
//! than a single process-wide `static`, since queues here are
//! independently constructed value types.

use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Default)]
pub struct Metrics {
    sent: AtomicU64,
    received: AtomicU64,
    try_again_send: AtomicU64,
    try_again_recv: AtomicU64,
    timed_out_send: AtomicU64,
    timed_out_recv: AtomicU64,
}

impl Metrics {
    pub(crate) const fn new() -> Self {
        Self {
            sent: AtomicU64::new(0),
            received: AtomicU64::new(0),
            try_again_send: AtomicU64::new(0),
            try_again_recv: AtomicU64::new(0),
            timed_out_send: AtomicU64::new(0),
            timed_out_recv: AtomicU64::new(0),
        }
    }

    #[inline]
    pub(crate) fn record_sent(&self) {
        self.sent.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub(crate) fn record_received(&self) {
        self.received.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub(crate) fn record_try_again_send(&self) {
        self.try_again_send.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub(crate) fn record_try_again_recv(&self) {
        self.try_again_recv.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub(crate) fn record_timed_out_send(&self) {
        self.timed_out_send.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub(crate) fn record_timed_out_recv(&self) {
        self.timed_out_recv.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            sent: self.sent.load(Ordering::Relaxed),
            received: self.received.load(Ordering::Relaxed),
            try_again_send: self.try_again_send.load(Ordering::Relaxed),
            try_again_recv: self.try_again_recv.load(Ordering::Relaxed),
            timed_out_send: self.timed_out_send.load(Ordering::Relaxed),
            timed_out_recv: self.timed_out_recv.load(Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub sent: u64,
    pub received: u64,
    pub try_again_send: u64,
    pub try_again_recv: u64,
    pub timed_out_send: u64,
    pub timed_out_recv: u64,
}

impl std::fmt::Display for MetricsSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "sent={} recv={} try_again_send={} try_again_recv={} timeout_send={} timeout_recv={}",
            self.sent, self.received, self.try_again_send, self.try_again_recv, self.timed_out_send, self.timed_out_recv
        )
    }
}
