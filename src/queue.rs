//! The public queue operations, composing the message store, ordering
//! strategies, monitor, and deadline arithmetic into one façade.
//!
//! Validation happens before entering the monitor, never inside it. A
//! thin struct wrapping the concurrency primitive, with validated
//! construction and no `unsafe` on the public surface.

use crate::config::QueueConfig;
use crate::constants::TIMEOUT_ZERO;
use crate::error::{QueueError, Result};
use crate::insights;
use crate::message::Message;
use crate::metrics::{Metrics, MetricsSnapshot};
use crate::monitor::Monitor;

/// A bounded, thread-safe queue with the ordering discipline fixed at
/// construction. Cloning a `Queue` is not supported; share it behind an
/// `Arc` across producer/consumer threads instead.
///
/// There is no explicit `destroy`: resource release (payload buffers,
/// slot array, monitor primitives) happens automatically, in reverse
/// order of acquisition, when the `Queue` is dropped.
pub struct Queue {
    config: QueueConfig,
    monitor: Monitor,
    metrics: Metrics,
}

impl Queue {
    /// Allocates the message store and monitor primitives for `config`.
    /// `QueueConfig`'s own builder methods reject out-of-range limits
    /// before this is ever called.
    pub fn new(config: QueueConfig) -> Result<Self> {
        Ok(Self {
            monitor: Monitor::new(&config),
            config,
            metrics: Metrics::new(),
        })
    }

    pub fn config(&self) -> &QueueConfig {
        &self.config
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    /// Current fill level. Returns `Result` rather than a bare count for
    /// interface symmetry with the other operations, even though
    /// `parking_lot`'s mutex cannot fail to lock.
    pub fn get_fill(&self) -> Result<usize> {
        Ok(self.monitor.fill())
    }

    /// Non-blocking send.
    pub fn send_nonbl(&self, msg: Message) -> Result<()> {
        self.validate_send(&msg)?;
        insights::record_send(msg.prio(), msg.size());
        let result = self.monitor.send_nonbl(&msg);
        self.record_send_outcome(&result);
        result
    }

    /// Non-blocking receive.
    pub fn recv_nonbl(&self) -> Result<Message> {
        let result = self.monitor.recv_nonbl();
        self.record_recv_outcome(&result);
        result
    }

    /// Timed/blocking send. `timeout` is in units of
    /// `1 / constants::TIMEOUT_RESOLUTION` seconds. [`crate::constants::TIMEOUT_ZERO`]
    /// is equivalent to [`Queue::send_nonbl`]; [`crate::constants::TIMEOUT_INF`]
    /// blocks indefinitely.
    pub fn send_timed(&self, msg: Message, timeout: u64) -> Result<()> {
        if timeout == TIMEOUT_ZERO {
            return self.send_nonbl(msg);
        }
        self.validate_send(&msg)?;
        insights::record_send(msg.prio(), msg.size());
        let result = self.monitor.send_timed(&msg, timeout);
        self.record_send_outcome(&result);
        result
    }

    /// Timed/blocking receive.
    pub fn recv_timed(&self, timeout: u64) -> Result<Message> {
        if timeout == TIMEOUT_ZERO {
            return self.recv_nonbl();
        }
        let result = self.monitor.recv_timed(timeout);
        self.record_recv_outcome(&result);
        result
    }

    /// Prints configuration and each occupied slot's priority, size, and
    /// payload bytes in slot-index order, under the monitor.
    pub fn dump<W: std::io::Write>(&self, w: &mut W) -> std::io::Result<()> {
        self.monitor.dump(self.config.maxprio(), self.config.msgsize(), w)
    }

    fn validate_send(&self, msg: &Message) -> Result<()> {
        if msg.prio() > self.config.maxprio() {
            return Err(QueueError::invalid(format!(
                "priority {} exceeds queue maximum of {}",
                msg.prio(),
                self.config.maxprio()
            )));
        }
        if msg.size() > self.config.msgsize() {
            return Err(QueueError::MessageTooBig {
                size: msg.size(),
                max: self.config.msgsize(),
            });
        }
        Ok(())
    }

    fn record_send_outcome(&self, result: &Result<()>) {
        match result {
            Ok(()) => self.metrics.record_sent(),
            Err(QueueError::TryAgain) => {
                insights::record_try_again("send");
                self.metrics.record_try_again_send();
            }
            Err(QueueError::Timeout) => {
                insights::record_timeout("send");
                self.metrics.record_timed_out_send();
            }
            Err(_) => {}
        }
    }

    fn record_recv_outcome(&self, result: &Result<Message>) {
        match result {
            Ok(msg) => {
                insights::record_recv(msg.prio(), msg.size());
                self.metrics.record_received();
            }
            Err(QueueError::TryAgain) => {
                insights::record_try_again("recv");
                self.metrics.record_try_again_recv();
            }
            Err(QueueError::Timeout) => {
                insights::record_timeout("recv");
                self.metrics.record_timed_out_recv();
            }
            Err(_) => {}
        }
    }
}
