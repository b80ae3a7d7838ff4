//! boundq: a bounded, thread-safe message queue with a choice of four
//! ordering disciplines (priority-with-FIFO-ties, priority-with-heap-
//! ties, FIFO, LIFO), blocking or non-blocking send/recv.
//!
//! Built on a `parking_lot`-backed monitor, `thiserror` errors, optional
//! `tracing` instrumentation, and per-instance atomic counters.
//!
//! ```
//! use boundq::{Message, Order, Queue, QueueConfig};
//!
//! let config = QueueConfig::new(4, Order::Fifo)?.with_msgsize(64)?;
//! let queue = Queue::new(config)?;
//! queue.send_nonbl(Message::new(b"hello".to_vec(), 0))?;
//! let received = queue.recv_nonbl()?;
//! assert_eq!(received.payload(), b"hello");
//! # Ok::<(), boundq::QueueError>(())
//! ```

mod config;
mod constants;
mod deadline;
mod error;
mod insights;
mod message;
mod metrics;
mod monitor;
mod queue;
mod state;
mod store;
mod strategy;

pub use config::{Order, QueueConfig};
pub use constants::{MAX_LIMIT, TIMEOUT_INF, TIMEOUT_RESOLUTION, TIMEOUT_ZERO};
pub use error::{QueueError, Result};
pub use message::Message;
pub use metrics::{Metrics, MetricsSnapshot};
pub use queue::Queue;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smoke_send_and_receive_across_orders() {
        for order in [Order::Fifo, Order::Lifo, Order::Prioq, Order::Prifo] {
            let config = QueueConfig::new(3, order).unwrap().with_msgsize(8).unwrap();
            let queue = Queue::new(config).unwrap();
            queue.send_nonbl(Message::new(b"a".to_vec(), 0)).unwrap();
            queue.send_nonbl(Message::new(b"b".to_vec(), 0)).unwrap();
            assert_eq!(queue.get_fill().unwrap(), 2);
            queue.recv_nonbl().unwrap();
            queue.recv_nonbl().unwrap();
            assert_eq!(queue.get_fill().unwrap(), 0);
        }
    }

    #[test]
    fn timed_zero_aliases_nonbl_on_full_queue() {
        let config = QueueConfig::new(1, Order::Fifo).unwrap();
        let queue = Queue::new(config).unwrap();
        queue.send_nonbl(Message::new(vec![0u8], 0)).unwrap();
        assert_eq!(
            queue.send_timed(Message::new(vec![0u8], 0), TIMEOUT_ZERO),
            Err(QueueError::TryAgain)
        );
    }

    #[test]
    fn rejects_message_above_configured_limits() {
        let config = QueueConfig::new(1, Order::Prifo).unwrap().with_msgsize(2).unwrap().with_maxprio(1).unwrap();
        let queue = Queue::new(config).unwrap();
        assert!(matches!(
            queue.send_nonbl(Message::new(b"x".to_vec(), 5)),
            Err(QueueError::InvalidArgument { .. })
        ));
        assert!(matches!(
            queue.send_nonbl(Message::new(b"xyz".to_vec(), 0)),
            Err(QueueError::MessageTooBig { .. })
        ));
    }
}
