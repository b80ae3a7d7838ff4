//! The monitor: mutual exclusion plus two condition predicates
//! (not-full, not-empty), coordinating blocking producers and consumers.
//! Pairs a `parking_lot::Mutex` with a `parking_lot::Condvar` per
//! predicate for a "block until predicate, recheck on spurious wakeup"
//! shape, with a waiter count tracked alongside each.

use parking_lot::{Condvar, Mutex, MutexGuard};

use crate::config::QueueConfig;
use crate::constants::TIMEOUT_INF;
use crate::deadline::Deadline;
use crate::error::{QueueError, Result};
use crate::message::Message;
use crate::state::QueueState;

pub(crate) struct Monitor {
    state: Mutex<QueueState>,
    ready_to_send: Condvar,
    ready_to_recv: Condvar,
}

impl Monitor {
    pub(crate) fn new(config: &QueueConfig) -> Self {
        Self {
            state: Mutex::new(QueueState::new(config)),
            ready_to_send: Condvar::new(),
            ready_to_recv: Condvar::new(),
        }
    }

    pub(crate) fn fill(&self) -> usize {
        self.state.lock().fill()
    }

    pub(crate) fn dump(&self, maxprio: u32, msgsize: usize, w: &mut dyn std::io::Write) -> std::io::Result<()> {
        self.state.lock().dump(maxprio, msgsize, w)
    }

    /// Non-blocking send. Caller has already validated `msg` against
    /// queue limits.
    pub(crate) fn send_nonbl(&self, msg: &Message) -> Result<()> {
        let mut guard = self.state.lock();
        if guard.is_full() {
            return Err(QueueError::TryAgain);
        }
        guard.insert(msg);
        self.signal_recv_if_waiting(&guard);
        Ok(())
    }

    /// Non-blocking receive.
    pub(crate) fn recv_nonbl(&self) -> Result<Message> {
        let mut guard = self.state.lock();
        if guard.is_empty() {
            return Err(QueueError::TryAgain);
        }
        let msg = guard.remove();
        self.signal_send_if_waiting(&guard);
        Ok(msg)
    }

    /// Timed/blocking send. `timeout == 0` is handled by the caller as
    /// an alias for `send_nonbl`.
    pub(crate) fn send_timed(&self, msg: &Message, timeout: u64) -> Result<()> {
        let deadline = (timeout != TIMEOUT_INF).then(|| Deadline::from_now(timeout));

        let mut guard = self.state.lock();
        while guard.is_full() {
            guard.waiting_to_send += 1;
            let timed_out = self.wait(&mut guard, &self.ready_to_send, deadline.as_ref());
            guard.waiting_to_send -= 1;
            if timed_out && guard.is_full() {
                return Err(QueueError::Timeout);
            }
        }
        guard.insert(msg);
        self.signal_recv_if_waiting(&guard);
        Ok(())
    }

    /// Timed/blocking receive.
    pub(crate) fn recv_timed(&self, timeout: u64) -> Result<Message> {
        let deadline = (timeout != TIMEOUT_INF).then(|| Deadline::from_now(timeout));

        let mut guard = self.state.lock();
        while guard.is_empty() {
            guard.waiting_to_recv += 1;
            let timed_out = self.wait(&mut guard, &self.ready_to_recv, deadline.as_ref());
            guard.waiting_to_recv -= 1;
            if timed_out && guard.is_empty() {
                return Err(QueueError::Timeout);
            }
        }
        let msg = guard.remove();
        self.signal_send_if_waiting(&guard);
        Ok(msg)
    }

    #[cfg(test)]
    pub(crate) fn waiting_to_send(&self) -> usize {
        self.state.lock().waiting_to_send
    }

    #[cfg(test)]
    pub(crate) fn waiting_to_recv(&self) -> usize {
        self.state.lock().waiting_to_recv
    }

    /// Waits on `cond`, indefinitely if `deadline` is `None`, else for
    /// whatever time remains until it. A spurious wakeup with time still
    /// remaining re-enters the wait against the original deadline, not a
    /// freshly computed one. Returns `true` if the wait returned because
    /// the deadline passed.
    fn wait(&self, guard: &mut MutexGuard<'_, QueueState>, cond: &Condvar, deadline: Option<&Deadline>) -> bool {
        match deadline {
            None => {
                cond.wait(guard);
                false
            }
            Some(deadline) => match deadline.remaining() {
                None => true,
                Some(remaining) => cond.wait_for(guard, remaining).timed_out(),
            },
        }
    }

    /// After a successful insert, wake exactly one receiver if any is
    /// waiting.
    fn signal_recv_if_waiting(&self, guard: &MutexGuard<'_, QueueState>) {
        if guard.waiting_to_recv > 0 {
            self.ready_to_recv.notify_one();
        }
    }

    /// After a successful remove, wake exactly one sender if any is
    /// waiting.
    fn signal_send_if_waiting(&self, guard: &MutexGuard<'_, QueueState>) {
        if guard.waiting_to_send > 0 {
            self.ready_to_send.notify_one();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Order;

    fn cfg(maxmsg: usize) -> QueueConfig {
        QueueConfig::new(maxmsg, Order::Fifo).unwrap().with_msgsize(8).unwrap()
    }

    #[test]
    fn nonbl_send_then_recv_roundtrips() {
        let m = Monitor::new(&cfg(2));
        m.send_nonbl(&Message::new(b"hi".to_vec(), 0)).unwrap();
        assert_eq!(m.fill(), 1);
        let out = m.recv_nonbl().unwrap();
        assert_eq!(out.payload(), b"hi");
        assert_eq!(m.fill(), 0);
    }

    #[test]
    fn nonbl_send_fails_when_full() {
        let m = Monitor::new(&cfg(1));
        m.send_nonbl(&Message::new(b"a".to_vec(), 0)).unwrap();
        assert_eq!(m.send_nonbl(&Message::new(b"b".to_vec(), 0)), Err(QueueError::TryAgain));
    }

    #[test]
    fn nonbl_recv_fails_when_empty() {
        let m = Monitor::new(&cfg(1));
        assert_eq!(m.recv_nonbl(), Err(QueueError::TryAgain));
    }

    #[test]
    fn timed_send_times_out_on_full_queue() {
        let m = Monitor::new(&cfg(1));
        m.send_nonbl(&Message::new(b"a".to_vec(), 0)).unwrap();
        let start = std::time::Instant::now();
        let result = m.send_timed(&Message::new(b"b".to_vec(), 0), 20);
        assert_eq!(result, Err(QueueError::Timeout));
        assert!(start.elapsed() >= std::time::Duration::from_millis(15));
    }

    #[test]
    fn timed_recv_times_out_on_empty_queue() {
        let m = Monitor::new(&cfg(1));
        let result = m.recv_timed(20);
        assert_eq!(result, Err(QueueError::Timeout));
    }

    #[test]
    fn blocking_send_unblocks_on_concurrent_receive() {
        use std::sync::Arc;
        use std::thread;

        let m = Arc::new(Monitor::new(&cfg(1)));
        m.send_nonbl(&Message::new(b"full".to_vec(), 0)).unwrap();

        let m2 = Arc::clone(&m);
        let sender = thread::spawn(move || m2.send_timed(&Message::new(b"second".to_vec(), 0), TIMEOUT_INF));

        // Wait until the sender is observably blocked, then drain.
        while m.waiting_to_send() == 0 {
            thread::yield_now();
        }
        let first = m.recv_nonbl().unwrap();
        assert_eq!(first.payload(), b"full");

        sender.join().unwrap().unwrap();
        let second = m.recv_nonbl().unwrap();
        assert_eq!(second.payload(), b"second");
    }
}
