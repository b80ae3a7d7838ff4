//! Mutable queue state protected by the monitor.

use crate::config::{Order, QueueConfig};
use crate::message::Message;
use crate::store::Store;
use crate::strategy;

pub(crate) struct QueueState {
    store: Store,
    fill: usize,
    head: usize,
    tail: usize,
    order: Order,
    maxmsg: usize,
    /// Threads blocked waiting to send; read/written only while the
    /// monitor mutex is held.
    pub(crate) waiting_to_send: usize,
    /// Threads blocked waiting to receive.
    pub(crate) waiting_to_recv: usize,
}

impl QueueState {
    pub(crate) fn new(config: &QueueConfig) -> Self {
        Self {
            store: Store::new(config.maxmsg(), config.msgsize()),
            fill: 0,
            head: 0,
            tail: 0,
            order: config.order(),
            maxmsg: config.maxmsg(),
            waiting_to_send: 0,
            waiting_to_recv: 0,
        }
    }

    pub(crate) fn fill(&self) -> usize {
        self.fill
    }

    pub(crate) fn is_full(&self) -> bool {
        self.fill == self.maxmsg
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.fill == 0
    }

    /// Precondition: `!self.is_full()`.
    pub(crate) fn insert(&mut self, msg: &Message) {
        debug_assert!(!self.is_full());
        strategy::insert(self.order, &mut self.store, &mut self.fill, &mut self.tail, msg);
        debug_assert!(self.fill <= self.maxmsg);
    }

    /// Precondition: `!self.is_empty()`.
    pub(crate) fn remove(&mut self) -> Message {
        debug_assert!(!self.is_empty());
        let msg = strategy::remove(self.order, &mut self.store, &mut self.fill, &mut self.head);
        debug_assert!(self.fill <= self.maxmsg);
        msg
    }

    /// Writes a human-readable dump of configuration and occupied slots,
    /// in slot-index order.
    pub(crate) fn dump(&self, maxprio: u32, msgsize: usize, w: &mut dyn std::io::Write) -> std::io::Result<()> {
        writeln!(
            w,
            "queue: maxmsg={} msgsize={} maxprio={} order={:?}",
            self.maxmsg, msgsize, maxprio, self.order
        )?;
        writeln!(w, "fill={}", self.fill)?;
        if self.fill == 0 {
            return writeln!(w, "(empty)");
        }
        for i in 0..self.fill {
            let slot = self.store.slot(i);
            write!(w, "{i:3}: prio={} size={} {{", slot.prio(), slot.size())?;
            for byte in slot.bytes() {
                write!(w, " {byte:02x}")?;
            }
            writeln!(w, " }}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> QueueConfig {
        QueueConfig::new(4, Order::Fifo).unwrap().with_msgsize(4).unwrap()
    }

    #[test]
    fn round_trips_a_single_message() {
        let mut state = QueueState::new(&cfg());
        assert!(state.is_empty());
        state.insert(&Message::new(b"hi".to_vec(), 0));
        assert_eq!(state.fill(), 1);
        let out = state.remove();
        assert_eq!(out.payload(), b"hi");
        assert!(state.is_empty());
    }

    #[test]
    fn tracks_full_and_empty() {
        let mut state = QueueState::new(&cfg());
        for _ in 0..4 {
            state.insert(&Message::new(b"x".to_vec(), 0));
        }
        assert!(state.is_full());
        state.remove();
        assert!(!state.is_full());
    }

    #[test]
    fn dump_lists_occupied_slots() {
        let mut state = QueueState::new(&cfg());
        state.insert(&Message::new(b"ab".to_vec(), 1));
        let mut buf = Vec::new();
        state.dump(9, 4, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("fill=1"));
        assert!(text.contains("prio=1"));
    }
}
