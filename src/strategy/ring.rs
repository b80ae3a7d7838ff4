//! FIFO: ring buffer, priority carried but not consulted.

use crate::message::Message;
use crate::store::Store;

/// Insert at `tail`, advance `tail` modulo capacity. Caller guarantees
/// `fill < capacity`.
pub(crate) fn insert(store: &mut Store, fill: &mut usize, tail: &mut usize, msg: &Message) {
    let capacity = store.capacity();
    store.slot_mut(*tail).fill(msg);
    *tail = (*tail + 1) % capacity;
    *fill += 1;
}

/// Remove at `head`, advance `head` modulo capacity. Caller guarantees
/// `fill > 0`.
pub(crate) fn remove(store: &mut Store, fill: &mut usize, head: &mut usize) -> Message {
    let capacity = store.capacity();
    let out = store.slot(*head).to_message();
    *head = (*head + 1) % capacity;
    *fill -= 1;
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_send_order_across_wraparound() {
        let mut store = Store::new(4, 1);
        let mut fill = 0usize;
        let mut head = 0usize;
        let mut tail = 0usize;

        for tag in 0u8..4 {
            insert(&mut store, &mut fill, &mut tail, &Message::new(vec![tag], 0));
        }
        // Pop two, then push two more so tail wraps around.
        assert_eq!(remove(&mut store, &mut fill, &mut head).payload()[0], 0);
        assert_eq!(remove(&mut store, &mut fill, &mut head).payload()[0], 1);
        insert(&mut store, &mut fill, &mut tail, &Message::new(vec![4], 0));
        insert(&mut store, &mut fill, &mut tail, &Message::new(vec![5], 0));

        let mut out = Vec::new();
        while fill > 0 {
            out.push(remove(&mut store, &mut fill, &mut head).payload()[0]);
        }
        assert_eq!(out, vec![2, 3, 4, 5]);
    }
}
