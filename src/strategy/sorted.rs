//! PRIFO: sorted array, ascending by priority, FIFO within a priority
//! band. Storage is ascending by priority; `remove` takes the tail
//! (highest priority), so equal-priority messages come back in the
//! order they were sent.

use crate::message::Message;
use crate::store::Store;

/// Insert at the first position whose stored priority is `>=` the new
/// one, rotating the tail up by one slot record. Caller guarantees
/// `fill < capacity`.
pub(crate) fn insert(store: &mut Store, fill: &mut usize, msg: &Message) {
    let mut insert_pos = *fill;
    for i in 0..*fill {
        if store.slot(i).prio() >= msg.prio() {
            insert_pos = i;
            break;
        }
    }

    if insert_pos < *fill {
        // `*fill` is itself a valid, unused slot index (capacity > fill).
        store.rotate_right_one(insert_pos, *fill);
    }
    store.slot_mut(insert_pos).fill(msg);
    *fill += 1;
}

/// Remove the tail (highest priority). Caller guarantees `fill > 0`.
pub(crate) fn remove(store: &mut Store, fill: &mut usize) -> Message {
    *fill -= 1;
    store.slot(*fill).to_message()
}
