//! PRIOQ: binary max-heap on priority.

use crate::message::Message;
use crate::store::Store;

/// Insert at index `fill`, sift up. Caller guarantees `fill < capacity`.
pub(crate) fn insert(store: &mut Store, fill: &mut usize, msg: &Message) {
    let mut i = *fill;
    store.slot_mut(i).fill(msg);
    *fill += 1;

    while i > 0 {
        let parent = (i - 1) / 2;
        if store.slot(parent).prio() >= store.slot(i).prio() {
            break;
        }
        store.swap(i, parent);
        i = parent;
    }
}

/// Remove the root (highest priority), sift down. Caller guarantees
/// `fill > 0`.
pub(crate) fn remove(store: &mut Store, fill: &mut usize) -> Message {
    let out = store.slot(0).to_message();

    *fill -= 1;
    let last = *fill;
    if last > 0 {
        store.swap(0, last);
        let mut i = 0;
        loop {
            let l = 2 * i + 1;
            let r = 2 * i + 2;
            if l >= last {
                break;
            }
            let j = if r < last && store.slot(r).prio() > store.slot(l).prio() {
                r
            } else {
                l
            };
            if store.slot(i).prio() >= store.slot(j).prio() {
                break;
            }
            store.swap(i, j);
            i = j;
        }
    }
    out
}
