//! LIFO: stack, priority carried but not consulted.

use crate::message::Message;
use crate::store::Store;

/// Push at `fill`. Caller guarantees `fill < capacity`.
pub(crate) fn insert(store: &mut Store, fill: &mut usize, msg: &Message) {
    store.slot_mut(*fill).fill(msg);
    *fill += 1;
}

/// Pop the top (`fill - 1`). Caller guarantees `fill > 0`.
pub(crate) fn remove(store: &mut Store, fill: &mut usize) -> Message {
    *fill -= 1;
    store.slot(*fill).to_message()
}
