//! Ordering strategies: four insert/remove pairs operating on the
//! message store. Dispatch is a tagged `match` on [`Order`], chosen once
//! at queue creation rather than a `dyn Trait`, since the ordering is
//! fixed per queue and static dispatch is both simpler and cheaper.

mod heap;
mod ring;
mod sorted;
mod stack;

use crate::config::Order;
use crate::message::Message;
use crate::store::Store;

/// Insert `msg` per `order`. Caller holds the monitor and guarantees
/// `fill < capacity`. Only FIFO reads/writes `tail`.
pub(crate) fn insert(
    order: Order,
    store: &mut Store,
    fill: &mut usize,
    tail: &mut usize,
    msg: &Message,
) {
    match order {
        Order::Prioq => heap::insert(store, fill, msg),
        Order::Prifo => sorted::insert(store, fill, msg),
        Order::Fifo => ring::insert(store, fill, tail, msg),
        Order::Lifo => stack::insert(store, fill, msg),
    }
}

/// Remove the next message per `order`. Caller holds the monitor and
/// guarantees `fill > 0`. Only FIFO reads/writes `head`.
pub(crate) fn remove(
    order: Order,
    store: &mut Store,
    fill: &mut usize,
    head: &mut usize,
) -> Message {
    match order {
        Order::Prioq => heap::remove(store, fill),
        Order::Prifo => sorted::remove(store, fill),
        Order::Fifo => ring::remove(store, fill, head),
        Order::Lifo => stack::remove(store, fill),
    }
}
