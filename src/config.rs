//! Queue configuration.

use crate::constants::MAX_LIMIT;
use crate::error::{QueueError, Result};

/// Ordering discipline selected at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    /// Priority-first, ties broken by insertion order (FIFO within priority).
    Prifo,
    /// Priority-first, ties broken by heap order (no FIFO guarantee).
    Prioq,
    /// First-in-first-out; priority carried but not consulted.
    Fifo,
    /// Last-in-first-out (stack); priority carried but not consulted.
    Lifo,
}

/// Immutable queue configuration, validated at construction.
#[derive(Debug, Clone, Copy)]
pub struct QueueConfig {
    pub(crate) maxmsg: usize,
    pub(crate) msgsize: usize,
    pub(crate) maxprio: u32,
    pub(crate) order: Order,
}

impl QueueConfig {
    /// Creates a configuration with the given slot count and ordering.
    /// `maxprio` defaults to 0 (only priority 0 accepted); chain
    /// [`QueueConfig::with_maxprio`] to widen it, and
    /// [`QueueConfig::with_msgsize`] to set the per-message payload cap
    /// (default 1).
    pub fn new(maxmsg: usize, order: Order) -> Result<Self> {
        if maxmsg == 0 || maxmsg as u64 > MAX_LIMIT as u64 {
            return Err(QueueError::invalid(format!(
                "maxmsg must be in [1, {MAX_LIMIT}], got {maxmsg}"
            )));
        }
        Ok(Self {
            maxmsg,
            msgsize: 1,
            maxprio: 0,
            order,
        })
    }

    pub fn with_msgsize(mut self, msgsize: usize) -> Result<Self> {
        if msgsize == 0 || msgsize as u64 > MAX_LIMIT as u64 {
            return Err(QueueError::invalid(format!(
                "msgsize must be in [1, {MAX_LIMIT}], got {msgsize}"
            )));
        }
        self.msgsize = msgsize;
        Ok(self)
    }

    pub fn with_maxprio(mut self, maxprio: u32) -> Result<Self> {
        if maxprio > MAX_LIMIT {
            return Err(QueueError::invalid(format!(
                "maxprio must be in [0, {MAX_LIMIT}], got {maxprio}"
            )));
        }
        self.maxprio = maxprio;
        Ok(self)
    }

    pub fn maxmsg(&self) -> usize {
        self.maxmsg
    }

    pub fn msgsize(&self) -> usize {
        self.msgsize
    }

    pub fn maxprio(&self) -> u32 {
        self.maxprio
    }

    pub fn order(&self) -> Order {
        self.order
    }
}
