//! Deadline arithmetic: converts a unit-relative timeout scalar into an
//! absolute deadline against the realtime wall clock.

use std::time::{Duration, SystemTime};

use crate::constants::TIMEOUT_RESOLUTION;

const NANOS_PER_SEC: u64 = 1_000_000_000;

/// Absolute point in time, seconds plus nanoseconds since the Unix
/// epoch (a `timespec` analogue), kept distinct from
/// `std::time::Instant` so the nanosecond-carry arithmetic is exercised
/// directly and deterministically in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Deadline {
    sec: u64,
    nsec: u32,
}

impl Deadline {
    /// Computes the absolute deadline for a timeout scalar `t`, in units
    /// of `1 / TIMEOUT_RESOLUTION` seconds, added to `base`.
    pub(crate) fn add(base: (u64, u32), t: u64) -> Self {
        let whole = t / TIMEOUT_RESOLUTION;
        let frac = t % TIMEOUT_RESOLUTION;
        let add_nsec = frac * (NANOS_PER_SEC / TIMEOUT_RESOLUTION);

        let mut sec = base.0 + whole;
        let mut nsec = base.1 as u64 + add_nsec;
        if nsec >= NANOS_PER_SEC {
            nsec -= NANOS_PER_SEC;
            sec += 1;
        }
        Self { sec, nsec: nsec as u32 }
    }

    /// Computes the absolute deadline `t` time-units from now.
    pub(crate) fn from_now(t: u64) -> Self {
        let now = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .unwrap_or_default();
        Self::add((now.as_secs(), now.subsec_nanos()), t)
    }

    /// Remaining time until this deadline, or `None` if it has passed.
    pub(crate) fn remaining(&self) -> Option<Duration> {
        let now = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .unwrap_or_default();
        let target = Duration::new(self.sec, self.nsec);
        target.checked_sub(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carries_nanoseconds_into_seconds_exactly_once() {
        // 999_999_999ns + 1ms (1 resolution unit) = 1_000_999_999ns -> carry once.
        let d = Deadline::add((10, 999_999_999), 1);
        assert_eq!(d.sec, 11);
        assert_eq!(d.nsec, 999_999);
    }

    #[test]
    fn whole_and_fractional_split() {
        // resolution = 1000 (ms); 2500 units = 2s + 500ms.
        let d = Deadline::add((0, 0), 2500);
        assert_eq!(d.sec, 2);
        assert_eq!(d.nsec, 500_000_000);
    }

    #[test]
    fn zero_timeout_is_identity() {
        let d = Deadline::add((5, 123), 0);
        assert_eq!(d, Deadline { sec: 5, nsec: 123 });
    }

    #[test]
    fn remaining_is_none_once_passed() {
        let d = Deadline::add((0, 0), 0);
        assert!(d.remaining().is_none());
    }
}
