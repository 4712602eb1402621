//! Live adapter for the `Clock` port.

use chrono::{DateTime, Utc};

use crate::ports::Clock;

/// System clock; task creation timestamps come from here in production.
pub struct LiveClock;

impl Clock for LiveClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn now_is_monotonic_enough_for_timestamps() {
        let clock = LiveClock;
        let first = clock.now();
        let second = clock.now();
        assert!(second >= first);
    }
}
