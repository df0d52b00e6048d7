//! Wall-clock port.
//!
//! Reports depend on "today" (current year, current month, months since the
//! last deal) and cache entries on their age, so time comes in through a
//! trait that tests can pin.

use chrono::{DateTime, Utc};

pub trait Clock: Send + Sync {
    /// Current instant in UTC.
    fn now(&self) -> DateTime<Utc>;

    /// Seconds since the UNIX epoch.
    fn unix_seconds(&self) -> i64 {
        self.now().timestamp()
    }
}

/// Clock frozen at a fixed instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn fixed_clock_reports_its_instant() {
        let instant = Utc.with_ymd_and_hms(2025, 6, 15, 8, 0, 0).unwrap();
        let clock = FixedClock(instant);
        assert_eq!(clock.now(), instant);
        assert_eq!(clock.unix_seconds(), instant.timestamp());
    }
}
