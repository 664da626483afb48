// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

/// A source of the current instant in the host's local time zone.
pub trait Clock: Send + Sync + std::fmt::Debug {
    /// Returns the current instant, carrying the local offset in force.
    fn now(&self) -> DateTime<Local>;
}

/// Reads the host clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    instant: DateTime<Local>,
}

impl FixedClock {
    /// Creates a clock pinned to `instant`.
    #[must_use]
    pub const fn new(instant: DateTime<Local>) -> Self {
        Self { instant }
    }

    /// Creates a clock pinned to a local wall-clock time.
    ///
    /// Returns `None` if the wall time is skipped by a clock change. An
    /// ambiguous wall time resolves to its earlier instant.
    #[must_use]
    pub fn from_local(wall_time: NaiveDateTime) -> Option<Self> {
        Local
            .from_local_datetime(&wall_time)
            .earliest()
            .map(Self::new)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.instant
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_fixed_clock_keeps_local_wall_time() {
        let wall_time: NaiveDateTime = NaiveDate::from_ymd_opt(2026, 10, 17)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        let clock: FixedClock = FixedClock::from_local(wall_time).unwrap();
        assert_eq!(clock.now().naive_local(), wall_time);
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn test_system_clock_reads_host_time() {
        let before: DateTime<Local> = Local::now();
        let now: DateTime<Local> = SystemClock.now();
        let after: DateTime<Local> = Local::now();
        assert!(before <= now && now <= after);
    }
}
