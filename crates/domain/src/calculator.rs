// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Pay date calculation relative to the current instant.
//!
//! ## Invariants
//!
//! - `compute_next` always yields a date at or after `now`, so
//!   `days_until` is at least 1
//! - `compute_remaining` yields at most one date per month, in ascending
//!   order, every one of them strictly after `now`

use crate::calendar::{calendar_date, start_of_day};
use crate::normalize::normalize_pay_date;
use crate::pay_day::PayDay;
use chrono::{DateTime, Datelike, NaiveDate, TimeZone};

/// The next pay date and how many days remain until it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayDayResult {
    /// The next pay date.
    pub next_pay_day: NaiveDate,
    /// Whole days from `now` until the next pay date, counting the pay date itself.
    pub days_until: i64,
}

/// Computes the next pay date on or after `now`.
///
/// The pay day is first normalized against the current month. If that date
/// has already passed, the raw pay day is applied to the following month
/// without weekend adjustment.
///
/// `days_until` is the number of whole elapsed days between `now` and the
/// start of the pay date in `now`'s time zone, plus one.
#[must_use]
pub fn compute_next<Tz: TimeZone>(pay_day: PayDay, now: &DateTime<Tz>) -> PayDayResult {
    let tz: Tz = now.timezone();
    let mut next_pay_day: NaiveDate = normalize_pay_date(pay_day, now.month(), now.year());

    if start_of_day(next_pay_day, &tz) < *now {
        // Rollover reapplies the raw pay day; only overflow carrying applies here.
        next_pay_day = calendar_date(now.year(), now.month() + 1, u32::from(pay_day.value()));
    }

    let days_until: i64 = (start_of_day(next_pay_day, &tz) - now.clone()).num_days() + 1;

    PayDayResult {
        next_pay_day,
        days_until,
    }
}

/// Computes every pay date left in the current year after `now`.
///
/// Months are visited from the current one through December; a normalized
/// date is kept only if it falls strictly after `now`.
#[must_use]
pub fn compute_remaining<Tz: TimeZone>(pay_day: PayDay, now: &DateTime<Tz>) -> Vec<NaiveDate> {
    let tz: Tz = now.timezone();

    (now.month()..=12)
        .map(|month| normalize_pay_date(pay_day, month, now.year()))
        .filter(|date| start_of_day(*date, &tz) > *now)
        .collect()
}
