// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Pay day normalization.
//!
//! Maps a nominal [`PayDay`] onto the concrete date it falls on in a given
//! month.
//!
//! ## Rules
//!
//! - Pay days 1-30 are used as-is. A day the month does not have (29 or 30
//!   in February) carries into the following month.
//! - Pay day 31 in a 31-day month is the 31st.
//! - Pay day 31 in a shorter month becomes the month's last day, unless that
//!   day is a weekend:
//!   - Saturday moves back to Friday
//!   - Sunday moves forward to the 1st of the next month
//!
//! Weekend adjustment applies to pay day 31 only.

use crate::calendar::{calendar_date, last_day_of_month};
use crate::pay_day::PayDay;
use chrono::{Datelike, NaiveDate, Weekday};

/// Returns the date on which `pay_day` falls in the given month.
///
/// # Arguments
///
/// * `pay_day` - The nominal pay day
/// * `month` - The 1-based month
/// * `year` - The calendar year
///
/// # Example
///
/// ```text
/// normalize_pay_date(15, 6, 2026) -> 2026-06-15
/// normalize_pay_date(31, 1, 2026) -> 2026-01-31
/// normalize_pay_date(31, 2, 2026) -> 2026-02-27  (28th is a Saturday)
/// normalize_pay_date(31, 4, 2023) -> 2023-05-01  (30th is a Sunday)
/// ```
#[must_use]
pub fn normalize_pay_date(pay_day: PayDay, month: u32, year: i32) -> NaiveDate {
    if !pay_day.is_end_of_month() {
        return calendar_date(year, month, u32::from(pay_day.value()));
    }

    let last_day: NaiveDate = last_day_of_month(year, month);
    if last_day.day() == u32::from(PayDay::MAX) {
        return last_day;
    }

    match last_day.weekday() {
        Weekday::Sat => last_day.pred_opt().unwrap_or(last_day),
        Weekday::Sun => last_day.succ_opt().unwrap_or(last_day),
        _ => last_day,
    }
}
