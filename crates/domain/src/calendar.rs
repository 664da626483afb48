// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar date construction helpers.
//!
//! Every date the service produces is built through [`calendar_date`], which
//! carries out-of-range months and days forward into the following month or
//! year instead of rejecting them. This keeps every produced date valid.

use chrono::{DateTime, Days, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone};

/// Wire format for calendar dates (`YYYY-MM-DD`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Builds a date from a 1-based month and day, carrying any overflow.
///
/// A month past December rolls into the following year, and a day past the
/// end of the month rolls into the following month:
///
/// ```text
/// (2026, 13, 5)  -> 2027-01-05
/// (2026, 4, 31)  -> 2026-05-01
/// (2026, 2, 30)  -> 2026-03-02
/// ```
///
/// Month and day values of zero are treated as one. Results beyond the
/// representable range saturate at [`NaiveDate::MAX`].
#[must_use]
pub fn calendar_date(year: i32, month: u32, day: u32) -> NaiveDate {
    let months_from_january: u32 = month.saturating_sub(1);

    i32::try_from(months_from_january / 12)
        .ok()
        .and_then(|carry| year.checked_add(carry))
        .and_then(|carried_year| {
            NaiveDate::from_ymd_opt(carried_year, months_from_january % 12 + 1, 1)
        })
        .and_then(|first| first.checked_add_days(Days::new(u64::from(day.saturating_sub(1)))))
        .unwrap_or(NaiveDate::MAX)
}

/// Returns the last calendar day of the given month.
#[must_use]
pub fn last_day_of_month(year: i32, month: u32) -> NaiveDate {
    let first_of_next: NaiveDate = calendar_date(year, month.saturating_add(1), 1);
    first_of_next.pred_opt().unwrap_or(first_of_next)
}

/// Returns the instant at the start of `date`.
#[must_use]
pub fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Returns the first instant of `date` in the time zone `tz`.
///
/// Day counts are measured between these instants, so a day that gains or
/// loses an hour to a clock change is counted by its real length. When a
/// clock change skips midnight itself, the day starts at the end of the gap.
#[must_use]
pub fn start_of_day<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> DateTime<Tz> {
    let local: NaiveDateTime = midnight(date);

    tz.from_local_datetime(&local)
        .earliest()
        .or_else(|| {
            // 24 hours past the previous midnight lands on the end of the gap.
            let previous: NaiveDateTime = local.checked_sub_days(Days::new(1))?;
            tz.from_local_datetime(&previous)
                .earliest()?
                .checked_add_signed(TimeDelta::days(1))
        })
        .unwrap_or_else(|| tz.from_utc_datetime(&local))
}
