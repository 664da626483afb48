// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use chrono::{NaiveDate, NaiveDateTime};
use till_salary_domain::FixedClock;

use crate::HowMuchRequest;

/// 2026-10-17 10:00 local time, a Saturday morning.
pub fn create_test_clock() -> FixedClock {
    create_clock_at(2026, 10, 17, 10)
}

pub fn create_clock_at(year: i32, month: u32, day: u32, hour: u32) -> FixedClock {
    let instant: NaiveDateTime = NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap();
    FixedClock::from_local(instant).unwrap()
}

pub fn create_how_much_request(pay_day: &str) -> HowMuchRequest {
    HowMuchRequest {
        pay_day: Some(pay_day.to_string()),
    }
}
