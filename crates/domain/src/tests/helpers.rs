// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::PayDay;
use chrono::{DateTime, NaiveDate, Utc};

pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    ymd(year, month, day)
        .and_hms_opt(hour, minute, 0)
        .unwrap()
        .and_utc()
}

pub fn pay_day(value: i64) -> PayDay {
    PayDay::new(value).unwrap()
}
