// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod calculator;
mod calendar;
mod clock;
mod error;
mod normalize;
mod pay_day;

#[cfg(test)]
mod tests;

pub use calculator::{PayDayResult, compute_next, compute_remaining};
pub use calendar::{DATE_FORMAT, calendar_date, last_day_of_month, midnight, start_of_day};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::DomainError;
pub use normalize::normalize_pay_date;
pub use pay_day::PayDay;
