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
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod handlers;
mod request_response;
mod routes;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_domain_error};
pub use handlers::{encode_response, format_date, how_much, list_pay_day_dates, require_get};
pub use request_response::{
    ApiResponse, HOW_MUCH_MESSAGE, HowMuchRequest, HowMuchResponse, PAY_DAY_DATES_MESSAGE,
    PAY_DAY_PARAM, PayDayDatesResponse,
};
pub use routes::{
    Endpoint, HOW_MUCH_SEGMENT, ListSuffix, PAY_DAY_SEGMENT, ROOT_SEGMENT, match_how_much_path,
    match_pay_day_list_path, parse_pay_day,
};
