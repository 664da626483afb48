// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request handlers for the till-salary endpoints.
//!
//! Handlers are framework-agnostic: they take the raw request parts the
//! HTTP layer extracted (method, path and query), validate them, run the
//! pay date calculation and return the response envelope. Validation runs
//! in a fixed order:
//!
//! 1. Method (only GET is accepted)
//! 2. Path shape
//! 3. Pay day value

use crate::error::ApiError;
use crate::request_response::{
    ApiResponse, HOW_MUCH_MESSAGE, HowMuchRequest, HowMuchResponse, PAY_DAY_DATES_MESSAGE,
    PayDayDatesResponse,
};
use crate::routes::{ListSuffix, match_how_much_path, match_pay_day_list_path, parse_pay_day};
use chrono::{DateTime, Local, NaiveDate};
use serde::Serialize;
use till_salary_domain::{
    Clock, DATE_FORMAT, PayDay, PayDayResult, compute_next, compute_remaining,
};
use tracing::{debug, info};

/// Ensures the request method is GET.
///
/// # Errors
///
/// Returns [`ApiError::MethodNotAllowed`] for any other method.
pub fn require_get(method: &str) -> Result<(), ApiError> {
    if method == "GET" {
        Ok(())
    } else {
        Err(ApiError::MethodNotAllowed {
            method: method.to_string(),
        })
    }
}

/// Formats a date for the wire (`YYYY-MM-DD`).
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Computes the next pay date and the days remaining until it.
///
/// # Arguments
///
/// * `method` - The request method
/// * `path` - The request path
/// * `request` - The query parameters
/// * `clock` - The source of the current instant
///
/// # Errors
///
/// Returns an error if:
/// - The method is not GET
/// - The path is not `/till-salary/how-much`
/// - The pay day is missing, not an integer, or out of range
pub fn how_much(
    method: &str,
    path: &str,
    request: &HowMuchRequest,
    clock: &dyn Clock,
) -> Result<ApiResponse<HowMuchResponse>, ApiError> {
    require_get(method)?;
    match_how_much_path(path)?;
    let pay_day: PayDay = parse_pay_day(request.pay_day.as_deref())?;

    let now: DateTime<Local> = clock.now();
    let result: PayDayResult = compute_next(pay_day, &now);

    info!(
        pay_day = pay_day.value(),
        %now,
        next_pay_day = %result.next_pay_day,
        days_until = result.days_until,
        "Computed next pay day"
    );

    Ok(ApiResponse::with_data(
        HOW_MUCH_MESSAGE,
        HowMuchResponse {
            next_pay_day: format_date(result.next_pay_day),
            days_until_pay_day: result.days_until,
        },
    ))
}

/// Lists the pay dates remaining in the current year.
///
/// # Arguments
///
/// * `method` - The request method
/// * `path` - The request path, which embeds the pay day
/// * `suffix` - The trailing segment this deployment accepts
/// * `clock` - The source of the current instant
///
/// # Errors
///
/// Returns an error if:
/// - The method is not GET
/// - The path does not match `/till-salary/pay-day/{n}/{suffix}`
/// - The embedded pay day is out of range
pub fn list_pay_day_dates(
    method: &str,
    path: &str,
    suffix: ListSuffix,
    clock: &dyn Clock,
) -> Result<ApiResponse<PayDayDatesResponse>, ApiError> {
    require_get(method)?;
    let pay_day: PayDay = match_pay_day_list_path(path, suffix)?;

    let now: DateTime<Local> = clock.now();
    let dates: Vec<NaiveDate> = compute_remaining(pay_day, &now);

    info!(
        pay_day = pay_day.value(),
        %now,
        count = dates.len(),
        "Computed remaining pay days"
    );

    Ok(ApiResponse::with_data(
        PAY_DAY_DATES_MESSAGE,
        PayDayDatesResponse {
            pay_day_dates: dates.into_iter().map(format_date).collect(),
        },
    ))
}

/// Encodes a response envelope as JSON.
///
/// # Errors
///
/// Returns [`ApiError::Serialization`] if encoding fails.
pub fn encode_response<T: Serialize>(response: &ApiResponse<T>) -> Result<Vec<u8>, ApiError> {
    let body: Vec<u8> = serde_json::to_vec(response)?;
    debug!(bytes = body.len(), "Encoded response");
    Ok(body)
}
