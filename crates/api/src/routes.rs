// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Path matching for the till-salary endpoints.
//!
//! Paths are split on `/` and compared segment by segment. Accepted shapes:
//!
//! ```text
//! /till-salary/how-much
//! /till-salary/pay-day/{n}/{suffix}
//! ```
//!
//! `{n}` is a single digit `1`-`9`, or two digits where the first is `1`-`3`.
//! Anything else (`0`, `05`, `40`, letters, three digits) is a malformed
//! path rather than an invalid pay day. Two-digit values `32`-`39` match the
//! shape and are rejected later as out of range.

use crate::error::ApiError;
use std::str::FromStr;
use till_salary_domain::PayDay;

/// Root segment shared by every endpoint.
pub const ROOT_SEGMENT: &str = "till-salary";
/// Segment for the next pay date endpoint.
pub const HOW_MUCH_SEGMENT: &str = "how-much";
/// Segment for the pay date list endpoint.
pub const PAY_DAY_SEGMENT: &str = "pay-day";

/// The endpoint a request was routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// `/till-salary/how-much`
    HowMuch,
    /// `/till-salary/pay-day/{n}/{suffix}`
    PayDayList,
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HowMuch => write!(f, "how-much"),
            Self::PayDayList => write!(f, "pay-day"),
        }
    }
}

/// The trailing segment accepted by the pay date list endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListSuffix {
    /// `list-dates`
    #[default]
    ListDates,
    /// `list-distinct`
    ListDistinct,
}

impl ListSuffix {
    /// Returns the path segment for this suffix.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ListDates => "list-dates",
            Self::ListDistinct => "list-distinct",
        }
    }
}

impl std::fmt::Display for ListSuffix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListSuffix {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "list-dates" => Ok(Self::ListDates),
            "list-distinct" => Ok(Self::ListDistinct),
            other => Err(format!(
                "unknown list suffix '{other}', expected 'list-dates' or 'list-distinct'"
            )),
        }
    }
}

/// Splits an absolute path into its segments.
///
/// Returns `None` for paths that do not start with `/`.
fn segments(path: &str) -> Option<Vec<&str>> {
    path.strip_prefix('/').map(|rest| rest.split('/').collect())
}

/// Returns true if `segment` has the shape of a pay day.
fn is_pay_day_segment(segment: &str) -> bool {
    match segment.as_bytes() {
        [single] => (b'1'..=b'9').contains(single),
        [tens, ones] => (b'1'..=b'3').contains(tens) && ones.is_ascii_digit(),
        _ => false,
    }
}

/// Checks that `path` is the next pay date endpoint.
///
/// # Errors
///
/// Returns [`ApiError::InvalidRoute`] if the path has any other shape.
pub fn match_how_much_path(path: &str) -> Result<(), ApiError> {
    match segments(path).as_deref() {
        Some([ROOT_SEGMENT, HOW_MUCH_SEGMENT]) => Ok(()),
        _ => Err(ApiError::InvalidRoute {
            endpoint: Endpoint::HowMuch,
            path: path.to_string(),
        }),
    }
}

/// Matches a pay date list path and extracts its pay day.
///
/// # Errors
///
/// Returns [`ApiError::InvalidRoute`] if the path does not have the
/// list shape with the configured `suffix`, or [`ApiError::InvalidPayDay`]
/// if the embedded pay day is out of range.
pub fn match_pay_day_list_path(path: &str, suffix: ListSuffix) -> Result<PayDay, ApiError> {
    let invalid_route = || ApiError::InvalidRoute {
        endpoint: Endpoint::PayDayList,
        path: path.to_string(),
    };

    let parts: Option<Vec<&str>> = segments(path);
    let Some([ROOT_SEGMENT, PAY_DAY_SEGMENT, pay_day, tail]) = parts.as_deref() else {
        return Err(invalid_route());
    };

    if !is_pay_day_segment(pay_day) || *tail != suffix.as_str() {
        return Err(invalid_route());
    }

    parse_pay_day(Some(*pay_day))
}

/// Parses a raw pay day value.
///
/// Accepts an optional sign and leading zeros, like a plain decimal integer.
///
/// # Errors
///
/// Returns [`ApiError::InvalidPayDay`] if the value is missing, not an
/// integer, or outside `1..=31`.
pub fn parse_pay_day(raw: Option<&str>) -> Result<PayDay, ApiError> {
    let raw: &str = raw.unwrap_or_default();
    let value: i64 = raw.parse().map_err(|_| ApiError::InvalidPayDay {
        value: raw.to_string(),
    })?;

    Ok(PayDay::new(value)?)
}
