// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use serde::{Deserialize, Serialize};

/// Message sent with a successful next pay date response.
pub const HOW_MUCH_MESSAGE: &str = "Days until pay day";
/// Message sent with a successful pay date list response.
pub const PAY_DAY_DATES_MESSAGE: &str = "Pay day dates";

/// Name of the query parameter carrying the pay day.
pub const PAY_DAY_PARAM: &str = "pay_day";

/// Query parameters for the next pay date endpoint.
///
/// The pay day is kept as raw text so that a malformed value is reported
/// as an invalid parameter rather than a generic query failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HowMuchRequest {
    /// The raw `pay_day` query value.
    pub pay_day: Option<String>,
}

impl HowMuchRequest {
    /// Builds the request from decoded query pairs.
    ///
    /// When `pay_day` is repeated the first value is used and the rest are
    /// ignored, as are unknown keys.
    #[must_use]
    pub fn from_query_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self {
            pay_day: pairs
                .into_iter()
                .find(|(key, _)| key == PAY_DAY_PARAM)
                .map(|(_, value)| value),
        }
    }
}

/// The JSON envelope shared by every response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// A human-readable message.
    pub message: String,
    /// The response payload, omitted for errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Creates a response carrying a payload.
    #[must_use]
    pub fn with_data(message: &str, data: T) -> Self {
        Self {
            message: message.to_string(),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// Creates a response with only a message.
    #[must_use]
    pub fn message_only(message: &str) -> Self {
        Self {
            message: message.to_string(),
            data: None,
        }
    }
}

/// Payload for the next pay date endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HowMuchResponse {
    /// The next pay date (`YYYY-MM-DD`).
    pub next_pay_day: String,
    /// Days remaining until the next pay date.
    pub days_until_pay_day: i64,
}

/// Payload for the pay date list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayDayDatesResponse {
    /// The remaining pay dates of the year (`YYYY-MM-DD`), ascending.
    pub pay_day_dates: Vec<String>,
}
