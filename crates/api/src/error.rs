// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use crate::routes::Endpoint;
use till_salary_domain::DomainError;

/// API-level errors.
///
/// These are distinct from domain errors and represent the API contract.
/// Every variant carries a fixed client-facing message (see
/// [`ApiError::client_message`]); the `Display` output is for logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request path does not have the shape the endpoint expects.
    InvalidRoute {
        /// The endpoint the path was routed to.
        endpoint: Endpoint,
        /// The offending path.
        path: String,
    },
    /// The request used a method other than GET.
    MethodNotAllowed {
        /// The method that was used.
        method: String,
    },
    /// The pay day is missing, not an integer, or out of range.
    InvalidPayDay {
        /// The raw value, empty if it was missing.
        value: String,
    },
    /// The response body could not be encoded.
    Serialization {
        /// A description of the encoding failure.
        message: String,
    },
}

impl ApiError {
    /// Returns the message sent to the client for this error.
    #[must_use]
    pub const fn client_message(&self) -> &'static str {
        match self {
            Self::InvalidRoute {
                endpoint: Endpoint::HowMuch,
                ..
            } => "Invalid how-much url",
            Self::InvalidRoute {
                endpoint: Endpoint::PayDayList,
                ..
            } => "Invalid pay-day url",
            Self::MethodNotAllowed { .. } => "Method not allowed",
            Self::InvalidPayDay { .. } => "Invalid pay_day parameter",
            Self::Serialization { .. } => "Error while writing data",
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRoute { endpoint, path } => {
                write!(f, "Invalid {endpoint} path: '{path}'")
            }
            Self::MethodNotAllowed { method } => {
                write!(f, "Method not allowed: {method}")
            }
            Self::InvalidPayDay { value } => {
                write!(f, "Invalid input for field 'pay_day': '{value}'")
            }
            Self::Serialization { message } => {
                write!(f, "Failed to encode response: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::PayDayOutOfRange { value } => ApiError::InvalidPayDay {
            value: value.to_string(),
        },
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        translate_domain_error(err)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            message: err.to_string(),
        }
    }
}
