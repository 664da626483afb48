// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The pay day is outside the nominal day-of-month range.
    PayDayOutOfRange {
        /// The rejected value.
        value: i64,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PayDayOutOfRange { value } => {
                write!(f, "Invalid pay day: {value}. Must be between 1 and 31")
            }
        }
    }
}

impl std::error::Error for DomainError {}
