// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;

/// A nominal day of the month on which salary is paid.
///
/// The value is always within `1..=31`. It says nothing about whether a
/// given month actually has that day; mapping it onto a real date is the
/// job of [`crate::normalize_pay_date`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PayDay(u8);

impl PayDay {
    /// The smallest accepted pay day.
    pub const MIN: u8 = 1;
    /// The largest accepted pay day.
    pub const MAX: u8 = 31;

    /// Creates a new pay day.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::PayDayOutOfRange`] if `value` is not within `1..=31`.
    pub fn new(value: i64) -> Result<Self, DomainError> {
        u8::try_from(value)
            .ok()
            .filter(|day| (Self::MIN..=Self::MAX).contains(day))
            .map(Self)
            .ok_or(DomainError::PayDayOutOfRange { value })
    }

    /// Returns the day-of-month value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns true if this is the "last day of the month" pay day (31).
    ///
    /// Only this pay day is subject to short-month and weekend adjustment.
    #[must_use]
    pub const fn is_end_of_month(self) -> bool {
        self.0 == Self::MAX
    }
}

impl TryFrom<i64> for PayDay {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl std::fmt::Display for PayDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
