//! Retention classes
//!
//! A snippet lives for one of three windows: a day, a week or a year. The
//! window is added to the creation time to get the expiry, both in SQL
//! (as an interval parameter) and in process (for the memory store).

use std::fmt;

use chrono::{DateTime, Days, Months, Utc};
use sqlx::postgres::types::PgInterval;

use super::ValidationError;

/// How long a snippet stays visible after creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Retention {
    OneDay,
    SevenDays,
    OneYear,
}

impl Retention {
    /// Map a day count to a retention class the permissive way:
    /// 7 and 1 select their windows, every other value means a year.
    ///
    /// Kept for callers that relied on the fallback. New callers should use
    /// `Retention::try_from`, which rejects unknown values.
    pub fn from_days_lenient(days: i32) -> Self {
        match days {
            7 => Self::SevenDays,
            1 => Self::OneDay,
            _ => Self::OneYear,
        }
    }

    /// Nominal length in days (1, 7 or 365).
    pub fn days(&self) -> i32 {
        match self {
            Self::OneDay => 1,
            Self::SevenDays => 7,
            Self::OneYear => 365,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneDay => "1 day",
            Self::SevenDays => "7 days",
            Self::OneYear => "1 year",
        }
    }

    pub fn all() -> &'static [Self] {
        &[Self::OneDay, Self::SevenDays, Self::OneYear]
    }

    /// Postgres interval equivalent to `as_str()`.
    ///
    /// A year is 12 calendar months, not 365 days, so leap years line up with
    /// `current_timestamp + interval '1 year'`.
    pub fn interval(&self) -> PgInterval {
        match self {
            Self::OneDay => PgInterval {
                months: 0,
                days: 1,
                microseconds: 0,
            },
            Self::SevenDays => PgInterval {
                months: 0,
                days: 7,
                microseconds: 0,
            },
            Self::OneYear => PgInterval {
                months: 12,
                days: 0,
                microseconds: 0,
            },
        }
    }

    /// Expiry for a snippet created at `created`.
    pub fn expires_at(&self, created: DateTime<Utc>) -> Result<DateTime<Utc>, ValidationError> {
        let expires = match self {
            Self::OneDay => created.checked_add_days(Days::new(1)),
            Self::SevenDays => created.checked_add_days(Days::new(7)),
            Self::OneYear => created.checked_add_months(Months::new(12)),
        };
        expires.ok_or(ValidationError::OutOfRange {
            field: "expires",
            reason: "expiry is past the supported timestamp range",
        })
    }
}

impl TryFrom<i32> for Retention {
    type Error = ValidationError;

    /// Strict conversion: only 1, 7 and 365 are accepted.
    fn try_from(days: i32) -> Result<Self, Self::Error> {
        match days {
            1 => Ok(Self::OneDay),
            7 => Ok(Self::SevenDays),
            365 => Ok(Self::OneYear),
            other => Err(ValidationError::InvalidVariant {
                field: "retention",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Retention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
