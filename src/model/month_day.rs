use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DirectoryError;
use crate::validation;

/// A calendar date without a year, as used for birthdays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "MonthDayParts", into = "MonthDayParts")]
pub struct MonthDay {
    month: u32,
    day: u32,
}

impl MonthDay {
    /// Builds a validated month/day. Feb 29 is not a valid birthday.
    pub fn new(month: u32, day: u32) -> Result<Self, DirectoryError> {
        let (month, day) = validation::valid_month_day(month, day)?;
        Ok(Self { month, day })
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }
}

/// Drops the year. Not validated: a leap-year Feb 29 is kept as is, since
/// the result is only ever compared against.
impl From<NaiveDate> for MonthDay {
    fn from(date: NaiveDate) -> Self {
        Self {
            month: date.month(),
            day: date.day(),
        }
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.month, self.day)
    }
}

#[derive(Serialize, Deserialize)]
struct MonthDayParts {
    month: u32,
    day: u32,
}

impl TryFrom<MonthDayParts> for MonthDay {
    type Error = DirectoryError;

    fn try_from(parts: MonthDayParts) -> Result<Self, Self::Error> {
        MonthDay::new(parts.month, parts.day)
    }
}

impl From<MonthDay> for MonthDayParts {
    fn from(md: MonthDay) -> Self {
        Self {
            month: md.month,
            day: md.day,
        }
    }
}
