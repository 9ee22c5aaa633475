use chrono::Local;

use crate::model::MonthDay;

/// Source of "today" for birthday queries.
pub trait Clock {
    fn today(&self) -> MonthDay;
}

/// The process's local calendar date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> MonthDay {
        Local::now().date_naive().into()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub MonthDay);

impl Clock for FixedClock {
    fn today(&self) -> MonthDay {
        self.0
    }
}
