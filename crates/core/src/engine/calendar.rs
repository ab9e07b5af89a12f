use chrono::{Days, Local, NaiveDate};

use crate::errors::InvalidInputError;

/// Source of "today" for calculators whose output depends on the date.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

pub fn add_weeks(
    start: NaiveDate,
    weeks: u32,
    field: &'static str,
) -> Result<NaiveDate, InvalidInputError> {
    start
        .checked_add_days(Days::new(u64::from(weeks) * 7))
        .ok_or(InvalidInputError::OutOfRange { field })
}
