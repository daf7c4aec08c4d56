use chrono::{Datelike, Local, Month, NaiveDate};
use derive_more::Display;
use num_traits::FromPrimitive;
use std::fmt;

/// Canonical identifier of a single calendar day. Equal days always compare
/// equal and display as `YYYY-MM-DD`; ordering is chronological.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[display(fmt = "{:04}-{:02}-{:02}", year, month, day)]
pub struct DateKey {
    year: i32,
    month: u32,
    day: u32,
}

impl DateKey {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        DateKey { year, month, day }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn in_month(&self, year: i32, month: u32) -> bool {
        self.year == year && self.month == month
    }
}

impl<T: Datelike> From<T> for DateKey {
    fn from(date: T) -> Self {
        DateKey::new(date.year(), date.month(), date.day())
    }
}

pub fn days_of_month(month: &Month, year: i32) -> u32 {
    if month.number_from_month() == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month.number_from_month() + 1, 1)
    }
    .expect("first of month is a valid date")
    .signed_duration_since(
        NaiveDate::from_ymd_opt(year, month.number_from_month(), 1)
            .expect("first of month is a valid date"),
    )
    .num_days() as u32
}

/// Weekday of the first of the month as days from Sunday (0=Sun..6=Sat).
pub fn first_weekday_offset(year: i32, month: &Month) -> u32 {
    NaiveDate::from_ymd_opt(year, month.number_from_month(), 1)
        .expect("first of month is a valid date")
        .weekday()
        .num_days_from_sunday()
}

/// The (month, year) pair currently on display. Only month navigation moves
/// it; day selection stays within its bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonthCursor {
    month: Month,
    year: i32,
}

impl MonthCursor {
    pub fn new(month: Month, year: i32) -> Self {
        MonthCursor { month, year }
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn number(&self) -> u32 {
        self.month.number_from_month()
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn days(&self) -> u32 {
        days_of_month(&self.month, self.year)
    }

    pub fn succ(&self) -> Self {
        let next = self.month.succ();

        MonthCursor {
            month: next,
            year: if next.number_from_month() == 1 {
                self.year + 1
            } else {
                self.year
            },
        }
    }

    pub fn pred(&self) -> Self {
        let prev = self.month.pred();

        MonthCursor {
            month: prev,
            year: if prev.number_from_month() == 12 {
                self.year - 1
            } else {
                self.year
            },
        }
    }

    pub fn key_for(&self, day: u32) -> DateKey {
        DateKey::new(self.year, self.number(), day)
    }

    pub fn contains(&self, key: &DateKey) -> bool {
        key.in_month(self.year, self.number())
    }
}

impl fmt::Display for MonthCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month.name(), self.year)
    }
}

impl Default for MonthCursor {
    fn default() -> Self {
        MonthCursor {
            month: Month::from_u32(Local::now().month()).unwrap_or(Month::January),
            year: Local::now().year(),
        }
    }
}

impl<T: Datelike> From<T> for MonthCursor {
    fn from(date: T) -> Self {
        MonthCursor::new(
            Month::from_u32(date.month()).unwrap_or(Month::January),
            date.year(),
        )
    }
}
