use chrono::Month;

use crate::datetime::{days_of_month, first_weekday_offset};

pub const COLUMNS: usize = 7;

/// One cell of the Sunday-first month grid. Blanks pad the weekday offset
/// before day 1 and take no input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DaySlot {
    Blank,
    Day(u32),
}

impl DaySlot {
    pub fn day(&self) -> Option<u32> {
        match self {
            DaySlot::Blank => None,
            DaySlot::Day(num) => Some(*num),
        }
    }
}

/// Emits exactly `first_weekday_offset + days_of_month` slots. Trailing
/// padding up to a full week is left to the renderer.
pub fn build_grid(year: i32, month: &Month) -> Vec<DaySlot> {
    let offset = first_weekday_offset(year, month) as usize;

    std::iter::repeat(DaySlot::Blank)
        .take(offset)
        .chain((1..=days_of_month(month, year)).map(DaySlot::Day))
        .collect()
}
