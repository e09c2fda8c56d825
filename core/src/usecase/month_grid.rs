use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::model::intensity::{IntensityTier, TierPolicy};
use crate::model::record_set::RecordSet;
use crate::model::workout::WorkoutRecord;
use crate::time::{days_in_month, shift_month};

const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

/// The month currently on screen.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarMonth {
    pub year: i32,
    pub month: u32,
}

impl CalendarMonth {
    pub fn new(year: i32, month: u32) -> Self {
        let (year, month) = shift_month(year, 1, month as i32 - 1);
        Self { year, month }
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month())
    }

    pub fn navigate(self, delta: i32) -> Self {
        let (year, month) = shift_month(self.year, self.month, delta);
        Self { year, month }
    }

    pub fn days(&self) -> u32 {
        days_in_month(self.year, self.month)
    }

    pub fn date(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }

    /// Empty cells before day 1 in a Monday-first week.
    pub fn leading_blanks(&self) -> u32 {
        self.date(1)
            .map(|d| d.weekday().num_days_from_monday())
            .unwrap_or(0)
    }

    pub fn title(&self) -> String {
        let normal = Self::new(self.year, self.month);
        let name = MONTH_NAMES
            .get(normal.month.saturating_sub(1) as usize)
            .copied()
            .unwrap_or("?");
        format!("{} {}", name, normal.year)
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CalendarCell {
    pub day: u32,
    pub date: String,
    pub record: Option<WorkoutRecord>,
    pub is_today: bool,
    pub tier: IntensityTier,
}

pub fn is_today(day: u32, year: i32, month: u32, today: NaiveDate) -> bool {
    today.day() == day && today.month() == month && today.year() == year
}

/// One cell per civil day of the month, each annotated with its record and
/// intensity tier.
pub fn build_month(
    year: i32,
    month: u32,
    records: &RecordSet,
    today: NaiveDate,
    policy: TierPolicy,
) -> Vec<CalendarCell> {
    let displayed = CalendarMonth::new(year, month);
    let by_date = records.by_date();

    (1..=displayed.days())
        .filter_map(|day| {
            let date = displayed.date(day)?;
            let record = by_date.get(&date).map(|r| (*r).clone());
            Some(CalendarCell {
                day,
                date: date.format("%Y-%m-%d").to_string(),
                tier: policy.classify(record.as_ref()),
                record,
                is_today: is_today(day, displayed.year, displayed.month, today),
            })
        })
        .collect()
}
