use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::model::record_set::RecordSet;
use crate::model::workout::Exercise;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct MonthSummary {
    pub year: i32,
    pub month: u32,
    pub active_days: usize,
    pub totals: HashMap<Exercise, u64>,
    pub total: u64,
    pub best_day: Option<(NaiveDate, u64)>,
}

impl MonthSummary {
    pub fn new(year: i32, month: u32) -> Self {
        Self {
            year,
            month,
            active_days: 0,
            totals: Exercise::ALL.iter().map(|e| (*e, 0)).collect(),
            total: 0,
            best_day: None,
        }
    }

    /// Days count as active when anything was logged on them.
    pub fn from_records(year: i32, month: u32, records: &RecordSet) -> Self {
        let mut summary = Self::new(year, month);
        for record in records
            .iter()
            .filter(|r| r.date.year() == year && r.date.month() == month)
        {
            let day_total = record.total();
            if day_total == 0 {
                continue;
            }
            summary.active_days += 1;
            summary.total += day_total;
            for exercise in Exercise::ALL {
                *summary.totals.entry(exercise).or_default() += record.count(exercise) as u64;
            }
            let better = match summary.best_day {
                Some((best_date, best)) => {
                    day_total > best || (day_total == best && record.date < best_date)
                }
                None => true,
            };
            if better {
                summary.best_day = Some((record.date, day_total));
            }
        }
        summary
    }

    pub fn total_for(&self, exercise: Exercise) -> u64 {
        self.totals.get(&exercise).copied().unwrap_or(0)
    }
}
