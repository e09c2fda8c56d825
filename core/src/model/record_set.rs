use std::collections::HashMap;

use chrono::NaiveDate;

use crate::model::workout::WorkoutRecord;

/// Replaces the record sharing `updated.date`, or appends it when no such
/// record exists. The incoming record always wins.
pub fn merge_record(records: &[WorkoutRecord], updated: WorkoutRecord) -> Vec<WorkoutRecord> {
    let mut merged = records.to_vec();
    if let Some(pos) = merged.iter().position(|r| r.date == updated.date) {
        merged[pos] = updated;
    } else {
        merged.push(updated);
    }
    merged
}

/// All saved workouts, at most one per date.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordSet {
    records: Vec<WorkoutRecord>,
}

impl RecordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from loaded data. Should the data hold duplicates, the
    /// later entry for a date wins, as if they had been saved in order.
    pub fn from_records(records: Vec<WorkoutRecord>) -> Self {
        let mut unique: Vec<WorkoutRecord> = Vec::with_capacity(records.len());
        for record in records {
            match unique.iter().position(|r| r.date == record.date) {
                Some(pos) => unique[pos] = record,
                None => unique.push(record),
            }
        }
        RecordSet { records: unique }
    }

    pub fn merged(&self, updated: WorkoutRecord) -> RecordSet {
        RecordSet {
            records: merge_record(&self.records, updated),
        }
    }

    pub fn get(&self, date: NaiveDate) -> Option<&WorkoutRecord> {
        self.records.iter().find(|r| r.date == date)
    }

    pub fn by_date(&self) -> HashMap<NaiveDate, &WorkoutRecord> {
        self.records.iter().map(|r| (r.date, r)).collect()
    }

    pub fn as_slice(&self) -> &[WorkoutRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &WorkoutRecord> {
        self.records.iter()
    }

    pub fn sorted_by_date(&self) -> Vec<&WorkoutRecord> {
        let mut sorted: Vec<_> = self.records.iter().collect();
        sorted.sort_by_key(|r| r.date);
        sorted
    }
}
