use chrono::NaiveDate;

use crate::input::parse_count;
use crate::model::workout::{Exercise, WorkoutRecord};

/// In-progress edit of one day. Counts are kept as the raw text the user
/// typed and only coerced when the draft is committed.
#[derive(Debug, Clone, PartialEq)]
pub struct EditDraft {
    pub date: NaiveDate,
    fields: [String; 4],
    focus: usize,
}

impl EditDraft {
    pub fn from_record(date: NaiveDate, record: Option<&WorkoutRecord>) -> Self {
        let seed = record.cloned().unwrap_or_else(|| WorkoutRecord::empty(date));
        let fields = Exercise::ALL.map(|e| seed.count(e).to_string());
        Self {
            date,
            fields,
            focus: 0,
        }
    }

    fn index(exercise: Exercise) -> usize {
        Exercise::ALL
            .iter()
            .position(|e| *e == exercise)
            .unwrap_or(0)
    }

    pub fn field(&self, exercise: Exercise) -> &str {
        &self.fields[Self::index(exercise)]
    }

    pub fn set_field(&mut self, exercise: Exercise, text: impl Into<String>) {
        self.fields[Self::index(exercise)] = text.into();
    }

    pub fn focused(&self) -> Exercise {
        Exercise::ALL[self.focus]
    }

    pub fn focus(&mut self, exercise: Exercise) {
        self.focus = Self::index(exercise);
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.fields.len();
    }

    pub fn focus_previous(&mut self) {
        self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
    }

    pub fn push_char(&mut self, c: char) {
        self.fields[self.focus].push(c);
    }

    pub fn pop_char(&mut self) {
        self.fields[self.focus].pop();
    }

    /// Coerces every field and applies it on top of `base`, keeping whatever
    /// else `base` carries (unknown stored fields included).
    pub fn commit(&self, base: Option<&WorkoutRecord>) -> WorkoutRecord {
        let mut record = base
            .cloned()
            .unwrap_or_else(|| WorkoutRecord::empty(self.date));
        record.date = self.date;
        for exercise in Exercise::ALL {
            record.set_count(exercise, parse_count(self.field(exercise)));
        }
        record
    }
}
