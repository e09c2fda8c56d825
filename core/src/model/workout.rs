use chrono::NaiveDate;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::input::parse_count;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Exercise {
    Pushups,
    Pullups,
    Abs,
    Squats,
}

impl Exercise {
    pub const ALL: [Exercise; 4] = [
        Exercise::Pushups,
        Exercise::Pullups,
        Exercise::Abs,
        Exercise::Squats,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Exercise::Pushups => "Push-ups",
            Exercise::Pullups => "Pull-ups",
            Exercise::Abs => "Abs",
            Exercise::Squats => "Squats",
        }
    }

    /// Field name in the stored JSON and the long form of the CLI key.
    pub fn key(&self) -> &'static str {
        match self {
            Exercise::Pushups => "pushups",
            Exercise::Pullups => "pullups",
            Exercise::Abs => "abs",
            Exercise::Squats => "squats",
        }
    }

    pub fn from_key(key: &str) -> Option<Exercise> {
        Exercise::ALL.into_iter().find(|e| e.key() == key)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WorkoutRecord {
    pub date: NaiveDate,
    #[serde(default, deserialize_with = "lenient_count")]
    pub pushups: u32,
    #[serde(default, deserialize_with = "lenient_count")]
    pub pullups: u32,
    #[serde(default, deserialize_with = "lenient_count")]
    pub abs: u32,
    // Added after the first data was saved, so older blobs lack it.
    #[serde(default, deserialize_with = "lenient_count")]
    pub squats: u32,

    /// Fields this version does not know about, written back untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl WorkoutRecord {
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            pushups: 0,
            pullups: 0,
            abs: 0,
            squats: 0,
            extra: Map::new(),
        }
    }

    pub fn count(&self, exercise: Exercise) -> u32 {
        match exercise {
            Exercise::Pushups => self.pushups,
            Exercise::Pullups => self.pullups,
            Exercise::Abs => self.abs,
            Exercise::Squats => self.squats,
        }
    }

    pub fn set_count(&mut self, exercise: Exercise, value: u32) {
        match exercise {
            Exercise::Pushups => self.pushups = value,
            Exercise::Pullups => self.pullups = value,
            Exercise::Abs => self.abs = value,
            Exercise::Squats => self.squats = value,
        }
    }

    pub fn with_counts(mut self, pushups: u32, pullups: u32, abs: u32, squats: u32) -> Self {
        self.pushups = pushups;
        self.pullups = pullups;
        self.abs = abs;
        self.squats = squats;
        self
    }

    /// Sum of every numeric field, including stored fields this version does
    /// not know about. The date is not a count.
    pub fn total(&self) -> u64 {
        let known: u64 = Exercise::ALL.iter().map(|e| self.count(*e) as u64).sum();
        self.extra
            .values()
            .filter_map(Value::as_u64)
            .fold(known, u64::saturating_add)
    }

    pub fn date_key(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// Older saves stored whatever the form held, so counts may be numeric
/// strings. Negative numbers and empty strings read as zero.
fn lenient_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Null => Ok(0),
        Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                Ok(u.min(u32::MAX as u64) as u32)
            } else if n.as_i64().is_some() {
                Ok(0)
            } else {
                let f = n.as_f64().unwrap_or(0.0);
                if f.is_finite() && f > 0.0 {
                    Ok(f.min(u32::MAX as f64) as u32)
                } else {
                    Ok(0)
                }
            }
        }
        Value::String(s) => Ok(parse_count(&s)),
        other => Err(de::Error::custom(format!("invalid count: {}", other))),
    }
}
