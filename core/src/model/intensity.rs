use serde::{Deserialize, Serialize};

use crate::model::workout::WorkoutRecord;

const MEDIUM_ABOVE: u64 = 75;
const DARK_ABOVE: u64 = 150;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IntensityTier {
    None,
    Light,
    Medium,
    Dark,
}

/// How a day without any record is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TierPolicy {
    /// Empty days look like light days.
    #[default]
    Legacy,
    /// Empty days get their own `IntensityTier::None`.
    DistinctEmpty,
}

impl TierPolicy {
    pub fn classify(&self, record: Option<&WorkoutRecord>) -> IntensityTier {
        match self {
            TierPolicy::Legacy => classify(record),
            TierPolicy::DistinctEmpty => classify_strict(record),
        }
    }
}

pub fn tier_for_total(total: u64) -> IntensityTier {
    if total > DARK_ABOVE {
        IntensityTier::Dark
    } else if total > MEDIUM_ABOVE {
        IntensityTier::Medium
    } else {
        IntensityTier::Light
    }
}

/// A missing record classifies as `Light`, the same as a very small workout.
pub fn classify(record: Option<&WorkoutRecord>) -> IntensityTier {
    match record {
        Some(r) => tier_for_total(r.total()),
        None => IntensityTier::Light,
    }
}

pub fn classify_strict(record: Option<&WorkoutRecord>) -> IntensityTier {
    match record {
        Some(r) => tier_for_total(r.total()),
        None => IntensityTier::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(pushups: u32, pullups: u32, abs: u32, squats: u32) -> WorkoutRecord {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        WorkoutRecord::empty(date).with_counts(pushups, pullups, abs, squats)
    }

    #[test]
    fn test_thresholds_are_exclusive() {
        assert_eq!(tier_for_total(0), IntensityTier::Light);
        assert_eq!(tier_for_total(75), IntensityTier::Light);
        assert_eq!(tier_for_total(76), IntensityTier::Medium);
        assert_eq!(tier_for_total(150), IntensityTier::Medium);
        assert_eq!(tier_for_total(151), IntensityTier::Dark);
    }

    #[test]
    fn test_absent_matches_zero_record() {
        let zero = record(0, 0, 0, 0);
        assert_eq!(classify(None), IntensityTier::Light);
        assert_eq!(classify(Some(&zero)), classify(None));
        assert_eq!(classify_strict(None), IntensityTier::None);
        assert_eq!(classify_strict(Some(&zero)), IntensityTier::Light);
    }

    #[test]
    fn test_monotonic_in_total() {
        let mut previous = tier_for_total(0);
        for total in 1..400 {
            let tier = tier_for_total(total);
            assert!(tier >= previous, "tier dropped at total {}", total);
            previous = tier;
        }
    }

    #[test]
    fn test_example_days() {
        assert_eq!(classify(Some(&record(50, 40, 30, 40))), IntensityTier::Dark);
        assert_eq!(classify(Some(&record(10, 10, 10, 10))), IntensityTier::Light);
        assert_eq!(classify(Some(&record(30, 30, 20, 0))), IntensityTier::Medium);
    }

    #[test]
    fn test_unknown_numeric_fields_raise_tier() {
        let mut lunges = record(10, 0, 0, 0);
        lunges.extra.insert("lunges".to_string(), serde_json::json!(200));
        assert_eq!(classify(Some(&lunges)), IntensityTier::Dark);
    }

    #[test]
    fn test_policy_selects_classifier() {
        assert_eq!(TierPolicy::Legacy.classify(None), IntensityTier::Light);
        assert_eq!(TierPolicy::DistinctEmpty.classify(None), IntensityTier::None);
        let heavy = record(100, 100, 0, 0);
        assert_eq!(TierPolicy::DistinctEmpty.classify(Some(&heavy)), IntensityTier::Dark);
    }
}
