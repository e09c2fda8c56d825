use crate::error::StoreResult;
use crate::model::workout::WorkoutRecord;

/// Key the record set is stored under.
pub const STORAGE_KEY: &str = "workoutData";

/// An empty or blank blob means nothing has been saved yet.
pub fn decode(blob: &[u8]) -> StoreResult<Vec<WorkoutRecord>> {
    if blob.iter().all(|b| b.is_ascii_whitespace()) {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_slice(blob)?)
}

pub fn encode(records: &[WorkoutRecord]) -> StoreResult<String> {
    Ok(serde_json::to_string_pretty(records)?)
}
