use crate::error::StoreResult;
use crate::model::workout::WorkoutRecord;

/// A single stored record set. `save` always replaces the whole set.
pub trait WorkoutRepository {
    fn load(&self) -> StoreResult<Vec<WorkoutRecord>>;
    fn save(&self, records: &[WorkoutRecord]) -> StoreResult<()>;
}
