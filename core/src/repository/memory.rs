use std::cell::{Cell, RefCell};
use std::io;

use crate::error::{StoreError, StoreResult};
use crate::model::workout::WorkoutRecord;
use crate::repository::codec;
use crate::repository::traits::WorkoutRepository;

/// Keeps the serialized record set in memory. Reads and writes go through
/// the same encoding as the file store, and either can be made to fail.
#[derive(Debug, Default)]
pub struct MemoryWorkoutRepository {
    blob: RefCell<Option<String>>,
    unavailable: Cell<bool>,
    saves: Cell<usize>,
}

impl MemoryWorkoutRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blob(blob: impl Into<String>) -> Self {
        let repo = Self::new();
        *repo.blob.borrow_mut() = Some(blob.into());
        repo
    }

    pub fn with_records(records: &[WorkoutRecord]) -> StoreResult<Self> {
        Ok(Self::with_blob(codec::encode(records)?))
    }

    pub fn blob(&self) -> Option<String> {
        self.blob.borrow().clone()
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.set(unavailable);
    }

    /// Number of successful saves.
    pub fn saves(&self) -> usize {
        self.saves.get()
    }

    fn check_available(&self) -> StoreResult<()> {
        if self.unavailable.get() {
            return Err(StoreError::Unavailable(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "storage disabled",
            )));
        }
        Ok(())
    }
}

impl WorkoutRepository for MemoryWorkoutRepository {
    fn load(&self) -> StoreResult<Vec<WorkoutRecord>> {
        self.check_available()?;
        match self.blob.borrow().as_deref() {
            Some(blob) => codec::decode(blob.as_bytes()),
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, records: &[WorkoutRecord]) -> StoreResult<()> {
        self.check_available()?;
        let blob = codec::encode(records)?;
        *self.blob.borrow_mut() = Some(blob);
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}
