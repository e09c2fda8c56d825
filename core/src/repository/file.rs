use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};

use crate::error::StoreResult;
use crate::model::workout::WorkoutRecord;
use crate::repository::codec::{self, STORAGE_KEY};
use crate::repository::traits::WorkoutRepository;

/// Default data directory, `~/.repcal`.
pub fn default_data_dir() -> Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| anyhow!("Could not determine home directory"))?;
    Ok(home_dir.join(".repcal"))
}

#[derive(Clone, Debug)]
pub struct FileWorkoutRepository {
    file_path: PathBuf,
}

impl FileWorkoutRepository {
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let dir = match base_dir {
            Some(dir) => dir,
            None => default_data_dir()?,
        };
        fs::create_dir_all(&dir)?;
        let file_path = dir.join(format!("{}.json", STORAGE_KEY));
        Ok(FileWorkoutRepository { file_path })
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn temp_path(&self) -> PathBuf {
        self.file_path.with_extension("json.tmp")
    }
}

fn write_file(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

impl WorkoutRepository for FileWorkoutRepository {
    fn load(&self) -> StoreResult<Vec<WorkoutRecord>> {
        if !self.file_path.exists() {
            log::debug!("no workout data at {}", self.file_path.display());
            return Ok(Vec::new());
        }
        let blob = fs::read(&self.file_path)?;
        let records = codec::decode(&blob)?;
        log::debug!("loaded {} workouts from {}", records.len(), self.file_path.display());
        Ok(records)
    }

    fn save(&self, records: &[WorkoutRecord]) -> StoreResult<()> {
        let blob = codec::encode(records)?;
        let temp_path = self.temp_path();
        // The rename replaces the old blob in one step.
        let written = write_file(&temp_path, blob.as_bytes())
            .and_then(|()| fs::rename(&temp_path, &self.file_path));
        if let Err(e) = written {
            let _ = fs::remove_file(&temp_path);
            return Err(e.into());
        }
        log::debug!("saved {} workouts to {}", records.len(), self.file_path.display());
        Ok(())
    }
}
