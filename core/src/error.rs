use thiserror::Error;

/// Failures of the workout store.
///
/// Neither kind is fatal: callers decide whether to fall back to an empty
/// record set or to tell the user that a write did not persist.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("stored workout data is malformed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("workout storage unavailable: {0}")]
    Unavailable(std::io::Error),
}

impl From<std::io::Error> for StoreError {
    /// Bytes that are present but undecodable are malformed data, not a
    /// missing store.
    fn from(e: std::io::Error) -> Self {
        if e.kind() == std::io::ErrorKind::InvalidData {
            StoreError::Parse(serde_json::Error::io(e))
        } else {
            StoreError::Unavailable(e)
        }
    }
}

impl StoreError {
    pub fn is_parse(&self) -> bool {
        matches!(self, StoreError::Parse(_))
    }
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
