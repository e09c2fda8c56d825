use chrono::{Duration, NaiveDateTime};

/// Seconds the "saved" banner stays up unless dismissed.
pub const SAVED_NOTICE_SECS: i64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Saved,
    Error,
}

/// Transient banner. A notice with a deadline clears itself on the first
/// tick at or after that deadline; one without stays until dismissed.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    expires_at: Option<NaiveDateTime>,
}

impl Notice {
    pub fn saved(now: NaiveDateTime) -> Self {
        Self {
            kind: NoticeKind::Saved,
            message: "Workout saved successfully!".to_string(),
            expires_at: Some(now + Duration::seconds(SAVED_NOTICE_SECS)),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
            expires_at: None,
        }
    }

    pub fn expires_at(&self) -> Option<NaiveDateTime> {
        self.expires_at
    }

    pub fn is_expired(&self, now: NaiveDateTime) -> bool {
        self.expires_at.is_some_and(|at| now >= at)
    }
}
