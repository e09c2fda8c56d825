pub mod error;
pub mod model;
pub mod repository;
pub mod input;
pub mod time;
pub mod service;
pub mod usecase;

pub use error::{StoreError, StoreResult};
pub use model::draft::EditDraft;
pub use model::intensity::{classify, classify_strict, IntensityTier, TierPolicy};
pub use model::record_set::{merge_record, RecordSet};
pub use model::summary::MonthSummary;
pub use model::workout::{Exercise, WorkoutRecord};
pub use repository::{FileWorkoutRepository, MemoryWorkoutRepository, WorkoutRepository};
pub use input::{exercise_counts, parse_args, parse_count, expand_key, ParsedInput};
pub use time::{parse_human_date, parse_month, Clock, FixedClock, SystemClock};
pub use service::calendar_service::{EditState, WorkoutCalendar};
pub use service::notice::{Notice, NoticeKind};
pub use usecase::month_grid::{build_month, is_today, CalendarCell, CalendarMonth};
