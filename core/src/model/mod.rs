pub mod draft;
pub mod intensity;
pub mod record_set;
pub mod summary;
pub mod workout;
