pub mod month_grid;

pub use month_grid::{build_month, is_today, CalendarCell, CalendarMonth};
