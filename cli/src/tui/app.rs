use chrono::{Datelike, Duration};
use repcal_core::{CalendarMonth, Clock, WorkoutCalendar, WorkoutRepository};

pub struct App<R: WorkoutRepository, C: Clock> {
    pub calendar: WorkoutCalendar<R, C>,
    /// Highlighted day of the displayed month.
    pub selected_day: u32,
}

impl<R: WorkoutRepository, C: Clock> App<R, C> {
    pub fn new(calendar: WorkoutCalendar<R, C>) -> Self {
        let mut app = App {
            calendar,
            selected_day: 1,
        };
        app.go_to_today();
        app
    }

    pub fn go_to_today(&mut self) {
        self.calendar.show_today();
        self.selected_day = self.calendar.today().day();
    }

    /// Moves the highlight by `delta` days, following it into the
    /// neighbouring month when it leaves the displayed one.
    pub fn move_selection(&mut self, delta: i64) {
        let displayed = self.calendar.displayed();
        let current = match displayed.date(self.selected_day) {
            Some(date) => date,
            None => return,
        };
        let target = current + Duration::days(delta);
        let target_month = CalendarMonth::containing(target);
        if target_month != displayed {
            self.calendar.show_month(target_month);
        }
        self.selected_day = target.day();
    }

    pub fn next_month(&mut self) {
        self.calendar.navigate_month(1);
        self.clamp_selection();
    }

    pub fn previous_month(&mut self) {
        self.calendar.navigate_month(-1);
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        self.selected_day = self.selected_day.min(self.calendar.displayed().days());
    }

    pub fn open_editor(&mut self) {
        self.calendar.select_day(self.selected_day);
    }

    pub fn save(&mut self) {
        // A failed write is reported through the notice banner.
        let _ = self.calendar.save();
    }

    pub fn cancel(&mut self) {
        self.calendar.cancel_edit();
    }

    pub fn is_editing(&self) -> bool {
        self.calendar.is_editing()
    }
}
