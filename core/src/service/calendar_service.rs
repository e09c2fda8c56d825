use chrono::NaiveDate;

use crate::error::{StoreError, StoreResult};
use crate::model::draft::EditDraft;
use crate::model::intensity::TierPolicy;
use crate::model::record_set::RecordSet;
use crate::model::summary::MonthSummary;
use crate::model::workout::{Exercise, WorkoutRecord};
use crate::repository::WorkoutRepository;
use crate::service::notice::Notice;
use crate::time::Clock;
use crate::usecase::month_grid::{build_month, CalendarCell, CalendarMonth};

#[derive(Debug, Clone, PartialEq)]
pub enum EditState {
    Browsing,
    Editing(EditDraft),
}

/// Owns the record set for the lifetime of the calendar and drives month
/// navigation, the edit session and the save banner.
pub struct WorkoutCalendar<R: WorkoutRepository, C: Clock> {
    repo: R,
    clock: C,
    policy: TierPolicy,
    records: RecordSet,
    displayed: CalendarMonth,
    state: EditState,
    notice: Option<Notice>,
    /// False while the stored set could not be read. Writes reload first.
    loaded: bool,
}

impl<R: WorkoutRepository, C: Clock> WorkoutCalendar<R, C> {
    /// Loads the stored records and shows the current month.
    pub fn new(repo: R, clock: C, policy: TierPolicy) -> Self {
        let displayed = CalendarMonth::containing(clock.today());
        let mut calendar = Self {
            repo,
            clock,
            policy,
            records: RecordSet::new(),
            displayed,
            state: EditState::Browsing,
            notice: None,
            loaded: false,
        };
        if let Err(e) = calendar.reload() {
            calendar.notice = Some(Notice::error(format!("Could not read saved workouts: {}", e)));
        }
        log::info!("calendar mounted with {} workouts", calendar.records.len());
        calendar
    }

    /// Reads the stored set again. Malformed data counts as an empty set;
    /// unreadable storage leaves the calendar unloaded and is returned.
    pub fn reload(&mut self) -> StoreResult<()> {
        match self.repo.load() {
            Ok(records) => {
                self.records = RecordSet::from_records(records);
            }
            Err(StoreError::Parse(e)) => {
                log::warn!("ignoring malformed workout data: {}", e);
                self.records = RecordSet::new();
            }
            Err(e) => {
                log::error!("could not load workouts: {}", e);
                self.loaded = false;
                return Err(e);
            }
        }
        self.loaded = true;
        Ok(())
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    fn ensure_loaded(&mut self) -> StoreResult<()> {
        if self.loaded {
            return Ok(());
        }
        self.reload()
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn records(&self) -> &RecordSet {
        &self.records
    }

    pub fn record(&self, date: NaiveDate) -> Option<&WorkoutRecord> {
        self.records.get(date)
    }

    pub fn policy(&self) -> TierPolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: TierPolicy) {
        self.policy = policy;
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    // --- month navigation ---

    pub fn displayed(&self) -> CalendarMonth {
        self.displayed
    }

    /// Leaves the record set and any open edit session alone.
    pub fn navigate_month(&mut self, delta: i32) {
        self.displayed = self.displayed.navigate(delta);
        log::debug!("showing {}", self.displayed.title());
    }

    pub fn show_month(&mut self, month: CalendarMonth) {
        self.displayed = month;
    }

    pub fn show_today(&mut self) {
        self.displayed = CalendarMonth::containing(self.clock.today());
    }

    pub fn cells(&self) -> Vec<CalendarCell> {
        build_month(
            self.displayed.year,
            self.displayed.month,
            &self.records,
            self.clock.today(),
            self.policy,
        )
    }

    pub fn summary(&self) -> MonthSummary {
        MonthSummary::from_records(self.displayed.year, self.displayed.month, &self.records)
    }

    // --- edit session ---

    pub fn state(&self) -> &EditState {
        &self.state
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.state, EditState::Editing(_))
    }

    pub fn draft(&self) -> Option<&EditDraft> {
        match &self.state {
            EditState::Editing(draft) => Some(draft),
            EditState::Browsing => None,
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut EditDraft> {
        match &mut self.state {
            EditState::Editing(draft) => Some(draft),
            EditState::Browsing => None,
        }
    }

    /// Opens the editor for `day` of the displayed month.
    pub fn select_day(&mut self, day: u32) -> bool {
        match self.displayed.date(day) {
            Some(date) => {
                self.open_editor(date);
                true
            }
            None => false,
        }
    }

    /// Starts an edit session seeded from the stored record, or zeros.
    pub fn open_editor(&mut self, date: NaiveDate) {
        let draft = EditDraft::from_record(date, self.records.get(date));
        self.state = EditState::Editing(draft);
    }

    pub fn set_field(&mut self, exercise: Exercise, text: impl Into<String>) -> bool {
        match self.draft_mut() {
            Some(draft) => {
                draft.set_field(exercise, text);
                true
            }
            None => false,
        }
    }

    pub fn input_char(&mut self, c: char) {
        if let Some(draft) = self.draft_mut() {
            draft.push_char(c);
        }
    }

    pub fn delete_char(&mut self) {
        if let Some(draft) = self.draft_mut() {
            draft.pop_char();
        }
    }

    pub fn focus_next(&mut self) {
        if let Some(draft) = self.draft_mut() {
            draft.focus_next();
        }
    }

    pub fn focus_previous(&mut self) {
        if let Some(draft) = self.draft_mut() {
            draft.focus_previous();
        }
    }

    /// Drops the draft. The record set is never touched.
    pub fn cancel_edit(&mut self) {
        self.state = EditState::Browsing;
    }

    /// Commits the draft and writes the whole record set.
    ///
    /// On a failed write nothing changes in memory and the editor stays open
    /// with the draft, so the user can retry.
    pub fn save(&mut self) -> StoreResult<()> {
        if !self.is_editing() {
            return Ok(());
        }
        if let Err(e) = self.ensure_loaded() {
            self.notice = Some(Notice::error(format!(
                "Workout not saved, saved workouts could not be read: {}",
                e
            )));
            return Err(e);
        }
        let draft = match &self.state {
            EditState::Editing(draft) => draft,
            EditState::Browsing => return Ok(()),
        };
        let record = draft.commit(self.records.get(draft.date));
        let date = record.date;
        let updated = self.records.merged(record);

        match self.repo.save(updated.as_slice()) {
            Ok(()) => {
                log::info!("saved workout for {}", date);
                self.records = updated;
                self.state = EditState::Browsing;
                self.notice = Some(Notice::saved(self.clock.now()));
                Ok(())
            }
            Err(e) => {
                log::error!("could not save workout for {}: {}", date, e);
                self.notice = Some(Notice::error(format!("Workout not saved: {}", e)));
                Err(e)
            }
        }
    }

    /// Writes one record directly, bypassing the editor.
    pub fn upsert(&mut self, record: WorkoutRecord) -> StoreResult<()> {
        self.ensure_loaded()?;
        let updated = self.records.merged(record);
        self.repo.save(updated.as_slice())?;
        self.records = updated;
        Ok(())
    }

    // --- notice ---

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Clears the banner once its deadline has passed.
    pub fn tick(&mut self) {
        let now = self.clock.now();
        if self.notice.as_ref().is_some_and(|n| n.is_expired(now)) {
            self.notice = None;
        }
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Cancels anything still scheduled. Call before dropping the calendar.
    pub fn teardown(&mut self) {
        self.notice = None;
        self.state = EditState::Browsing;
    }
}
