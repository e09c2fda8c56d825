use crate::error::StoreError;
use crate::model::intensity::{IntensityTier, TierPolicy};
use crate::model::workout::{Exercise, WorkoutRecord};
use crate::repository::{MemoryWorkoutRepository, WorkoutRepository};
use crate::service::calendar_service::{EditState, WorkoutCalendar};
use crate::service::notice::NoticeKind;
use crate::time::FixedClock;
use crate::usecase::month_grid::CalendarMonth;
use chrono::{Duration, NaiveDate};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn clock() -> FixedClock {
    FixedClock::new(date(2024, 3, 6).and_hms_opt(9, 0, 0).unwrap())
}

fn calendar(
    repo: MemoryWorkoutRepository,
    clock: &FixedClock,
) -> WorkoutCalendar<MemoryWorkoutRepository, &FixedClock> {
    WorkoutCalendar::new(repo, clock, TierPolicy::Legacy)
}

fn seeded() -> MemoryWorkoutRepository {
    MemoryWorkoutRepository::with_records(&[
        WorkoutRecord::empty(date(2024, 3, 1)).with_counts(20, 20, 20, 20),
        WorkoutRecord::empty(date(2024, 2, 14)).with_counts(5, 5, 5, 5),
    ])
    .unwrap()
}

#[test]
fn test_mount_loads_records_and_shows_current_month() {
    let clock = clock();
    let cal = calendar(seeded(), &clock);

    assert_eq!(cal.records().len(), 2);
    assert_eq!(cal.displayed(), CalendarMonth::new(2024, 3));
    assert_eq!(cal.state(), &EditState::Browsing);
    assert!(cal.notice().is_none());

    let cells = cal.cells();
    assert_eq!(cells.len(), 31);
    assert!(cells[5].is_today);
    assert_eq!(cells[0].tier, IntensityTier::Medium);
}

#[test]
fn test_malformed_storage_mounts_empty() {
    let clock = clock();
    let cal = calendar(MemoryWorkoutRepository::with_blob("[{\"date\":"), &clock);
    assert!(cal.records().is_empty());
    assert!(cal.notice().is_none());
}

#[test]
fn test_unavailable_storage_mounts_empty_with_notice() {
    let clock = clock();
    let repo = seeded();
    repo.set_unavailable(true);
    let cal = calendar(repo, &clock);

    assert!(cal.records().is_empty());
    assert_eq!(cal.notice().map(|n| n.kind), Some(NoticeKind::Error));
}

#[test]
fn test_save_after_failed_mount_keeps_stored_history() {
    let clock = clock();
    let repo = seeded();
    repo.set_unavailable(true);
    let mut cal = calendar(repo, &clock);
    assert!(!cal.is_loaded());

    cal.repository().set_unavailable(false);
    cal.select_day(20);
    cal.set_field(Exercise::Abs, "25");
    cal.save().unwrap();

    assert!(cal.is_loaded());
    let stored = cal.repository().load().unwrap();
    assert_eq!(stored.len(), 3);
    assert!(stored.iter().any(|r| r.date == date(2024, 2, 14)));
    assert_eq!(cal.records().len(), 3);
}

#[test]
fn test_save_refused_while_storage_still_unreadable() {
    let clock = clock();
    let repo = seeded();
    let blob_before = repo.blob();
    repo.set_unavailable(true);
    let mut cal = calendar(repo, &clock);

    cal.select_day(20);
    assert!(matches!(cal.save(), Err(StoreError::Unavailable(_))));
    assert!(cal.is_editing());
    assert_eq!(cal.notice().map(|n| n.kind), Some(NoticeKind::Error));
    assert!(cal
        .upsert(WorkoutRecord::empty(date(2024, 3, 21)))
        .is_err());

    cal.repository().set_unavailable(false);
    assert_eq!(cal.repository().blob(), blob_before);
    assert_eq!(cal.repository().saves(), 0);
}

#[test]
fn test_select_day_seeds_draft_from_record_or_zeros() {
    let clock = clock();
    let mut cal = calendar(seeded(), &clock);

    assert!(cal.select_day(1));
    let draft = cal.draft().unwrap();
    assert_eq!(draft.date, date(2024, 3, 1));
    assert_eq!(draft.field(Exercise::Squats), "20");

    assert!(cal.select_day(2));
    let draft = cal.draft().unwrap();
    assert_eq!(draft.date, date(2024, 3, 2));
    assert_eq!(draft.field(Exercise::Pushups), "0");

    assert!(!cal.select_day(32));
}

#[test]
fn test_save_merges_persists_and_notifies() {
    let clock = clock();
    let mut cal = calendar(seeded(), &clock);

    cal.select_day(5);
    cal.set_field(Exercise::Pushups, "50");
    cal.set_field(Exercise::Pullups, "40");
    cal.set_field(Exercise::Abs, "30");
    cal.set_field(Exercise::Squats, "40");
    cal.save().unwrap();

    assert!(!cal.is_editing());
    assert_eq!(cal.records().len(), 3);
    assert_eq!(cal.record(date(2024, 3, 5)).map(|r| r.total()), Some(160));
    assert_eq!(cal.cells()[4].tier, IntensityTier::Dark);

    let stored = cal.repository().load().unwrap();
    assert_eq!(stored.len(), 3);
    assert_eq!(cal.repository().saves(), 1);

    let notice = cal.notice().unwrap();
    assert_eq!(notice.kind, NoticeKind::Saved);
    assert_eq!(notice.message, "Workout saved successfully!");
}

#[test]
fn test_save_replaces_existing_day() {
    let clock = clock();
    let mut cal = calendar(seeded(), &clock);

    cal.select_day(1);
    cal.set_field(Exercise::Abs, "1");
    cal.save().unwrap();

    let matching: Vec<_> = cal
        .records()
        .iter()
        .filter(|r| r.date == date(2024, 3, 1))
        .collect();
    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0].abs, 1);
    assert_eq!(matching[0].pushups, 20);
    assert_eq!(cal.record(date(2024, 2, 14)).map(|r| r.total()), Some(20));
}

#[test]
fn test_light_day_after_save() {
    let clock = clock();
    let mut cal = calendar(MemoryWorkoutRepository::new(), &clock);

    cal.open_editor(date(2024, 3, 6));
    for exercise in Exercise::ALL {
        cal.set_field(exercise, "10");
    }
    cal.save().unwrap();
    assert_eq!(cal.cells()[5].tier, IntensityTier::Light);
}

#[test]
fn test_cancel_never_mutates_records() {
    let clock = clock();
    let mut cal = calendar(seeded(), &clock);
    let before = cal.records().clone();
    let blob_before = cal.repository().blob();

    cal.select_day(1);
    cal.set_field(Exercise::Pushups, "999");
    cal.input_char('9');
    cal.cancel_edit();

    assert_eq!(cal.state(), &EditState::Browsing);
    assert_eq!(cal.records(), &before);
    assert_eq!(cal.repository().blob(), blob_before);
    assert_eq!(cal.repository().saves(), 0);
}

#[test]
fn test_failed_save_keeps_state_and_reports() {
    let clock = clock();
    let mut cal = calendar(seeded(), &clock);
    let before = cal.records().clone();

    cal.select_day(9);
    cal.set_field(Exercise::Squats, "30");
    cal.repository().set_unavailable(true);

    let result = cal.save();
    assert!(matches!(result, Err(StoreError::Unavailable(_))));
    assert_eq!(cal.records(), &before);
    assert_eq!(cal.draft().map(|d| d.field(Exercise::Squats)), Some("30"));
    assert_eq!(cal.notice().map(|n| n.kind), Some(NoticeKind::Error));

    // Storage comes back; the same draft saves.
    cal.repository().set_unavailable(false);
    cal.save().unwrap();
    assert_eq!(cal.record(date(2024, 3, 9)).map(|r| r.squats), Some(30));
}

#[test]
fn test_saved_notice_expires_after_three_seconds() {
    let clock = clock();
    let mut cal = calendar(MemoryWorkoutRepository::new(), &clock);

    cal.select_day(3);
    cal.save().unwrap();
    assert!(cal.notice().is_some());

    clock.advance(Duration::milliseconds(2999));
    cal.tick();
    assert!(cal.notice().is_some());

    clock.advance(Duration::milliseconds(1));
    cal.tick();
    assert!(cal.notice().is_none());
}

#[test]
fn test_second_save_resets_notice_deadline() {
    let clock = clock();
    let mut cal = calendar(MemoryWorkoutRepository::new(), &clock);

    cal.select_day(3);
    cal.save().unwrap();
    clock.advance(Duration::seconds(2));
    cal.select_day(4);
    cal.save().unwrap();

    clock.advance(Duration::seconds(2));
    cal.tick();
    assert!(cal.notice().is_some());

    clock.advance(Duration::seconds(1));
    cal.tick();
    assert!(cal.notice().is_none());
}

#[test]
fn test_dismiss_and_teardown_cancel_notice() {
    let clock = clock();
    let mut cal = calendar(MemoryWorkoutRepository::new(), &clock);

    cal.select_day(3);
    cal.save().unwrap();
    cal.dismiss_notice();
    assert!(cal.notice().is_none());

    cal.select_day(4);
    cal.save().unwrap();
    cal.select_day(5);
    cal.teardown();
    assert!(cal.notice().is_none());
    assert!(!cal.is_editing());
}

#[test]
fn test_error_notice_waits_for_dismiss() {
    let clock = clock();
    let mut cal = calendar(MemoryWorkoutRepository::new(), &clock);
    cal.repository().set_unavailable(true);

    cal.select_day(3);
    assert!(cal.save().is_err());
    clock.advance(Duration::minutes(5));
    cal.tick();
    assert!(cal.notice().is_some());
}

#[test]
fn test_twelve_months_forward_leaves_records_alone() {
    let clock = clock();
    let mut cal = calendar(seeded(), &clock);
    let before = cal.records().clone();

    for _ in 0..12 {
        cal.navigate_month(1);
    }
    assert_eq!(cal.displayed(), CalendarMonth::new(2025, 3));
    assert_eq!(cal.records(), &before);

    cal.navigate_month(-15);
    assert_eq!(cal.displayed(), CalendarMonth::new(2023, 12));
    assert!(cal.cells().iter().all(|c| !c.is_today));

    cal.show_today();
    assert_eq!(cal.displayed(), CalendarMonth::new(2024, 3));
}

#[test]
fn test_navigation_keeps_open_edit_session() {
    let clock = clock();
    let mut cal = calendar(seeded(), &clock);

    cal.select_day(5);
    cal.set_field(Exercise::Abs, "12");
    cal.navigate_month(1);

    let draft = cal.draft().unwrap();
    assert_eq!(draft.date, date(2024, 3, 5));
    assert_eq!(draft.field(Exercise::Abs), "12");

    cal.save().unwrap();
    assert_eq!(cal.record(date(2024, 3, 5)).map(|r| r.abs), Some(12));
    assert_eq!(cal.displayed(), CalendarMonth::new(2024, 4));
}

#[test]
fn test_garbage_input_saves_as_zero() {
    let clock = clock();
    let mut cal = calendar(MemoryWorkoutRepository::new(), &clock);

    cal.select_day(7);
    cal.set_field(Exercise::Pushups, "-20");
    cal.set_field(Exercise::Pullups, "ten");
    cal.set_field(Exercise::Abs, "");
    cal.set_field(Exercise::Squats, "15");
    cal.save().unwrap();

    let record = cal.record(date(2024, 3, 7)).unwrap();
    assert_eq!((record.pushups, record.pullups, record.abs, record.squats), (0, 0, 0, 15));
}

#[test]
fn test_unknown_stored_fields_survive_edit() {
    let clock = clock();
    let repo = MemoryWorkoutRepository::with_blob(
        r#"[{"date":"2024-03-02","pushups":1,"pullups":1,"abs":1,"squats":1,"lunges":8}]"#,
    );
    let mut cal = calendar(repo, &clock);

    cal.select_day(2);
    cal.set_field(Exercise::Pushups, "30");
    cal.save().unwrap();

    let blob = cal.repository().blob().unwrap();
    assert!(blob.contains("\"lunges\": 8"));
    assert!(blob.contains("\"pushups\": 30"));
}

#[test]
fn test_upsert_and_summary() {
    let clock = clock();
    let mut cal = calendar(seeded(), &clock);

    cal.upsert(WorkoutRecord::empty(date(2024, 3, 10)).with_counts(100, 0, 0, 0))
        .unwrap();
    let summary = cal.summary();
    assert_eq!(summary.active_days, 2);
    assert_eq!(summary.total, 180);
    assert_eq!(summary.best_day, Some((date(2024, 3, 10), 100)));
}

#[test]
fn test_distinct_empty_policy_reaches_cells() {
    let clock = clock();
    let mut cal = calendar(seeded(), &clock);
    cal.set_policy(TierPolicy::DistinctEmpty);

    let cells = cal.cells();
    assert_eq!(cells[0].tier, IntensityTier::Medium);
    assert_eq!(cells[1].tier, IntensityTier::None);
}
