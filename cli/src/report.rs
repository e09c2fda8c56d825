use repcal_core::{CalendarCell, CalendarMonth, Exercise, IntensityTier, MonthSummary, WorkoutRecord};
use tabled::builder::Builder;
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

#[derive(Tabled)]
struct RecordRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Push-ups")]
    pushups: u32,
    #[tabled(rename = "Pull-ups")]
    pullups: u32,
    #[tabled(rename = "Abs")]
    abs: u32,
    #[tabled(rename = "Squats")]
    squats: u32,
    #[tabled(rename = "Total")]
    total: u64,
}

pub fn tier_mark(tier: IntensityTier) -> &'static str {
    match tier {
        IntensityTier::None => " ",
        IntensityTier::Light => "░",
        IntensityTier::Medium => "▒",
        IntensityTier::Dark => "█",
    }
}

/// Prints the month as a Monday-first grid. Each cell shows the day, a tier
/// mark and the day's total when something was logged.
pub fn show_month(month: CalendarMonth, cells: &[CalendarCell]) {
    let mut builder = Builder::default();
    builder.push_record(WEEKDAYS);

    let mut week: Vec<String> = vec![String::new(); month.leading_blanks() as usize];
    for cell in cells {
        let marker = if cell.is_today { "*" } else { "" };
        let total = cell
            .record
            .as_ref()
            .map(|r| r.total().to_string())
            .unwrap_or_default();
        week.push(format!("{}{}\n{} {}", cell.day, marker, tier_mark(cell.tier).repeat(2), total));
        if week.len() == WEEKDAYS.len() {
            builder.push_record(std::mem::take(&mut week));
        }
    }
    if !week.is_empty() {
        week.resize(WEEKDAYS.len(), String::new());
        builder.push_record(week);
    }

    let mut table = builder.build();
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));

    println!("\x1b[1;36m{}\x1b[0m", month.title());
    println!("{}", table);
    println!("{} light  {} medium  {} dark  * today",
        tier_mark(IntensityTier::Light),
        tier_mark(IntensityTier::Medium),
        tier_mark(IntensityTier::Dark),
    );
}

pub fn show_records(records: &[&WorkoutRecord]) {
    if records.is_empty() {
        println!("No workouts logged yet.");
        return;
    }

    let rows: Vec<RecordRow> = records
        .iter()
        .map(|r| RecordRow {
            date: r.date_key(),
            pushups: r.pushups,
            pullups: r.pullups,
            abs: r.abs,
            squats: r.squats,
            total: r.total(),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));
    println!("{}", table);
}

pub fn show_summary(month: CalendarMonth, summary: &MonthSummary) {
    println!("\n\x1b[1;36m{}\x1b[0m ({} active days)", month.title(), summary.active_days);

    let mut builder = Builder::default();
    builder.push_record(["Exercise", "Reps"]);
    for exercise in Exercise::ALL {
        builder.push_record([exercise.label().to_string(), summary.total_for(exercise).to_string()]);
    }
    builder.push_record(["Total".to_string(), summary.total.to_string()]);

    let mut table = builder.build();
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));
    println!("{}", table);

    if let Some((date, total)) = summary.best_day {
        println!("Best day: {} ({} reps)", date.format("%Y-%m-%d (%a)"), total);
    }
}
