mod logging;
mod report;
mod tui;

use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;
use repcal_core::repository::default_data_dir;
use repcal_core::{
    exercise_counts, parse_args, parse_human_date, parse_month, CalendarMonth, Clock, Exercise,
    FileWorkoutRepository, SystemClock, TierPolicy, WorkoutCalendar,
};

#[derive(Parser)]
#[command(name = "repcal")]
#[command(about = "A calendar for daily push-ups, pull-ups, abs and squats", long_about = None)]
struct Cli {
    /// Directory holding workoutData.json (defaults to ~/.repcal)
    #[arg(long, global = true, env = "REPCAL_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Show days with nothing logged differently from light days
    #[arg(long, global = true, env = "REPCAL_DISTINCT_EMPTY")]
    distinct_empty: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Open the calendar in the terminal
    Tui,
    /// Print a month (usage: show 2024-03 | this | last | next | +2m)
    Show { month: Option<String> },
    /// Log a day (usage: log yesterday push:50 pull:20 abs:30 squat:40)
    Log {
        /// Optional date followed by exercise counts (key:value)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// List every logged day
    List,
    /// Totals for a month
    Summary { month: Option<String> },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let data_dir = match cli.data_dir {
        Some(dir) => dir,
        None => default_data_dir()?,
    };
    fs::create_dir_all(&data_dir)?;

    let policy = if cli.distinct_empty {
        TierPolicy::DistinctEmpty
    } else {
        TierPolicy::Legacy
    };

    let command = cli.command.unwrap_or(Commands::Tui);
    if matches!(command, Commands::Tui) {
        logging::init_file(&data_dir)?;
    } else {
        logging::init_stderr()?;
    }

    let repo = FileWorkoutRepository::new(Some(data_dir))?;
    let mut calendar = WorkoutCalendar::new(repo, SystemClock, policy);
    if let Some(notice) = calendar.notice() {
        if !matches!(command, Commands::Tui) {
            eprintln!("Warning: {}", notice.message);
        }
    }

    match command {
        Commands::Tui => {
            tui::run(calendar)?;
        }
        Commands::Show { month } => {
            select_month(&mut calendar, month.as_deref())?;
            report::show_month(calendar.displayed(), &calendar.cells());
        }
        Commands::Log { args } => {
            log_day(&mut calendar, &args)?;
        }
        Commands::List => {
            report::show_records(&calendar.records().sorted_by_date());
        }
        Commands::Summary { month } => {
            select_month(&mut calendar, month.as_deref())?;
            report::show_summary(calendar.displayed(), &calendar.summary());
        }
    }
    Ok(())
}

fn select_month<C: Clock>(
    calendar: &mut WorkoutCalendar<FileWorkoutRepository, C>,
    month: Option<&str>,
) -> Result<()> {
    if let Some(input) = month {
        let (year, month) = parse_month(input, calendar.today())?;
        calendar.show_month(CalendarMonth::new(year, month));
    }
    Ok(())
}

fn log_day<C: Clock>(
    calendar: &mut WorkoutCalendar<FileWorkoutRepository, C>,
    args: &[String],
) -> Result<()> {
    let parsed = parse_args(args);
    if parsed.metadata.is_empty() {
        return Err(anyhow!("Nothing to log. Usage: log [DATE] push:N pull:N abs:N squat:N"));
    }
    if parsed.positional.len() > 1 {
        return Err(anyhow!("Expected at most one date, got: {}", parsed.positional.join(" ")));
    }

    let date = match parsed.positional.first() {
        Some(input) => parse_human_date(input, calendar.today())?,
        None => calendar.today(),
    };

    let (counts, warnings) = exercise_counts(&parsed.metadata)?;
    for warning in warnings {
        println!("Warning: {}", warning);
    }

    // Counts not mentioned keep their stored value.
    calendar.open_editor(date);
    for (exercise, value) in counts {
        calendar.set_field(exercise, value);
    }
    calendar.save()?;

    if let Some(record) = calendar.record(date) {
        println!("Logged {}:", record.date_key());
        for exercise in Exercise::ALL {
            println!("  {:<9} {}", exercise.label(), record.count(exercise));
        }
        println!("  {:<9} {}", "Total", record.total());
    }
    Ok(())
}
