use std::cell::Cell;

use anyhow::{anyhow, Result};
use chrono::{Datelike, Duration, Local, NaiveDate, NaiveDateTime};

/// Source of "now". Everything that compares against the current date or
/// schedules a deadline asks a `Clock` instead of the system.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock that only moves when told to.
#[derive(Debug, Clone)]
pub struct FixedClock {
    now: Cell<NaiveDateTime>,
}

impl FixedClock {
    pub fn new(now: NaiveDateTime) -> Self {
        Self { now: Cell::new(now) }
    }

    pub fn at_date(date: NaiveDate) -> Self {
        Self::new(date.and_time(chrono::NaiveTime::MIN))
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    pub fn set(&self, now: NaiveDateTime) {
        self.now.set(now);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

/// Moves `(year, month)` by `delta` months, carrying into the year.
pub fn shift_month(year: i32, month: u32, delta: i32) -> (i32, u32) {
    let index = year as i64 * 12 + (month as i64 - 1) + delta as i64;
    (index.div_euclid(12) as i32, (index.rem_euclid(12) + 1) as u32)
}

/// Last day of the month: day 0 of the following month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = shift_month(year, month, 1);
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(30)
}

/// Parses a day relative to `today`: `today`, `yesterday`, `tomorrow`,
/// `-Nd`/`+Nd`, `-Nw`/`+Nw`, or `YYYY-MM-DD`.
pub fn parse_human_date(input: &str, today: NaiveDate) -> Result<NaiveDate> {
    let input = input.trim();
    match input.to_lowercase().as_str() {
        "today" | "tod" => return Ok(today),
        "yesterday" | "yest" => return Ok(today - Duration::days(1)),
        "tomorrow" | "tom" => return Ok(today + Duration::days(1)),
        _ => {}
    }

    if let Some((count, unit)) = parse_relative(input) {
        return match unit {
            'd' => Ok(today + Duration::days(count)),
            'w' => Ok(today + Duration::weeks(count)),
            _ => Err(anyhow!("Unknown unit in relative date: {}", unit)),
        };
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|_| anyhow!("Could not parse date: {}", input))
}

/// Parses a month relative to `today`: `this`, `last`, `next`, `+Nm`/`-Nm`,
/// or `YYYY-MM`.
pub fn parse_month(input: &str, today: NaiveDate) -> Result<(i32, u32)> {
    let input = input.trim();
    let current = (today.year(), today.month());
    match input.to_lowercase().as_str() {
        "this" | "now" | "" => return Ok(current),
        "last" | "prev" => return Ok(shift_month(current.0, current.1, -1)),
        "next" => return Ok(shift_month(current.0, current.1, 1)),
        _ => {}
    }

    if let Some((count, unit)) = parse_relative(input) {
        if unit != 'm' {
            return Err(anyhow!("Unknown unit in relative month: {}", unit));
        }
        let count = i32::try_from(count).map_err(|_| anyhow!("Month offset out of range"))?;
        return Ok(shift_month(current.0, current.1, count));
    }

    let (year, month) = input
        .split_once('-')
        .ok_or_else(|| anyhow!("Could not parse month: {}", input))?;
    let year: i32 = year.parse().map_err(|_| anyhow!("Invalid year: {}", year))?;
    let month: u32 = month.parse().map_err(|_| anyhow!("Invalid month: {}", month))?;
    if !(1..=12).contains(&month) {
        return Err(anyhow!("Month must be between 1 and 12, got {}", month));
    }
    Ok((year, month))
}

fn parse_relative(input: &str) -> Option<(i64, char)> {
    let sign = match input.chars().next()? {
        '+' => 1,
        '-' => -1,
        _ => return None,
    };
    let unit = input.chars().last()?.to_ascii_lowercase();
    let digits = input.get(1..input.len() - 1)?;
    let count: i64 = digits.parse().ok()?;
    Some((sign * count, unit))
}
