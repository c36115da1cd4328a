//! Date resolver: turns a notification timestamp into the working day it is
//! attributed to.
//!
//! Two fragments are recognised, tried in order:
//!
//! | Form        | Example             | Calendar date                          |
//! |-------------|---------------------|----------------------------------------|
//! | full date   | `Jun 24, 4:15 PM`   | configured year, else reference year   |
//! | weekday     | `Tue 3:45 PM`       | nearest such weekday from the reference|
//!
//! Either result then goes through the cutoff rule: a time of day strictly
//! before the cutoff (16:00 by default) belongs to the previous day.
//!
//! Nothing here fails loudly. A fragment that is missing or malformed resolves
//! to `None` and the segmenter discards the candidate.

use crate::config::{ExtractionConfig, WeekdayDirection};
use crate::error::ConfigError;
use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use phf::phf_map;
use regex::Regex;

static MONTHS: phf::Map<&'static str, u32> = phf_map! {
    "jan" => 1, "january" => 1,
    "feb" => 2, "february" => 2,
    "mar" => 3, "march" => 3,
    "apr" => 4, "april" => 4,
    "may" => 5,
    "jun" => 6, "june" => 6,
    "jul" => 7, "july" => 7,
    "aug" => 8, "august" => 8,
    "sep" => 9, "sept" => 9, "september" => 9,
    "oct" => 10, "october" => 10,
    "nov" => 11, "november" => 11,
    "dec" => 12, "december" => 12,
};

static WEEKDAYS: phf::Map<&'static str, Weekday> = phf_map! {
    "mon" => Weekday::Mon,
    "tue" => Weekday::Tue,
    "wed" => Weekday::Wed,
    "thu" => Weekday::Thu,
    "fri" => Weekday::Fri,
    "sat" => Weekday::Sat,
    "sun" => Weekday::Sun,
};

/// Format used for every date cell.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[derive(Debug, Clone)]
pub struct DateResolver {
    full_date: Regex,
    weekday_time: Regex,
    cutoff: NaiveTime,
    year: Option<i32>,
    direction: WeekdayDirection,
}

impl DateResolver {
    pub fn new(cfg: &ExtractionConfig) -> Result<Self, ConfigError> {
        let cutoff = NaiveTime::from_hms_opt(cfg.cutoff_hour, 0, 0)
            .ok_or(ConfigError::InvalidCutoff(cfg.cutoff_hour))?;
        Ok(Self {
            full_date: compile(
                "full date",
                r"([A-Za-z]{3,})\s+(\d{1,2}),\s+(\d{1,2}):(\d{2})\s*([AaPpMm]+)",
            )?,
            weekday_time: compile(
                "weekday time",
                r"\b([A-Za-z]{3})[A-Za-z]*\s+(\d{1,2}):(\d{2})\s*([AaPpMm]+)",
            )?,
            cutoff,
            year: cfg.year,
            direction: cfg.weekday_direction,
        })
    }

    /// Resolve the timestamp carried by `line` relative to `reference`.
    pub fn resolve(&self, line: &str, reference: NaiveDateTime) -> Option<NaiveDate> {
        let stamp = if let Some(caps) = self.full_date.captures(line) {
            let month = *MONTHS.get(caps[1].to_lowercase().as_str())?;
            let day = caps[2].parse().ok()?;
            let year = self.year.unwrap_or_else(|| reference.year());
            let date = NaiveDate::from_ymd_opt(year, month, day)?;
            date.and_time(clock_time(&caps[3], &caps[4], &caps[5])?)
        } else if let Some(caps) = self.weekday_time.captures(line) {
            let target = *WEEKDAYS.get(caps[1].to_lowercase().as_str())?;
            let time = clock_time(&caps[2], &caps[3], &caps[4])?;
            weekday_date(target, reference.date(), self.direction)?.and_time(time)
        } else {
            return None;
        };

        if stamp.time() < self.cutoff {
            stamp.date().checked_sub_days(Days::new(1))
        } else {
            Some(stamp.date())
        }
    }

    /// [`resolve`](Self::resolve), formatted as `dd/mm/yyyy`.
    pub fn resolve_formatted(&self, line: &str, reference: NaiveDateTime) -> Option<String> {
        self.resolve(line, reference).map(format_date)
    }
}

fn compile(name: &'static str, pattern: &str) -> Result<Regex, ConfigError> {
    Regex::new(pattern).map_err(|source| ConfigError::InvalidPattern { name, source })
}

/// 12-hour clock fields to a time of day. Hours outside 1-12 and markers other
/// than AM/PM are rejected.
fn clock_time(hour: &str, minute: &str, meridiem: &str) -> Option<NaiveTime> {
    let hour: u32 = hour.parse().ok()?;
    let minute: u32 = minute.parse().ok()?;
    if !(1..=12).contains(&hour) {
        return None;
    }
    let hour = match meridiem.to_uppercase().as_str() {
        "AM" => hour % 12,
        "PM" => hour % 12 + 12,
        _ => return None,
    };
    NaiveTime::from_hms_opt(hour, minute, 0)
}

fn weekday_date(target: Weekday, today: NaiveDate, direction: WeekdayDirection) -> Option<NaiveDate> {
    let target = target.num_days_from_monday();
    let current = today.weekday().num_days_from_monday();
    match direction {
        WeekdayDirection::Forward => today.checked_add_days(Days::new(u64::from((target + 7 - current) % 7))),
        WeekdayDirection::Backward => today.checked_sub_days(Days::new(u64::from((current + 7 - target) % 7))),
    }
}
