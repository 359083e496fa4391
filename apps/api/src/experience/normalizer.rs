//! Experience Normalizer: turns one loosely-shaped experience record into a year
//! count and a display title.
//!
//! Stored experience lists come from résumé parsing and share no schema: a record may
//! carry `years` or `duration` (number or numeric string), a `fecha_inicio`/`fecha_fin`
//! date pair, and a title under `title`, `position` or `cargo`. `ExperienceEntry::parse`
//! is the single typed view over that JSON; `years_of` and `title_of` never fail.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde_json::{Map, Value};

/// Title returned when a record names no role.
pub const NOT_SPECIFIED: &str = "Not specified";

const DAYS_PER_YEAR: f64 = 365.25;
const SECONDS_PER_DAY: f64 = 86_400.0;

/// The record was not a JSON object (null, scalar, or array).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotAMapping;

/// Typed view over one experience record. Fields are `None` when absent or wrong-typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExperienceEntry<'a> {
    pub title: Option<&'a str>,
    pub position: Option<&'a str>,
    pub cargo: Option<&'a str>,
    pub years: Option<f64>,
    pub duration: Option<f64>,
    pub start_date: Option<&'a str>,
    pub end_date: Option<&'a str>,
}

impl<'a> ExperienceEntry<'a> {
    pub fn parse(value: &'a Value) -> Result<Self, NotAMapping> {
        let map = value.as_object().ok_or(NotAMapping)?;
        Ok(Self::from_map(map))
    }

    fn from_map(map: &'a Map<String, Value>) -> Self {
        Self {
            title: text_field(map, "title"),
            position: text_field(map, "position"),
            cargo: text_field(map, "cargo"),
            years: numeric_field(map, "years"),
            duration: numeric_field(map, "duration"),
            start_date: map.get("fecha_inicio").and_then(Value::as_str),
            end_date: map.get("fecha_fin").and_then(Value::as_str),
        }
    }

    /// Years of experience: `years`, then `duration`, then the date span, then 0.
    pub fn years(&self) -> f64 {
        if let Some(years) = self.years.or(self.duration) {
            return years;
        }
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => years_between(start, end).unwrap_or(0.0),
            _ => 0.0,
        }
    }

    /// Display title: `title`, then `position`, then `cargo`, then [`NOT_SPECIFIED`].
    pub fn title(&self) -> &'a str {
        self.title
            .or(self.position)
            .or(self.cargo)
            .unwrap_or(NOT_SPECIFIED)
    }
}

/// Years of experience carried by one record. Never fails; malformed input yields 0.
pub fn years_of(value: &Value) -> f64 {
    ExperienceEntry::parse(value)
        .map(|entry| entry.years())
        .unwrap_or(0.0)
}

/// Display title of one record, or [`NOT_SPECIFIED`].
pub fn title_of(value: &Value) -> &str {
    ExperienceEntry::parse(value)
        .map(|entry| entry.title())
        .unwrap_or(NOT_SPECIFIED)
}

/// Total years across a candidate's experience list.
/// Non-object elements are dropped before summing; a missing or non-array list is 0.
pub fn total_years(experience: Option<&Value>) -> f64 {
    experience
        .and_then(Value::as_array)
        .map(|records| {
            records
                .iter()
                .filter_map(|record| ExperienceEntry::parse(record).ok())
                .map(|entry| entry.years())
                .sum()
        })
        .unwrap_or(0.0)
}

/// Title of the first record in the list, which is the most recent role by convention.
pub fn primary_title(experience: Option<&Value>) -> &str {
    experience
        .and_then(Value::as_array)
        .and_then(|records| records.first())
        .map(title_of)
        .unwrap_or(NOT_SPECIFIED)
}

fn text_field<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    map.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
}

fn numeric_field(map: &Map<String, Value>, key: &str) -> Option<f64> {
    match map.get(key)? {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}

/// Elapsed years between two ISO dates, rounded to one decimal.
/// `None` if either side does not parse or the range runs backwards.
fn years_between(start: &str, end: &str) -> Option<f64> {
    let start = parse_instant(start)?;
    let end = parse_instant(end)?;
    let days = (end - start).num_seconds() as f64 / SECONDS_PER_DAY;
    if days < 0.0 {
        return None;
    }
    Some(((days / DAYS_PER_YEAR) * 10.0).round() / 10.0)
}

fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|d| d.and_time(NaiveTime::MIN).and_utc())
}
