//! Day-first date parsing
//!
//! Claim dates arrive as free text in whatever shape the hospital's billing
//! export produced. Numeric dates are read day first (`05/01/2024` is the
//! 5th of January). ISO dates keep their year-month-day order. When the
//! day-first reading is impossible (`01/13/2024`) the month-first reading is
//! tried before giving up, the way pandas before 2.0 parsed each element
//! with `dayfirst=True`. Anything unparsable is a missing date, never an
//! error.

use chrono::{NaiveDate, NaiveTime};

/// Parses a claim date with day-first precedence.
///
/// Returns `None` for blank or unparsable input.
pub fn parse_day_first(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let (date_part, time_part) = split_time(trimmed);
    if let Some(time) = time_part {
        if !is_valid_time(time) {
            return None;
        }
    }

    parse_numeric(date_part).or_else(|| parse_month_name(date_part))
}

/// Splits a trailing time-of-day off the date (`"05/01/2024 13:45"`,
/// `"2024-01-05T13:45:00"`).
fn split_time(value: &str) -> (&str, Option<&str>) {
    if let Some((date, time)) = value.split_once('T') {
        if !date.is_empty() && date.chars().all(|c| c.is_ascii_digit() || matches!(c, '-' | '/' | '.')) {
            return (date, Some(time));
        }
    }

    // Only treat the last whitespace token as a time if it looks like one,
    // otherwise "05 Jan 2024" would lose its year.
    match value.rsplit_once(char::is_whitespace) {
        Some((date, time)) if time.contains(':') => (date.trim_end(), Some(time)),
        _ => (value, None),
    }
}

fn is_valid_time(value: &str) -> bool {
    let value = value.trim_end_matches('Z');
    ["%H:%M:%S%.f", "%H:%M:%S", "%H:%M"]
        .iter()
        .any(|fmt| NaiveTime::parse_from_str(value, fmt).is_ok())
}

fn parse_numeric(value: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = value.split(['/', '-', '.']).collect();
    if parts.len() != 3 || parts.iter().any(|p| p.is_empty() || !p.chars().all(|c| c.is_ascii_digit())) {
        return None;
    }

    let numbers: Vec<u32> = parts.iter().filter_map(|p| p.parse().ok()).collect();
    if numbers.len() != 3 {
        return None;
    }

    // Year-first: 2024-01-05
    if parts[0].len() == 4 {
        return NaiveDate::from_ymd_opt(numbers[0] as i32, numbers[1], numbers[2]);
    }

    let year = match parts[2].len() {
        4 => numbers[2] as i32,
        2 => expand_two_digit_year(numbers[2]),
        _ => return None,
    };

    NaiveDate::from_ymd_opt(year, numbers[1], numbers[0])
        .or_else(|| NaiveDate::from_ymd_opt(year, numbers[0], numbers[1]))
}

/// Two-digit years pivot at 69, as strftime's `%y` does
fn expand_two_digit_year(year: u32) -> i32 {
    if year < 69 {
        2000 + year as i32
    } else {
        1900 + year as i32
    }
}

/// `05 Jan 2024`, `5-January-2024`, `05/Jan/24`
fn parse_month_name(value: &str) -> Option<NaiveDate> {
    let normalized: String = value
        .chars()
        .map(|c| if matches!(c, '/' | '-' | '.' | ',') { ' ' } else { c })
        .collect();
    let normalized = normalized.split_whitespace().collect::<Vec<_>>().join(" ");

    let fmt = match normalized.rsplit(' ').next() {
        Some(year) if year.len() == 2 => "%d %b %y",
        _ => "%d %b %Y",
    };
    NaiveDate::parse_from_str(&normalized, fmt).ok()
}
