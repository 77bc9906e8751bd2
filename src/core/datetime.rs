//! Date and time phrase recognition.
//!
//! Locates the first calendar date/time expression embedded in free text
//! and resolves it against the local clock. The parser only ever sees the
//! narrow [`DateRecognizer`] interface, so the phrase grammar here can be
//! swapped out without touching parser logic.

use chrono::{Datelike, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

/// A date phrase located in free text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateMatch {
    /// The exact substring that matched, byte-for-byte from the input.
    pub text: String,
    /// The resolved calendar date.
    pub date: NaiveDate,
    /// Time of day, present only when the phrase stated an explicit hour.
    pub time: Option<NaiveTime>,
}

impl DateMatch {
    /// The resolved date as an ISO 8601 string.
    #[must_use]
    pub fn to_iso_date(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Combine date and time into a timestamp, if an hour is known.
    #[must_use]
    pub fn to_datetime(&self) -> Option<NaiveDateTime> {
        self.time.map(|t| NaiveDateTime::new(self.date, t))
    }
}

/// Recognizer for date/time phrases in free text.
///
/// Returns the first recognizable phrase in reading order; later phrases
/// in the same input are ignored.
#[cfg_attr(test, mockall::automock)]
pub trait DateRecognizer {
    fn recognize(&self, input: &str) -> Option<DateMatch>;
}

/// The default recognizer for common English date and time phrases.
///
/// Supported patterns:
/// - `today`, `tomorrow`, `yesterday`
/// - `monday`, `next tuesday`, `next week`
/// - `in 3 days`, `in 2 weeks`, `in 1 month`
/// - `dec 15`, `december 15`, `12/15`, `12/15/2026`, `2026-12-15`
/// - trailing times: `3pm`, `3:30pm`, `15:00`, `morning`, `noon`, `evening`
/// - a leading `by` or `at` is consumed with the phrase
#[derive(Debug, Clone, Copy, Default)]
pub struct NaturalDateRecognizer;

impl DateRecognizer for NaturalDateRecognizer {
    fn recognize(&self, input: &str) -> Option<DateMatch> {
        first_date_phrase(input)
    }
}

/// Longest candidate phrase, in words. Covers "by tomorrow at 5pm".
const MAX_PHRASE_WORDS: usize = 4;

/// Scan left to right for the first word window that resolves to a date.
/// Longer windows are tried first so "tomorrow at 5pm" beats "tomorrow".
fn first_date_phrase(input: &str) -> Option<DateMatch> {
    let words = word_spans(input);

    for start in 0..words.len() {
        let max_len = MAX_PHRASE_WORDS.min(words.len() - start);
        for len in (1..=max_len).rev() {
            let from = words[start].0;
            let to = words[start + len - 1].1;
            let candidate = &input[from..to];

            if let Some((date, time)) = parse_phrase(candidate) {
                return Some(DateMatch {
                    text: candidate.to_string(),
                    date,
                    time,
                });
            }
        }
    }

    None
}

/// Byte spans of whitespace-separated words.
fn word_spans(input: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut start = None;

    for (i, c) in input.char_indices() {
        if c.is_whitespace() {
            if let Some(s) = start.take() {
                spans.push((s, i));
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(s) = start {
        spans.push((s, input.len()));
    }

    spans
}

/// Resolve one candidate phrase to a date and optional time.
fn parse_phrase(candidate: &str) -> Option<(NaiveDate, Option<NaiveTime>)> {
    let lowered = candidate.trim().to_lowercase();
    let stripped = lowered
        .strip_prefix("by ")
        .or_else(|| lowered.strip_prefix("at "))
        .unwrap_or(&lowered);

    let today = Local::now().date_naive();
    let (date_part, time) = extract_time(stripped);

    if date_part.is_empty() {
        // A bare clock time resolves to today.
        return time.map(|t| (today, Some(t)));
    }

    let date = parse_date(&date_part, today)?;
    Some((date, time))
}

/// Parse a date expression with no time component.
fn parse_date(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let input = input.trim();

    match input {
        "today" => return Some(today),
        "tomorrow" => return Some(today + Duration::days(1)),
        "yesterday" => return Some(today - Duration::days(1)),
        _ => {}
    }

    if let Some(date) = parse_relative_offset(input, today) {
        return Some(date);
    }

    if let Some(date) = parse_weekday(input, today) {
        return Some(date);
    }

    if input == "next week" {
        return Some(next_monday(today));
    }

    if let Some(date) = parse_month_day(input, today) {
        return Some(date);
    }

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(date);
    }

    parse_slash_date(input, today)
}

/// "in N days/weeks/months" patterns. Exactly three words, so a window
/// with trailing junk never matches.
fn parse_relative_offset(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let parts: Vec<&str> = input.split_whitespace().collect();

    if parts.len() != 3 || parts[0] != "in" {
        return None;
    }

    let amount: i64 = parts[1].parse().ok()?;
    let unit = parts[2].trim_end_matches('s');

    let days = match unit {
        "day" => amount,
        "week" => amount * 7,
        "month" => amount * 30, // Approximate
        _ => return None,
    };

    Some(today + Duration::days(days))
}

/// Weekday names, optionally prefixed with "next". A plain weekday means
/// its next occurrence; today's weekday rolls over a full week.
fn parse_weekday(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let (is_next, day_str) = input
        .strip_prefix("next ")
        .map_or((false, input), |rest| (true, rest));

    let target = match day_str {
        "monday" | "mon" => Weekday::Mon,
        "tuesday" | "tue" | "tues" => Weekday::Tue,
        "wednesday" | "wed" => Weekday::Wed,
        "thursday" | "thu" | "thur" | "thurs" => Weekday::Thu,
        "friday" | "fri" => Weekday::Fri,
        "saturday" | "sat" => Weekday::Sat,
        "sunday" | "sun" => Weekday::Sun,
        _ => return None,
    };

    let mut days_until = (i64::from(target.num_days_from_sunday())
        - i64::from(today.weekday().num_days_from_sunday())
        + 7)
        % 7;

    if days_until == 0 || (is_next && days_until <= 7) {
        days_until += 7;
    }

    Some(today + Duration::days(days_until))
}

fn next_monday(today: NaiveDate) -> NaiveDate {
    let days_until = (i64::from(Weekday::Mon.num_days_from_sunday())
        - i64::from(today.weekday().num_days_from_sunday())
        + 7)
        % 7;
    let days = if days_until == 0 { 7 } else { days_until };
    today + Duration::days(days)
}

/// "dec 15" / "december 15". Rolls into next year once the date has passed.
fn parse_month_day(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let parts: Vec<&str> = input.split_whitespace().collect();

    if parts.len() != 2 {
        return None;
    }

    let month = parse_month_name(parts[0])?;
    let day: u32 = parts[1].parse().ok()?;

    let date = NaiveDate::from_ymd_opt(today.year(), month, day)?;
    if date < today {
        NaiveDate::from_ymd_opt(today.year() + 1, month, day)
    } else {
        Some(date)
    }
}

fn parse_month_name(input: &str) -> Option<u32> {
    match input {
        "jan" | "january" => Some(1),
        "feb" | "february" => Some(2),
        "mar" | "march" => Some(3),
        "apr" | "april" => Some(4),
        "may" => Some(5),
        "jun" | "june" => Some(6),
        "jul" | "july" => Some(7),
        "aug" | "august" => Some(8),
        "sep" | "sept" | "september" => Some(9),
        "oct" | "october" => Some(10),
        "nov" | "november" => Some(11),
        "dec" | "december" => Some(12),
        _ => None,
    }
}

/// US slash format, MM/DD or MM/DD/YYYY. Two-digit years are 20xx.
fn parse_slash_date(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let parts: Vec<&str> = input.split('/').collect();

    match parts.len() {
        2 => {
            let month: u32 = parts[0].parse().ok()?;
            let day: u32 = parts[1].parse().ok()?;

            let date = NaiveDate::from_ymd_opt(today.year(), month, day)?;
            if date < today {
                NaiveDate::from_ymd_opt(today.year() + 1, month, day)
            } else {
                Some(date)
            }
        }
        3 => {
            let month: u32 = parts[0].parse().ok()?;
            let day: u32 = parts[1].parse().ok()?;
            let year: i32 = parts[2].parse().ok()?;

            let year = if year < 100 { 2000 + year } else { year };
            NaiveDate::from_ymd_opt(year, month, day)
        }
        _ => None,
    }
}

/// Split a trailing time expression off a phrase.
///
/// Returns the date part (possibly empty) and the parsed time.
fn extract_time(input: &str) -> (String, Option<NaiveTime>) {
    let joined = input.replace(" at ", " ").replace(" @ ", " ");
    let parts: Vec<&str> = joined.split_whitespace().collect();

    let Some(last) = parts.last() else {
        return (joined, None);
    };

    if let Some(time) = parse_time(last) {
        let date_part = parts[..parts.len() - 1].join(" ");
        return (date_part, Some(time));
    }

    (joined, None)
}

/// Parse a single clock-time word.
fn parse_time(input: &str) -> Option<NaiveTime> {
    // Named parts of the day resolve to fixed hours.
    match input {
        "morning" => return NaiveTime::from_hms_opt(9, 0, 0),
        "noon" | "midday" => return NaiveTime::from_hms_opt(12, 0, 0),
        "afternoon" => return NaiveTime::from_hms_opt(14, 0, 0),
        "evening" => return NaiveTime::from_hms_opt(18, 0, 0),
        "night" => return NaiveTime::from_hms_opt(21, 0, 0),
        _ => {}
    }

    // 24-hour format (15:00, 9:30)
    if let Ok(time) = NaiveTime::parse_from_str(input, "%H:%M") {
        return Some(time);
    }

    // 12-hour format (3pm, 3:30pm, 12am)
    let (rest, is_pm) = if let Some(rest) = input.strip_suffix("pm") {
        (rest, true)
    } else if let Some(rest) = input.strip_suffix("am") {
        (rest, false)
    } else {
        return None;
    };

    let (hour_str, minute) = match rest.split_once(':') {
        Some((h, m)) => (h, m.parse().ok()?),
        None => (rest, 0),
    };
    let hour: u32 = hour_str.parse().ok()?;

    let hour = match (is_pm, hour) {
        (true, h) if h < 12 => h + 12,
        (false, 12) => 0,
        (_, h) => h,
    };

    NaiveTime::from_hms_opt(hour, minute, 0)
}
