use chrono::NaiveDate;

use crate::constants::tokens::PLACEHOLDER_YEAR;

/// Parse an `MM/DD` fragment into a month and day that exist in some year.
fn parse_month_day(text: &str) -> Option<(u32, u32)> {
    let (month, day) = text.split_once('/')?;
    let all_digits = |s: &str| !s.is_empty() && s.len() <= 2 && s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(month) || !all_digits(day) {
        return None;
    }

    let month = month.parse().ok()?;
    let day = day.parse().ok()?;
    // 2000 is a leap year, so Feb 29 passes here and is rechecked against the real year
    NaiveDate::from_ymd_opt(2000, month, day)?;
    Some((month, day))
}

/// Years a written date may carry.
const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1..=9999;

fn format_in_year(month_day: &str, year: i32) -> String {
    if !YEAR_RANGE.contains(&year) {
        return String::new();
    }
    parse_month_day(month_day)
        .and_then(|(month, day)| NaiveDate::from_ymd_opt(year, month, day))
        .map(|date| date.format("%m/%d/%Y").to_string())
        .unwrap_or_default()
}

/// Full birthdate from an `MM/DD` fragment and an age in years.
///
/// The birth year is `reference_year - age`; without a numeric age the
/// placeholder year is used. Unparseable fragments give an empty string.
pub fn format_birthdate(month_day: &str, age: &str, reference_year: i32) -> String {
    let year = if !age.is_empty() && age.bytes().all(|b| b.is_ascii_digit()) {
        age.parse::<i32>()
            .map_or(PLACEHOLDER_YEAR, |years| reference_year - years)
    } else {
        PLACEHOLDER_YEAR
    };
    format_in_year(month_day, year)
}

/// Anniversary from an `MM/DD` fragment, stamped with the placeholder year.
pub fn format_anniversary(month_day: &str) -> String {
    format_in_year(month_day, PLACEHOLDER_YEAR)
}
