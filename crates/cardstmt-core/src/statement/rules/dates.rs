//! Date parsing for statement date formats.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

use super::patterns::DATE_RANGE;

lazy_static! {
    static ref YMD: Regex = Regex::new(r"^(\d{4})[./\-](\d{1,2})[./\-](\d{1,2})$").unwrap();

    static ref DMY: Regex = Regex::new(r"^(\d{1,2})[./\-](\d{1,2})[./\-](\d{4}|\d{2})$").unwrap();

    static ref DAY_MONTH_NAME: Regex = Regex::new(
        r"^(\d{1,2})(?:st|nd|rd|th)?[\s\-]+([A-Za-z]+)\.?[\s\-,]+(\d{4}|\d{2})$"
    ).unwrap();

    static ref MONTH_NAME_DAY: Regex = Regex::new(
        r"^([A-Za-z]+)\.?\s+(\d{1,2})(?:st|nd|rd|th)?,?\s+(\d{4}|\d{2})$"
    ).unwrap();
}

/// Parse a single date. Two-digit years up to `year_pivot` are in the 2000s,
/// later ones in the 1900s.
pub fn parse_date(s: &str, year_pivot: u32) -> Option<NaiveDate> {
    let s = s.trim();

    // YYYY-MM-DD
    if let Some(caps) = YMD.captures(s) {
        let year: i32 = caps[1].parse().ok()?;
        return NaiveDate::from_ymd_opt(year, caps[2].parse().ok()?, caps[3].parse().ok()?);
    }

    // DD/MM/YYYY, DD-MM-YYYY, DD.MM.YYYY and two-digit years
    if let Some(caps) = DMY.captures(s) {
        let year = parse_year(&caps[3], year_pivot)?;
        return NaiveDate::from_ymd_opt(year, caps[2].parse().ok()?, caps[1].parse().ok()?);
    }

    // 16 Oct 2024, 12-Oct-24
    if let Some(caps) = DAY_MONTH_NAME.captures(s) {
        let month = month_to_number(&caps[2])?;
        let year = parse_year(&caps[3], year_pivot)?;
        return NaiveDate::from_ymd_opt(year, month, caps[1].parse().ok()?);
    }

    // October 16, 2024
    if let Some(caps) = MONTH_NAME_DAY.captures(s) {
        let month = month_to_number(&caps[1])?;
        let year = parse_year(&caps[3], year_pivot)?;
        return NaiveDate::from_ymd_opt(year, month, caps[2].parse().ok()?);
    }

    None
}

/// Parse a date range such as `16/09/2024 - 15/10/2024` or
/// `17 Sep 24 to 16 Oct 24`.
pub fn parse_date_range(s: &str, year_pivot: u32) -> Option<(NaiveDate, NaiveDate)> {
    let s = s.trim();
    let caps = DATE_RANGE.captures(s)?;
    let whole = caps.get(0)?;
    if whole.start() != 0 || whole.end() != s.len() {
        return None;
    }

    let from = parse_date(&caps[1], year_pivot)?;
    let to = parse_date(&caps[2], year_pivot)?;
    Some((from, to))
}

fn parse_year(s: &str, year_pivot: u32) -> Option<i32> {
    let year: u32 = s.parse().ok()?;
    let year = match s.len() {
        2 if year <= year_pivot => 2000 + year,
        2 => 1900 + year,
        4 => year,
        _ => return None,
    };
    i32::try_from(year).ok()
}

fn month_to_number(month: &str) -> Option<u32> {
    let month = month.to_lowercase();
    let number = match month.as_str() {
        "jan" | "january" => 1,
        "feb" | "february" => 2,
        "mar" | "march" => 3,
        "apr" | "april" => 4,
        "may" => 5,
        "jun" | "june" => 6,
        "jul" | "july" => 7,
        "aug" | "august" => 8,
        "sep" | "sept" | "september" => 9,
        "oct" | "october" => 10,
        "nov" | "november" => 11,
        "dec" | "december" => 12,
        _ => return None,
    };
    Some(number)
}
