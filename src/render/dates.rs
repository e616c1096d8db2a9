//! Date range formatting for the experience timeline (en-US, "Mon YYYY").

use chrono::{DateTime, NaiveDate};

/// Parse the date shapes found in `experience.json`:
/// `2021-03-15`, `2021-03`, `2021`, or a full RFC 3339 timestamp.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(date) = NaiveDate::parse_from_str(&format!("{}-01", raw), "%Y-%m-%d") {
        return Some(date);
    }
    if raw.len() == 4 {
        if let Ok(year) = raw.parse::<i32>() {
            return NaiveDate::from_ymd_opt(year, 1, 1);
        }
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.date_naive())
}

/// "Mar 2021". Unparseable input is returned verbatim.
pub fn format_month_year(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => date.format("%b %Y").to_string(),
        None => {
            tracing::warn!("Unparseable date '{}', rendering as-is", raw);
            raw.to_string()
        }
    }
}

/// "Mar 2021 - Present" for current roles, otherwise "Mar 2021 - Dec 2022".
/// A finished role with no end date shows its start date alone.
pub fn format_date_range(start: &str, end: Option<&str>, current: bool) -> String {
    let start_str = format_month_year(start);
    if current {
        return format!("{} - Present", start_str);
    }
    match end {
        Some(end) => format!("{} - {}", start_str, format_month_year(end)),
        None => {
            tracing::warn!("Role starting '{}' is not current but has no end date", start);
            start_str
        }
    }
}
