//! Display formatting for dates and amounts.
//!
//! Dates render day-first without zero padding (`15/3/2024`), the way the
//! inventory staff read them. Missing values render as `N/A`.

use chrono::{DateTime, NaiveDate, Utc};

pub const MISSING: &str = "N/A";

pub fn format_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => date.format("%-d/%-m/%Y").to_string(),
        None => MISSING.to_string(),
    }
}

pub fn format_timestamp(timestamp: Option<DateTime<Utc>>) -> String {
    format_date(timestamp.map(|ts| ts.date_naive()))
}

pub fn format_amount(amount: Option<f64>) -> String {
    match amount {
        Some(value) => format!("${value:.2}"),
        None => MISSING.to_string(),
    }
}

/// Cut `text` to at most `max` characters, marking the cut with `…`.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{kept}…")
}
