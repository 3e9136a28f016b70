//! Per-field save/load transforms.
//!
//! Plain functions attached to individual fields by the model definitions.

use chrono::{NaiveDate, NaiveDateTime};

/// Wire format of date fields (`15/06/2024`).
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Wire format of timestamp fields (`15/06/2024 08:30:00`).
pub const DATE_TIME_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

pub fn save_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn load_date(text: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT)
        .map_err(|e| format!("invalid date '{text}' (expected dd/mm/yyyy): {e}"))
}

pub fn save_date_time(value: &NaiveDateTime) -> String {
    value.format(DATE_TIME_FORMAT).to_string()
}

pub fn load_date_time(text: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(text.trim(), DATE_TIME_FORMAT)
        .map_err(|e| format!("invalid timestamp '{text}' (expected dd/mm/yyyy HH:MM:SS): {e}"))
}

/// Flags the API models as integers.
pub fn save_flag(flag: &bool) -> String {
    if *flag { "1" } else { "0" }.to_string()
}

pub fn load_flag(text: &str) -> Result<bool, String> {
    match text.trim() {
        "1" | "true" => Ok(true),
        "0" | "false" => Ok(false),
        other => Err(format!("invalid flag '{other}'")),
    }
}
