use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use serde::Serialize;

pub fn ymd(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Today's local civil date with time-of-day stripped.
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

pub fn parse_date(raw: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("serialize JSON output")?;
    println!("{json}");
    Ok(())
}
