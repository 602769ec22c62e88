//! Per-year anchor dates for the season resolver.
//!
//! The table is static configuration: embedded at build time (or supplied as
//! an override file), validated once, and then only read.
use crate::templates;
use crate::util::ymd;
use anyhow::{anyhow, Context, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;

/// Current schema version for anchor table JSON.
pub const ANCHORS_SCHEMA_VERSION: u32 = 1;

/// Anchor dates for one entry year.
///
/// `advent` is the First Sunday of Advent that opens the entry's liturgical
/// year, so it falls in late November or early December of the previous civil
/// year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearAnchors {
    pub easter: NaiveDate,
    pub advent: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnchorTable {
    pub schema_version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub years: BTreeMap<i32, YearAnchors>,
}

impl AnchorTable {
    /// Parse and validate the table embedded at build time.
    pub fn embedded() -> Result<Self> {
        Self::from_json(templates::ANCHORS_JSON).context("parse embedded anchor table")
    }

    /// Load and validate an anchor table override from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("read anchor table {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("load anchor table {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let table: AnchorTable = serde_json::from_str(text).context("parse anchor table JSON")?;
        table.validate()?;
        Ok(table)
    }

    /// Check schema version and the canonical bounds of every anchor date.
    pub fn validate(&self) -> Result<()> {
        if self.schema_version != ANCHORS_SCHEMA_VERSION {
            return Err(anyhow!(
                "unsupported anchor table schema_version {}",
                self.schema_version
            ));
        }
        let Some(range) = self.year_range() else {
            return Err(anyhow!("anchor table has no years"));
        };
        let (first, last) = range.into_inner();
        let expected = usize::try_from(i64::from(last) - i64::from(first) + 1)
            .context("anchor table year span")?;
        if self.years.len() != expected {
            return Err(anyhow!(
                "anchor table years must be contiguous ({first}..={last} has gaps)"
            ));
        }
        for (year, anchors) in &self.years {
            validate_entry(*year, anchors)?;
        }
        Ok(())
    }

    pub fn get(&self, year: i32) -> Option<&YearAnchors> {
        self.years.get(&year)
    }

    /// Easter Sunday of the given civil year.
    pub fn easter_for(&self, year: i32) -> Option<NaiveDate> {
        self.get(year).map(|anchors| anchors.easter)
    }

    /// The Advent start falling in the given civil year.
    ///
    /// Entries are keyed by the liturgical year Advent opens, so this reads
    /// the entry for `year + 1`.
    pub fn advent_in_civil_year(&self, year: i32) -> Option<NaiveDate> {
        let next = year.checked_add(1)?;
        self.get(next)
            .map(|anchors| anchors.advent)
            .filter(|advent| advent.year() == year)
    }

    /// True when the civil year has at least one anchor to resolve against.
    pub fn covers(&self, year: i32) -> bool {
        self.easter_for(year).is_some() || self.advent_in_civil_year(year).is_some()
    }

    /// Entry years present in the table.
    pub fn year_range(&self) -> Option<RangeInclusive<i32>> {
        let (first, _) = self.years.first_key_value()?;
        let (last, _) = self.years.last_key_value()?;
        Some(*first..=*last)
    }
}

fn validate_entry(year: i32, anchors: &YearAnchors) -> Result<()> {
    let earliest_easter = ymd(year, 3, 22).ok_or_else(|| anyhow!("year {year} out of range"))?;
    let latest_easter = ymd(year, 4, 25).ok_or_else(|| anyhow!("year {year} out of range"))?;
    if !(earliest_easter..=latest_easter).contains(&anchors.easter) {
        return Err(anyhow!(
            "{year}: easter {} must fall between {earliest_easter} and {latest_easter}",
            anchors.easter
        ));
    }

    let christmas = ymd(year, 12, 25).ok_or_else(|| anyhow!("year {year} out of range"))?;
    if anchors.advent >= christmas {
        return Err(anyhow!(
            "{year}: advent {} must precede {christmas}",
            anchors.advent
        ));
    }

    // First Sunday of Advent lands between Nov 27 and Dec 3 of the prior year.
    let prior = year
        .checked_sub(1)
        .ok_or_else(|| anyhow!("year {year} out of range"))?;
    let earliest_advent = ymd(prior, 11, 27).ok_or_else(|| anyhow!("year {year} out of range"))?;
    let latest_advent = ymd(prior, 12, 3).ok_or_else(|| anyhow!("year {year} out of range"))?;
    if !(earliest_advent..=latest_advent).contains(&anchors.advent) {
        return Err(anyhow!(
            "{year}: advent {} must fall between {earliest_advent} and {latest_advent}",
            anchors.advent
        ));
    }
    Ok(())
}

#[cfg(test)]
#[path = "anchors_tests.rs"]
mod tests;
