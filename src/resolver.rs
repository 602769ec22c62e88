//! Date-to-season classification.
//!
//! Boundaries are derived per call from the anchor table: Lent, Easter and
//! Pentecost are offsets from Easter Sunday, Advent comes from its own anchor,
//! and Christmas is fixed to December 25 through Epiphany (January 6).
//! Epiphany itself is not a season; the days after it belong to Ordinary
//! Time, which therefore occupies two disjoint blocks of the year.
use crate::anchors::AnchorTable;
use crate::season::{Season, CANONICAL_ORDER};
use crate::util::ymd;
use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;

const ASH_WEDNESDAY_OFFSET: Days = Days::new(46);
const PENTECOST_OFFSET: Days = Days::new(49);
const PENTECOST_LENGTH: Days = Days::new(7);

/// Dates that move with Easter Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MovableFeasts {
    pub ash_wednesday: NaiveDate,
    pub easter: NaiveDate,
    pub pentecost: NaiveDate,
    /// First day after the Pentecost week.
    pub pentecost_end: NaiveDate,
}

impl MovableFeasts {
    pub fn from_easter(easter: NaiveDate) -> Option<Self> {
        let ash_wednesday = easter.checked_sub_days(ASH_WEDNESDAY_OFFSET)?;
        let pentecost = easter.checked_add_days(PENTECOST_OFFSET)?;
        let pentecost_end = pentecost.checked_add_days(PENTECOST_LENGTH)?;
        Some(Self {
            ash_wednesday,
            easter,
            pentecost,
            pentecost_end,
        })
    }
}

/// Season boundaries for one civil year.
///
/// `movable` is absent when the table has no Easter for the year and
/// `advent` is absent when no Advent start falls inside it; the fixed
/// Christmas dates are always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeasonBoundaries {
    pub year: i32,
    pub new_year: NaiveDate,
    pub epiphany: NaiveDate,
    pub movable: Option<MovableFeasts>,
    pub advent: Option<NaiveDate>,
    pub christmas: NaiveDate,
    pub next_new_year: NaiveDate,
}

/// Half-open date range `[start, end)` mapped to a season.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonRange {
    pub season: Season,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl SeasonRange {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }
}

/// Inclusive span of days in one season, for calendar listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeasonSpan {
    pub season: Season,
    pub first_day: NaiveDate,
    pub last_day: NaiveDate,
}

impl SeasonBoundaries {
    /// Derive the boundaries of `year`, or `None` when the table has no
    /// anchor for it at all.
    pub fn for_year(year: i32, table: &AnchorTable) -> Option<Self> {
        if !table.covers(year) {
            return None;
        }
        let movable = match table.easter_for(year) {
            Some(easter) => Some(MovableFeasts::from_easter(easter)?),
            None => None,
        };
        Some(Self {
            year,
            new_year: ymd(year, 1, 1)?,
            epiphany: ymd(year, 1, 6)?,
            movable,
            advent: table.advent_in_civil_year(year),
            christmas: ymd(year, 12, 25)?,
            next_new_year: ymd(year.checked_add(1)?, 1, 1)?,
        })
    }

    /// Season ranges in chronological (and priority) order.
    ///
    /// With every anchor present the ranges tile the year exactly once.
    pub fn ranges(&self) -> Vec<SeasonRange> {
        let mut ranges = Vec::with_capacity(8);
        let after_epiphany = self.epiphany.succ_opt().unwrap_or(self.epiphany);
        let advent_or_christmas = self.advent.unwrap_or(self.christmas);

        ranges.push(SeasonRange {
            season: Season::Christmas,
            start: self.new_year,
            end: after_epiphany,
        });
        if let Some(feasts) = &self.movable {
            ranges.push(SeasonRange {
                season: Season::OrdinaryTime,
                start: after_epiphany,
                end: feasts.ash_wednesday,
            });
            ranges.push(SeasonRange {
                season: Season::Lent,
                start: feasts.ash_wednesday,
                end: feasts.easter,
            });
            ranges.push(SeasonRange {
                season: Season::Easter,
                start: feasts.easter,
                end: feasts.pentecost,
            });
            ranges.push(SeasonRange {
                season: Season::Pentecost,
                start: feasts.pentecost,
                end: feasts.pentecost_end,
            });
            ranges.push(SeasonRange {
                season: Season::OrdinaryTime,
                start: feasts.pentecost_end,
                end: advent_or_christmas,
            });
        }
        if let Some(advent) = self.advent {
            ranges.push(SeasonRange {
                season: Season::Advent,
                start: advent,
                end: self.christmas,
            });
        }
        ranges.push(SeasonRange {
            season: Season::Christmas,
            start: self.christmas,
            end: self.next_new_year,
        });
        ranges
    }

    /// First range containing `date`, if any.
    pub fn classify(&self, date: NaiveDate) -> Option<Season> {
        self.ranges()
            .into_iter()
            .find(|range| range.contains(date))
            .map(|range| range.season)
    }
}

/// Season in effect on `today` (a local civil date).
///
/// Years without any anchor resolve to Ordinary Time, as does any date the
/// derived ranges fail to cover.
pub fn current_season(today: NaiveDate, table: &AnchorTable) -> Season {
    SeasonBoundaries::for_year(today.year(), table)
        .and_then(|boundaries| boundaries.classify(today))
        .unwrap_or(Season::OrdinaryTime)
}

/// Canonical season order rotated to start at the current season.
pub fn season_display_order(today: NaiveDate, table: &AnchorTable) -> [Season; 6] {
    let mut order = CANONICAL_ORDER;
    order.rotate_left(current_season(today, table).canonical_index());
    order
}

/// Contiguous season spans covering January 1 through December 31 of `year`.
///
/// Returns `None` unless the year has an Easter anchor, since the movable
/// seasons cannot be placed without it.
pub fn season_spans(year: i32, table: &AnchorTable) -> Option<Vec<SeasonSpan>> {
    let boundaries = SeasonBoundaries::for_year(year, table)
        .filter(|boundaries| boundaries.movable.is_some())?;
    let spans = boundaries
        .ranges()
        .into_iter()
        .filter(|range| range.start < range.end)
        .filter_map(|range| {
            Some(SeasonSpan {
                season: range.season,
                first_day: range.start,
                last_day: range.end.pred_opt()?,
            })
        })
        .collect();
    Some(spans)
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
