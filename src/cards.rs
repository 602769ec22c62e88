//! Season cards ordered for the homepage carousel.
use crate::anchors::AnchorTable;
use crate::resolver::season_display_order;
use crate::season::Season;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeasonCard {
    pub season: Season,
    pub label: &'static str,
    pub current: bool,
}

/// One card per season in display order; only the first is marked current.
pub fn season_cards(today: NaiveDate, table: &AnchorTable) -> Vec<SeasonCard> {
    season_display_order(today, table)
        .into_iter()
        .enumerate()
        .map(|(index, season)| SeasonCard {
            season,
            label: season.label(),
            current: index == 0,
        })
        .collect()
}
