use crate::anchors::AnchorTable;
use crate::cards::season_cards;
use crate::cli::{AnchorsArgs, CalendarArgs, DateArgs};
use crate::content::{ContentTable, SeasonContent};
use crate::resolver::{current_season, season_spans, SeasonBoundaries, SeasonSpan};
use crate::season::Season;
use crate::util::{print_json, today_local};
use anyhow::{anyhow, Result};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct CurrentReport {
    date: NaiveDate,
    season: Season,
    label: &'static str,
}

#[derive(Serialize)]
struct ContentReport<'a> {
    date: NaiveDate,
    season: Season,
    content: Option<&'a SeasonContent>,
    embed_url: Option<String>,
}

#[derive(Serialize)]
struct CalendarReport<'a> {
    boundaries: &'a SeasonBoundaries,
    spans: &'a [SeasonSpan],
}

/// Load the active anchor table once; it is read-only afterwards.
pub fn load_anchor_table(path: Option<&Path>) -> Result<AnchorTable> {
    let table = match path {
        Some(path) => AnchorTable::load(path)?,
        None => AnchorTable::embedded()?,
    };
    tracing::debug!(
        years = ?table.year_range(),
        override_path = ?path,
        "anchor table loaded"
    );
    Ok(table)
}

fn resolve_date(date: Option<NaiveDate>, table: &AnchorTable) -> NaiveDate {
    let date = date.unwrap_or_else(today_local);
    if !table.covers(date.year()) {
        tracing::warn!(
            %date,
            "no anchor dates for {}; using ordinary-time",
            date.year()
        );
    }
    date
}

pub fn run_current(args: DateArgs, table: &AnchorTable) -> Result<()> {
    let date = resolve_date(args.date, table);
    let season = current_season(date, table);
    tracing::debug!(%date, %season, "resolved season");
    if args.json {
        return print_json(&CurrentReport {
            date,
            season,
            label: season.label(),
        });
    }
    println!("{season}");
    Ok(())
}

pub fn run_order(args: DateArgs, table: &AnchorTable) -> Result<()> {
    let date = resolve_date(args.date, table);
    let cards = season_cards(date, table);
    if args.json {
        return print_json(&cards);
    }
    for card in &cards {
        if card.current {
            println!("{} (current)", card.season);
        } else {
            println!("{}", card.season);
        }
    }
    Ok(())
}

pub fn run_calendar(args: CalendarArgs, table: &AnchorTable) -> Result<()> {
    let year = args.year;
    let (Some(boundaries), Some(spans)) = (
        SeasonBoundaries::for_year(year, table),
        season_spans(year, table),
    ) else {
        return Err(anyhow!("no easter anchor for {year} in the anchor table"));
    };
    if args.json {
        return print_json(&CalendarReport {
            boundaries: &boundaries,
            spans: &spans,
        });
    }
    for span in &spans {
        println!(
            "{}  {}  {}",
            span.first_day,
            span.last_day,
            span.season.label()
        );
    }
    Ok(())
}

pub fn run_content(args: DateArgs, table: &AnchorTable) -> Result<()> {
    let date = resolve_date(args.date, table);
    let season = current_season(date, table);
    let contents = ContentTable::embedded()?;
    let content = contents.content_for(season);
    if args.json {
        return print_json(&ContentReport {
            date,
            season,
            content,
            embed_url: content.map(|content| content.embed_url()),
        });
    }
    match content {
        Some(content) => {
            println!("season: {season}");
            println!("title: {}", content.title);
            println!("video: {}", content.embed_url());
            if !content.description.is_empty() {
                println!("description: {}", content.description);
            }
            println!("pdf: {}", content.pdf_url);
        }
        None => println!("season: {season} (no content; section hidden)"),
    }
    Ok(())
}

pub fn run_anchors(args: AnchorsArgs, table: &AnchorTable) -> Result<()> {
    if args.json {
        return print_json(table);
    }
    if let Some(source) = &table.source {
        println!("source: {source}");
    }
    for (year, anchors) in &table.years {
        println!(
            "{year}  easter {}  advent {}",
            anchors.easter, anchors.advent
        );
    }
    Ok(())
}
