use super::*;
use std::io::Write;

fn date(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").expect("valid test date")
}

fn table_json(years: serde_json::Value) -> String {
    serde_json::json!({
        "schema_version": ANCHORS_SCHEMA_VERSION,
        "years": years
    })
    .to_string()
}

#[test]
fn embedded_table_covers_2025_through_2035() {
    let table = AnchorTable::embedded().expect("embedded anchor table");
    assert_eq!(table.year_range(), Some(2025..=2035));
    let anchors = table.get(2025).expect("2025 entry");
    assert_eq!(anchors.easter, date("2025-04-20"));
    assert_eq!(anchors.advent, date("2024-11-30"));
    assert_eq!(table.easter_for(2035), Some(date("2035-03-25")));
}

#[test]
fn advent_lookup_uses_the_following_entry() {
    let table = AnchorTable::embedded().expect("embedded anchor table");
    assert_eq!(table.advent_in_civil_year(2024), Some(date("2024-11-30")));
    assert_eq!(table.advent_in_civil_year(2027), Some(date("2027-12-03")));
    assert_eq!(table.advent_in_civil_year(2035), None);
    assert!(table.covers(2024));
    assert!(table.covers(2035));
    assert!(!table.covers(2023));
    assert!(!table.covers(2036));
}

#[test]
fn rejects_easter_outside_canonical_bounds() {
    let text = table_json(serde_json::json!({
        "2025": { "easter": "2025-03-21", "advent": "2024-11-30" }
    }));
    let err = AnchorTable::from_json(&text).expect_err("easter too early");
    assert!(err.to_string().contains("easter"), "{err}");

    let text = table_json(serde_json::json!({
        "2025": { "easter": "2025-04-26", "advent": "2024-11-30" }
    }));
    assert!(AnchorTable::from_json(&text).is_err());
}

#[test]
fn rejects_advent_outside_the_prior_year_window() {
    let text = table_json(serde_json::json!({
        "2025": { "easter": "2025-04-20", "advent": "2025-11-30" }
    }));
    let err = AnchorTable::from_json(&text).expect_err("advent keyed to wrong year");
    assert!(err.to_string().contains("advent"), "{err}");

    let text = table_json(serde_json::json!({
        "2025": { "easter": "2025-04-20", "advent": "2024-11-20" }
    }));
    assert!(AnchorTable::from_json(&text).is_err());
}

#[test]
fn rejects_gaps_empty_tables_and_unknown_schema() {
    let gap = table_json(serde_json::json!({
        "2025": { "easter": "2025-04-20", "advent": "2024-11-30" },
        "2027": { "easter": "2027-03-28", "advent": "2026-11-28" }
    }));
    let err = AnchorTable::from_json(&gap).expect_err("gap in years");
    assert!(err.to_string().contains("contiguous"), "{err}");

    let empty = table_json(serde_json::json!({}));
    assert!(AnchorTable::from_json(&empty).is_err());

    let future = serde_json::json!({
        "schema_version": ANCHORS_SCHEMA_VERSION + 1,
        "years": { "2025": { "easter": "2025-04-20", "advent": "2024-11-30" } }
    })
    .to_string();
    let err = AnchorTable::from_json(&future).expect_err("unknown schema");
    assert!(err.to_string().contains("schema_version"), "{err}");
}

#[test]
fn load_reads_an_override_file() {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    let text = table_json(serde_json::json!({
        "2026": { "easter": "2026-04-05", "advent": "2025-11-29" }
    }));
    file.write_all(text.as_bytes()).expect("write override");

    let table = AnchorTable::load(file.path()).expect("load override");
    assert_eq!(table.year_range(), Some(2026..=2026));
    assert_eq!(table.advent_in_civil_year(2025), Some(date("2025-11-29")));
}

#[test]
fn load_reports_the_path_on_failure() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let missing = dir.path().join("anchors.json");
    let err = AnchorTable::load(&missing).expect_err("missing file");
    assert!(
        format!("{err:#}").contains("anchors.json"),
        "unexpected error: {err:#}"
    );
}
