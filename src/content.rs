//! Per-season homepage content records.
//!
//! Seasons without an available record hide the homepage video section.
use crate::season::Season;
use crate::templates;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Current schema version for season content JSON.
pub const CONTENT_SCHEMA_VERSION: u32 = 1;

const VIDEO_EMBED_BASE: &str = "https://www.youtube.com/embed/";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonContent {
    pub available: bool,
    #[serde(default)]
    pub video_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub pdf_url: String,
}

impl SeasonContent {
    pub fn embed_url(&self) -> String {
        format!("{VIDEO_EMBED_BASE}{}", self.video_id)
    }
}

/// Content records keyed by season key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentTable {
    pub schema_version: u32,
    pub seasons: BTreeMap<String, SeasonContent>,
}

impl ContentTable {
    pub fn embedded() -> Result<Self> {
        Self::from_json(templates::SEASON_CONTENT_JSON).context("parse embedded season content")
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let table: ContentTable =
            serde_json::from_str(text).context("parse season content JSON")?;
        table.validate()?;
        Ok(table)
    }

    pub fn validate(&self) -> Result<()> {
        if self.schema_version != CONTENT_SCHEMA_VERSION {
            return Err(anyhow!(
                "unsupported season content schema_version {}",
                self.schema_version
            ));
        }
        for (key, content) in &self.seasons {
            key.parse::<Season>()
                .with_context(|| format!("season content key {key:?}"))?;
            if content.available
                && (content.video_id.trim().is_empty() || content.title.trim().is_empty())
            {
                return Err(anyhow!(
                    "season content {key:?} is available but has no video_id or title"
                ));
            }
        }
        Ok(())
    }

    /// Content to show for `season`, or `None` when the section is hidden.
    pub fn content_for(&self, season: Season) -> Option<&SeasonContent> {
        self.seasons
            .get(season.as_str())
            .filter(|content| content.available)
    }
}
