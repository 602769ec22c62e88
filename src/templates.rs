pub const ANCHORS_JSON: &str = include_str!("../templates/anchors.json");
pub const SEASON_CONTENT_JSON: &str = include_str!("../templates/season_content.json");
