//! Shared test infrastructure for integration tests.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::NamedTempFile;

/// Result of one `season` invocation.
#[derive(Debug)]
pub struct RunOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl RunOutput {
    /// Parse stdout as JSON, panicking with stderr on failure.
    pub fn json(&self) -> serde_json::Value {
        assert!(self.success, "season failed: {}", self.stderr);
        serde_json::from_str(&self.stdout)
            .unwrap_or_else(|err| panic!("invalid JSON ({err}): {}", self.stdout))
    }
}

fn season_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_season"))
}

/// Run the `season` binary with logging pinned so stderr stays predictable.
pub fn run_season(args: &[&str]) -> RunOutput {
    let output = Command::new(season_binary())
        .args(args)
        .env("SEASON_LOG", "warn")
        .output()
        .expect("spawn season binary");
    RunOutput {
        success: output.status.success(),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Write an anchor table override to a temp file that lives as long as the
/// returned handle.
pub fn anchor_override(years: serde_json::Value) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create anchor override");
    let table = serde_json::json!({ "schema_version": 1, "years": years });
    file.write_all(table.to_string().as_bytes())
        .expect("write anchor override");
    file
}

pub fn path_arg(path: &Path) -> String {
    path.display().to_string()
}
