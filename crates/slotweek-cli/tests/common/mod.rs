//! Common helpers for slotweek-cli integration tests.

use std::path::PathBuf;
use tempfile::TempDir;

/// A temp directory holding the files of one test.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    /// Creates an empty workspace.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    /// Writes `content` to `name` and returns its path.
    pub fn file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content).expect("write fixture");
        path
    }

    /// A path inside the workspace that does not exist yet.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

/// Two Monday blocks: 09:00-11:00 and 13:00-15:00.
pub const MONDAY_EVENTS: &str = r#"[
  { "kind": "down",  "day": "MONDAY", "slot": 2 },
  { "kind": "enter", "day": "MONDAY", "slot": 3 },
  { "kind": "enter", "day": "MONDAY", "slot": 4 },
  { "kind": "enter", "day": "MONDAY", "slot": 5 },
  { "kind": "up" },
  { "kind": "down",  "day": "MONDAY", "slot": 10 },
  { "kind": "enter", "day": "MONDAY", "slot": 13 },
  { "kind": "up" }
]"#;

/// A drag out to slot 10 that retreats to slot 6 before release.
pub const RETREATING_EVENTS: &str = r#"[
  { "kind": "down",  "day": "MONDAY", "slot": 4 },
  { "kind": "enter", "day": "MONDAY", "slot": 10 },
  { "kind": "enter", "day": "MONDAY", "slot": 6 },
  { "kind": "leave" }
]"#;

/// A complete form.
pub const CHESS_FORM: &str = r#"
organization = "Chess Club"
facility_id = 3
schedule_type = "CLUB"
valid_start_date = "2026-03-02"
valid_end_date = "2026-06-26"
"#;
