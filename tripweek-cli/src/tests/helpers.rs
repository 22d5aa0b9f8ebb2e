//! Test helpers for writing planning snapshots to disk.

use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tempfile::TempDir;

/// Snapshot with one Paris conference, a June vacation, one claimed week,
/// and two queued trips.
pub(super) const SAMPLE_SNAPSHOT: &str = r#"{
  "events": [
    {
      "id": "e1",
      "title": "Paris Conference",
      "type": "conference",
      "location": "Paris",
      "startDate": "2025-05-13",
      "endDate": "2025-05-15",
      "isFixed": true
    }
  ],
  "constraints": [
    {
      "id": "c1",
      "title": "Annual leave",
      "type": "vacation",
      "startDate": "2025-06-09",
      "endDate": "2025-06-13"
    }
  ],
  "claims": ["2025-04-02"],
  "trips": [
    { "title": "Paris visit", "location": "Paris", "quarter": 2 },
    { "title": "Berlin visit", "location": "Berlin", "quarter": 2 }
  ]
}"#;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents).expect("write test file");
}

/// A temporary directory holding a single snapshot file.
pub(super) struct SnapshotDir {
    _dir: TempDir,
    path: Utf8PathBuf,
}

impl SnapshotDir {
    pub(super) fn with_contents(contents: &str) -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        let path = root.join("snapshot.json");
        write_utf8(&path, contents.as_bytes());
        Self { _dir: dir, path }
    }

    pub(super) fn sample() -> Self {
        Self::with_contents(SAMPLE_SNAPSHOT)
    }

    pub(super) fn path(&self) -> &Utf8Path {
        &self.path
    }
}
