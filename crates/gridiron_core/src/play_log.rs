//! Append-only play log
//!
//! Records are kept in insertion order and never edited. Export is JSON or
//! CSV; writing a file goes through a temp file and an atomic rename.

use std::fs::{remove_file, rename, File};
use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::LogExportError;
use crate::field::YardLine;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PlayRecord {
    pub timestamp: DateTime<Utc>,
    pub start_label: YardLine,
    pub end_label: YardLine,
    pub yards_gained: i32,
    /// Down after the play, at `spot_label`.
    pub down: u8,
    /// Yards to go after the play.
    pub distance_to_go: i32,
    pub spot_label: YardLine,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct PlayLog {
    records: Vec<PlayRecord>,
}

impl PlayLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn append(&mut self, record: PlayRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[PlayRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlayRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn last(&self) -> Option<&PlayRecord> {
        self.records.last()
    }

    /// Net yards over every logged play.
    pub fn total_yards(&self) -> i32 {
        self.records.iter().map(|r| r.yards_gained).sum()
    }

    pub fn longest_gain(&self) -> Option<i32> {
        self.records.iter().map(|r| r.yards_gained).filter(|y| *y > 0).max()
    }

    pub fn to_json(&self) -> Result<String, LogExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), LogExportError> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for record in &self.records {
            csv_writer.serialize(record)?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    /// Write the log to `path`, as CSV when the extension is `.csv` and JSON otherwise.
    pub fn export_to_path(&self, path: &Path) -> Result<(), LogExportError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

        let temp_path = path.with_extension("tmp");
        if let Err(e) = self.write_then_rename(&temp_path, path, is_csv) {
            let _ = remove_file(&temp_path);
            return Err(e);
        }

        log::debug!("Exported {} plays to {:?}", self.len(), path);
        Ok(())
    }

    fn write_then_rename(
        &self,
        temp_path: &Path,
        path: &Path,
        is_csv: bool,
    ) -> Result<(), LogExportError> {
        {
            let mut file = File::create(temp_path)?;
            if is_csv {
                self.write_csv(&mut file)?;
            } else {
                file.write_all(self.to_json()?.as_bytes())?;
            }
            file.flush()?;
            file.sync_all()?;
        }
        rename(temp_path, path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn record(start: &str, end: &str, yards: i32, down: u8, distance: i32) -> PlayRecord {
        PlayRecord {
            timestamp: Utc.with_ymd_and_hms(2024, 9, 8, 13, 0, 0).unwrap(),
            start_label: start.parse().unwrap(),
            end_label: end.parse().unwrap(),
            yards_gained: yards,
            down,
            distance_to_go: distance,
            spot_label: end.parse().unwrap(),
        }
    }

    fn sample_log() -> PlayLog {
        let mut log = PlayLog::new();
        log.append(record("L20", "L26", 6, 2, 4));
        log.append(record("L26", "L24", -2, 3, 6));
        log.append(record("L24", "L35", 11, 1, 10));
        log
    }

    #[test]
    fn test_insertion_order_and_totals() {
        let log = sample_log();
        assert_eq!(log.len(), 3);
        assert_eq!(log.records()[1].yards_gained, -2);
        assert_eq!(log.last().unwrap().end_label.to_string(), "L35");
        assert_eq!(log.total_yards(), 15);
        assert_eq!(log.longest_gain(), Some(11));
        assert_eq!(PlayLog::new().longest_gain(), None);
    }

    #[test]
    fn test_json_uses_labels() {
        let json = sample_log().to_json().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(parsed.is_array());
        assert_eq!(parsed[0]["start_label"], "L20");
        assert_eq!(parsed[2]["spot_label"], "L35");
        assert_eq!(parsed[1]["yards_gained"], -2);
    }

    #[test]
    fn test_csv_has_header_and_rows() {
        let mut out = Vec::new();
        sample_log().write_csv(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[0],
            "timestamp,start_label,end_label,yards_gained,down,distance_to_go,spot_label"
        );
        assert!(lines[2].ends_with(",L26,L24,-2,3,6,L24"));
    }

    #[test]
    fn test_export_to_path() {
        let temp_dir = TempDir::new().unwrap();
        let json_path = temp_dir.path().join("drive.json");
        let csv_path = temp_dir.path().join("out").join("drive.csv");

        let log = sample_log();
        log.export_to_path(&json_path).unwrap();
        log.export_to_path(&csv_path).unwrap();

        let loaded: PlayLog =
            serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
        assert_eq!(loaded, log);
        assert!(std::fs::read_to_string(&csv_path).unwrap().starts_with("timestamp,"));
        assert!(!json_path.with_extension("tmp").exists());
    }

    #[test]
    fn test_failed_export_removes_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        // A non-empty directory in the way makes the final rename fail.
        let target = temp_dir.path().join("drive.json");
        std::fs::create_dir(&target).unwrap();
        std::fs::write(target.join("keep"), b"x").unwrap();

        let result = sample_log().export_to_path(&target);
        assert!(matches!(result, Err(LogExportError::Io(_))));
        assert!(!temp_dir.path().join("drive.tmp").exists());
        assert!(target.join("keep").exists());
    }
}
