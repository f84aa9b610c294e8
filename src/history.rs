use std::{
    fs, io,
    path::{Path, PathBuf},
    time::{SystemTime, UNIX_EPOCH},
};

use serde::{Deserialize, Serialize};

pub(crate) const DEFAULT_HISTORY_FILE: &str = "history.json";

#[derive(Debug, thiserror::Error)]
pub(crate) enum HistoryError {
    #[error("Failed to access history file: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to encode history: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Status {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct HistoryEntry {
    /// `YYYY-MM-DD HH:MM:SS`, UTC.
    pub timestamp: String,
    pub expression: String,
    pub result: String,
    pub status: Status,
}

/// Past calculations, stored as a JSON array in a single file.
pub(crate) struct History {
    path: PathBuf,
}

impl History {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing or unreadable file is an empty history.
    pub fn load(&self) -> Vec<HistoryEntry> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(why) => {
                if why.kind() != io::ErrorKind::NotFound {
                    log::warn!("Cannot read {}: {why}", self.path.display());
                }
                return vec![];
            }
        };

        match serde_json::from_str(&data) {
            Ok(entries) => entries,
            Err(why) => {
                log::warn!("Ignoring corrupt history {}: {why}", self.path.display());
                vec![]
            }
        }
    }

    pub fn save(
        &self,
        expression: &str,
        result: &str,
        status: Status,
    ) -> Result<(), HistoryError> {
        let mut entries = self.load();
        entries.push(HistoryEntry {
            timestamp: now(),
            expression: expression.to_string(),
            result: result.to_string(),
            status,
        });

        self.write(&entries)
    }

    pub fn clear(&self) -> Result<(), HistoryError> {
        match fs::remove_file(&self.path) {
            Err(why) if why.kind() != io::ErrorKind::NotFound => Err(why.into()),
            _ => Ok(()),
        }
    }

    fn write(&self, entries: &[HistoryEntry]) -> Result<(), HistoryError> {
        let json = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, json)?;
        log::debug!("Wrote {} entries to {}", entries.len(), self.path.display());
        Ok(())
    }
}

fn now() -> String {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    format_timestamp(secs)
}

/// Formats seconds since the UNIX epoch as `YYYY-MM-DD HH:MM:SS` (UTC).
fn format_timestamp(secs: u64) -> String {
    let (days, rem) = (secs / 86_400, secs % 86_400);
    let (hour, min, sec) = (rem / 3600, rem % 3600 / 60, rem % 60);

    // days -> proleptic Gregorian date, counting in 400 year eras from 0000-03-01
    let z = days + 719_468;
    let era = z / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + u64::from(month <= 2);

    format!("{year:04}-{month:02}-{day:02} {hour:02}:{min:02}:{sec:02}")
}

#[cfg(test)]
pub(crate) mod test {
    use std::{fs, path::PathBuf};

    use super::{format_timestamp, History, Status};

    pub(crate) fn temp_history(name: &str) -> History {
        let path: PathBuf = std::env::temp_dir().join(format!(
            "calc-{}-{name}.json",
            std::process::id()
        ));
        let _ = fs::remove_file(&path);
        History::new(path)
    }

    #[test]
    fn missing_file_is_empty() {
        let history = temp_history("missing");
        assert!(history.load().is_empty());
        assert!(history.clear().is_ok());
    }

    #[test]
    fn save_appends() {
        let history = temp_history("append");
        history.save("2 + 3", "5", Status::Success).unwrap();
        history
            .save("5 / 0", "Division by zero", Status::Error)
            .unwrap();

        let entries = history.load();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].expression, "2 + 3");
        assert_eq!(entries[0].result, "5");
        assert_eq!(entries[0].status, Status::Success);
        assert_eq!(entries[1].status, Status::Error);
        assert!(entries[0].timestamp <= entries[1].timestamp);
        assert_eq!(entries[0].timestamp.len(), "1970-01-01 00:00:00".len());

        history.clear().unwrap();
        assert!(history.load().is_empty());
    }

    #[test]
    fn timestamps() {
        assert_eq!(format_timestamp(0), "1970-01-01 00:00:00");
        assert_eq!(format_timestamp(951_782_400), "2000-02-29 00:00:00");
        assert_eq!(format_timestamp(1_700_000_000), "2023-11-14 22:13:20");
        assert_eq!(format_timestamp(1_704_067_199), "2023-12-31 23:59:59");
    }

    #[test]
    fn corrupt_file_is_replaced() {
        let history = temp_history("corrupt");
        fs::write(history.path(), "{ not json").unwrap();
        assert!(history.load().is_empty());

        history.save("1", "1", Status::Success).unwrap();
        assert_eq!(history.load().len(), 1);

        history.clear().unwrap();
    }

    #[test]
    fn status_is_lowercase_json() {
        let history = temp_history("format");
        history.save("1 + 1", "2", Status::Success).unwrap();

        let raw = fs::read_to_string(history.path()).unwrap();
        assert!(raw.contains(r#""status": "success""#));
        assert!(raw.contains(r#""expression": "1 + 1""#));

        history.clear().unwrap();
    }
}
