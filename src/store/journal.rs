//! Day records on disk
//!
//! Layout: `<dir>/<YYYY-MM-DD>.json`. A save writes `.<name>.tmp`, syncs it
//! and renames it over the target, so a reader sees the old record or the
//! new one and never a torn write.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use super::errors::{StoreError, StoreResult};
use crate::enforcement::LoopController;
use crate::model::DayRecord;
use crate::observability::{log_event, Event};

const DATE_FORMAT: &str = "%Y-%m-%d";
const EXTENSION: &str = "json";

/// Directory of day records.
#[derive(Debug, Clone)]
pub struct JournalStore {
    dir: PathBuf,
}

impl JournalStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, date: NaiveDate) -> PathBuf {
        self.dir
            .join(format!("{}.{}", date.format(DATE_FORMAT), EXTENSION))
    }

    fn temp_path_for(&self, date: NaiveDate) -> PathBuf {
        self.dir
            .join(format!(".{}.{}.tmp", date.format(DATE_FORMAT), EXTENSION))
    }

    /// Load the record for `date`, or `None` if none was saved.
    pub fn load(&self, date: NaiveDate) -> StoreResult<Option<DayRecord>> {
        let path = self.path_for(date);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::io(path, e)),
        };

        let record: DayRecord =
            serde_json::from_str(&content).map_err(|e| StoreError::json(&path, e))?;
        if record.date() != date {
            return Err(StoreError::DateMismatch {
                path,
                expected: date,
                found: record.date(),
            });
        }

        log_event(
            Event::RecordLoaded,
            &[("path", path.display().to_string().as_str())],
        );
        Ok(Some(record))
    }

    /// Write `record` under its own date, replacing any previous version.
    pub fn save(&self, record: &DayRecord) -> StoreResult<PathBuf> {
        fs::create_dir_all(&self.dir).map_err(|e| StoreError::io(&self.dir, e))?;

        let path = self.path_for(record.date());
        let temp_path = self.temp_path_for(record.date());

        let mut content =
            serde_json::to_string_pretty(record).map_err(|e| StoreError::json(&path, e))?;
        content.push('\n');

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .map_err(|e| StoreError::io(&temp_path, e))?;
        file.write_all(content.as_bytes())
            .map_err(|e| StoreError::io(&temp_path, e))?;
        file.sync_all().map_err(|e| StoreError::io(&temp_path, e))?;
        drop(file);

        fs::rename(&temp_path, &path).map_err(|e| StoreError::io(&path, e))?;

        // Best effort: make the rename itself durable.
        if let Ok(dir) = File::open(&self.dir) {
            let _ = dir.sync_all();
        }

        log_event(
            Event::RecordSaved,
            &[("path", path.display().to_string().as_str())],
        );
        Ok(path)
    }

    /// Load the record for `date`, or open a fresh one numbered after the
    /// highest stored day number. A fresh record is not saved.
    pub fn open_or_create(
        &self,
        date: NaiveDate,
        controller: &LoopController,
    ) -> StoreResult<DayRecord> {
        if let Some(record) = self.load(date)? {
            return Ok(record);
        }
        Ok(controller.open_day(date, self.next_day_number()?))
    }

    /// One past the highest day number on disk, so numbers never repeat.
    pub fn next_day_number(&self) -> StoreResult<u32> {
        let mut highest: u32 = 0;
        for date in self.list_dates()? {
            if let Some(record) = self.load(date)? {
                highest = highest.max(record.day_number());
            }
        }
        Ok(highest.saturating_add(1))
    }

    /// Dates with a stored record, oldest first.
    pub fn list_dates(&self) -> StoreResult<Vec<NaiveDate>> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::io(&self.dir, e)),
        };

        let mut dates = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| StoreError::io(&self.dir, e))?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(EXTENSION) {
                continue;
            }
            let parsed = path
                .file_stem()
                .and_then(|s| s.to_str())
                .and_then(|s| NaiveDate::parse_from_str(s, DATE_FORMAT).ok());
            if let Some(date) = parsed {
                dates.push(date);
            }
        }

        dates.sort();
        Ok(dates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::enforcement::StateOutcome;
    use tempfile::TempDir;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
    }

    fn controller() -> LoopController {
        LoopController::new(&EngineConfig::default(), date(1))
    }

    #[test]
    fn test_path_for() {
        let store = JournalStore::new("/journal");
        assert_eq!(
            store.path_for(date(7)),
            PathBuf::from("/journal/2026-03-07.json")
        );
    }

    #[test]
    fn test_load_missing_is_none() {
        let temp = TempDir::new().unwrap();
        let store = JournalStore::new(temp.path());
        assert!(store.load(date(2)).unwrap().is_none());
        assert!(store.list_dates().unwrap().is_empty());
    }

    #[test]
    fn test_list_dates_missing_dir() {
        let temp = TempDir::new().unwrap();
        let store = JournalStore::new(temp.path().join("not-yet"));
        assert!(store.list_dates().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let temp = TempDir::new().unwrap();
        let store = JournalStore::new(temp.path().join("days"));
        let c = LoopController::new(&EngineConfig::default(), date(3));

        let day = c.open_day(date(3), 1);
        let day = c
            .set_intention(&day, "draft the migration plan")
            .unwrap()
            .into_record()
            .unwrap();
        let day = match c.evaluate_state(&day, 7).unwrap() {
            StateOutcome::Pass { record } => record,
            other => panic!("expected Pass, got {:?}", other),
        };

        let path = store.save(&day).unwrap();
        assert!(path.ends_with("2026-03-03.json"));
        assert_eq!(store.load(date(3)).unwrap(), Some(day));
    }

    #[test]
    fn test_resave_is_byte_identical() {
        let temp = TempDir::new().unwrap();
        let store = JournalStore::new(temp.path());
        let c = controller();

        let path = store.save(&c.open_day(date(4), 2)).unwrap();
        let first = fs::read(&path).unwrap();

        let loaded = store.load(date(4)).unwrap().unwrap();
        store.save(&loaded).unwrap();
        assert_eq!(fs::read(&path).unwrap(), first);
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let temp = TempDir::new().unwrap();
        let store = JournalStore::new(temp.path());
        store.save(&controller().open_day(date(5), 1)).unwrap();

        let names: Vec<_> = fs::read_dir(temp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, vec!["2026-03-05.json".to_string()]);
    }

    #[test]
    fn test_open_or_create_numbers_days() {
        let temp = TempDir::new().unwrap();
        let store = JournalStore::new(temp.path());
        let c = controller();

        let first = store.open_or_create(date(2), &c).unwrap();
        assert_eq!(first.day_number(), 1);
        store.save(&first).unwrap();

        let third = store.open_or_create(date(9), &c).unwrap();
        assert_eq!(third.day_number(), 2);
        store.save(&third).unwrap();

        // A fresh date between stored ones still gets a new number.
        let between = store.open_or_create(date(5), &c).unwrap();
        assert_eq!(between.day_number(), 3);

        let again = store.open_or_create(date(9), &c).unwrap();
        assert_eq!(again, third);
        assert_eq!(store.list_dates().unwrap(), vec![date(2), date(9)]);
    }

    #[test]
    fn test_next_day_number_follows_highest() {
        let temp = TempDir::new().unwrap();
        let store = JournalStore::new(temp.path());
        let c = controller();
        assert_eq!(store.next_day_number().unwrap(), 1);

        store.save(&c.open_day(date(2), 1)).unwrap();
        store.save(&c.open_day(date(4), 7)).unwrap();
        assert_eq!(store.next_day_number().unwrap(), 8);
    }

    #[test]
    fn test_list_dates_ignores_stray_files() {
        let temp = TempDir::new().unwrap();
        let store = JournalStore::new(temp.path());
        store.save(&controller().open_day(date(6), 1)).unwrap();
        fs::write(temp.path().join("notes.json"), "{}").unwrap();
        fs::write(temp.path().join("2026-03-08.txt"), "x").unwrap();

        assert_eq!(store.list_dates().unwrap(), vec![date(6)]);
    }

    #[test]
    fn test_date_mismatch() {
        let temp = TempDir::new().unwrap();
        let store = JournalStore::new(temp.path());
        store.save(&controller().open_day(date(6), 1)).unwrap();
        fs::copy(store.path_for(date(6)), store.path_for(date(7))).unwrap();

        match store.load(date(7)) {
            Err(StoreError::DateMismatch {
                expected, found, ..
            }) => {
                assert_eq!(expected, date(7));
                assert_eq!(found, date(6));
            }
            other => panic!("expected DateMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_record() {
        let temp = TempDir::new().unwrap();
        let store = JournalStore::new(temp.path());
        fs::write(store.path_for(date(6)), "{ not json").unwrap();

        let err = store.load(date(6)).unwrap_err();
        assert!(matches!(err, StoreError::Json { .. }));
        assert_eq!(err.code(), "ZEN_STORE_MALFORMED");
    }

    #[test]
    fn test_out_of_range_score_fails_to_load() {
        let temp = TempDir::new().unwrap();
        let store = JournalStore::new(temp.path());
        fs::write(
            store.path_for(date(6)),
            r#"{"date":"2026-03-06","day_number":1,"state_coherence_score":11}"#,
        )
        .unwrap();

        assert!(matches!(store.load(date(6)), Err(StoreError::Json { .. })));
    }
}
