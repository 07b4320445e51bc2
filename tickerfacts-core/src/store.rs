//! CSV-backed persistent store of company records.
//!
//! Layout: `{data_export_dir}/company_info.csv`, UTF-8, header row
//! `ticker,name,sector,industry,country`, one row per known ticker.
//!
//! The store is small and rewritten in full on every insert. Writes are
//! atomic (write to .tmp, rename into place). A missing file is not an
//! error — `load` reports it as `None` and the cache starts from an empty
//! store.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// One cached company. Field order matches the on-disk column order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompanyRecord {
    /// Upper-cased ticker symbol, unique across the store.
    pub ticker: String,
    pub name: String,
    pub sector: String,
    pub industry: String,
    pub country: String,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O error at '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("store CSV error at '{path}': {source}")]
    Csv { path: PathBuf, source: csv::Error },

    #[error("store file not found: {path}")]
    NotFound { path: PathBuf },
}

/// The on-disk store. Owns its file path; all reads and writes go through it.
pub struct CompanyStore {
    path: PathBuf,
}

impl CompanyStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the store file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all records from disk.
    ///
    /// Returns `Ok(None)` when the file does not exist yet — an ordinary
    /// branch for the caller, not an error.
    pub fn load(&self) -> Result<Option<Vec<CompanyRecord>>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let mut reader = csv::Reader::from_path(&self.path).map_err(|e| self.csv_err(e))?;
        let mut records = Vec::new();
        for row in reader.deserialize() {
            let record: CompanyRecord = row.map_err(|e| self.csv_err(e))?;
            records.push(record);
        }
        Ok(Some(records))
    }

    /// Insert a record, replacing any existing row with the same ticker.
    ///
    /// Uniqueness is enforced here, at write time, so two independent fill
    /// paths for the same ticker converge to a single row instead of
    /// appending duplicates.
    pub fn insert(records: &mut Vec<CompanyRecord>, record: CompanyRecord) {
        match records.iter_mut().find(|r| r.ticker == record.ticker) {
            Some(existing) => *existing = record,
            None => records.push(record),
        }
    }

    /// Rewrite the whole store file from the given records.
    ///
    /// Writes to a temp file and renames into place so a failed write never
    /// leaves a truncated store behind.
    pub fn save(&self, records: &[CompanyRecord]) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|e| self.io_err(e))?;
        }

        let tmp_path = self.path.with_extension("csv.tmp");

        let mut writer = csv::Writer::from_path(&tmp_path).map_err(|e| self.csv_err(e))?;
        for record in records {
            writer.serialize(record).map_err(|e| self.csv_err(e))?;
        }
        writer.flush().map_err(|e| self.io_err(e))?;
        drop(writer);

        fs::rename(&tmp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&tmp_path);
            self.io_err(e)
        })
    }

    fn io_err(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn csv_err(&self, source: csv::Error) -> StoreError {
        StoreError::Csv {
            path: self.path.clone(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::atomic::{AtomicU64, Ordering};

    static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

    fn temp_store_dir() -> PathBuf {
        let id = TEST_COUNTER.fetch_add(1, Ordering::Relaxed);
        let dir = env::temp_dir().join(format!("tickerfacts_store_{}_{id}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn sample_record() -> CompanyRecord {
        CompanyRecord {
            ticker: "AAPL".into(),
            name: "Apple Inc.".into(),
            sector: "Technology".into(),
            industry: "Consumer Electronics".into(),
            country: "United States".into(),
        }
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = temp_store_dir();
        let store = CompanyStore::new(dir.join("company_info.csv"));

        store.save(&[sample_record()]).unwrap();
        let loaded = store.load().unwrap().unwrap();

        assert_eq!(loaded, vec![sample_record()]);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn load_absent_file_is_none() {
        let dir = temp_store_dir();
        let store = CompanyStore::new(dir.join("company_info.csv"));

        assert!(store.load().unwrap().is_none());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn header_row_matches_contract() {
        let dir = temp_store_dir();
        let store = CompanyStore::new(dir.join("company_info.csv"));

        store.save(&[sample_record()]).unwrap();
        let raw = fs::read_to_string(store.path()).unwrap();
        let header = raw.lines().next().unwrap();

        assert_eq!(header, "ticker,name,sector,industry,country");

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn insert_replaces_duplicate_ticker() {
        let mut records = vec![sample_record()];

        let mut updated = sample_record();
        updated.name = "Apple Incorporated".into();
        CompanyStore::insert(&mut records, updated.clone());

        assert_eq!(records.len(), 1);
        assert_eq!(records[0], updated);
    }

    #[test]
    fn insert_appends_new_ticker() {
        let mut records = vec![sample_record()];

        let msft = CompanyRecord {
            ticker: "MSFT".into(),
            name: "Microsoft Corp".into(),
            sector: "Technology".into(),
            industry: "Software".into(),
            country: "United States".into(),
        };
        CompanyStore::insert(&mut records, msft.clone());

        assert_eq!(records.len(), 2);
        assert_eq!(records[1], msft);
    }

    #[test]
    fn save_creates_missing_parent_dir() {
        let dir = temp_store_dir();
        let store = CompanyStore::new(dir.join("nested").join("company_info.csv"));

        store.save(&[sample_record()]).unwrap();
        assert!(store.path().exists());

        let _ = fs::remove_dir_all(&dir);
    }
}
