//! Saved results. A single storage key holds a JSON array of
//! `{name, score: "<int>/100"}` objects; it is only ever appended to.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;

use crate::util::clog;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub name: String,
    pub score: String,
}

impl ScoreRecord {
    pub fn new(name: &str, final_score: u8) -> Self {
        Self {
            name: name.to_string(),
            score: format!("{}/100", final_score),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StorageError {
    Unavailable,
    Serialize(String),
    Write(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Unavailable => write!(f, "local storage unavailable"),
            StorageError::Serialize(e) => write!(f, "could not encode records: {}", e),
            StorageError::Write(e) => write!(f, "could not write records: {}", e),
        }
    }
}

impl std::error::Error for StorageError {}

pub trait ScoreStore {
    /// Never fails: missing, malformed or unreachable storage reads as empty.
    fn load(&self) -> Vec<ScoreRecord>;
    fn save(&self, records: &[ScoreRecord]) -> Result<(), StorageError>;
}

/// Decodes the stored JSON, treating anything unreadable as no records.
pub fn parse_records(raw: Option<&str>) -> Vec<ScoreRecord> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    match serde_json::from_str::<Option<Vec<ScoreRecord>>>(raw) {
        Ok(records) => records.unwrap_or_default(),
        Err(e) => {
            clog(&format!("ignoring malformed score records: {}", e));
            Vec::new()
        }
    }
}

/// Read-modify-write append; last writer wins. Returns the list as written.
pub fn append_record<S: ScoreStore + ?Sized>(
    store: &S,
    record: ScoreRecord,
) -> Result<Vec<ScoreRecord>, StorageError> {
    let mut records = store.load();
    records.push(record);
    store.save(&records)?;
    Ok(records)
}

/// `window.localStorage` under a single key.
#[derive(Clone, Debug, PartialEq)]
pub struct LocalScoreStore {
    key: String,
}

impl LocalScoreStore {
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
        }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl ScoreStore for LocalScoreStore {
    fn load(&self) -> Vec<ScoreRecord> {
        let raw = Self::storage().and_then(|store| store.get_item(&self.key).ok().flatten());
        parse_records(raw.as_deref())
    }

    fn save(&self, records: &[ScoreRecord]) -> Result<(), StorageError> {
        let store = Self::storage().ok_or(StorageError::Unavailable)?;
        let raw =
            serde_json::to_string(records).map_err(|e| StorageError::Serialize(e.to_string()))?;
        store
            .set_item(&self.key, &raw)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }
}

/// In-memory store holding the raw JSON string, like the browser would.
#[derive(Debug, Default)]
pub struct MemoryScoreStore {
    raw: RefCell<Option<String>>,
}

impl MemoryScoreStore {
    pub fn with_raw(raw: &str) -> Self {
        Self {
            raw: RefCell::new(Some(raw.to_string())),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.raw.borrow().clone()
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load(&self) -> Vec<ScoreRecord> {
        parse_records(self.raw.borrow().as_deref())
    }

    fn save(&self, records: &[ScoreRecord]) -> Result<(), StorageError> {
        let raw =
            serde_json::to_string(records).map_err(|e| StorageError::Serialize(e.to_string()))?;
        *self.raw.borrow_mut() = Some(raw);
        Ok(())
    }
}
