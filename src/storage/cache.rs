use std::path::Path;

use rusqlite::Connection;
use thiserror::Error;

use crate::attendance::{Event, EventRecord};

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] rusqlite::Error),
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
    #[error("Failed to create cache directory: {0}")]
    IoError(#[from] std::io::Error),
}

const EVENTS_KEY: &str = "events";
const TOKEN_KEY: &str = "access_token";

pub struct Cache {
    conn: Connection,
}

impl Cache {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    pub fn open(path: &Path) -> Result<Self, CacheError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let cache = Self::new(Connection::open(path)?);
        cache.initialize()?;
        Ok(cache)
    }

    pub fn initialize(&self) -> Result<(), CacheError> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS state (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )?;
        Ok(())
    }

    pub fn save_events(&self, events: &[Event]) -> Result<(), CacheError> {
        let records: Vec<EventRecord> = events.iter().copied().map(EventRecord::from).collect();
        let json = serde_json::to_string(&records)?;
        self.put(EVENTS_KEY, &json)
    }

    pub fn load_events(&self) -> Result<Option<Vec<Event>>, CacheError> {
        match self.get(EVENTS_KEY)? {
            Some(json) => {
                let records: Vec<EventRecord> = serde_json::from_str(&json)?;
                Ok(Some(
                    records.into_iter().filter_map(EventRecord::into_event).collect(),
                ))
            }
            None => Ok(None),
        }
    }

    pub fn save_token(&self, token: &str) -> Result<(), CacheError> {
        self.put(TOKEN_KEY, token)
    }

    pub fn load_token(&self) -> Result<Option<String>, CacheError> {
        self.get(TOKEN_KEY)
    }

    fn put(&self, key: &str, value: &str) -> Result<(), CacheError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO state (key, value) VALUES (?1, ?2)",
            rusqlite::params![key, value],
        )?;
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let mut stmt = self.conn.prepare("SELECT value FROM state WHERE key = ?1")?;
        let mut rows = stmt.query([key])?;

        if let Some(row) = rows.next()? {
            Ok(Some(row.get(0)?))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attendance::DayStatus;
    use chrono::NaiveDate;

    fn create_test_cache() -> Cache {
        let conn = Connection::open_in_memory().unwrap();
        let cache = Cache::new(conn);
        cache.initialize().unwrap();
        cache
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn create_test_events() -> Vec<Event> {
        vec![
            Event { date: date(2024, 1, 1), status: DayStatus::Office },
            Event { date: date(2024, 1, 2), status: DayStatus::RemoteApproved },
        ]
    }

    #[test]
    fn load_from_empty_cache_returns_none() {
        let cache = create_test_cache();

        assert!(cache.load_events().unwrap().is_none());
        assert!(cache.load_token().unwrap().is_none());
    }

    #[test]
    fn stores_and_loads_events() {
        let cache = create_test_cache();
        let events = create_test_events();

        cache.save_events(&events).unwrap();

        let loaded = cache.load_events().unwrap();
        assert_eq!(loaded, Some(events));
    }

    #[test]
    fn saving_events_replaces_previous_snapshot() {
        let cache = create_test_cache();
        cache.save_events(&create_test_events()).unwrap();

        let replacement = vec![Event { date: date(2024, 2, 1), status: DayStatus::Holiday }];
        cache.save_events(&replacement).unwrap();

        let loaded = cache.load_events().unwrap();
        assert_eq!(loaded, Some(replacement));
    }

    #[test]
    fn stores_and_loads_access_token() {
        let cache = create_test_cache();

        cache.save_token("3e19a1a4-b72e-4d2c-95f0-8c6b2a3f9d11").unwrap();

        let loaded = cache.load_token().unwrap();
        assert_eq!(loaded, Some("3e19a1a4-b72e-4d2c-95f0-8c6b2a3f9d11".to_string()));
    }

    #[test]
    fn open_creates_file_and_parent_directories() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("cache.db");

        let cache = Cache::open(&path).unwrap();
        cache.save_token("token").unwrap();

        assert!(path.exists());
    }

    #[test]
    fn reopened_cache_sees_persisted_events() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("cache.db");
        let events = create_test_events();

        {
            let cache = Cache::open(&path).unwrap();
            cache.save_events(&events).unwrap();
        }

        let cache = Cache::open(&path).unwrap();
        assert_eq!(cache.load_events().unwrap(), Some(events));
    }
}
