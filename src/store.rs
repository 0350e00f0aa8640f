//! Usage store
//!
//! Process-scoped storage handle, created once at startup. Initialization
//! failure is fatal: the app aborts rather than run without its store.

use crate::error::LearnResult;
use rusqlite::Connection;
use std::path::PathBuf;

pub struct UsageStore {
    db_path: PathBuf,
}

/// One recorded usage entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageEntry {
    pub timestamp: String,
    pub action: String,
}

impl UsageStore {
    pub fn new(db_path: PathBuf) -> LearnResult<Self> {
        let store = Self { db_path };
        store.init_db()?;
        Ok(store)
    }

    fn init_db(&self) -> LearnResult<()> {
        if let Some(parent) = self.db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(&self.db_path)?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS activity_log (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                timestamp TEXT NOT NULL,
                action TEXT NOT NULL
            )",
            [],
        )?;
        Ok(())
    }

    /// Append a usage entry, stamped with the local time
    pub fn record(&self, action: &str) -> LearnResult<()> {
        let conn = Connection::open(&self.db_path)?;
        conn.execute(
            "INSERT INTO activity_log (timestamp, action) VALUES (?, ?)",
            (
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
                action,
            ),
        )?;
        Ok(())
    }

    /// Most recent usage entries, newest first
    pub fn recent(&self, limit: u32) -> LearnResult<Vec<UsageEntry>> {
        let conn = Connection::open(&self.db_path)?;
        let mut stmt = conn.prepare(
            "SELECT timestamp, action FROM activity_log ORDER BY id DESC LIMIT ?",
        )?;
        let rows = stmt.query_map([limit], |row| {
            Ok(UsageEntry {
                timestamp: row.get(0)?,
                action: row.get(1)?,
            })
        })?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(row?);
        }
        Ok(entries)
    }
}
