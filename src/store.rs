use anyhow::{Context, Result};
use rusqlite::Connection;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::PathBuf;
use tracing::warn;

/// Typed key-value accessor over a small local SQLite database. Holds the
/// liked-job-id list and the user profile; job bodies are never stored here.
///
/// Reads and writes never fail from the caller's perspective: an absent or
/// unreadable payload reads as the supplied default, and a failed write
/// leaves the caller's in-memory value correct for the session without being
/// durable. Suppressed errors are logged.
pub struct PrefStore {
    conn: Connection,
}

impl PrefStore {
    pub fn open() -> Result<Self> {
        let path = Self::default_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(&path)
            .with_context(|| format!("Failed to open preference store at {}", path.display()))?;
        Self::from_connection(conn)
    }

    /// In-memory store with identical behavior. Used by tests so they never
    /// touch the real preference database.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .context("Failed to open in-memory preference store")?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS prefs (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );",
        )?;
        Ok(Self { conn })
    }

    fn default_path() -> Result<PathBuf> {
        // Use XDG data directory or fallback
        if let Some(proj_dirs) = directories::ProjectDirs::from("", "", "jobscout") {
            Ok(proj_dirs.data_dir().join("prefs.db"))
        } else {
            Ok(PathBuf::from("prefs.db"))
        }
    }

    /// Look up `key` and deserialize it as `T`. An absent row or a payload
    /// that no longer parses both yield `default`.
    pub fn read<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let raw: Option<String> = self
            .conn
            .query_row("SELECT value FROM prefs WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .ok();

        match raw {
            Some(payload) => match serde_json::from_str(&payload) {
                Ok(value) => value,
                Err(e) => {
                    warn!("discarding unreadable payload for '{}': {}", key, e);
                    default
                }
            },
            None => default,
        }
    }

    /// Serialize `value` and store it under `key`, replacing any prior value.
    /// Last write wins; there is no merge.
    pub fn write<T: Serialize>(&self, key: &str, value: &T) {
        let payload = match serde_json::to_string(value) {
            Ok(payload) => payload,
            Err(e) => {
                warn!("failed to serialize value for '{}': {}", key, e);
                return;
            }
        };

        let result = self.conn.execute(
            "INSERT INTO prefs (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            rusqlite::params![key, payload],
        );
        if let Err(e) = result {
            warn!("failed to persist '{}': {}", key, e);
        }
    }

    /// Delete `key` entirely. Removing an absent key is a no-op.
    pub fn remove(&self, key: &str) {
        if let Err(e) = self
            .conn
            .execute("DELETE FROM prefs WHERE key = ?1", [key])
        {
            warn!("failed to remove '{}': {}", key, e);
        }
    }

    #[cfg(test)]
    fn write_raw(&self, key: &str, payload: &str) {
        self.conn
            .execute(
                "INSERT INTO prefs (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                rusqlite::params![key, payload],
            )
            .unwrap();
    }
}
