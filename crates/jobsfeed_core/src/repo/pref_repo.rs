//! Preference repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide the get/set/remove surface the app uses for local flags.
//! - Keep SQL details inside the persistence boundary.

use crate::db::DbError;
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Flag written when the user leaves the splash screen. Written once per
/// entry action and never read back by the app itself.
pub const PREF_HAS_SEEN_SPLASH: &str = "hasSeenSplash";

/// Stored theme preference, keyed the way the original shell stored it.
pub const PREF_THEME: &str = "jobfeed-ui-theme";

pub type PrefResult<T> = Result<T, PrefError>;

/// Preference persistence error.
#[derive(Debug)]
pub enum PrefError {
    /// Key is empty or whitespace-only.
    InvalidKey(String),
    /// Storage-layer failure.
    Db(DbError),
}

impl Display for PrefError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidKey(key) => write!(f, "invalid preference key: `{key}`"),
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for PrefError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidKey(_) => None,
            Self::Db(err) => Some(err),
        }
    }
}

impl From<DbError> for PrefError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for PrefError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Key-value contract for client-local flags.
pub trait PrefRepository {
    fn get(&self, key: &str) -> PrefResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> PrefResult<()>;
    fn remove(&self, key: &str) -> PrefResult<()>;
}

/// SQLite-backed preference repository. Owns its connection; the preference
/// store is not shared with any other reader.
pub struct SqlitePrefRepository {
    conn: Connection,
}

impl SqlitePrefRepository {
    /// Wraps a bootstrapped connection (see [`crate::db::open_db`]).
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }
}

impl PrefRepository for SqlitePrefRepository {
    fn get(&self, key: &str) -> PrefResult<Option<String>> {
        let key = validate_key(key)?;
        let value = self
            .conn
            .query_row(
                "SELECT value FROM prefs WHERE key = ?1;",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> PrefResult<()> {
        let key = validate_key(key)?;
        self.conn.execute(
            "INSERT INTO prefs (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove(&self, key: &str) -> PrefResult<()> {
        let key = validate_key(key)?;
        // Removing an absent key is a no-op, matching localStorage semantics.
        self.conn
            .execute("DELETE FROM prefs WHERE key = ?1;", params![key])?;
        Ok(())
    }
}

fn validate_key(key: &str) -> PrefResult<&str> {
    if key.trim().is_empty() {
        return Err(PrefError::InvalidKey(key.to_string()));
    }
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::{PrefError, PrefRepository, SqlitePrefRepository};
    use crate::db::open_db_in_memory;

    #[test]
    fn blank_key_is_rejected_on_every_operation() {
        let repo = SqlitePrefRepository::new(open_db_in_memory().unwrap());
        assert!(matches!(repo.get("  "), Err(PrefError::InvalidKey(_))));
        assert!(matches!(repo.set("", "x"), Err(PrefError::InvalidKey(_))));
        assert!(matches!(repo.remove("  "), Err(PrefError::InvalidKey(_))));
    }

    #[test]
    fn remove_of_absent_key_is_a_noop() {
        let repo = SqlitePrefRepository::new(open_db_in_memory().unwrap());
        repo.remove("never-set").unwrap();
        assert_eq!(repo.get("never-set").unwrap(), None);
    }
}
