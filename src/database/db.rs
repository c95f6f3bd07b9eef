//! Local settings database
//!
//! Handles SQLite initialization and storage of the learner's profile settings
//! in a key/value `app_state` table.

use crate::models::{CefrLevel, ProfileSettings};
use chrono::{DateTime, Local};
use rusqlite::{Connection, OptionalExtension, Result, params};
use std::path::Path;
use tracing::{debug, warn};

const KEY_DISPLAY_NAME: &str = "display_name";
const KEY_EMAIL: &str = "email";
const KEY_PREFERRED_LEVEL: &str = "preferred_level";
const KEY_UPDATED_AT: &str = "profile_updated_at";

/// Opens (or creates) the settings database at `path`
pub fn init_database(path: &Path) -> Result<Connection> {
    let conn = Connection::open(path)?;
    create_tables(&conn)?;
    debug!("settings database opened at {}", path.display());
    Ok(conn)
}

/// Creates the tables if they don't exist yet
pub fn create_tables(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS app_state (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        )",
        (),
    )?;
    Ok(())
}

pub fn get_setting(key: &str, conn: &Connection) -> Result<Option<String>> {
    conn.query_row(
        "SELECT value FROM app_state WHERE key = ?1",
        params![key],
        |row| row.get(0),
    )
    .optional()
}

pub fn set_setting(key: &str, value: &str, conn: &Connection) -> Result<()> {
    conn.execute(
        "INSERT INTO app_state (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        params![key, value],
    )?;
    Ok(())
}

/// Loads the profile, falling back to defaults for anything missing or unreadable
pub fn load_profile(conn: &Connection) -> Result<ProfileSettings> {
    let defaults = ProfileSettings::default();

    let preferred_level = match get_setting(KEY_PREFERRED_LEVEL, conn)? {
        Some(value) => value.parse::<CefrLevel>().unwrap_or_else(|e| {
            warn!("Ignoring stored preferred level: {e}");
            defaults.preferred_level
        }),
        None => defaults.preferred_level,
    };

    let updated_at = get_setting(KEY_UPDATED_AT, conn)?
        .and_then(|value| DateTime::parse_from_rfc3339(&value).ok())
        .map(|date| date.with_timezone(&Local));

    Ok(ProfileSettings {
        display_name: get_setting(KEY_DISPLAY_NAME, conn)?.unwrap_or_default(),
        email: get_setting(KEY_EMAIL, conn)?.unwrap_or_default(),
        preferred_level,
        updated_at,
    })
}

/// Stores every profile field in one transaction
pub fn save_profile(profile: &ProfileSettings, conn: &mut Connection) -> Result<()> {
    let tx = conn.transaction()?;
    set_setting(KEY_DISPLAY_NAME, profile.display_name.trim(), &tx)?;
    set_setting(KEY_EMAIL, profile.email.trim(), &tx)?;
    set_setting(KEY_PREFERRED_LEVEL, profile.preferred_level.as_str(), &tx)?;
    if let Some(updated_at) = profile.updated_at {
        set_setting(KEY_UPDATED_AT, &updated_at.to_rfc3339(), &tx)?;
    }
    tx.commit()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory_db() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        create_tables(&conn).unwrap();
        conn
    }

    #[test]
    fn test_empty_database_gives_default_profile() {
        let conn = memory_db();
        assert_eq!(load_profile(&conn).unwrap(), ProfileSettings::default());
    }

    #[test]
    fn test_profile_roundtrip() {
        let mut conn = memory_db();
        let profile = ProfileSettings {
            display_name: " Anna ".to_string(),
            email: "anna@example.com".to_string(),
            preferred_level: CefrLevel::B1,
            updated_at: Some(Local::now()),
        };

        save_profile(&profile, &mut conn).unwrap();
        let loaded = load_profile(&conn).unwrap();

        assert_eq!(loaded.display_name, "Anna");
        assert_eq!(loaded.email, profile.email);
        assert_eq!(loaded.preferred_level, CefrLevel::B1);
        assert_eq!(
            loaded.updated_at.map(|d| d.timestamp()),
            profile.updated_at.map(|d| d.timestamp())
        );
    }

    #[test]
    fn test_set_setting_overwrites() {
        let conn = memory_db();
        set_setting("email", "a@example.com", &conn).unwrap();
        set_setting("email", "b@example.com", &conn).unwrap();
        assert_eq!(get_setting("email", &conn).unwrap().as_deref(), Some("b@example.com"));
        assert_eq!(get_setting("missing", &conn).unwrap(), None);
    }

    #[test]
    fn test_invalid_stored_level_falls_back() {
        let conn = memory_db();
        set_setting(KEY_PREFERRED_LEVEL, "Z9", &conn).unwrap();
        assert_eq!(load_profile(&conn).unwrap().preferred_level, CefrLevel::A1);
    }
}
