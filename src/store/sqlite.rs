//! SQLite-backed progress store.
//!
//! Snapshots live in a single table keyed by the structured profile tuple;
//! the snapshot itself is a version-stamped JSON document.

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

use crate::domain::ProgressRecord;
use crate::store::{ProfileKey, ProgressSnapshot, ProgressStore, StoreError};

pub struct SqliteStore {
  conn: Connection,
}

impl SqliteStore {
  /// Open (or create) a store at the given path.
  pub fn open(path: &Path) -> Result<Self, StoreError> {
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent).ok();
    }
    let conn = Connection::open(path)?;
    init_schema(&conn)?;
    tracing::info!("Opened progress store at {}", path.display());
    Ok(Self { conn })
  }

  /// Open a private in-memory store (useful for tests and previews).
  pub fn open_in_memory() -> Result<Self, StoreError> {
    let conn = Connection::open_in_memory()?;
    init_schema(&conn)?;
    Ok(Self { conn })
  }
}

fn init_schema(conn: &Connection) -> Result<(), rusqlite::Error> {
  conn.execute_batch(
    r#"
    CREATE TABLE IF NOT EXISTS progress_snapshots (
      content_type TEXT NOT NULL,
      from_lang    TEXT NOT NULL,
      to_lang      TEXT NOT NULL,
      snapshot     TEXT NOT NULL,
      updated_at   TEXT NOT NULL,
      PRIMARY KEY (content_type, from_lang, to_lang)
    );
    "#,
  )
}

impl ProgressStore for SqliteStore {
  fn load(&self, profile: &ProfileKey) -> Result<Vec<ProgressRecord>, StoreError> {
    let data: Option<String> = self
      .conn
      .query_row(
        r#"
        SELECT snapshot FROM progress_snapshots
        WHERE content_type = ?1 AND from_lang = ?2 AND to_lang = ?3
        "#,
        params![
          profile.content_type.as_str(),
          profile.from_lang,
          profile.to_lang
        ],
        |row| row.get(0),
      )
      .optional()?;

    match data {
      Some(json) => Ok(ProgressSnapshot::decode(&json)),
      None => Ok(Vec::new()),
    }
  }

  fn save(&mut self, profile: &ProfileKey, records: &[ProgressRecord]) -> Result<(), StoreError> {
    let snapshot = ProgressSnapshot::new(records.to_vec());
    let json = serde_json::to_string(&snapshot)?;

    self.conn.execute(
      r#"
      INSERT INTO progress_snapshots (content_type, from_lang, to_lang, snapshot, updated_at)
      VALUES (?1, ?2, ?3, ?4, ?5)
      ON CONFLICT (content_type, from_lang, to_lang)
      DO UPDATE SET snapshot = excluded.snapshot, updated_at = excluded.updated_at
      "#,
      params![
        profile.content_type.as_str(),
        profile.from_lang,
        profile.to_lang,
        json,
        Utc::now().to_rfc3339(),
      ],
    )?;
    Ok(())
  }
}
