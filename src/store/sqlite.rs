use std::path::Path;
use std::sync::Mutex;

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use rusqlite_migration::{Migrations, M};

use crate::app::{Result, ToondexError};
use crate::domain::MediaDocument;
use crate::store::{DocumentStore, StoredDocument};

/// SQLite-backed media collection. Documents are stored as JSON with the
/// keying fields (`doc_type`, `source_id`, `title`) lifted into columns;
/// a unique index on (doc_type, title) makes a second document for the
/// same title a constraint error rather than a silent duplicate.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.run_migrations()?;
        Ok(store)
    }

    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.run_migrations()?;
        Ok(store)
    }

    fn run_migrations(&self) -> Result<()> {
        let migrations = Migrations::new(vec![M::up(include_str!(
            "../../migrations/001-initial/up.sql"
        ))]);

        let mut conn = self.lock_conn()?;
        migrations
            .to_latest(&mut conn)
            .map_err(|_| ToondexError::Database(rusqlite::Error::InvalidQuery))?;

        Ok(())
    }

    fn lock_conn(&self) -> Result<std::sync::MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|e| {
            ToondexError::Database(rusqlite::Error::SqliteFailure(
                rusqlite::ffi::Error::new(1),
                Some(e.to_string()),
            ))
        })
    }

    fn row_to_stored(id: i64, raw: String) -> Result<StoredDocument> {
        let document: MediaDocument = serde_json::from_str(&raw)?;
        Ok(StoredDocument { id, document })
    }
}

impl DocumentStore for SqliteStore {
    fn find_by_title(&self, doc_type: &str, title: &str) -> Result<Option<StoredDocument>> {
        let conn = self.lock_conn()?;

        let row = conn
            .query_row(
                "SELECT id, document FROM media WHERE doc_type = ?1 AND title = ?2",
                params![doc_type, title],
                |row| Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?)),
            )
            .optional()?;

        row.map(|(id, raw)| Self::row_to_stored(id, raw)).transpose()
    }

    fn find_by_source_id(&self, doc_type: &str, source_id: &str) -> Result<Option<StoredDocument>> {
        let conn = self.lock_conn()?;

        let row = conn
            .query_row(
                "SELECT id, document FROM media WHERE doc_type = ?1 AND source_id = ?2",
                params![doc_type, source_id],
                |row| Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?)),
            )
            .optional()?;

        row.map(|(id, raw)| Self::row_to_stored(id, raw)).transpose()
    }

    fn insert(&self, document: &MediaDocument) -> Result<i64> {
        let conn = self.lock_conn()?;
        let raw = serde_json::to_string(document)?;
        let now = Utc::now().to_rfc3339();

        conn.execute(
            "INSERT INTO media (doc_type, source_id, title, document, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                document.doc_type,
                document.webtoon_id,
                document.title,
                raw,
                now,
                now
            ],
        )?;

        Ok(conn.last_insert_rowid())
    }

    fn update_by_source_id(
        &self,
        doc_type: &str,
        source_id: &str,
        document: &MediaDocument,
    ) -> Result<()> {
        let conn = self.lock_conn()?;
        let raw = serde_json::to_string(document)?;

        conn.execute(
            "UPDATE media SET title = ?1, document = ?2, updated_at = ?3
             WHERE doc_type = ?4 AND source_id = ?5",
            params![
                document.title,
                raw,
                Utc::now().to_rfc3339(),
                doc_type,
                source_id
            ],
        )?;

        Ok(())
    }

    fn all_of_type(&self, doc_type: &str) -> Result<Vec<StoredDocument>> {
        let conn = self.lock_conn()?;

        let mut stmt =
            conn.prepare("SELECT id, document FROM media WHERE doc_type = ?1 ORDER BY id")?;
        let rows = stmt.query_map(params![doc_type], |row| {
            Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?))
        })?;

        let mut documents = Vec::new();
        for row in rows {
            let (id, raw) = row?;
            documents.push(Self::row_to_stored(id, raw)?);
        }
        Ok(documents)
    }
}
