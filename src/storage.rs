mod errors;
#[cfg(test)] mod tests;

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::config::AppConfig;
use crate::data::{Note, NoteDraft, NotePatch};

pub use errors::StorageError;

const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS notes (
        id BLOB PRIMARY KEY NOT NULL,
        session_id BLOB,
        title TEXT NOT NULL,
        content TEXT NOT NULL,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )",
    "CREATE INDEX IF NOT EXISTS idx_notes_session_id
        ON notes (session_id)",
    "CREATE INDEX IF NOT EXISTS idx_notes_created_at
        ON notes (created_at)",
];

const NOTE_COLUMNS: &str = "id, session_id, title, content, created_at, updated_at";

// Timestamps are persisted as fixed-width UTC strings: with the
// subsecond field always nine digits, lexicographic ORDER BY equals
// chronological order. Variable-width encodings break that ("...12Z"
// sorts after "...123Z").
const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
    "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:9]Z"
);

fn encode_timestamp(timestamp: OffsetDateTime) -> Result<String, StorageError> {
    Ok(timestamp.format(TIMESTAMP_FORMAT)?)
}

/// SQLite-backed note persistence. Every operation is a single
/// statement and therefore atomic; consistency under concurrent
/// writers is whatever the database's isolation gives us
/// (last-writer-wins).
pub struct NoteStore {
    pool: SqlitePool,
}

impl NoteStore {
    pub async fn new(config: &AppConfig) -> Result<NoteStore, StorageError> {
        let options = SqliteConnectOptions::from_str(&config.database_url)
            .map_err(StorageError::Setup)?
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(options)
            .await
            .map_err(StorageError::Setup)?;
        let store = NoteStore { pool };
        store.ensure_schema().await?;
        Ok(store)
    }

    async fn ensure_schema(&self) -> Result<(), StorageError> {
        for statement in SCHEMA {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Inserts a new note. Both timestamps come from the same clock
    /// reading, so `created_at == updated_at` on a fresh note.
    pub async fn insert(&self, draft: NoteDraft) -> Result<Note, StorageError> {
        let now = OffsetDateTime::now_utc();
        let note = Note {
            id: Uuid::new_v4(),
            session_id: draft.session_id,
            title: draft.title,
            content: draft.content,
            created_at: now,
            updated_at: now,
        };
        sqlx::query(
            "INSERT INTO notes (id, session_id, title, content, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )
            .bind(note.id)
            .bind(note.session_id)
            .bind(&note.title)
            .bind(&note.content)
            .bind(encode_timestamp(note.created_at)?)
            .bind(encode_timestamp(note.updated_at)?)
            .execute(&self.pool)
            .await?;
        Ok(note)
    }

    /// Point lookup. An unknown id is `None`, not an error.
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Note>, StorageError> {
        let note = sqlx::query_as::<_, Note>(
            &format!("SELECT {NOTE_COLUMNS} FROM notes WHERE id = ?1"),
        )
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(note)
    }

    /// Returns one window of notes, newest first, plus the total row
    /// count under the same filter. The count ignores offset/limit so
    /// that pagination math stays consistent with the returned page.
    pub async fn list(
        &self,
        session_id: Option<Uuid>,
        offset: u64,
        limit: u32,
    ) -> Result<(Vec<Note>, u64), StorageError> {
        let (notes, total) = match session_id {
            Some(session_id) => {
                let notes = sqlx::query_as::<_, Note>(
                    &format!(
                        "SELECT {NOTE_COLUMNS} FROM notes
                         WHERE session_id = ?1
                         ORDER BY created_at DESC, id DESC
                         LIMIT ?2 OFFSET ?3",
                    ),
                )
                    .bind(session_id)
                    .bind(limit)
                    .bind(offset as i64)
                    .fetch_all(&self.pool)
                    .await?;
                let total = sqlx::query_scalar::<_, i64>(
                    "SELECT COUNT(*) FROM notes WHERE session_id = ?1",
                )
                    .bind(session_id)
                    .fetch_one(&self.pool)
                    .await?;
                (notes, total)
            },
            None => {
                let notes = sqlx::query_as::<_, Note>(
                    &format!(
                        "SELECT {NOTE_COLUMNS} FROM notes
                         ORDER BY created_at DESC, id DESC
                         LIMIT ?1 OFFSET ?2",
                    ),
                )
                    .bind(limit)
                    .bind(offset as i64)
                    .fetch_all(&self.pool)
                    .await?;
                let total = sqlx::query_scalar::<_, i64>(
                    "SELECT COUNT(*) FROM notes",
                )
                    .fetch_one(&self.pool)
                    .await?;
                (notes, total)
            },
        };
        Ok((notes, total as u64))
    }

    /// Overlays the provided fields onto an existing note and persists
    /// the result in one statement. `updated_at` is refreshed even when
    /// the patch is empty.
    pub async fn apply_update(
        &self,
        note: Note,
        patch: NotePatch,
    ) -> Result<Note, StorageError> {
        let Note { id, session_id, title, content, created_at, .. } = note;
        let updated = Note {
            id,
            session_id,
            title: patch.title.unwrap_or(title),
            content: patch.content.unwrap_or(content),
            created_at,
            updated_at: OffsetDateTime::now_utc(),
        };
        sqlx::query(
            "UPDATE notes SET title = ?2, content = ?3, updated_at = ?4
             WHERE id = ?1",
        )
            .bind(updated.id)
            .bind(&updated.title)
            .bind(&updated.content)
            .bind(encode_timestamp(updated.updated_at)?)
            .execute(&self.pool)
            .await?;
        Ok(updated)
    }

    /// Hard delete. True iff a row existed and was removed.
    pub async fn delete(&self, id: Uuid) -> Result<bool, StorageError> {
        let result = sqlx::query("DELETE FROM notes WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
