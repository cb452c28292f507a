use serde::Serialize;
use sqlx::FromRow;
use time::OffsetDateTime;
use time::serde::rfc3339;
use uuid::Uuid;

/// A stored note. `session_id` is an opaque grouping tag assigned at
/// creation, not a reference to any other entity.
#[derive(Clone, Debug, FromRow, PartialEq, Serialize)]
pub struct Note {
    pub id: Uuid,
    pub session_id: Option<Uuid>,
    pub title: String,
    pub content: String,
    #[serde(with = "rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Fields for creating a note. Lengths are validated upstream.
#[derive(Clone, Debug)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    pub session_id: Option<Uuid>,
}

/// Partial update: absent fields are left unchanged.
#[derive(Clone, Debug, Default)]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<String>,
}
