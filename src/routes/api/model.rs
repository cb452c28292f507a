use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::data::{Note, NoteDraft, NotePatch};
use crate::lib_constants::NOTES_PER_PAGE;
use crate::routes::api::errors::FieldError;

pub const TITLE_MAX_CHARS: usize = 255;

const TITLE_BOUNDS_MESSAGE: &str = "must be between 1 and 255 characters";
const CONTENT_BOUNDS_MESSAGE: &str = "must not be empty";

#[derive(Clone, Debug, Deserialize)]
pub struct NoteCreateRequest {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub session_id: Option<Uuid>,
}

impl NoteCreateRequest {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        validate_title(&self.title, &mut errors);
        validate_content(&self.content, &mut errors);
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    pub fn into_draft(self) -> NoteDraft {
        NoteDraft {
            title: self.title,
            content: self.content,
            session_id: self.session_id,
        }
    }
}

/// Absent fields mean "leave unchanged". A body with neither field is
/// accepted and still counts as a mutation.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct NoteUpdateRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl NoteUpdateRequest {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        if let Some(title) = &self.title {
            validate_title(title, &mut errors);
        }
        if let Some(content) = &self.content {
            validate_content(content, &mut errors);
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    pub fn into_patch(self) -> NotePatch {
        NotePatch {
            title: self.title,
            content: self.content,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct NoteListResponse {
    pub items: Vec<Note>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_prev: bool,
}

impl NoteListResponse {
    /// The three derived fields are computed here and nowhere else, so
    /// they cannot drift from `(total, page, limit)`.
    pub fn new(items: Vec<Note>, total: u64, page: u32) -> Self {
        let total_pages = if total == 0 {
            1
        } else {
            total.div_ceil(NOTES_PER_PAGE as u64) as u32
        };
        NoteListResponse {
            items,
            total,
            page,
            limit: NOTES_PER_PAGE,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }
}

fn validate_title(title: &str, errors: &mut Vec<FieldError>) {
    let length = title.chars().count();
    if length == 0 || length > TITLE_MAX_CHARS {
        errors.push(FieldError::new("title", TITLE_BOUNDS_MESSAGE));
    }
}

fn validate_content(content: &str, errors: &mut Vec<FieldError>) {
    if content.is_empty() {
        errors.push(FieldError::new("content", CONTENT_BOUNDS_MESSAGE));
    }
}
