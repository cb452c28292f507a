use uuid::Uuid;

use crate::data::{Note, NoteDraft, NotePatch};
use crate::lib_constants::NOTES_PER_PAGE;
use crate::storage::{NoteStore, StorageError};

/// Note use-case orchestration over a request-scoped store handle.
/// Persistence details do not leak past this layer; store failures
/// propagate unchanged and are fatal to the calling request.
pub struct NoteService<'a> {
    store: &'a NoteStore,
}

impl<'a> NoteService<'a> {
    pub fn new(store: &'a NoteStore) -> Self {
        NoteService { store }
    }

    /// Field lengths are guarded upstream; this just persists.
    pub async fn create(&self, draft: NoteDraft) -> Result<Note, StorageError> {
        self.store.insert(draft).await
    }

    /// `None` is a legitimate outcome; the caller decides how to
    /// surface it.
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Note>, StorageError> {
        self.store.get_by_id(id).await
    }

    /// One fixed-size page (10 notes), 1-indexed, newest first. The
    /// filter is applied identically to the page and the total count.
    pub async fn list(
        &self,
        page: u32,
        session_id: Option<Uuid>,
    ) -> Result<(Vec<Note>, u64), StorageError> {
        debug_assert!(page >= 1);
        // in u64: (u32::MAX - 1) * 10 does not fit in u32
        let offset = (u64::from(page) - 1) * u64::from(NOTES_PER_PAGE);
        self.store.list(session_id, offset, NOTES_PER_PAGE).await
    }

    /// Merges only the fields present in the patch over the stored
    /// note. `None` when no note with `id` exists; nothing is written
    /// in that case.
    pub async fn update(
        &self,
        id: Uuid,
        patch: NotePatch,
    ) -> Result<Option<Note>, StorageError> {
        let Some(note) = self.store.get_by_id(id).await? else {
            return Ok(None);
        };
        let updated = self.store.apply_update(note, patch).await?;
        Ok(Some(updated))
    }

    /// False when the id is absent, true when a row was removed.
    pub async fn delete(&self, id: Uuid) -> Result<bool, StorageError> {
        self.store.delete(id).await
    }
}
