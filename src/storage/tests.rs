use time::macros::datetime;

use super::*;

async fn make_memory_store() -> NoteStore {
    let config = AppConfig {
        database_url: "sqlite::memory:".to_string(),
        max_connections: 1,
    };
    NoteStore::new(&config).await
        .expect("in-memory store creation failed")
}

fn draft(title: &str, content: &str, session_id: Option<Uuid>) -> NoteDraft {
    NoteDraft {
        title: title.to_string(),
        content: content.to_string(),
        session_id,
    }
}

#[tokio::test]
async fn insert_assigns_id_and_equal_timestamps() {
    let store = make_memory_store().await;
    let session_id = Uuid::new_v4();
    let note = store.insert(draft("a title", "some contents", Some(session_id)))
        .await.expect("insert failed");

    assert!(!note.id.is_nil());
    assert_eq!(note.title, "a title");
    assert_eq!(note.content, "some contents");
    assert_eq!(note.session_id, Some(session_id));
    assert_eq!(note.created_at, note.updated_at);
}

#[tokio::test]
async fn insert_then_get_round_trips_all_fields() {
    let store = make_memory_store().await;
    let note = store.insert(draft("title", "contents", None))
        .await.expect("insert failed");

    let fetched = store.get_by_id(note.id)
        .await.expect("get failed")
        .expect("note should exist");
    assert_eq!(fetched, note);
}

#[tokio::test]
async fn get_unknown_id_is_none() {
    let store = make_memory_store().await;
    let fetched = store.get_by_id(Uuid::new_v4()).await.expect("get failed");
    assert!(fetched.is_none());
}

#[tokio::test]
async fn list_orders_newest_first() {
    let store = make_memory_store().await;
    let mut ids = Vec::new();
    for i in 0..3 {
        let note = store.insert(draft(&format!("n{i}"), "x", None))
            .await.expect("insert failed");
        ids.push(note.id);
        std::thread::sleep(std::time::Duration::from_millis(2));
    }

    let (notes, total) = store.list(None, 0, 10).await.expect("list failed");
    assert_eq!(total, 3);
    let listed: Vec<_> = notes.iter().map(|n| n.id).collect();
    ids.reverse();
    assert_eq!(listed, ids);
}

#[test]
fn encoded_timestamps_are_fixed_width_and_orderable() {
    let older = encode_timestamp(datetime!(2026-01-01 00:00:00.12 UTC))
        .expect("encoding failed");
    let newer = encode_timestamp(datetime!(2026-01-01 00:00:00.123 UTC))
        .expect("encoding failed");
    assert_eq!(older.len(), newer.len());
    assert!(older < newer);
}

#[tokio::test]
async fn list_orders_subsecond_prefixes_chronologically() {
    let store = make_memory_store().await;
    let older = store.insert(draft("older", "x", None))
        .await.expect("insert failed");
    let newer = store.insert(draft("newer", "x", None))
        .await.expect("insert failed");
    // one subsecond string is a digit-prefix of the other
    set_created_at(&store, older.id, datetime!(2026-01-01 00:00:00.12 UTC)).await;
    set_created_at(&store, newer.id, datetime!(2026-01-01 00:00:00.123 UTC)).await;

    let (notes, _) = store.list(None, 0, 10).await.expect("list failed");
    let titles: Vec<_> = notes.iter().map(|n| n.title.as_str()).collect();
    assert_eq!(titles, ["newer", "older"]);
}

async fn set_created_at(store: &NoteStore, id: Uuid, timestamp: OffsetDateTime) {
    sqlx::query("UPDATE notes SET created_at = ?2 WHERE id = ?1")
        .bind(id)
        .bind(encode_timestamp(timestamp).expect("encoding failed"))
        .execute(&store.pool)
        .await
        .expect("timestamp override failed");
}

#[tokio::test]
async fn list_total_ignores_offset_and_limit() {
    let store = make_memory_store().await;
    for i in 0..5 {
        store.insert(draft(&format!("n{i}"), "x", None))
            .await.expect("insert failed");
    }

    let (notes, total) = store.list(None, 4, 2).await.expect("list failed");
    assert_eq!(total, 5);
    assert_eq!(notes.len(), 1);

    let (notes, total) = store.list(None, 10, 2).await.expect("list failed");
    assert_eq!(total, 5);
    assert!(notes.is_empty());
}

#[tokio::test]
async fn list_filters_by_session_id() {
    let store = make_memory_store().await;
    let session_id = Uuid::new_v4();
    store.insert(draft("tagged", "x", Some(session_id)))
        .await.expect("insert failed");
    store.insert(draft("other", "x", Some(Uuid::new_v4())))
        .await.expect("insert failed");
    store.insert(draft("untagged", "x", None))
        .await.expect("insert failed");

    let (notes, total) = store.list(Some(session_id), 0, 10)
        .await.expect("list failed");
    assert_eq!(total, 1);
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].title, "tagged");
}

#[tokio::test]
async fn apply_update_merges_and_bumps_updated_at() {
    let store = make_memory_store().await;
    let note = store.insert(draft("title", "contents", None))
        .await.expect("insert failed");
    std::thread::sleep(std::time::Duration::from_millis(2));

    let patch = NotePatch { title: None, content: Some("changed".to_string()) };
    let updated = store.apply_update(note.clone(), patch)
        .await.expect("update failed");
    assert_eq!(updated.title, "title");
    assert_eq!(updated.content, "changed");
    assert_eq!(updated.created_at, note.created_at);
    assert!(updated.updated_at > note.updated_at);

    let fetched = store.get_by_id(note.id)
        .await.expect("get failed")
        .expect("note should exist");
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn empty_patch_still_refreshes_updated_at() {
    let store = make_memory_store().await;
    let note = store.insert(draft("title", "contents", None))
        .await.expect("insert failed");
    std::thread::sleep(std::time::Duration::from_millis(2));

    let updated = store.apply_update(note.clone(), NotePatch::default())
        .await.expect("update failed");
    assert_eq!(updated.title, note.title);
    assert_eq!(updated.content, note.content);
    assert!(updated.updated_at > note.updated_at);
}

#[tokio::test]
async fn delete_removes_the_row_once() {
    let store = make_memory_store().await;
    let note = store.insert(draft("title", "contents", None))
        .await.expect("insert failed");

    assert!(store.delete(note.id).await.expect("delete failed"));
    assert!(!store.delete(note.id).await.expect("delete failed"));
    assert!(store.get_by_id(note.id).await.expect("get failed").is_none());
}
