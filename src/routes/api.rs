pub mod errors;
pub mod model;

use rocket::response::content::RawText;
use rocket::response::status::{Created, NoContent};
use rocket::serde::json::Json;
use rocket::{delete, get, post, put, routes, Build, Rocket, State};
use uuid::Uuid;

use crate::data::Note;
use crate::routes::api::errors::{ApiError, FieldError};
use crate::routes::api::model::{NoteCreateRequest, NoteListResponse, NoteUpdateRequest};
use crate::routes::API_PREFIX;
use crate::service::NoteService;
use crate::storage::NoteStore;

#[get("/version")]
fn version() -> RawText<&'static str> {
    RawText("1")
}

#[post("/notes", data = "<payload>")]
async fn create_note(
    store: &State<NoteStore>,
    payload: Json<NoteCreateRequest>,
) -> Result<Created<Json<Note>>, ApiError> {
    let payload = payload.into_inner();
    payload.validate()?;

    let note = NoteService::new(store).create(payload.into_draft()).await?;
    let location = format!("{API_PREFIX}/notes/{}", note.id);
    Ok(Created::new(location).body(Json(note)))
}

#[get("/notes?<page>&<session_id>")]
async fn list_notes(
    store: &State<NoteStore>,
    page: Option<&str>,
    session_id: Option<Uuid>,
) -> Result<Json<NoteListResponse>, ApiError> {
    let page = parse_page(page)?;
    let (notes, total) = NoteService::new(store).list(page, session_id).await?;
    Ok(Json(NoteListResponse::new(notes, total, page)))
}

/// A missing page means the first one; anything present must be an
/// integer >= 1, rejected with field-level detail otherwise.
fn parse_page(raw: Option<&str>) -> Result<u32, ApiError> {
    match raw {
        None => Ok(1),
        Some(raw) => raw.parse::<u32>()
            .ok()
            .filter(|page| *page >= 1)
            .ok_or_else(||
                FieldError::new(
                    "page",
                    "must be an integer greater than or equal to 1",
                ).into()
            ),
    }
}

#[get("/notes/<id>")]
async fn get_note(
    store: &State<NoteStore>,
    id: Uuid,
) -> Result<Json<Note>, ApiError> {
    NoteService::new(store).get_by_id(id).await?
        .map(Json)
        .ok_or(ApiError::NotFound(id))
}

#[put("/notes/<id>", data = "<payload>")]
async fn update_note(
    store: &State<NoteStore>,
    id: Uuid,
    payload: Json<NoteUpdateRequest>,
) -> Result<Json<Note>, ApiError> {
    let payload = payload.into_inner();
    payload.validate()?;

    NoteService::new(store).update(id, payload.into_patch()).await?
        .map(Json)
        .ok_or(ApiError::NotFound(id))
}

#[delete("/notes/<id>")]
async fn delete_note(
    store: &State<NoteStore>,
    id: Uuid,
) -> Result<NoContent, ApiError> {
    if NoteService::new(store).delete(id).await? {
        Ok(NoContent)
    } else {
        Err(ApiError::NotFound(id))
    }
}

pub trait ApiRocketBuildExt {
    fn install_sidenotes_api(self) -> Self;
}

impl ApiRocketBuildExt for Rocket<Build> {
    fn install_sidenotes_api(self) -> Self {
        self.mount(
            API_PREFIX,
            routes![
                version,
                create_note,
                list_notes,
                get_note,
                update_note,
                delete_note,
            ],
        )
    }
}
