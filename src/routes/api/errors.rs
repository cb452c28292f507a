use log::error;
use rocket::http::Status;
use rocket::response::status;
use rocket::response::Responder;
use rocket::serde::json::Json;
use rocket::Request;
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

use crate::storage::StorageError;

/// A single field-level validation failure, surfaced to the client
/// before anything reaches the service layer.
#[derive(Clone, Debug, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldError {
    pub fn new(field: &'static str, message: &'static str) -> Self {
        FieldError { field, message }
    }
}

impl From<FieldError> for ApiError {
    fn from(err: FieldError) -> Self {
        ApiError::Validation(vec![err])
    }
}

impl From<Vec<FieldError>> for ApiError {
    fn from(errors: Vec<FieldError>) -> Self {
        ApiError::Validation(errors)
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Note {0} not found")]
    NotFound(Uuid),

    #[error("request validation failed")]
    Validation(Vec<FieldError>),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, req: &'r Request<'_>) -> rocket::response::Result<'static> {
        match self {
            ApiError::NotFound(id) => status::Custom(
                Status::NotFound,
                Json(json!({ "detail": format!("Note {id} not found") })),
            ).respond_to(req),
            ApiError::Validation(errors) => status::Custom(
                Status::UnprocessableEntity,
                Json(json!({ "detail": errors })),
            ).respond_to(req),
            ApiError::Storage(e) => {
                error!("storage failure while handling a request: {e}");
                Err(Status::InternalServerError)
            },
        }
    }
}
