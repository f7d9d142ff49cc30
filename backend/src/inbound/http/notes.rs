//! Notes API handlers.
//!
//! ```text
//! GET /api/notes
//! GET /api/notes/{id}
//! POST /api/notes {"content":"Browser can only execute javascript","important":true}
//! DELETE /api/notes/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::ports::NoteStoreError;
use crate::domain::{Error, Note, NoteDraft, NoteId, NoteValidationError};
use crate::inbound::http::ApiResult;
use crate::inbound::http::deadline::query_store;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Request body for `POST /api/notes`.
///
/// Fields are optional at the serde layer so an absent `content` is reported
/// through the standard error envelope rather than a bare deserializer
/// failure.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct NoteRequest {
    /// Note body text; required.
    pub content: Option<String>,
    /// Importance flag; defaults to `false`.
    pub important: Option<bool>,
}

fn map_note_validation_error(err: NoteValidationError) -> Error {
    let (field, code) = match err {
        NoteValidationError::MissingContent => ("content", "missing_field"),
        NoteValidationError::EmptyContent => ("content", "empty_field"),
        NoteValidationError::EmptyId | NoteValidationError::MalformedId => ("id", "malformed_id"),
    };
    Error::invalid_request(err.to_string()).with_details(json!({ "field": field, "code": code }))
}

fn map_note_store_error(err: NoteStoreError) -> Error {
    match err {
        NoteStoreError::Connection { message } => Error::service_unavailable(message),
        NoteStoreError::Query { message } => Error::internal(message),
    }
}

fn parse_note_id(raw: String) -> Result<NoteId, Error> {
    NoteId::new(raw).map_err(map_note_validation_error)
}

/// List all stored notes.
#[utoipa::path(
    get,
    path = "/api/notes",
    responses(
        (status = 200, description = "All stored notes in insertion order", body = [Note]),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["notes"],
    operation_id = "listNotes"
)]
#[get("/notes")]
pub async fn list_notes(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Note>>> {
    let notes = query_store(state.notes.list(), map_note_store_error).await?;
    Ok(web::Json(notes))
}

/// Fetch a single note by identifier.
///
/// A syntactically invalid identifier is a 400, distinct from a well-formed
/// identifier with no matching record, which is a 404.
#[utoipa::path(
    get,
    path = "/api/notes/{id}",
    params(("id" = String, Path, description = "Note identifier (UUID)")),
    responses(
        (status = 200, description = "Stored note", body = Note),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 404, description = "No note with this identifier", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["notes"],
    operation_id = "getNote"
)]
#[get("/notes/{id}")]
pub async fn get_note(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Note>> {
    let id = parse_note_id(path.into_inner())?;
    let note = query_store(state.notes.find_by_id(&id), map_note_store_error).await?;
    note.map(web::Json)
        .ok_or_else(|| Error::not_found("note not found"))
}

/// Create a note from a validated payload.
#[utoipa::path(
    post,
    path = "/api/notes",
    request_body = NoteRequest,
    responses(
        (status = 201, description = "Stored note with its assigned id", body = Note),
        (status = 400, description = "Invalid payload", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["notes"],
    operation_id = "createNote"
)]
#[post("/notes")]
pub async fn create_note(
    state: web::Data<HttpState>,
    payload: web::Json<NoteRequest>,
) -> ApiResult<HttpResponse> {
    let NoteRequest { content, important } = payload.into_inner();
    let draft = NoteDraft::try_from_parts(content, important).map_err(map_note_validation_error)?;
    let note = query_store(state.notes.insert(draft), map_note_store_error).await?;
    Ok(HttpResponse::Created().json(note))
}

/// Delete a note by identifier.
///
/// Deleting an id with no record still answers 204; only a malformed id is
/// an error.
#[utoipa::path(
    delete,
    path = "/api/notes/{id}",
    params(("id" = String, Path, description = "Note identifier (UUID)")),
    responses(
        (status = 204, description = "Note absent after the call"),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["notes"],
    operation_id = "deleteNote"
)]
#[delete("/notes/{id}")]
pub async fn delete_note(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_note_id(path.into_inner())?;
    query_store(state.notes.delete(&id), map_note_store_error).await?;
    Ok(HttpResponse::NoContent().finish())
}
