//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct generating the OpenAPI specification for
//! the REST API: all note and user endpoints, the health probes, and the
//! schema wrappers for response bodies.

use utoipa::OpenApi;

use crate::domain::Note;
use crate::inbound::http::notes::NoteRequest;
use crate::inbound::http::schemas::{ErrorSchema, UserSchema};
use crate::inbound::http::users::UserRequest;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Jotter API",
        description = "REST interface for storing short text notes and user accounts."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::notes::list_notes,
        crate::inbound::http::notes::get_note,
        crate::inbound::http::notes::create_note,
        crate::inbound::http::notes::delete_note,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::list_users,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(Note, NoteRequest, UserRequest, UserSchema, ErrorSchema)),
    tags(
        (name = "notes", description = "Operations on stored notes"),
        (name = "users", description = "Operations related to user accounts"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying the generated document covers the HTTP surface.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/api/notes")]
    #[case("/api/notes/{id}")]
    #[case("/api/users")]
    #[case("/health/ready")]
    #[case("/health/live")]
    fn document_covers_every_endpoint(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(
            doc.paths.paths.contains_key(path),
            "OpenAPI document is missing {path}"
        );
    }
}
