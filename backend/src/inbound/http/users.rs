//! Users API handlers.
//!
//! ```text
//! POST /api/users {"username":"jeff1","name":"Jeff Smith","password":"jeffsmith22"}
//! GET /api/users
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::ports::UserStoreError;
use crate::domain::{Error, PasswordDigest, Registration, User, UserValidationError};
use crate::inbound::http::ApiResult;
use crate::inbound::http::deadline::query_store;
use crate::inbound::http::schemas::{ErrorSchema, UserSchema};
use crate::inbound::http::state::HttpState;

/// Request body for `POST /api/users`.
///
/// Fields are optional at the serde layer so an absent field is reported
/// through the standard error envelope naming the missing field.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UserRequest {
    /// Unique account handle; required, minimum three characters.
    pub username: Option<String>,
    /// Display name; required.
    pub name: Option<String>,
    /// Plaintext password; required, minimum three characters. Hashed before
    /// storage and never echoed back.
    pub password: Option<String>,
}

fn map_user_validation_error(err: UserValidationError) -> Error {
    let (field, code) = match err {
        UserValidationError::MissingUsername => ("username", "missing_field"),
        UserValidationError::UsernameTooShort { .. } => ("username", "too_short"),
        UserValidationError::MissingName => ("name", "missing_field"),
        UserValidationError::EmptyName => ("name", "empty_field"),
        UserValidationError::MissingPassword => ("password", "missing_field"),
        UserValidationError::PasswordTooShort { .. } => ("password", "too_short"),
    };
    Error::invalid_request(err.to_string()).with_details(json!({ "field": field, "code": code }))
}

fn map_user_store_error(err: UserStoreError) -> Error {
    match err {
        UserStoreError::Connection { message } => Error::service_unavailable(message),
        UserStoreError::Query { message } => Error::internal(message),
        duplicate @ UserStoreError::DuplicateUsername { .. } => {
            Error::invalid_request(duplicate.to_string())
                .with_details(json!({ "field": "username", "code": "duplicate" }))
        }
    }
}

/// Register a new user account.
///
/// The plaintext password is hashed with a fresh random salt before the
/// account reaches the store; the response never contains password material.
/// A taken username fails with a message naming the violated uniqueness
/// constraint.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = UserRequest,
    responses(
        (status = 201, description = "Registered account, password fields omitted", body = UserSchema),
        (status = 400, description = "Invalid payload or duplicate username", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<UserRequest>,
) -> ApiResult<HttpResponse> {
    let UserRequest {
        username,
        name,
        password,
    } = payload.into_inner();
    let registration = Registration::try_from_parts(username, name, password)
        .map_err(map_user_validation_error)?;
    let digest = PasswordDigest::derive(registration.password())
        .map_err(|err| Error::internal(err.to_string()))?;
    let user = registration.into_user(digest);

    let stored = query_store(state.users.insert(user), map_user_store_error).await?;
    Ok(HttpResponse::Created().json(stored))
}

/// List registered accounts.
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "All accounts in registration order", body = [UserSchema]),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    let users = query_store(state.users.list(), map_user_store_error).await?;
    Ok(web::Json(users))
}
