//! OpenAPI schema wrappers for types whose serde shape is not derivable.
//!
//! The domain error serializes through a conversion DTO, so its wire shape is
//! documented here instead of deriving `ToSchema` on the domain type itself.

use utoipa::ToSchema;

/// Wire shape of an error response body.
#[derive(Debug, ToSchema)]
#[schema(as = ErrorBody)]
pub struct ErrorSchema {
    /// Stable snake_case failure category.
    #[schema(example = "invalid_request")]
    pub code: String,
    /// Human-readable cause.
    #[schema(example = "content is required")]
    pub error: String,
}

/// Wire shape of a stored user in responses; password material is never
/// present.
#[derive(Debug, ToSchema)]
#[schema(as = User)]
pub struct UserSchema {
    /// Unique account handle.
    #[schema(example = "jeff1")]
    pub username: String,
    /// Display name.
    #[schema(example = "Jeff Smith")]
    pub name: String,
}
