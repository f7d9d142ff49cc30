//! Domain primitives and aggregates.
//!
//! Purpose: define strongly typed domain entities used by the API and
//! persistence layers. Keep types immutable and document invariants and
//! serialisation contracts (serde) in each type's Rustdoc.
//!
//! Public surface:
//! - [`Error`] / [`ErrorCode`] — transport-agnostic failure payload.
//! - [`Note`] and its validated components — stored note entity.
//! - [`User`], [`Registration`] — account entity and its creation payload.
//! - [`PasswordDigest`] — salted one-way password hash.
//! - [`ports`] — store traits implemented by outbound adapters.

pub mod error;
pub mod note;
pub mod password;
pub mod ports;
pub mod user;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::note::{Note, NoteContent, NoteDraft, NoteId, NoteValidationError};
pub use self::password::{PasswordDigest, PasswordHashError};
pub use self::user::{
    DisplayName, PASSWORD_MIN, Registration, USERNAME_MIN, User, UserValidationError, Username,
};
