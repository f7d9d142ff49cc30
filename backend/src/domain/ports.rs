//! Port abstractions for store adapters and their errors.
//!
//! Handlers depend only on these traits; concrete adapters live in the
//! outbound layer. Store failures are surfaced explicitly so the HTTP
//! adapter can distinguish an unreachable store from a failed query, and
//! are never silently swallowed.

use async_trait::async_trait;

use crate::domain::{Note, NoteDraft, NoteId, User, Username};

/// Persistence errors raised by note store adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NoteStoreError {
    /// Store connection could not be established.
    #[error("note store connection failed: {message}")]
    Connection {
        /// Underlying failure description.
        message: String,
    },
    /// Query or mutation failed during execution.
    #[error("note store query failed: {message}")]
    Query {
        /// Underlying failure description.
        message: String,
    },
}

/// Persistence errors raised by user store adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserStoreError {
    /// Store connection could not be established.
    #[error("user store connection failed: {message}")]
    Connection {
        /// Underlying failure description.
        message: String,
    },
    /// Query or mutation failed during execution.
    #[error("user store query failed: {message}")]
    Query {
        /// Underlying failure description.
        message: String,
    },
    /// Insert collided with an existing username.
    #[error("expected `username` to be unique")]
    DuplicateUsername {
        /// The handle that was already taken.
        username: Username,
    },
}

/// Keyed collection of notes.
///
/// Implementations own identifier assignment: `insert` receives a validated
/// draft and returns the stored note with its freshly assigned id.
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Full sequence of stored notes in insertion order.
    async fn list(&self) -> Result<Vec<Note>, NoteStoreError>;

    /// Fetch a note by identifier; `None` when no record matches.
    async fn find_by_id(&self, id: &NoteId) -> Result<Option<Note>, NoteStoreError>;

    /// Persist a draft, assigning a unique identifier.
    async fn insert(&self, draft: NoteDraft) -> Result<Note, NoteStoreError>;

    /// Remove a note if present. Deleting an absent id is not an error.
    async fn delete(&self, id: &NoteId) -> Result<(), NoteStoreError>;
}

/// Keyed collection of user accounts.
///
/// Username uniqueness is enforced inside `insert` itself: the check and the
/// write happen in one critical section, so two concurrent registrations of
/// the same handle resolve to exactly one success.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persist a new account, failing atomically on a taken username.
    async fn insert(&self, user: User) -> Result<User, UserStoreError>;

    /// Full sequence of stored accounts in insertion order.
    async fn list(&self) -> Result<Vec<User>, UserStoreError>;
}
