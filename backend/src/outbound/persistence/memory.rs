//! In-memory store adapters.
//!
//! Both stores keep their records in an insertion-ordered `Vec` behind a
//! `tokio::sync::RwLock`. Reads share the lock; conflicting writes serialize
//! on it, which is what makes the username uniqueness check atomic: the scan
//! and the push happen inside one write-lock critical section.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{NoteStore, NoteStoreError, UserStore, UserStoreError};
use crate::domain::{Note, NoteDraft, NoteId, User};

/// Process-local [`NoteStore`] retaining insertion order.
#[derive(Debug, Default)]
pub struct InMemoryNoteStore {
    notes: RwLock<Vec<Note>>,
}

impl InMemoryNoteStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with existing notes, preserving their order.
    pub fn with_notes(notes: impl IntoIterator<Item = Note>) -> Self {
        Self {
            notes: RwLock::new(notes.into_iter().collect()),
        }
    }
}

#[async_trait]
impl NoteStore for InMemoryNoteStore {
    async fn list(&self) -> Result<Vec<Note>, NoteStoreError> {
        Ok(self.notes.read().await.clone())
    }

    async fn find_by_id(&self, id: &NoteId) -> Result<Option<Note>, NoteStoreError> {
        let notes = self.notes.read().await;
        Ok(notes.iter().find(|note| note.id() == id).cloned())
    }

    async fn insert(&self, draft: NoteDraft) -> Result<Note, NoteStoreError> {
        let mut notes = self.notes.write().await;
        let note = Note::from_draft(NoteId::random(), draft);
        notes.push(note.clone());
        Ok(note)
    }

    async fn delete(&self, id: &NoteId) -> Result<(), NoteStoreError> {
        let mut notes = self.notes.write().await;
        notes.retain(|note| note.id() != id);
        Ok(())
    }
}

/// Process-local [`UserStore`] enforcing username uniqueness at the insert
/// boundary.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with existing accounts, preserving their order.
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            users: RwLock::new(users.into_iter().collect()),
        }
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn insert(&self, user: User) -> Result<User, UserStoreError> {
        let mut users = self.users.write().await;
        if users
            .iter()
            .any(|existing| existing.username() == user.username())
        {
            return Err(UserStoreError::DuplicateUsername {
                username: user.username().clone(),
            });
        }
        users.push(user.clone());
        Ok(user)
    }

    async fn list(&self) -> Result<Vec<User>, UserStoreError> {
        Ok(self.users.read().await.clone())
    }
}
