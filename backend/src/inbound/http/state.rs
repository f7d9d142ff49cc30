//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without real I/O.

use std::sync::Arc;

use crate::domain::ports::{NoteStore, UserStore};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Note collection backing the `/api/notes` endpoints.
    pub notes: Arc<dyn NoteStore>,
    /// User collection backing the `/api/users` endpoints.
    pub users: Arc<dyn UserStore>,
}

impl HttpState {
    /// Construct state from store implementations.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use jotter_backend::inbound::http::state::HttpState;
    /// use jotter_backend::outbound::persistence::{InMemoryNoteStore, InMemoryUserStore};
    ///
    /// let state = HttpState::new(
    ///     Arc::new(InMemoryNoteStore::new()),
    ///     Arc::new(InMemoryUserStore::new()),
    /// );
    /// let _notes = state.notes.clone();
    /// ```
    pub fn new(notes: Arc<dyn NoteStore>, users: Arc<dyn UserStore>) -> Self {
        Self { notes, users }
    }
}
