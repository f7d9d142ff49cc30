//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::sync::Arc;

use crate::domain::ports::{NoteStore, UserStore};
use crate::outbound::persistence::{InMemoryNoteStore, InMemoryUserStore};

/// Builder-style configuration for creating the HTTP server.
///
/// Defaults to the in-memory store adapters; deployments with an external
/// persistence engine swap their adapters in through the builder methods.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) notes: Arc<dyn NoteStore>,
    pub(crate) users: Arc<dyn UserStore>,
}

impl ServerConfig {
    /// Construct a server configuration listening on the given address.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            notes: Arc::new(InMemoryNoteStore::new()),
            users: Arc::new(InMemoryUserStore::new()),
        }
    }

    /// Attach an alternative note store adapter.
    #[must_use]
    pub fn with_note_store(mut self, notes: Arc<dyn NoteStore>) -> Self {
        self.notes = notes;
        self
    }

    /// Attach an alternative user store adapter.
    #[must_use]
    pub fn with_user_store(mut self, users: Arc<dyn UserStore>) -> Self {
        self.users = users;
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
