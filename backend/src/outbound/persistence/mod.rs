//! Store adapters.
//!
//! The default adapters keep everything in process memory behind async
//! locks. Anything providing atomic unique-key insert and keyed
//! lookup/delete can stand in by implementing the domain ports.

mod memory;

pub use memory::{InMemoryNoteStore, InMemoryUserStore};
