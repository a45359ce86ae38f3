//! Port traits implemented by infrastructure adapters.
//!
//! Ports keep the generation core free of transport detail: only the
//! core domain types appear in signatures, and adapter errors are
//! mapped into [`GenerationError`](crate::error::GenerationError) at
//! the boundary.

mod generation_backend;
mod history_store;
mod object_store;
mod voice_catalog;

pub use generation_backend::GenerationBackend;
pub use history_store::HistoryStore;
pub use object_store::ObjectStore;
pub use voice_catalog::VoiceCatalog;
