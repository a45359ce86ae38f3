//! History store port.

use async_trait::async_trait;

use crate::domain::{ClipRecord, HistoryItem, ServiceKind};
use crate::error::GenerationResult;

/// Port for the persisted history of generated clips.
///
/// All operations are scoped to the requesting identity by the
/// backing collaborator; this crate never sees other users' clips.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// List all history items for a service, in backend order.
    ///
    /// The order is meaningful (newest-first as the backend returns
    /// it) and callers must not resort it.
    async fn list_history(&self, service: ServiceKind) -> GenerationResult<Vec<HistoryItem>>;

    /// Look up a clip record by id.
    ///
    /// Returns `None` both for ids that do not exist and for clips
    /// owned by a different identity; not-found rather than
    /// unauthorized, to avoid leaking existence.
    async fn find_clip(&self, id: &str) -> GenerationResult<Option<ClipRecord>>;

    /// Delete the database record for a clip.
    ///
    /// Record-only: the object-store asset is handled separately (and
    /// best-effort) by the caller's two-phase delete.
    async fn delete_record(&self, id: &str) -> GenerationResult<()>;
}
