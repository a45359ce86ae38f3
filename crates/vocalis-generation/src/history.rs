//! Client-side history cache.
//!
//! Holds the last-fetched listing per service and keeps it in sync
//! through explicit refreshes and optimistic delete removal. Ordering
//! is the backend's: the cache never resorts, and the grouped view
//! preserves insertion order within each date.

use std::collections::HashMap;
use std::sync::Arc;

use indexmap::IndexMap;
use tokio::sync::{RwLock, mpsc};

use vocalis_core::domain::HistoryItem;
use vocalis_core::error::{GenerationError, GenerationResult};
use vocalis_core::events::StudioEvent;
use vocalis_core::ports::{HistoryStore, ObjectStore};
use vocalis_core::ServiceKind;

/// Cached per-service history listings.
pub struct HistoryCache {
    store: Arc<dyn HistoryStore>,
    objects: Arc<dyn ObjectStore>,
    cache: RwLock<HashMap<ServiceKind, Vec<HistoryItem>>>,
    events: mpsc::UnboundedSender<StudioEvent>,
}

impl HistoryCache {
    /// Create an empty cache over the given collaborators.
    #[must_use]
    pub fn new(
        store: Arc<dyn HistoryStore>,
        objects: Arc<dyn ObjectStore>,
        events: mpsc::UnboundedSender<StudioEvent>,
    ) -> Self {
        Self {
            store,
            objects,
            cache: RwLock::new(HashMap::new()),
            events,
        }
    }

    /// Re-fetch the listing for `service` and replace the cached copy.
    pub async fn refresh(&self, service: ServiceKind) -> GenerationResult<()> {
        let items = self.store.list_history(service).await?;
        tracing::debug!(service = %service, count = items.len(), "History refreshed");

        let mut cache = self.cache.write().await;
        cache.insert(service, items);
        Ok(())
    }

    /// Snapshot of the cached items for `service`, in backend order.
    ///
    /// Empty until the first [`refresh`](Self::refresh).
    pub async fn items(&self, service: ServiceKind) -> Vec<HistoryItem> {
        let cache = self.cache.read().await;
        cache.get(&service).cloned().unwrap_or_default()
    }

    /// Cached items for `service` grouped by date for display.
    ///
    /// Dates appear in the order the backend returned them; items
    /// within a date keep their relative order.
    pub async fn grouped(&self, service: ServiceKind) -> IndexMap<String, Vec<HistoryItem>> {
        let cache = self.cache.read().await;
        let mut groups: IndexMap<String, Vec<HistoryItem>> = IndexMap::new();
        if let Some(items) = cache.get(&service) {
            for item in items {
                groups
                    .entry(item.date.clone())
                    .or_default()
                    .push(item.clone());
            }
        }
        groups
    }

    /// Delete a clip: object-store asset first (best-effort), then the
    /// database record, then optimistic removal from the cached list.
    ///
    /// A missing or foreign-owned id is `ClipNotFound` and leaves the
    /// cache untouched. An asset-delete failure is logged and
    /// swallowed so it never blocks the record deletion; a record-
    /// delete failure is surfaced and the cache stays unchanged.
    pub async fn delete(&self, id: &str) -> GenerationResult<()> {
        let Some(record) = self.store.find_clip(id).await? else {
            return Err(GenerationError::clip_not_found(id));
        };

        if let Some(key) = &record.object_key {
            if let Err(e) = self.objects.delete_object(key).await {
                tracing::warn!(id = %id, key = %key, error = %e, "Object delete failed, removing record anyway");
            }
        }

        self.store.delete_record(id).await?;
        tracing::info!(id = %id, "History clip deleted");

        // Optimistic removal, no reload. The record's service is not
        // part of the lookup result, so scan the cached lists.
        let mut cache = self.cache.write().await;
        for (service, items) in cache.iter_mut() {
            let before = items.len();
            items.retain(|item| item.id != id);
            if items.len() != before {
                let _ = self.events.send(StudioEvent::HistoryInvalidated { service: *service });
            }
        }

        Ok(())
    }
}
