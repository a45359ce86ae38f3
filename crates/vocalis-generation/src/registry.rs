//! Voice registry.
//!
//! Simple per-service cache over the [`VoiceCatalog`] port. Supplies
//! voice ids to submission; which voice is currently selected lives
//! in the shared session, not here.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use vocalis_core::domain::Voice;
use vocalis_core::error::GenerationResult;
use vocalis_core::ports::VoiceCatalog;
use vocalis_core::ServiceKind;

/// Cached voice listings, loaded on demand per service.
pub struct VoiceRegistry {
    catalog: Arc<dyn VoiceCatalog>,
    cache: RwLock<HashMap<ServiceKind, Vec<Voice>>>,
}

impl VoiceRegistry {
    /// Create an empty registry over the catalog port.
    #[must_use]
    pub fn new(catalog: Arc<dyn VoiceCatalog>) -> Self {
        Self {
            catalog,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Fetch the listing for `service` if it is not cached yet.
    pub async fn ensure_loaded(&self, service: ServiceKind) -> GenerationResult<()> {
        {
            let cache = self.cache.read().await;
            if cache.contains_key(&service) {
                return Ok(());
            }
        }

        let voices = self.catalog.list_voices(service).await?;
        tracing::debug!(service = %service, count = voices.len(), "Voice catalog loaded");

        let mut cache = self.cache.write().await;
        cache.insert(service, voices);
        Ok(())
    }

    /// Cached voices for `service`, loading them on first access.
    pub async fn voices(&self, service: ServiceKind) -> GenerationResult<Vec<Voice>> {
        self.ensure_loaded(service).await?;
        let cache = self.cache.read().await;
        Ok(cache.get(&service).cloned().unwrap_or_default())
    }

    /// Look up a voice by id within a service's listing.
    pub async fn find(&self, service: ServiceKind, voice_id: &str) -> GenerationResult<Option<Voice>> {
        let voices = self.voices(service).await?;
        Ok(voices.into_iter().find(|voice| voice.id == voice_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicU32, Ordering};

    use async_trait::async_trait;

    struct CountingCatalog {
        calls: AtomicU32,
    }

    #[async_trait]
    impl VoiceCatalog for CountingCatalog {
        async fn list_voices(&self, service: ServiceKind) -> GenerationResult<Vec<Voice>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![Voice::new("v1", "Sarah", service)])
        }
    }

    #[tokio::test]
    async fn listing_is_fetched_once_per_service() {
        let catalog = Arc::new(CountingCatalog {
            calls: AtomicU32::new(0),
        });
        let registry = VoiceRegistry::new(Arc::clone(&catalog) as Arc<dyn VoiceCatalog>);

        let first = registry.voices(ServiceKind::StyleTts2).await.unwrap();
        let second = registry.voices(ServiceKind::StyleTts2).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(catalog.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn find_matches_by_id() {
        let registry = VoiceRegistry::new(Arc::new(CountingCatalog {
            calls: AtomicU32::new(0),
        }));

        let hit = registry.find(ServiceKind::StyleTts2, "v1").await.unwrap();
        assert_eq!(hit.map(|v| v.name), Some("Sarah".to_string()));

        let miss = registry.find(ServiceKind::StyleTts2, "nope").await.unwrap();
        assert!(miss.is_none());
    }
}
