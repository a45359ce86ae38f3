//! Shared session state: current playback artifact and voice selection.
//!
//! This replaces ambient global stores with an explicitly passed
//! context. Both fields have single-writer-per-update, last-write-wins
//! semantics: there is no queue of artifacts and no versioning of the
//! voice selection.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{RwLock, watch};

use crate::domain::{AudioArtifact, ServiceKind, Voice};

/// Process-wide mutable session state.
///
/// Cheap to clone (`Arc` internals); hand one to every component that
/// reads or publishes playback/voice state.
#[derive(Clone)]
pub struct SessionState {
    /// Current playback artifact. At most one at a time; publishing a
    /// new one replaces the old. Readers subscribe for change
    /// notifications instead of polling.
    playback_tx: Arc<watch::Sender<Option<AudioArtifact>>>,

    /// Selected voice per service.
    selected_voices: Arc<RwLock<HashMap<ServiceKind, Voice>>>,
}

impl SessionState {
    /// Create an empty session: nothing playing, no voices selected.
    #[must_use]
    pub fn new() -> Self {
        let (playback_tx, _) = watch::channel(None);
        Self {
            playback_tx: Arc::new(playback_tx),
            selected_voices: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Publish an artifact as the current playback item.
    ///
    /// Replaces whatever was playing. Subscribed playback surfaces see
    /// the change immediately.
    pub fn play(&self, artifact: AudioArtifact) {
        tracing::debug!(id = %artifact.id, service = %artifact.service, "Publishing playback artifact");
        self.playback_tx.send_replace(Some(artifact));
    }

    /// Clear the playback slot.
    pub fn clear_playback(&self) {
        self.playback_tx.send_replace(None);
    }

    /// The artifact currently in the playback slot, if any.
    #[must_use]
    pub fn current_artifact(&self) -> Option<AudioArtifact> {
        self.playback_tx.borrow().clone()
    }

    /// Subscribe to playback changes.
    ///
    /// The receiver observes the latest value only; intermediate
    /// artifacts replaced between reads are skipped, which matches the
    /// no-queue playback model.
    #[must_use]
    pub fn subscribe_playback(&self) -> watch::Receiver<Option<AudioArtifact>> {
        self.playback_tx.subscribe()
    }

    /// Record the selected voice for a service. Last write wins.
    pub async fn select_voice(&self, voice: Voice) {
        let mut voices = self.selected_voices.write().await;
        voices.insert(voice.service, voice);
    }

    /// The currently selected voice for a service.
    pub async fn selected_voice(&self, service: ServiceKind) -> Option<Voice> {
        self.selected_voices.read().await.get(&service).cloned()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn artifact(id: &str) -> AudioArtifact {
        AudioArtifact {
            id: id.to_string(),
            title: "test".to_string(),
            audio_url: format!("https://cdn/{id}.wav"),
            voice_id: "v1".to_string(),
            duration: "0:30".to_string(),
            service: ServiceKind::StyleTts2,
            created_at: NaiveDate::from_ymd_opt(2026, 8, 30).unwrap(),
        }
    }

    #[test]
    fn playback_slot_replaces_not_queues() {
        let session = SessionState::new();
        session.play(artifact("a1"));
        session.play(artifact("a2"));
        assert_eq!(session.current_artifact().unwrap().id, "a2");
    }

    #[tokio::test]
    async fn subscriber_observes_latest_value() {
        let session = SessionState::new();
        let mut rx = session.subscribe_playback();

        session.play(artifact("a1"));
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().as_ref().unwrap().id, "a1");
    }

    #[tokio::test]
    async fn voice_selection_is_per_service_last_write_wins() {
        let session = SessionState::new();
        session
            .select_voice(Voice::new("v1", "Ana", ServiceKind::StyleTts2))
            .await;
        session
            .select_voice(Voice::new("v2", "Ben", ServiceKind::StyleTts2))
            .await;
        session
            .select_voice(Voice::new("v9", "Cleo", ServiceKind::SeedVc))
            .await;

        let tts = session.selected_voice(ServiceKind::StyleTts2).await.unwrap();
        assert_eq!(tts.id, "v2");
        let vc = session.selected_voice(ServiceKind::SeedVc).await.unwrap();
        assert_eq!(vc.id, "v9");
        assert!(
            session
                .selected_voice(ServiceKind::MakeAnAudio)
                .await
                .is_none()
        );
    }
}
