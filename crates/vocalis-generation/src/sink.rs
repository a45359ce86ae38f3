//! Result delivery.
//!
//! When a job reaches `Succeeded`, the sink turns the raw audio URL
//! into an [`AudioArtifact`], publishes it to the shared session
//! (replacing whatever was playing), announces it on the event
//! channel, and schedules a deferred history refresh so the new clip
//! shows up in the listing once the backend write settles.

use std::sync::Arc;

use tokio::sync::mpsc;

use vocalis_core::domain::{AudioArtifact, GenerationRequest, PLACEHOLDER_DURATION, derive_title};
use vocalis_core::events::StudioEvent;
use vocalis_core::session::SessionState;
use vocalis_core::{JobId, ServiceKind};

use crate::history::HistoryCache;

/// Per-submission metadata the sink needs to build an artifact.
///
/// Captured at submission time so a late-arriving success still
/// carries the text and voice that produced it.
#[derive(Debug, Clone)]
pub struct DeliveryContext {
    /// Service that ran the job.
    pub service: ServiceKind,
    /// Voice used, or empty for sound effects.
    pub voice_id: String,
    /// Display title for the artifact.
    pub title: String,
}

impl DeliveryContext {
    /// Derive the context from the originating request.
    ///
    /// Text kinds title the artifact with their (truncated) input
    /// text; voice conversion has no source text and gets a preview
    /// label instead.
    #[must_use]
    pub fn for_request(request: &GenerationRequest) -> Self {
        let title = match request.source_text() {
            Some(text) => derive_title(text),
            None => "Voice Preview".to_string(),
        };
        Self {
            service: request.service(),
            voice_id: request.voice_id().unwrap_or_default().to_string(),
            title,
        }
    }
}

/// Delivers successful results to the session and history.
pub struct ResultSink {
    session: SessionState,
    history: Arc<HistoryCache>,
    events: mpsc::UnboundedSender<StudioEvent>,
    settle_delay: std::time::Duration,
}

impl ResultSink {
    /// Create a sink publishing into `session` and refreshing `history`.
    #[must_use]
    pub fn new(
        session: SessionState,
        history: Arc<HistoryCache>,
        events: mpsc::UnboundedSender<StudioEvent>,
        settle_delay: std::time::Duration,
    ) -> Self {
        Self {
            session,
            history,
            events,
            settle_delay,
        }
    }

    /// Publish a finished job as a playable artifact.
    ///
    /// Replaces the current playback artifact (last write wins, no
    /// queue) and schedules one deferred history refresh after the
    /// settle delay. The refresh is best-effort: a failure is logged
    /// and swallowed, and a later manual refresh still works.
    pub fn deliver(&self, job_id: &JobId, audio_url: String, ctx: &DeliveryContext) -> AudioArtifact {
        let artifact = AudioArtifact {
            id: job_id.to_string(),
            title: ctx.title.clone(),
            audio_url,
            voice_id: ctx.voice_id.clone(),
            duration: PLACEHOLDER_DURATION.to_string(),
            service: ctx.service,
            created_at: chrono::Local::now().date_naive(),
        };

        tracing::info!(id = %job_id, service = %ctx.service, "Generation succeeded");

        self.session.play(artifact.clone());
        self.emit(StudioEvent::ArtifactReady {
            artifact: artifact.clone(),
        });

        self.schedule_history_refresh(ctx.service);

        artifact
    }

    /// Spawn the deferred refresh for `service`.
    fn schedule_history_refresh(&self, service: ServiceKind) {
        let history = Arc::clone(&self.history);
        let events = self.events.clone();
        let delay = self.settle_delay;

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            match history.refresh(service).await {
                Ok(()) => {
                    let _ = events.send(StudioEvent::HistoryInvalidated { service });
                }
                Err(e) => {
                    tracing::debug!(service = %service, error = %e, "Deferred history refresh failed");
                }
            }
        });
    }

    fn emit(&self, event: StudioEvent) {
        if self.events.send(event).is_err() {
            tracing::warn!("Studio event receiver dropped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_titles_text_kinds_from_input() {
        let request = GenerationRequest::TextToSpeech {
            text: "Hello world".to_string(),
            voice_id: "v1".to_string(),
        };
        let ctx = DeliveryContext::for_request(&request);
        assert_eq!(ctx.title, "Hello world");
        assert_eq!(ctx.voice_id, "v1");
        assert_eq!(ctx.service, ServiceKind::StyleTts2);
    }

    #[test]
    fn context_truncates_long_input() {
        let text = "x".repeat(60);
        let request = GenerationRequest::SoundEffect { prompt: text };
        let ctx = DeliveryContext::for_request(&request);
        assert_eq!(ctx.title.chars().count(), 53);
        assert!(ctx.title.ends_with("..."));
        assert_eq!(ctx.voice_id, "");
    }

    #[test]
    fn context_labels_voice_conversion() {
        let request = GenerationRequest::SpeechToSpeech {
            object_key: "uploads/ref.wav".to_string(),
            voice_id: "v2".to_string(),
        };
        let ctx = DeliveryContext::for_request(&request);
        assert_eq!(ctx.title, "Voice Preview");
        assert_eq!(ctx.voice_id, "v2");
        assert_eq!(ctx.service, ServiceKind::SeedVc);
    }
}
