//! Job submission.

use std::sync::Arc;

use tokio::sync::mpsc;

use vocalis_core::domain::{GenerationRequest, SubmissionReceipt, validate_upload};
use vocalis_core::error::GenerationResult;
use vocalis_core::events::StudioEvent;
use vocalis_core::ports::{GenerationBackend, ObjectStore};

use crate::throttle::THROTTLE_ADVISORY_MESSAGE;

/// Turns validated user input into an accepted backend job.
pub struct GenerationSubmitter {
    backend: Arc<dyn GenerationBackend>,
    objects: Arc<dyn ObjectStore>,
    events: mpsc::UnboundedSender<StudioEvent>,
}

impl GenerationSubmitter {
    /// Create a submitter over the given collaborators.
    #[must_use]
    pub fn new(
        backend: Arc<dyn GenerationBackend>,
        objects: Arc<dyn ObjectStore>,
        events: mpsc::UnboundedSender<StudioEvent>,
    ) -> Self {
        Self {
            backend,
            objects,
            events,
        }
    }

    /// Submit a generation request.
    ///
    /// Validates locally first; an invalid request fails fast with
    /// `InvalidInput` and never reaches the network. On acceptance,
    /// emits `GenerationStarted` plus, iff the receipt flags it,
    /// exactly one `ThrottleAdvisory`. The advisory is informational
    /// and never delays the job or the caller.
    pub async fn submit(&self, request: &GenerationRequest) -> GenerationResult<SubmissionReceipt> {
        request.validate()?;

        let receipt = self.backend.submit_generation(request).await?;

        tracing::info!(
            id = %receipt.job_id,
            service = %request.service(),
            throttled = receipt.throttle_advisory,
            "Generation submitted"
        );

        self.emit(StudioEvent::GenerationStarted {
            job_id: receipt.job_id.clone(),
            service: request.service(),
        });

        if receipt.throttle_advisory {
            self.emit(StudioEvent::ThrottleAdvisory {
                message: THROTTLE_ADVISORY_MESSAGE.to_string(),
            });
        }

        Ok(receipt)
    }

    /// Upload a reference recording for voice conversion.
    ///
    /// Validates mime type and size locally, requests a signed upload
    /// slot, PUTs the bytes, and returns the object key to place in a
    /// [`GenerationRequest::SpeechToSpeech`].
    pub async fn upload_reference(&self, bytes: Vec<u8>, mime: &str) -> GenerationResult<String> {
        validate_upload(mime, bytes.len() as u64)?;

        let target = self.objects.request_upload_target(mime).await?;
        tracing::debug!(key = %target.object_key, size = bytes.len(), "Uploading reference audio");
        self.objects.put_object(&target, bytes, mime).await?;

        Ok(target.object_key)
    }

    fn emit(&self, event: StudioEvent) {
        if self.events.send(event).is_err() {
            tracing::warn!("Studio event receiver dropped");
        }
    }
}
