//! Studio events emitted by the generation services.
//!
//! Events are "UI safe": Clone + Debug + Serialize with no
//! infrastructure types, suitable for forwarding to a frontend over
//! SSE or a channel. Consumers receive them through the
//! `mpsc::UnboundedReceiver` handed out when a slot or submitter is
//! constructed.

use serde::Serialize;

use crate::domain::{AudioArtifact, JobId, ServiceKind};
use crate::error::GenerationError;

/// Events surfaced to the application layer during generation.
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StudioEvent {
    /// A job was accepted by the backend and polling has begun.
    GenerationStarted {
        /// The backend job id.
        job_id: JobId,
        /// Service processing the job.
        service: ServiceKind,
    },

    /// The submission indicated the caller is near the rate threshold.
    ///
    /// Emitted at most once per flagged submission, and never blocks
    /// or delays the job itself.
    ThrottleAdvisory {
        /// Advisory text for the user.
        message: String,
    },

    /// A job completed and its artifact was published to playback.
    ArtifactReady {
        /// The published artifact.
        artifact: AudioArtifact,
    },

    /// A job reached a terminal failure (backend, transport or timeout).
    GenerationFailed {
        /// The backend job id.
        job_id: JobId,
        /// What went wrong.
        error: GenerationError,
    },

    /// A poll loop was torn down without delivering a result.
    GenerationCancelled {
        /// The backend job id.
        job_id: JobId,
    },

    /// The cached history listing for a service was replaced.
    HistoryInvalidated {
        /// Service whose listing changed.
        service: ServiceKind,
    },
}
