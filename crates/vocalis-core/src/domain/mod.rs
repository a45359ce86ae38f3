//! Core domain types for audio generation.

mod artifact;
mod generation;
mod history;
mod service;
mod voice;

pub use artifact::{AudioArtifact, PLACEHOLDER_DURATION, TITLE_MAX_CHARS, derive_title};
pub use generation::{
    GenerationRequest, JobId, JobStatus, MAX_EFFECT_CHARS, MAX_SPEECH_CHARS, MAX_UPLOAD_BYTES,
    SubmissionReceipt, UploadTarget, allowed_upload_mime, validate_upload,
};
pub use history::{ClipRecord, HistoryItem};
pub use service::ServiceKind;
pub use voice::Voice;
