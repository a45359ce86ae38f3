#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod error;
pub mod events;
pub mod ports;
pub mod session;

// Re-export commonly used types for convenience
pub use domain::{
    AudioArtifact, ClipRecord, GenerationRequest, HistoryItem, JobId, JobStatus, ServiceKind,
    SubmissionReceipt, UploadTarget, Voice, derive_title,
};
pub use error::{GenerationError, GenerationResult};
pub use events::StudioEvent;
pub use ports::{GenerationBackend, HistoryStore, ObjectStore, VoiceCatalog};
pub use session::SessionState;
