//! Generation error taxonomy.
//!
//! These errors are designed to be serializable and not depend on
//! external error types. Adapter-specific failures (HTTP, JSON) are
//! mapped into this taxonomy at the port boundary with their detail
//! captured as strings.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Convenience result type for generation operations.
pub type GenerationResult<T> = Result<T, GenerationError>;

/// Error type for the generation-job lifecycle and its collaborators.
#[derive(Clone, Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum GenerationError {
    /// Local pre-flight validation failed; never reaches the network.
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// What rule was violated.
        message: String,
    },

    /// A service string outside the closed set was supplied.
    #[error("Unknown service '{value}'")]
    UnknownService {
        /// The unrecognised value.
        value: String,
    },

    /// The backend rejected the submission; no job was created.
    #[error("Submission failed: {message}")]
    SubmissionFailed {
        /// Transport or backend detail.
        message: String,
    },

    /// A status poll attempt failed to complete.
    #[error("Status poll failed: {message}")]
    PollTransport {
        /// Transport detail.
        message: String,
        /// HTTP status code if one was received.
        #[serde(skip_serializing_if = "Option::is_none")]
        status_code: Option<u16>,
    },

    /// The backend reported the job as failed.
    #[error("Generation failed{}", fmt_reason(.reason))]
    JobFailed {
        /// Failure detail, when the backend provides one.
        reason: Option<String>,
    },

    /// The poll loop hit its attempt ceiling without a terminal status.
    #[error("Generation timed out after {attempts} status checks")]
    Timeout {
        /// Number of attempts made before giving up.
        attempts: u32,
    },

    /// The job's poll loop was torn down before completion.
    #[error("Generation cancelled")]
    Cancelled,

    /// History clip not found (or not owned by the requesting identity).
    #[error("Audio clip '{id}' not found")]
    ClipNotFound {
        /// The clip id that was requested.
        id: String,
    },

    /// The history record could not be deleted.
    #[error("Delete failed: {message}")]
    DeleteFailed {
        /// Collaborator detail.
        message: String,
    },

    /// Object-store upload or delete failure.
    #[error("Storage error: {message}")]
    ObjectStore {
        /// Collaborator detail.
        message: String,
    },

    /// General/uncategorized error.
    #[error("{message}")]
    Other {
        /// Error message.
        message: String,
    },
}

fn fmt_reason(reason: &Option<String>) -> String {
    reason
        .as_deref()
        .map_or_else(String::new, |r| format!(": {r}"))
}

impl GenerationError {
    /// Create an invalid-input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create an unknown-service error.
    pub fn unknown_service(value: impl Into<String>) -> Self {
        Self::UnknownService {
            value: value.into(),
        }
    }

    /// Create a submission-failed error.
    pub fn submission_failed(message: impl Into<String>) -> Self {
        Self::SubmissionFailed {
            message: message.into(),
        }
    }

    /// Create a poll-transport error without an HTTP status.
    pub fn poll_transport(message: impl Into<String>) -> Self {
        Self::PollTransport {
            message: message.into(),
            status_code: None,
        }
    }

    /// Create a poll-transport error carrying an HTTP status.
    pub fn poll_transport_with_status(message: impl Into<String>, status_code: u16) -> Self {
        Self::PollTransport {
            message: message.into(),
            status_code: Some(status_code),
        }
    }

    /// Create a job-failed error.
    #[must_use]
    pub const fn job_failed(reason: Option<String>) -> Self {
        Self::JobFailed { reason }
    }

    /// Create a timeout error.
    #[must_use]
    pub const fn timeout(attempts: u32) -> Self {
        Self::Timeout { attempts }
    }

    /// Create a clip-not-found error.
    pub fn clip_not_found(id: impl Into<String>) -> Self {
        Self::ClipNotFound { id: id.into() }
    }

    /// Create a delete-failed error.
    pub fn delete_failed(message: impl Into<String>) -> Self {
        Self::DeleteFailed {
            message: message.into(),
        }
    }

    /// Create an object-store error.
    pub fn object_store(message: impl Into<String>) -> Self {
        Self::ObjectStore {
            message: message.into(),
        }
    }

    /// Create a generic error.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Check if this is a cancellation.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Whether this error terminated a job that had already started.
    ///
    /// Pre-flight and history errors are not job-terminal.
    #[must_use]
    pub const fn is_job_terminal(&self) -> bool {
        matches!(
            self,
            Self::PollTransport { .. } | Self::JobFailed { .. } | Self::Timeout { .. }
        )
    }

    /// Convert to a user-friendly message.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidInput { message } => message.clone(),
            Self::UnknownService { value } => {
                format!("'{value}' is not a known service")
            }
            Self::SubmissionFailed { .. } => {
                "The request could not be submitted. Please try again.".to_string()
            }
            Self::PollTransport { .. } | Self::JobFailed { .. } => {
                "Generation failed. Please try again.".to_string()
            }
            Self::Timeout { .. } => {
                "Generation is taking too long and was abandoned.".to_string()
            }
            Self::Cancelled => "Generation was cancelled.".to_string(),
            Self::ClipNotFound { .. } => "Audio clip not found.".to_string(),
            Self::DeleteFailed { .. } => "Failed to delete.".to_string(),
            Self::ObjectStore { .. } => "Audio upload failed. Please try again.".to_string(),
            Self::Other { message } => message.clone(),
        }
    }
}
