//! Generation requests, job handles and job status.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::service::ServiceKind;
use crate::error::GenerationError;

/// Maximum input length for speech synthesis, in characters.
pub const MAX_SPEECH_CHARS: usize = 5000;

/// Maximum prompt length for sound effects, in characters.
pub const MAX_EFFECT_CHARS: usize = 500;

/// Maximum size for an uploaded voice-conversion reference (50 MiB).
pub const MAX_UPLOAD_BYTES: u64 = 50 * 1024 * 1024;

/// Mime types accepted for voice-conversion uploads.
const ALLOWED_UPLOAD_MIME: [&str; 2] = ["audio/mp3", "audio/wav"];

/// Opaque job handle minted by the backend at submission time.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobId(String);

impl JobId {
    /// Wrap a backend-issued identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw identifier string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for JobId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A validated request for one unit of generation work.
///
/// This is a pure data structure: building one performs no I/O. Call
/// [`validate`](Self::validate) before handing it to a submitter;
/// the backends assume validated input and fail fast otherwise.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum GenerationRequest {
    /// Synthesize speech from text with a chosen voice.
    TextToSpeech {
        /// The text to speak (trimmed non-empty, ≤ [`MAX_SPEECH_CHARS`]).
        text: String,
        /// The selected voice id.
        voice_id: String,
    },

    /// Convert an uploaded recording to a target voice.
    SpeechToSpeech {
        /// Object-store key of the uploaded reference audio.
        object_key: String,
        /// The target voice id.
        voice_id: String,
    },

    /// Generate a sound effect from a free-text prompt.
    SoundEffect {
        /// The effect description (trimmed non-empty, ≤ [`MAX_EFFECT_CHARS`]).
        prompt: String,
    },
}

impl GenerationRequest {
    /// The service this request is routed to.
    #[must_use]
    pub const fn service(&self) -> ServiceKind {
        match self {
            Self::TextToSpeech { .. } => ServiceKind::StyleTts2,
            Self::SpeechToSpeech { .. } => ServiceKind::SeedVc,
            Self::SoundEffect { .. } => ServiceKind::MakeAnAudio,
        }
    }

    /// The voice id used by this request, if the kind carries one.
    #[must_use]
    pub fn voice_id(&self) -> Option<&str> {
        match self {
            Self::TextToSpeech { voice_id, .. } | Self::SpeechToSpeech { voice_id, .. } => {
                Some(voice_id.as_str())
            }
            Self::SoundEffect { .. } => None,
        }
    }

    /// The originating text, used to derive artifact titles.
    #[must_use]
    pub fn source_text(&self) -> Option<&str> {
        match self {
            Self::TextToSpeech { text, .. } => Some(text.as_str()),
            Self::SoundEffect { prompt } => Some(prompt.as_str()),
            Self::SpeechToSpeech { .. } => None,
        }
    }

    /// Check the request against the local input rules.
    ///
    /// These rules mirror what the UI enforces before submission:
    /// trimmed non-empty text, per-kind length limits, and a voice id
    /// for the kinds that need one. Violations never reach the network.
    pub fn validate(&self) -> Result<(), GenerationError> {
        match self {
            Self::TextToSpeech { text, voice_id } => {
                validate_text(text, MAX_SPEECH_CHARS)?;
                validate_voice(voice_id)
            }
            Self::SpeechToSpeech {
                object_key,
                voice_id,
            } => {
                if object_key.trim().is_empty() {
                    return Err(GenerationError::invalid_input(
                        "no uploaded audio reference",
                    ));
                }
                validate_voice(voice_id)
            }
            Self::SoundEffect { prompt } => validate_text(prompt, MAX_EFFECT_CHARS),
        }
    }
}

fn validate_text(text: &str, limit: usize) -> Result<(), GenerationError> {
    if text.trim().is_empty() {
        return Err(GenerationError::invalid_input("input text is empty"));
    }
    let chars = text.chars().count();
    if chars > limit {
        return Err(GenerationError::invalid_input(format!(
            "input is {chars} characters, limit is {limit}"
        )));
    }
    Ok(())
}

fn validate_voice(voice_id: &str) -> Result<(), GenerationError> {
    if voice_id.trim().is_empty() {
        return Err(GenerationError::invalid_input("no voice selected"));
    }
    Ok(())
}

/// Check an upload against the reference-audio rules (mime + size).
pub fn validate_upload(mime: &str, size_bytes: u64) -> Result<(), GenerationError> {
    if !ALLOWED_UPLOAD_MIME.contains(&mime) {
        return Err(GenerationError::invalid_input(format!(
            "unsupported audio type '{mime}' (MP3 or WAV only)"
        )));
    }
    if size_bytes > MAX_UPLOAD_BYTES {
        return Err(GenerationError::invalid_input(
            "file is too large, max size is 50MB",
        ));
    }
    Ok(())
}

/// The mime types accepted for voice-conversion uploads.
#[must_use]
pub const fn allowed_upload_mime() -> &'static [&'static str] {
    &ALLOWED_UPLOAD_MIME
}

/// What the backend returns for an accepted submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    /// Handle for polling the job.
    pub job_id: JobId,

    /// True when the caller is near the server-side rate threshold.
    ///
    /// Informational only: the job was accepted either way and will be
    /// processed, possibly queued server-side.
    pub throttle_advisory: bool,
}

/// Status of a generation job as reported by the backend.
///
/// This is deliberately a three-way enum. The legacy wire shape
/// (`success` boolean + nullable url) cannot distinguish "still
/// working" from "failed"; adapters resolve that ambiguity so the
/// rest of the system never has to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum JobStatus {
    /// The job has not reached a terminal state yet.
    Pending,

    /// The job finished and produced a playable result.
    Succeeded {
        /// URL of the generated audio.
        audio_url: String,
    },

    /// The backend reported a terminal failure.
    Failed {
        /// Failure detail, when the backend provides one.
        reason: Option<String>,
    },
}

impl JobStatus {
    /// Whether this status ends the polling loop.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

/// A pre-signed upload destination for reference audio.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadTarget {
    /// URL to PUT the binary to.
    pub upload_url: String,

    /// Object-store key the backend will read the upload from.
    pub object_key: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tts(text: &str, voice: &str) -> GenerationRequest {
        GenerationRequest::TextToSpeech {
            text: text.to_string(),
            voice_id: voice.to_string(),
        }
    }

    #[test]
    fn valid_speech_request_passes() {
        assert!(tts("Hello world", "v1").validate().is_ok());
    }

    #[test]
    fn empty_text_is_rejected() {
        let err = tts("   ", "v1").validate().unwrap_err();
        assert!(matches!(err, GenerationError::InvalidInput { .. }));
    }

    #[test]
    fn over_length_speech_is_rejected() {
        let long = "a".repeat(MAX_SPEECH_CHARS + 1);
        assert!(tts(&long, "v1").validate().is_err());
        // Exactly at the limit is fine
        let at_limit = "a".repeat(MAX_SPEECH_CHARS);
        assert!(tts(&at_limit, "v1").validate().is_ok());
    }

    #[test]
    fn missing_voice_is_rejected() {
        assert!(tts("Hello", "").validate().is_err());
    }

    #[test]
    fn effect_limit_is_shorter() {
        let prompt = "b".repeat(MAX_EFFECT_CHARS + 1);
        let err = GenerationRequest::SoundEffect { prompt }.validate().unwrap_err();
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn effects_do_not_need_voices() {
        let req = GenerationRequest::SoundEffect {
            prompt: "rain on a tin roof".to_string(),
        };
        assert!(req.validate().is_ok());
        assert!(req.voice_id().is_none());
        assert_eq!(req.service(), ServiceKind::MakeAnAudio);
    }

    #[test]
    fn upload_rules() {
        assert!(validate_upload("audio/wav", 1024).is_ok());
        assert!(validate_upload("audio/mp3", MAX_UPLOAD_BYTES).is_ok());
        assert!(validate_upload("audio/ogg", 1024).is_err());
        assert!(validate_upload("audio/wav", MAX_UPLOAD_BYTES + 1).is_err());
    }

    #[test]
    fn status_terminality() {
        assert!(!JobStatus::Pending.is_terminal());
        assert!(
            JobStatus::Succeeded {
                audio_url: "https://cdn/a.wav".to_string()
            }
            .is_terminal()
        );
        assert!(JobStatus::Failed { reason: None }.is_terminal());
    }

    #[test]
    fn status_serde_shape() {
        let json = serde_json::to_string(&JobStatus::Pending).unwrap();
        assert_eq!(json, r#"{"status":"pending"}"#);
    }
}
