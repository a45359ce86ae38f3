//! Generation service identifiers.
//!
//! Each service maps to one backend engine and one kind of generation
//! work. The set is closed: an unrecognised value is a caller error,
//! not something the backend is expected to handle.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GenerationError;

/// The backend generation services.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceKind {
    /// Text-to-speech synthesis (StyleTTS 2).
    #[serde(rename = "styletts2")]
    StyleTts2,

    /// Speech-to-speech voice conversion (Seed-VC).
    #[serde(rename = "seedvc")]
    SeedVc,

    /// Text-to-sound-effect generation (Make-An-Audio).
    #[serde(rename = "make-an-audio")]
    MakeAnAudio,
}

impl ServiceKind {
    /// All services, in display order.
    pub const ALL: [Self; 3] = [Self::StyleTts2, Self::SeedVc, Self::MakeAnAudio];

    /// The wire identifier for this service.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::StyleTts2 => "styletts2",
            Self::SeedVc => "seedvc",
            Self::MakeAnAudio => "make-an-audio",
        }
    }

    /// Whether submissions for this service require a selected voice.
    ///
    /// Sound effects are voice-less; both speech services need one.
    #[must_use]
    pub const fn requires_voice(self) -> bool {
        !matches!(self, Self::MakeAnAudio)
    }

    /// Human-readable label for logs and CLI output.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::StyleTts2 => "Text to Speech",
            Self::SeedVc => "Voice Changer",
            Self::MakeAnAudio => "Sound Effects",
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceKind {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "styletts2" => Ok(Self::StyleTts2),
            "seedvc" => Ok(Self::SeedVc),
            "make-an-audio" => Ok(Self::MakeAnAudio),
            other => Err(GenerationError::unknown_service(other)),
        }
    }
}
