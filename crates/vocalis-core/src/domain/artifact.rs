//! Playable audio artifacts and title derivation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::service::ServiceKind;

/// Maximum artifact title length before truncation, in characters.
pub const TITLE_MAX_CHARS: usize = 50;

/// Nominal clip duration shown before the audio is actually measured.
pub const PLACEHOLDER_DURATION: &str = "0:30";

/// A generated, playable audio result with display metadata.
///
/// Artifacts are what the playback surface and the history views
/// consume. The id reuses the backend job id as a stable key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioArtifact {
    /// Stable key (the backend job id).
    pub id: String,

    /// Display title derived from the input text (see [`derive_title`]).
    pub title: String,

    /// URL of the generated audio.
    pub audio_url: String,

    /// Voice id used for generation; empty for sound effects.
    pub voice_id: String,

    /// Nominal duration placeholder, not measured from the audio.
    pub duration: String,

    /// Service that produced this artifact.
    pub service: ServiceKind,

    /// Local date the artifact was created.
    pub created_at: NaiveDate,
}

/// Derive an artifact title from its originating text.
///
/// Text of at most [`TITLE_MAX_CHARS`] characters is used verbatim;
/// longer text is cut to the first 50 characters with a `"..."`
/// suffix. Counted in characters, not bytes, so multi-byte input
/// never splits a code point.
#[must_use]
pub fn derive_title(text: &str) -> String {
    if text.chars().count() <= TITLE_MAX_CHARS {
        return text.to_string();
    }
    let mut title: String = text.chars().take(TITLE_MAX_CHARS).collect();
    title.push_str("...");
    title
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_kept_verbatim() {
        assert_eq!(derive_title("Hello world"), "Hello world");
    }

    #[test]
    fn boundary_length_is_not_truncated() {
        let text = "x".repeat(TITLE_MAX_CHARS);
        assert_eq!(derive_title(&text), text);
    }

    #[test]
    fn long_text_truncates_to_53_chars() {
        let text = "y".repeat(60);
        let title = derive_title(&text);
        assert_eq!(title.chars().count(), 53);
        assert!(title.ends_with("..."));
        assert!(title.starts_with(&"y".repeat(50)));
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        // 60 two-byte characters; byte-indexed slicing would panic or split
        let text = "é".repeat(60);
        let title = derive_title(&text);
        assert_eq!(title.chars().count(), 53);
    }
}
