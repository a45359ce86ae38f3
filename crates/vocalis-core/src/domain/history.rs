//! History listing types.

use serde::{Deserialize, Serialize};

use super::service::ServiceKind;

/// One prior generation as listed by the history collaborator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryItem {
    /// Clip record id.
    pub id: String,

    /// Display title (already derived server-side).
    pub title: String,

    /// Playable URL, when the clip's audio is still available.
    pub audio_url: Option<String>,

    /// Voice id used; empty for sound effects.
    pub voice_id: String,

    /// Display date the clip was created, used as the grouping key.
    pub date: String,

    /// Service that produced the clip.
    pub service: ServiceKind,
}

/// Ownership-scoped clip lookup result, used by the two-phase delete.
///
/// The lookup is scoped to the requesting identity by the collaborator:
/// clips owned by someone else come back as absent, indistinguishable
/// from ids that never existed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipRecord {
    /// Clip record id.
    pub id: String,

    /// Object-store key of the stored audio, if any was uploaded.
    pub object_key: Option<String>,
}
