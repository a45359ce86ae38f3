//! Voice catalog port.

use async_trait::async_trait;

use crate::domain::{ServiceKind, Voice};
use crate::error::GenerationResult;

/// Port for listing the voices available to a service.
#[async_trait]
pub trait VoiceCatalog: Send + Sync {
    /// List the voices usable with `service`.
    ///
    /// May return an empty list for services that take no voice.
    async fn list_voices(&self, service: ServiceKind) -> GenerationResult<Vec<Voice>>;
}
