//! Object store port.

use async_trait::async_trait;

use crate::domain::UploadTarget;
use crate::error::GenerationResult;

/// Port for the blob store holding reference audio and rendered clips.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Request a pre-signed upload slot for a file of the given mime type.
    async fn request_upload_target(&self, mime: &str) -> GenerationResult<UploadTarget>;

    /// Upload file bytes to a previously issued target.
    async fn put_object(
        &self,
        target: &UploadTarget,
        bytes: Vec<u8>,
        mime: &str,
    ) -> GenerationResult<()>;

    /// Delete a stored object by key.
    ///
    /// Callers performing a two-phase clip delete treat a failure here
    /// as non-fatal; the record delete proceeds regardless.
    async fn delete_object(&self, key: &str) -> GenerationResult<()>;
}
