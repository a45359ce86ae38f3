//! Port trait implementations for [`ApiClient`].
//!
//! Adapter errors are mapped to `GenerationError` here, per concern:
//! submission failures never produce a job, poll failures carry their
//! HTTP status for logging, and a 404 on the scoped clip lookup is
//! "not found" rather than an error.

use async_trait::async_trait;

use vocalis_core::domain::{
    ClipRecord, GenerationRequest, HistoryItem, JobStatus, SubmissionReceipt, UploadTarget, Voice,
};
use vocalis_core::ports::{GenerationBackend, HistoryStore, ObjectStore, VoiceCatalog};
use vocalis_core::{GenerationError, GenerationResult, JobId, ServiceKind};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::http::HttpBackend;

// ── Error mapping ──────────────────────────────────────────────────

fn map_submit(err: ApiError) -> GenerationError {
    GenerationError::submission_failed(err.to_string())
}

fn map_poll(err: ApiError) -> GenerationError {
    match err.status() {
        Some(status) => GenerationError::poll_transport_with_status(err.to_string(), status),
        None => GenerationError::poll_transport(err.to_string()),
    }
}

fn map_store(err: ApiError) -> GenerationError {
    GenerationError::other(err.to_string())
}

fn map_delete(id: &str, err: ApiError) -> GenerationError {
    if err.is_not_found() {
        GenerationError::clip_not_found(id)
    } else {
        GenerationError::delete_failed(err.to_string())
    }
}

fn map_object(err: ApiError) -> GenerationError {
    GenerationError::object_store(err.to_string())
}

// ── Port implementations ───────────────────────────────────────────

#[async_trait]
impl<B: HttpBackend> GenerationBackend for ApiClient<B> {
    async fn submit_generation(
        &self,
        request: &GenerationRequest,
    ) -> GenerationResult<SubmissionReceipt> {
        let dto = self.submit(request).await.map_err(map_submit)?;
        Ok(dto.into())
    }

    async fn query_job_status(&self, job_id: &JobId) -> GenerationResult<JobStatus> {
        self.status(job_id).await.map_err(map_poll)
    }
}

#[async_trait]
impl<B: HttpBackend> HistoryStore for ApiClient<B> {
    async fn list_history(&self, service: ServiceKind) -> GenerationResult<Vec<HistoryItem>> {
        let items = self.history(service).await.map_err(map_store)?;
        items.into_iter().map(HistoryItem::try_from).collect()
    }

    async fn find_clip(&self, id: &str) -> GenerationResult<Option<ClipRecord>> {
        let dto = self.clip(id).await.map_err(map_store)?;
        Ok(dto.map(|dto| ClipRecord {
            id: dto.id,
            object_key: dto.s3_key,
        }))
    }

    async fn delete_record(&self, id: &str) -> GenerationResult<()> {
        ApiClient::delete_record(self, id)
            .await
            .map_err(|e| map_delete(id, e))
    }
}

#[async_trait]
impl<B: HttpBackend> ObjectStore for ApiClient<B> {
    async fn request_upload_target(&self, mime: &str) -> GenerationResult<UploadTarget> {
        self.upload_target(mime).await.map_err(map_object)
    }

    async fn put_object(
        &self,
        target: &UploadTarget,
        bytes: Vec<u8>,
        mime: &str,
    ) -> GenerationResult<()> {
        self.put_upload(target, bytes, mime).await.map_err(map_object)
    }

    async fn delete_object(&self, key: &str) -> GenerationResult<()> {
        ApiClient::delete_object(self, key).await.map_err(map_object)
    }
}

#[async_trait]
impl<B: HttpBackend> VoiceCatalog for ApiClient<B> {
    async fn list_voices(&self, service: ServiceKind) -> GenerationResult<Vec<Voice>> {
        let voices = self.voices(service).await.map_err(map_store)?;
        voices.into_iter().map(Voice::try_from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::http::testing::{CannedReply, FakeBackend};

    fn client(backend: FakeBackend) -> ApiClient<FakeBackend> {
        ApiClient::with_backend(backend, "https://studio.example/api").unwrap()
    }

    #[tokio::test]
    async fn submission_maps_receipt_fields() {
        let backend = FakeBackend::new().with_reply(
            "/generate",
            CannedReply::ok(json!({"audioId": "j9", "shouldShowThrottleAlert": true})),
        );
        let client = client(backend);

        let receipt = client
            .submit_generation(&GenerationRequest::SoundEffect {
                prompt: "rain on a tin roof".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(receipt.job_id.as_str(), "j9");
        assert!(receipt.throttle_advisory);
    }

    #[tokio::test]
    async fn submission_failure_is_submission_failed() {
        let backend =
            FakeBackend::new().with_reply("/generate", CannedReply::status(502));
        let client = client(backend);

        let err = client
            .submit_generation(&GenerationRequest::SoundEffect {
                prompt: "rain".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, GenerationError::SubmissionFailed { .. }));
    }

    #[tokio::test]
    async fn poll_transport_error_carries_the_status() {
        let backend =
            FakeBackend::new().with_reply("status?id=j1", CannedReply::status(503));
        let client = client(backend);

        let err = client.query_job_status(&JobId::new("j1")).await.unwrap_err();
        assert_eq!(
            match err {
                GenerationError::PollTransport { status_code, .. } => status_code,
                other => panic!("unexpected error: {other:?}"),
            },
            Some(503)
        );
    }

    #[tokio::test]
    async fn legacy_status_shape_polls_as_pending() {
        let backend = FakeBackend::new().with_reply(
            "status?id=j1",
            CannedReply::ok(json!({"success": false, "audioUrl": null})),
        );
        let client = client(backend);

        let status = client.query_job_status(&JobId::new("j1")).await.unwrap();
        assert_eq!(status, JobStatus::Pending);
    }

    #[tokio::test]
    async fn missing_clip_lookup_is_none() {
        let backend =
            FakeBackend::new().with_reply("history/clip?id=h2", CannedReply::status(404));
        let client = client(backend);

        let clip = client.find_clip("h2").await.unwrap();
        assert!(clip.is_none());
    }

    #[tokio::test]
    async fn found_clip_carries_the_object_key() {
        let backend = FakeBackend::new().with_reply(
            "history/clip?id=h1",
            CannedReply::ok(json!({"id": "h1", "s3Key": "clips/h1.wav"})),
        );
        let client = client(backend);

        let clip = client.find_clip("h1").await.unwrap().unwrap();
        assert_eq!(clip.object_key.as_deref(), Some("clips/h1.wav"));
    }

    #[tokio::test]
    async fn deleting_a_missing_record_is_clip_not_found() {
        let backend =
            FakeBackend::new().with_reply("history?id=h2", CannedReply::status(404));
        let client = client(backend);

        let err = HistoryStore::delete_record(&client, "h2").await.unwrap_err();
        assert!(matches!(err, GenerationError::ClipNotFound { .. }));
    }

    #[tokio::test]
    async fn upload_target_maps_the_s3_key() {
        let backend = FakeBackend::new().with_reply(
            "/upload-url",
            CannedReply::ok(
                json!({"uploadUrl": "https://objects.example/signed", "s3Key": "uploads/r.wav"}),
            ),
        );
        let client = client(backend);

        let target = client.request_upload_target("audio/wav").await.unwrap();
        assert_eq!(target.object_key, "uploads/r.wav");
    }

    #[tokio::test]
    async fn put_object_uploads_to_the_signed_url() {
        let backend = FakeBackend::new();
        let client = client(backend);

        let target = UploadTarget {
            upload_url: "https://objects.example/signed".to_string(),
            object_key: "uploads/r.wav".to_string(),
        };
        client
            .put_object(&target, vec![0u8; 64], "audio/wav")
            .await
            .unwrap();

        let puts = client_backend_puts(&client);
        assert_eq!(
            puts,
            vec![(
                "https://objects.example/signed".to_string(),
                64,
                "audio/wav".to_string()
            )]
        );
    }

    // Reach into the fake backend owned by the client.
    fn client_backend_puts(
        client: &ApiClient<FakeBackend>,
    ) -> Vec<(String, usize, String)> {
        client.backend_for_test().puts.lock().unwrap().clone()
    }

    #[tokio::test]
    async fn voices_parse_their_service() {
        let backend = FakeBackend::new().with_reply(
            "voices?service=styletts2",
            CannedReply::ok(json!([
                {"id": "v1", "name": "Sarah", "service": "styletts2", "gradientColors": "from-pink-500"}
            ])),
        );
        let client = client(backend);

        let voices = client.list_voices(ServiceKind::StyleTts2).await.unwrap();
        assert_eq!(voices.len(), 1);
        assert_eq!(voices[0].name, "Sarah");
        assert_eq!(voices[0].service, ServiceKind::StyleTts2);
    }
}
