//! The API client.
//!
//! Generic over [`HttpBackend`] so tests can drive it with canned
//! responses. Application code uses [`DefaultApiClient`] and interacts
//! with it through the `vocalis-core` port traits (see `port.rs`).

use url::Url;

use vocalis_core::domain::{GenerationRequest, JobStatus, UploadTarget};
use vocalis_core::{JobId, ServiceKind};

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::{
    ClipRecordDto, DeleteResponseDto, GenerateRequestDto, GenerateResponseDto, HistoryItemDto,
    StatusResponseDto, UploadUrlRequestDto, UploadUrlResponseDto, VoiceDto,
};
use crate::url as endpoints;

/// API client over the production reqwest backend.
pub type DefaultApiClient = ApiClient<ReqwestBackend>;

/// Client for the vocalis backend API.
pub struct ApiClient<B: HttpBackend> {
    backend: B,
    base: Url,
}

impl DefaultApiClient {
    /// Build a client from configuration.
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        let base = endpoints::parse_base(&config.base_url)?;
        let backend = ReqwestBackend::new(config)?;
        Ok(Self { backend, base })
    }
}

impl<B: HttpBackend> ApiClient<B> {
    /// Build a client over a custom backend. Used by tests.
    pub fn with_backend(backend: B, base_url: &str) -> ApiResult<Self> {
        Ok(Self {
            backend,
            base: endpoints::parse_base(base_url)?,
        })
    }

    pub(crate) async fn submit(&self, request: &GenerationRequest) -> ApiResult<GenerateResponseDto> {
        let url = endpoints::generate_url(&self.base)?;
        let body = GenerateRequestDto::from(request);
        self.backend.post_json(&url, &body).await
    }

    pub(crate) async fn status(&self, job_id: &JobId) -> ApiResult<JobStatus> {
        let url = endpoints::status_url(&self.base, job_id)?;
        let dto: StatusResponseDto = self.backend.get_json(&url).await?;
        dto.into_status()
    }

    pub(crate) async fn upload_target(&self, mime: &str) -> ApiResult<UploadTarget> {
        let url = endpoints::upload_url(&self.base)?;
        let body = UploadUrlRequestDto {
            file_type: mime.to_string(),
        };
        let dto: UploadUrlResponseDto = self.backend.post_json(&url, &body).await?;
        Ok(UploadTarget {
            upload_url: dto.upload_url,
            object_key: dto.s3_key,
        })
    }

    pub(crate) async fn put_upload(
        &self,
        target: &UploadTarget,
        bytes: Vec<u8>,
        mime: &str,
    ) -> ApiResult<()> {
        let url = Url::parse(&target.upload_url)?;
        self.backend.put_bytes(&url, bytes, mime).await
    }

    pub(crate) async fn history(&self, service: ServiceKind) -> ApiResult<Vec<HistoryItemDto>> {
        let url = endpoints::history_url(&self.base, service)?;
        self.backend.get_json(&url).await
    }

    pub(crate) async fn clip(&self, id: &str) -> ApiResult<Option<ClipRecordDto>> {
        let url = endpoints::clip_url(&self.base, id)?;
        match self.backend.get_json::<ClipRecordDto>(&url).await {
            Ok(dto) => Ok(Some(dto)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub(crate) async fn delete_record(&self, id: &str) -> ApiResult<()> {
        let url = endpoints::delete_history_url(&self.base, id)?;
        let response: DeleteResponseDto = self.backend.delete_json(&url).await?;
        if response.success {
            Ok(())
        } else {
            Err(ApiError::InvalidResponse {
                message: format!("delete of '{id}' reported failure"),
            })
        }
    }

    pub(crate) async fn delete_object(&self, key: &str) -> ApiResult<()> {
        let url = endpoints::delete_object_url(&self.base, key)?;
        let _: DeleteResponseDto = self.backend.delete_json(&url).await?;
        Ok(())
    }

    pub(crate) async fn voices(&self, service: ServiceKind) -> ApiResult<Vec<VoiceDto>> {
        let url = endpoints::voices_url(&self.base, service)?;
        self.backend.get_json(&url).await
    }

    #[cfg(test)]
    pub(crate) const fn backend_for_test(&self) -> &B {
        &self.backend
    }
}
