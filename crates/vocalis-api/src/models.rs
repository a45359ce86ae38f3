//! Wire DTOs for the backend API.
//!
//! Field names mirror the backend's camelCase JSON. Conversions to
//! domain types live here so `port.rs` stays a thin mapping layer.

use serde::{Deserialize, Serialize};

use vocalis_core::domain::{GenerationRequest, HistoryItem, JobStatus, SubmissionReceipt, Voice};
use vocalis_core::{GenerationError, JobId, ServiceKind};

use crate::error::{ApiError, ApiResult};

// ── Submission ─────────────────────────────────────────────────────

/// POST /generate body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequestDto {
    pub service: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_key: Option<String>,
}

impl From<&GenerationRequest> for GenerateRequestDto {
    fn from(request: &GenerationRequest) -> Self {
        match request {
            GenerationRequest::TextToSpeech { text, voice_id } => Self {
                service: request.service().as_str().to_string(),
                text: Some(text.clone()),
                voice_id: Some(voice_id.clone()),
                s3_key: None,
            },
            GenerationRequest::SpeechToSpeech {
                object_key,
                voice_id,
            } => Self {
                service: request.service().as_str().to_string(),
                text: None,
                voice_id: Some(voice_id.clone()),
                s3_key: Some(object_key.clone()),
            },
            GenerationRequest::SoundEffect { prompt } => Self {
                service: request.service().as_str().to_string(),
                text: Some(prompt.clone()),
                voice_id: None,
                s3_key: None,
            },
        }
    }
}

/// POST /generate response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponseDto {
    pub audio_id: String,
    #[serde(default)]
    pub should_show_throttle_alert: bool,
}

impl From<GenerateResponseDto> for SubmissionReceipt {
    fn from(dto: GenerateResponseDto) -> Self {
        Self {
            job_id: JobId::new(dto.audio_id),
            throttle_advisory: dto.should_show_throttle_alert,
        }
    }
}

// ── Status ─────────────────────────────────────────────────────────

/// GET /generate/status response.
///
/// Newer backends send an explicit `status` string; older ones only
/// the `success`/`audioUrl` pair, whose `false`/`null` combination
/// cannot distinguish pending from failed. The legacy shape is
/// therefore read conservatively as pending.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponseDto {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub audio_url: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl StatusResponseDto {
    /// Resolve the wire shape into the explicit status enum.
    pub fn into_status(self) -> ApiResult<JobStatus> {
        if let Some(status) = self.status.as_deref() {
            return match status {
                "pending" => Ok(JobStatus::Pending),
                "succeeded" => self.audio_url.map_or_else(
                    || {
                        Err(ApiError::InvalidResponse {
                            message: "status 'succeeded' without audioUrl".to_string(),
                        })
                    },
                    |audio_url| Ok(JobStatus::Succeeded { audio_url }),
                ),
                "failed" => Ok(JobStatus::Failed { reason: self.error }),
                other => Err(ApiError::InvalidResponse {
                    message: format!("unknown job status '{other}'"),
                }),
            };
        }

        // Legacy boolean shape.
        match (self.success, self.audio_url) {
            (true, Some(audio_url)) => Ok(JobStatus::Succeeded { audio_url }),
            _ => Ok(JobStatus::Pending),
        }
    }
}

// ── Uploads ────────────────────────────────────────────────────────

/// POST /upload-url body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadUrlRequestDto {
    pub file_type: String,
}

/// POST /upload-url response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadUrlResponseDto {
    pub upload_url: String,
    pub s3_key: String,
}

// ── History ────────────────────────────────────────────────────────

/// One entry of the GET /history listing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItemDto {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub audio_url: Option<String>,
    #[serde(default)]
    pub voice: Option<String>,
    pub date: String,
    pub service: String,
}

impl TryFrom<HistoryItemDto> for HistoryItem {
    type Error = GenerationError;

    fn try_from(dto: HistoryItemDto) -> Result<Self, Self::Error> {
        Ok(Self {
            id: dto.id,
            title: dto.title,
            audio_url: dto.audio_url,
            voice_id: dto.voice.unwrap_or_default(),
            date: dto.date,
            service: dto.service.parse::<ServiceKind>()?,
        })
    }
}

/// GET /history/clip response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClipRecordDto {
    pub id: String,
    #[serde(default)]
    pub s3_key: Option<String>,
}

/// DELETE responses.
#[derive(Debug, Deserialize)]
pub struct DeleteResponseDto {
    #[serde(default)]
    pub success: bool,
}

// ── Voices ─────────────────────────────────────────────────────────

/// One entry of the GET /voices listing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceDto {
    pub id: String,
    pub name: String,
    pub service: String,
    #[serde(default)]
    pub gradient_colors: String,
}

impl TryFrom<VoiceDto> for Voice {
    type Error = GenerationError;

    fn try_from(dto: VoiceDto) -> Result<Self, Self::Error> {
        Ok(Self {
            id: dto.id,
            name: dto.name,
            service: dto.service.parse::<ServiceKind>()?,
            gradient_colors: dto.gradient_colors,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn generate_request_uses_camel_case() {
        let request = GenerationRequest::SpeechToSpeech {
            object_key: "uploads/ref.wav".to_string(),
            voice_id: "v2".to_string(),
        };
        let dto = GenerateRequestDto::from(&request);
        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(
            value,
            json!({"service": "seedvc", "voiceId": "v2", "s3Key": "uploads/ref.wav"})
        );
    }

    #[test]
    fn receipt_parses_the_throttle_flag() {
        let dto: GenerateResponseDto =
            serde_json::from_value(json!({"audioId": "j1", "shouldShowThrottleAlert": true}))
                .unwrap();
        let receipt = SubmissionReceipt::from(dto);
        assert_eq!(receipt.job_id.as_str(), "j1");
        assert!(receipt.throttle_advisory);
    }

    #[test]
    fn explicit_status_strings_resolve() {
        let pending: StatusResponseDto =
            serde_json::from_value(json!({"status": "pending"})).unwrap();
        assert_eq!(pending.into_status().unwrap(), JobStatus::Pending);

        let failed: StatusResponseDto =
            serde_json::from_value(json!({"status": "failed", "error": "worker died"})).unwrap();
        assert_eq!(
            failed.into_status().unwrap(),
            JobStatus::Failed {
                reason: Some("worker died".to_string())
            }
        );
    }

    #[test]
    fn succeeded_without_url_is_invalid() {
        let dto: StatusResponseDto =
            serde_json::from_value(json!({"status": "succeeded"})).unwrap();
        assert!(matches!(
            dto.into_status(),
            Err(ApiError::InvalidResponse { .. })
        ));
    }

    #[test]
    fn legacy_shape_reads_false_null_as_pending() {
        let dto: StatusResponseDto =
            serde_json::from_value(json!({"success": false, "audioUrl": null})).unwrap();
        assert_eq!(dto.into_status().unwrap(), JobStatus::Pending);
    }

    #[test]
    fn legacy_shape_reads_success_with_url_as_succeeded() {
        let dto: StatusResponseDto =
            serde_json::from_value(json!({"success": true, "audioUrl": "https://a.wav"}))
                .unwrap();
        assert_eq!(
            dto.into_status().unwrap(),
            JobStatus::Succeeded {
                audio_url: "https://a.wav".to_string()
            }
        );
    }

    #[test]
    fn history_item_maps_service_and_defaults_voice() {
        let dto: HistoryItemDto = serde_json::from_value(json!({
            "id": "h1",
            "title": "thunder",
            "audioUrl": "https://a.wav",
            "date": "4/12/2026",
            "service": "make-an-audio"
        }))
        .unwrap();
        let item = HistoryItem::try_from(dto).unwrap();
        assert_eq!(item.service, ServiceKind::MakeAnAudio);
        assert_eq!(item.voice_id, "");
    }

    #[test]
    fn unknown_service_in_history_is_an_error() {
        let dto: HistoryItemDto = serde_json::from_value(json!({
            "id": "h1",
            "title": "x",
            "date": "4/12/2026",
            "service": "mystery-engine"
        }))
        .unwrap();
        assert!(matches!(
            HistoryItem::try_from(dto),
            Err(GenerationError::UnknownService { .. })
        ));
    }
}
