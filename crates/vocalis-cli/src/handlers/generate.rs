//! Generation handlers: say, effect, convert.
//!
//! Each handler submits one request, starts the polling slot, then
//! waits on the event channel until the job reaches a terminal state.

use std::path::Path;

use anyhow::{Context, Result, bail};

use vocalis_core::domain::GenerationRequest;
use vocalis_core::events::StudioEvent;
use vocalis_generation::sink::DeliveryContext;

use crate::bootstrap::StudioContext;

/// Generate speech from text.
pub async fn handle_say(ctx: &mut StudioContext, text: String, voice: String) -> Result<()> {
    let request = GenerationRequest::TextToSpeech {
        text,
        voice_id: voice,
    };
    run_generation(ctx, request).await
}

/// Generate a sound effect from a prompt.
pub async fn handle_effect(ctx: &mut StudioContext, prompt: String) -> Result<()> {
    let request = GenerationRequest::SoundEffect { prompt };
    run_generation(ctx, request).await
}

/// Convert a local recording to another voice.
pub async fn handle_convert(ctx: &mut StudioContext, file: &Path, voice: String) -> Result<()> {
    let bytes = std::fs::read(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let mime = mime_for(file)?;

    println!("Uploading {}...", file.display());
    let object_key = ctx
        .submitter
        .upload_reference(bytes, mime)
        .await
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;

    let request = GenerationRequest::SpeechToSpeech {
        object_key,
        voice_id: voice,
    };
    run_generation(ctx, request).await
}

/// Submit, poll, and report the outcome.
async fn run_generation(ctx: &mut StudioContext, request: GenerationRequest) -> Result<()> {
    let delivery = DeliveryContext::for_request(&request);
    let receipt = ctx
        .submitter
        .submit(&request)
        .await
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;

    ctx.slot.start(receipt.job_id, delivery).await;

    while let Some(event) = ctx.events.recv().await {
        match event {
            StudioEvent::GenerationStarted { job_id, service } => {
                tracing::debug!(id = %job_id, service = %service, "Job accepted");
            }
            StudioEvent::ThrottleAdvisory { message } => {
                eprintln!("note: {message}");
            }
            StudioEvent::ArtifactReady { artifact } => {
                println!("{}", artifact.title);
                println!("{}", artifact.audio_url);
                return Ok(());
            }
            StudioEvent::GenerationFailed { error, .. } => {
                bail!(error.user_message());
            }
            StudioEvent::GenerationCancelled { job_id } => {
                bail!("generation {job_id} was cancelled");
            }
            StudioEvent::HistoryInvalidated { .. } => {}
        }
    }

    bail!("event channel closed before the job finished")
}

/// Map a file extension to the backend's accepted mime types.
fn mime_for(file: &Path) -> Result<&'static str> {
    match file
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("mp3") => Ok("audio/mp3"),
        Some("wav") => Ok("audio/wav"),
        other => bail!(
            "unsupported file type {:?}: only mp3 and wav are accepted",
            other.unwrap_or("none")
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_is_derived_from_the_extension() {
        assert_eq!(mime_for(Path::new("ref.WAV")).unwrap(), "audio/wav");
        assert_eq!(mime_for(Path::new("ref.mp3")).unwrap(), "audio/mp3");
        assert!(mime_for(Path::new("ref.flac")).is_err());
        assert!(mime_for(Path::new("ref")).is_err());
    }
}
