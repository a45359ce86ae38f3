//! Voice catalog listing.

use anyhow::Result;

use vocalis_core::domain::ServiceKind;

use crate::bootstrap::StudioContext;

/// List the voices available for a service.
pub async fn handle_voices(ctx: &StudioContext, service: ServiceKind) -> Result<()> {
    let voices = ctx
        .registry
        .voices(service)
        .await
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;

    if voices.is_empty() {
        println!("No voices available for {service}.");
        return Ok(());
    }

    for voice in voices {
        println!("{}  {}", voice.id, voice.name);
    }
    Ok(())
}
