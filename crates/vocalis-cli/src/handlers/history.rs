//! History listing and deletion.

use anyhow::Result;

use vocalis_core::domain::ServiceKind;
use vocalis_core::error::GenerationError;

use crate::bootstrap::StudioContext;

/// Refresh and print the history for a service, grouped by date.
pub async fn handle_history_list(ctx: &StudioContext, service: ServiceKind) -> Result<()> {
    ctx.history
        .refresh(service)
        .await
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;

    let grouped = ctx.history.grouped(service).await;
    if grouped.is_empty() {
        println!("No history for {service}.");
        return Ok(());
    }

    for (date, items) in &grouped {
        println!("{date}");
        for item in items {
            let url = item.audio_url.as_deref().unwrap_or("(no audio)");
            println!("  {}  {}  {url}", item.id, item.title);
        }
    }
    Ok(())
}

/// Delete one history entry by id.
pub async fn handle_history_delete(ctx: &StudioContext, id: &str) -> Result<()> {
    match ctx.history.delete(id).await {
        Ok(()) => {
            println!("Deleted {id}.");
            Ok(())
        }
        Err(GenerationError::ClipNotFound { .. }) => {
            anyhow::bail!("no history entry with id {id}")
        }
        Err(e) => Err(anyhow::anyhow!(e.user_message())),
    }
}
