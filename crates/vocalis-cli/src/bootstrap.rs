//! CLI bootstrap, the composition root.
//!
//! The only place where infrastructure is wired together: the HTTP
//! adapter is built here and handed to the generation services as
//! port trait objects. Handlers receive the composed context and
//! never see `reqwest` or wire DTOs.

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;

use vocalis_api::{ApiConfig, DefaultApiClient};
use vocalis_core::events::StudioEvent;
use vocalis_core::ports::{GenerationBackend, HistoryStore, ObjectStore, VoiceCatalog};
use vocalis_core::session::SessionState;
use vocalis_generation::{
    GenerationConfig, GenerationSlot, GenerationSubmitter, HistoryCache, ResultSink, VoiceRegistry,
};

use crate::parser::Cli;

/// Fully composed application context for command handlers.
pub struct StudioContext {
    /// Shared playback and voice-selection state.
    pub session: SessionState,
    /// Submits validated requests to the backend.
    pub submitter: GenerationSubmitter,
    /// The one polling slot this process drives.
    pub slot: Arc<GenerationSlot>,
    /// Cached history listings.
    pub history: Arc<HistoryCache>,
    /// Cached voice catalog.
    pub registry: VoiceRegistry,
    /// Receiver for studio events.
    pub events: mpsc::UnboundedReceiver<StudioEvent>,
}

/// Compose the full studio from CLI options.
pub fn bootstrap(cli: &Cli) -> Result<StudioContext> {
    let mut api_config = ApiConfig::new();
    if let Some(url) = &cli.api_url {
        api_config = api_config.with_base_url(url);
    }
    if let Some(token) = &cli.token {
        api_config = api_config.with_token(token);
    }

    let client = Arc::new(DefaultApiClient::new(&api_config)?);
    let backend: Arc<dyn GenerationBackend> = client.clone();
    let store: Arc<dyn HistoryStore> = client.clone();
    let objects: Arc<dyn ObjectStore> = client.clone();
    let catalog: Arc<dyn VoiceCatalog> = client;

    let (events_tx, events_rx) = mpsc::unbounded_channel();
    let session = SessionState::new();
    let config = GenerationConfig::default();

    let history = Arc::new(HistoryCache::new(
        store,
        Arc::clone(&objects),
        events_tx.clone(),
    ));
    let sink = Arc::new(ResultSink::new(
        session.clone(),
        Arc::clone(&history),
        events_tx.clone(),
        config.settle_delay,
    ));
    let slot = Arc::new(GenerationSlot::new(
        Arc::clone(&backend),
        sink,
        events_tx.clone(),
        config,
    ));
    let submitter = GenerationSubmitter::new(backend, objects, events_tx);
    let registry = VoiceRegistry::new(catalog);

    Ok(StudioContext {
        session,
        submitter,
        slot,
        history,
        registry,
        events: events_rx,
    })
}
