//! Per-slot polling state machine.
//!
//! A [`GenerationSlot`] owns at most one active poll loop at a time:
//!
//! ```text
//!   Idle → Polling → {Succeeded, Failed, Cancelled} → Idle
//! ```
//!
//! Starting a new job on a busy slot tears down the predecessor loop
//! first, so a slot can never leak a dangling timer. Terminal hand-off
//! is lease-gated: each started job mints a fresh lease, and a loop
//! may only commit its terminal result if its lease still matches the
//! slot's active entry. A response arriving after the slot moved on
//! (cancel, supersede, duplicate terminal tick) fails the lease check
//! and is discarded without touching playback or history.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::{Mutex, mpsc};
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use vocalis_core::domain::JobStatus;
use vocalis_core::error::GenerationError;
use vocalis_core::events::StudioEvent;
use vocalis_core::ports::GenerationBackend;
use vocalis_core::JobId;

use crate::config::GenerationConfig;
use crate::sink::{DeliveryContext, ResultSink};

/// Lease for one poll-loop execution.
///
/// Prevents stale terminal commits when a job is cancelled or
/// superseded while its loop still has a response in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LeaseId(u64);

/// The job currently owned by a slot.
struct ActiveJob {
    lease: LeaseId,
    job_id: JobId,
    cancel: CancellationToken,
}

/// One logical generation slot (one editor instance).
///
/// Slots are independent: two slots polling concurrently share no
/// state and no ordering guarantee.
pub struct GenerationSlot {
    backend: Arc<dyn GenerationBackend>,
    sink: Arc<ResultSink>,
    events: mpsc::UnboundedSender<StudioEvent>,
    config: GenerationConfig,
    /// Mints a fresh lease per started job.
    lease_counter: AtomicU64,
    /// Active job, if any. Never held across an await.
    active: Mutex<Option<ActiveJob>>,
    /// Parent token; cancelled on drop to stop any remaining loop.
    shutdown: CancellationToken,
}

impl GenerationSlot {
    /// Create an idle slot.
    #[must_use]
    pub fn new(
        backend: Arc<dyn GenerationBackend>,
        sink: Arc<ResultSink>,
        events: mpsc::UnboundedSender<StudioEvent>,
        config: GenerationConfig,
    ) -> Self {
        Self {
            backend,
            sink,
            events,
            config,
            lease_counter: AtomicU64::new(0),
            active: Mutex::new(None),
            shutdown: CancellationToken::new(),
        }
    }

    /// Start polling a freshly accepted job.
    ///
    /// If the slot is already polling, the predecessor loop is torn
    /// down first and its job is reported as cancelled; its in-flight
    /// response, if any, can no longer commit.
    pub async fn start(self: &Arc<Self>, job_id: JobId, ctx: DeliveryContext) {
        let lease = LeaseId(self.lease_counter.fetch_add(1, Ordering::Relaxed));
        let cancel = self.shutdown.child_token();

        {
            let mut active = self.active.lock().await;
            if let Some(prev) = active.take() {
                tracing::debug!(id = %prev.job_id, new = %job_id, "Superseding active job");
                prev.cancel.cancel();
                self.emit(StudioEvent::GenerationCancelled {
                    job_id: prev.job_id,
                });
            }
            *active = Some(ActiveJob {
                lease,
                job_id: job_id.clone(),
                cancel: cancel.clone(),
            });
        }

        tracing::debug!(id = %job_id, "Polling started");

        let slot = Arc::clone(self);
        tokio::spawn(async move {
            slot.poll_loop(lease, job_id, cancel, ctx).await;
        });
    }

    /// Cancel the active job, if any.
    ///
    /// Stops the loop without delivering a result and without
    /// surfacing an error. Idle slots ignore the call.
    pub async fn cancel(&self) {
        let mut active = self.active.lock().await;
        if let Some(job) = active.take() {
            tracing::debug!(id = %job.job_id, "Polling cancelled");
            job.cancel.cancel();
            self.emit(StudioEvent::GenerationCancelled { job_id: job.job_id });
        }
    }

    /// Whether the slot currently owns an active job.
    pub async fn is_polling(&self) -> bool {
        self.active.lock().await.is_some()
    }

    /// Id of the active job, if any.
    pub async fn active_job(&self) -> Option<JobId> {
        self.active.lock().await.as_ref().map(|job| job.job_id.clone())
    }

    // ── Poll loop ──────────────────────────────────────────────────

    /// Drive one job to a terminal state.
    ///
    /// Fixed cadence, first tick immediate, attempts serialized within
    /// the loop. Every exit path goes through the lease check before
    /// touching shared state.
    async fn poll_loop(
        &self,
        lease: LeaseId,
        job_id: JobId,
        cancel: CancellationToken,
        ctx: DeliveryContext,
    ) {
        let mut ticker = tokio::time::interval(self.config.poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let mut attempts: u32 = 0;

        loop {
            tokio::select! {
                () = cancel.cancelled() => {
                    tracing::debug!(id = %job_id, "Poll loop stopped by cancellation");
                    return;
                }
                _ = ticker.tick() => {}
            }

            attempts += 1;
            if let Some(max) = self.config.max_poll_attempts {
                if attempts > max {
                    self.finalize(lease, &job_id, Err(GenerationError::timeout(max)))
                        .await;
                    return;
                }
            }

            match self.backend.query_job_status(&job_id).await {
                Ok(JobStatus::Pending) => {}
                Ok(JobStatus::Succeeded { audio_url }) => {
                    self.finalize_success(lease, &job_id, audio_url, &ctx).await;
                    return;
                }
                Ok(JobStatus::Failed { reason }) => {
                    self.finalize(lease, &job_id, Err(GenerationError::job_failed(reason)))
                        .await;
                    return;
                }
                // Transport and parse errors are terminal for the job,
                // not retried at the attempt level.
                Err(e) => {
                    self.finalize(lease, &job_id, Err(e)).await;
                    return;
                }
            }
        }
    }

    /// Commit a success, gated on the lease.
    async fn finalize_success(
        &self,
        lease: LeaseId,
        job_id: &JobId,
        audio_url: String,
        ctx: &DeliveryContext,
    ) {
        if !self.verify_and_remove_lease(lease).await {
            tracing::debug!(id = %job_id, "Ignoring stale success (lease mismatch)");
            return;
        }
        self.sink.deliver(job_id, audio_url, ctx);
    }

    /// Commit a failure, gated on the lease.
    async fn finalize(
        &self,
        lease: LeaseId,
        job_id: &JobId,
        result: Result<(), GenerationError>,
    ) {
        if !self.verify_and_remove_lease(lease).await {
            tracing::debug!(id = %job_id, "Ignoring stale terminal result (lease mismatch)");
            return;
        }

        if let Err(error) = result {
            tracing::warn!(id = %job_id, error = %error, "Generation failed");
            self.emit(StudioEvent::GenerationFailed {
                job_id: job_id.clone(),
                error,
            });
        }
    }

    /// Verify the lease matches the active entry and clear it.
    async fn verify_and_remove_lease(&self, lease: LeaseId) -> bool {
        let mut active = self.active.lock().await;
        active
            .as_ref()
            .is_some_and(|job| job.lease == lease)
            .then(|| active.take())
            .is_some()
    }

    fn emit(&self, event: StudioEvent) {
        if self.events.send(event).is_err() {
            tracing::warn!("Studio event receiver dropped");
        }
    }
}

impl Drop for GenerationSlot {
    fn drop(&mut self) {
        // Stops any loop still running; no result is delivered.
        self.shutdown.cancel();
    }
}
