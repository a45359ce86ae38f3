//! Generation backend port.
//!
//! This is the submission/status surface of the asynchronous worker.
//! Submissions return immediately with a job handle; completion is
//! observed by polling [`query_job_status`](GenerationBackend::query_job_status).

use async_trait::async_trait;

use crate::domain::{GenerationRequest, JobId, JobStatus, SubmissionReceipt};
use crate::error::GenerationResult;

/// Port for submitting generation jobs and polling their status.
///
/// # Contract
///
/// - `submit_generation` either creates exactly one backend job and
///   returns its receipt, or fails with `SubmissionFailed` and creates
///   nothing. Callers must not poll after a failed submission.
/// - `query_job_status` resolves the wire status into the three-way
///   [`JobStatus`]; a transport failure is `PollTransport`. One call
///   maps to one status query; implementations do not retry.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Submit a validated request; returns the job id and throttle flag.
    async fn submit_generation(
        &self,
        request: &GenerationRequest,
    ) -> GenerationResult<SubmissionReceipt>;

    /// Ask whether a job has reached a terminal state.
    async fn query_job_status(&self, job_id: &JobId) -> GenerationResult<JobStatus>;
}
