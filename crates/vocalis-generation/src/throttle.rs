//! Throttle advisory.
//!
//! The backend flags a submission when the caller is close to its
//! server-enforced rate limit. The job is still accepted and will be
//! processed (possibly queued server-side), so the advisory is purely
//! informational: surfaced exactly once per flagged submission, never
//! blocking or delaying the job.

/// User-facing advisory text shown when a submission is flagged.
pub const THROTTLE_ADVISORY_MESSAGE: &str =
    "Exceeding 3 requests per minute will queue your requests.";
