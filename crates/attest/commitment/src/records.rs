use std::collections::HashMap;

use attest_canonical::{digest, TraceDigest};
use attest_types::ReasoningTrace;
use serde::{Deserialize, Serialize};

use crate::error::CommitmentError;

/// A committed trace: the digest retained before acting, the full trace
/// revealed later, and the commit instant.
///
/// Invariant: `hash` equals the digest of `trace` for every entry the log
/// ever hands out. [`CommitmentResult::verify`] rechecks it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CommitmentResult {
    pub hash: TraceDigest,
    pub trace: ReasoningTrace,
    pub committed_at_ms: u64,
}

impl CommitmentResult {
    /// Recompute the trace digest and compare it to the stored hash.
    pub fn verify(&self) -> Result<bool, CommitmentError> {
        Ok(digest(&self.trace)? == self.hash)
    }
}

/// Aggregate counts over a commitment log.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CommitmentStats {
    pub total: usize,
    pub by_action_kind: HashMap<String, usize>,
}
