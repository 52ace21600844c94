use std::collections::HashMap;
use std::sync::RwLock;

use attest_canonical::{digest, TraceDigest};
use attest_types::{now_ms, FirewallParams, ReasoningTrace, TradeDecision};
use attest_traces::{firewall_trace, trade_trace};
use tracing::{debug, info, warn};

use crate::error::CommitmentError;
use crate::records::{CommitmentResult, CommitmentStats};

/// Append-only log of reasoning commitments for one agent.
///
/// Each `commit` hashes the trace and retains `{hash, trace, instant}`
/// before the described action is taken. The stored sequence only ever
/// grows; nothing mutates or removes an entry once appended.
pub struct CommitmentLog {
    agent: String,
    entries: RwLock<Vec<CommitmentResult>>,
}

impl CommitmentLog {
    /// Empty log scoped to one agent identity.
    pub fn new(agent: impl Into<String>) -> Self {
        Self {
            agent: agent.into(),
            entries: RwLock::new(Vec::new()),
        }
    }

    pub fn agent(&self) -> &str {
        &self.agent
    }

    /// Hash the trace and append the commitment.
    ///
    /// Caller contract: commit strictly before executing the action the
    /// trace describes. The log records; it does not sequence the caller.
    pub fn commit(&self, trace: ReasoningTrace) -> Result<CommitmentResult, CommitmentError> {
        let hash = digest(&trace)?;
        let result = CommitmentResult {
            hash,
            trace,
            committed_at_ms: now_ms(),
        };

        let mut entries = self
            .entries
            .write()
            .map_err(|_| CommitmentError::LockPoisoned)?;
        entries.push(result.clone());

        info!(
            agent = %self.agent,
            action = %result.trace.action.kind,
            decision = %result.trace.decision.action,
            confidence = result.trace.decision.confidence,
            hash = %result.hash,
            "Reasoning committed"
        );

        Ok(result)
    }

    /// Build the trade trace under this log's agent name and commit it.
    pub fn commit_trade_decision(
        &self,
        decision: &TradeDecision,
    ) -> Result<CommitmentResult, CommitmentError> {
        self.commit(trade_trace(&self.agent, decision))
    }

    /// Build the firewall trace under this log's agent name and commit it.
    pub fn commit_firewall_decision(
        &self,
        params: &FirewallParams,
    ) -> Result<CommitmentResult, CommitmentError> {
        self.commit(firewall_trace(&self.agent, params))
    }

    /// Recompute the digest of a revealed trace and compare it to a prior
    /// commitment. Never consults the stored sequence: the hash alone is
    /// the commitment.
    pub fn verify(
        &self,
        expected: &TraceDigest,
        trace: &ReasoningTrace,
    ) -> Result<bool, CommitmentError> {
        let computed = digest(trace)?;
        let matches = computed == *expected;
        if matches {
            debug!(agent = %self.agent, hash = %expected, "Commitment verified");
        } else {
            warn!(
                agent = %self.agent,
                expected = %expected,
                computed = %computed,
                "Commitment mismatch; revealed trace does not match prior hash"
            );
        }
        Ok(matches)
    }

    /// Snapshot of the full history, oldest first. The returned vector is
    /// detached from the log; mutating it never touches the stored entries.
    pub fn commitments(&self) -> Result<Vec<CommitmentResult>, CommitmentError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| CommitmentError::LockPoisoned)?;
        Ok(entries.clone())
    }

    /// Recompute every stored entry's digest, failing on the first entry
    /// whose hash no longer matches its trace.
    pub fn audit(&self) -> Result<(), CommitmentError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| CommitmentError::LockPoisoned)?;
        for (index, entry) in entries.iter().enumerate() {
            if !entry.verify()? {
                return Err(CommitmentError::IntegrityViolation {
                    index,
                    reason: "stored hash does not match recomputed digest".into(),
                });
            }
        }
        Ok(())
    }

    /// Aggregate counts over the log, keyed by action kind.
    pub fn stats(&self) -> Result<CommitmentStats, CommitmentError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| CommitmentError::LockPoisoned)?;
        let mut by_action_kind: HashMap<String, usize> = HashMap::new();
        for entry in entries.iter() {
            *by_action_kind
                .entry(entry.trace.action.kind.to_string())
                .or_insert(0) += 1;
        }
        Ok(CommitmentStats {
            total: entries.len(),
            by_action_kind,
        })
    }

    pub fn len(&self) -> Result<usize, CommitmentError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| CommitmentError::LockPoisoned)?;
        Ok(entries.len())
    }

    pub fn is_empty(&self) -> Result<bool, CommitmentError> {
        Ok(self.len()? == 0)
    }
}
