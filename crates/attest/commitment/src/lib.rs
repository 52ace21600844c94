#![deny(unsafe_code)]
//! # attest-commitment
//!
//! The commit-reveal half of the evidence subsystem: an append-only
//! [`CommitmentLog`] that hashes each [`ReasoningTrace`] before the agent
//! acts, and digest verification for revealed traces.
//!
//! The flow is commit, act, reveal, verify. `commit` canonicalizes and
//! hashes the trace and retains the [`CommitmentResult`]; after the action,
//! anyone holding the trace recomputes the digest with `verify` and compares
//! it to the committed hash. A mismatch means the reasoning record was
//! altered after the commitment was made.
//!
//! ## Key Types
//!
//! - [`CommitmentLog`] — append-only, agent-scoped store
//! - [`CommitmentResult`] — `{hash, trace, committed_at_ms}` entry
//! - [`CommitmentError`] — log failures (verification *mismatch* is a
//!   boolean result, not an error)
//!
//! [`ReasoningTrace`]: attest_types::ReasoningTrace

pub mod error;
pub mod log;
pub mod records;

pub use error::CommitmentError;
pub use log::CommitmentLog;
pub use records::{CommitmentResult, CommitmentStats};
