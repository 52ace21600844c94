use attest_canonical::CanonicalError;

/// Errors from the commitment log.
#[derive(Debug, thiserror::Error)]
pub enum CommitmentError {
    #[error("canonicalization failed: {0}")]
    Canonical(#[from] CanonicalError),
    #[error("commitment log lock poisoned")]
    LockPoisoned,
    #[error("integrity violation at entry {index}: {reason}")]
    IntegrityViolation { index: usize, reason: String },
}
