#![deny(unsafe_code)]
//! # attest-types
//!
//! Data model for the commit-reveal evidence subsystem.
//!
//! Before an autonomous agent acts, it assembles a [`ReasoningTrace`] — the
//! full record of the evidence and reasoning behind the decision. The trace
//! is hashed and the hash retained as a tamper-evident pre-commitment;
//! revealing the trace later lets any party recompute the hash and confirm
//! the reasoning was not fabricated after the fact.
//!
//! ## Key Types
//!
//! - [`ReasoningTrace`] — the canonical evidence record (immutable once built)
//! - [`TradeDecision`] / [`PredictionStage`] / [`ScamCheckResult`] — verdicts
//!   supplied by the trading-side collaborators
//! - [`FirewallParams`] — verdict supplied by the transaction firewall
//!
//! Decision *content* (prediction scoring, scam heuristics, simulation) is
//! produced elsewhere; these types only carry the already-computed verdicts.

pub mod firewall;
pub mod time;
pub mod trace;
pub mod trade;

pub use firewall::FirewallParams;
pub use time::now_ms;
pub use trace::{
    ActionKind, Alternative, DataSource, ReasoningTrace, RiskAssessment, TraceAction,
    TraceAnalysis, TraceDecision, TraceInputs, TraceMetadata, TRACE_SCHEMA_VERSION,
};
pub use trade::{
    CyclicSignal, PredictionStage, ScamCheckResult, TokenRiskLevel, TradeAction, TradeDecision,
};
