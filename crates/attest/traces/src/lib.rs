#![deny(unsafe_code)]
//! # attest-traces
//!
//! Builders that turn collaborator verdicts into [`ReasoningTrace`] records
//! ready for commitment.
//!
//! Both builders are pure with respect to their inputs: the same decision
//! always yields the same observations, alternatives, and verdict fields.
//! They never validate, so whatever the collaborators computed is what gets
//! committed.
//!
//! - [`trade_trace`] — from an aggregated [`TradeDecision`]
//! - [`firewall_trace`] — from a firewall [`FirewallParams`] verdict
//!
//! [`ReasoningTrace`]: attest_types::ReasoningTrace
//! [`TradeDecision`]: attest_types::TradeDecision
//! [`FirewallParams`]: attest_types::FirewallParams

pub mod firewall;
pub mod trade;

pub use firewall::{firewall_trace, FIREWALL_ALLOW_CONFIDENCE, FIREWALL_DENY_CONFIDENCE};
pub use trade::trade_trace;
