//! Property tests: every commitment a log hands out must verify against its
//! own trace, and any post-hoc edit to the trace must break verification.

use attest_commitment::CommitmentLog;
use attest_types::{
    FirewallParams, PredictionStage, ScamCheckResult, TokenRiskLevel, TradeAction, TradeDecision,
};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Helpers / Strategies
// ---------------------------------------------------------------------------

fn arb_trade_action() -> impl Strategy<Value = TradeAction> {
    prop_oneof![
        Just(TradeAction::Buy),
        Just(TradeAction::Sell),
        Just(TradeAction::Hold),
    ]
}

fn arb_stage() -> impl Strategy<Value = PredictionStage> {
    ("[a-z_]{3,12}", any::<bool>(), 0.0f64..100.0, "[a-z ]{3,24}").prop_map(
        |(name, passed, confidence, reason)| PredictionStage {
            name,
            passed,
            confidence,
            reason,
        },
    )
}

fn arb_scam_check() -> impl Strategy<Value = Option<ScamCheckResult>> {
    proptest::option::of(
        (
            any::<bool>(),
            prop::collection::vec("[a-z_]{4,16}", 1..4),
            prop_oneof![
                Just(TokenRiskLevel::Safe),
                Just(TokenRiskLevel::Suspicious),
                Just(TokenRiskLevel::Dangerous),
            ],
        )
            .prop_map(|(is_scam, checks, risk_level)| ScamCheckResult {
                token_mint: "So11111111111111111111111111111111111111112".into(),
                is_scam,
                checks,
                risk_level,
            }),
    )
}

fn arb_decision() -> impl Strategy<Value = TradeDecision> {
    (
        "[1-9A-HJ-NP-Za-km-z]{32,44}",
        arb_trade_action(),
        0.001f64..50.0,
        prop::collection::vec(arb_stage(), 1..5),
        arb_scam_check(),
        0.0f64..100.0,
    )
        .prop_map(
            |(token_mint, action, amount, stages, scam_check, confidence)| TradeDecision {
                token_mint,
                action,
                amount,
                stages,
                scam_check,
                cyclic_signal: None,
                confidence,
            },
        )
}

fn arb_firewall_params() -> impl Strategy<Value = FirewallParams> {
    (
        prop_oneof![Just("swap"), Just("transfer"), Just("stake")],
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        "[a-z ]{4,32}",
    )
        .prop_map(
            |(kind, simulation_run, simulation_passed, spend_limit_ok, slippage_ok, program_allowed, reason)| {
                let approved = (!simulation_run || simulation_passed)
                    && spend_limit_ok
                    && slippage_ok
                    && program_allowed;
                FirewallParams {
                    transaction_kind: kind.to_string(),
                    simulation_run,
                    simulation_passed,
                    spend_limit_ok,
                    slippage_ok,
                    program_allowed,
                    approved,
                    reason,
                }
            },
        )
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    /// A freshly committed trade decision always verifies against its hash.
    #[test]
    fn committed_trade_always_verifies(decision in arb_decision()) {
        let log = CommitmentLog::new("prop-agent");
        let result = log.commit_trade_decision(&decision).unwrap();

        prop_assert!(result.verify().unwrap());
        prop_assert!(log.verify(&result.hash, &result.trace).unwrap());
    }

    /// Editing the revealed trace after the fact always breaks verification.
    #[test]
    fn edited_trace_never_verifies(decision in arb_decision(), suffix in "[a-z]{1,8}") {
        let log = CommitmentLog::new("prop-agent");
        let result = log.commit_trade_decision(&decision).unwrap();

        let mut edited = result.trace.clone();
        edited.analysis.logic.push_str(&suffix);
        prop_assert!(!log.verify(&result.hash, &edited).unwrap());
    }

    /// Verification depends only on the hash and the trace, not on which
    /// log performs it.
    #[test]
    fn any_log_can_verify(decision in arb_decision()) {
        let committing = CommitmentLog::new("prop-agent");
        let result = committing.commit_trade_decision(&decision).unwrap();

        let auditor = CommitmentLog::new("independent-auditor");
        prop_assert!(auditor.verify(&result.hash, &result.trace).unwrap());
        prop_assert!(auditor.is_empty().unwrap());
    }

    /// Firewall commitments verify and a batch of them survives an audit.
    #[test]
    fn firewall_batch_audits_clean(
        batch in prop::collection::vec(arb_firewall_params(), 1..8),
    ) {
        let log = CommitmentLog::new("prop-agent");
        for params in &batch {
            let result = log.commit_firewall_decision(params).unwrap();
            prop_assert!(result.verify().unwrap());
        }

        prop_assert_eq!(log.len().unwrap(), batch.len());
        log.audit().unwrap();
    }

    /// History preserves commit call order.
    #[test]
    fn history_matches_commit_order(
        decisions in prop::collection::vec(arb_decision(), 1..6),
    ) {
        let log = CommitmentLog::new("prop-agent");
        let mut returned = Vec::new();
        for decision in &decisions {
            returned.push(log.commit_trade_decision(decision).unwrap());
        }

        let history = log.commitments().unwrap();
        prop_assert_eq!(history, returned);
    }
}
