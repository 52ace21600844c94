use attest_types::{
    now_ms, ActionKind, Alternative, DataSource, FirewallParams, ReasoningTrace, RiskAssessment,
    TraceAction, TraceAnalysis, TraceDecision, TraceInputs, TRACE_SCHEMA_VERSION,
};

/// Stated confidence when the firewall allows a transaction.
pub const FIREWALL_ALLOW_CONFIDENCE: f64 = 90.0;
/// Stated confidence when the firewall denies a transaction.
pub const FIREWALL_DENY_CONFIDENCE: f64 = 95.0;

/// Assemble the reasoning trace for a firewall verdict.
///
/// The firewall is rule-based, so the recorded confidence is a policy
/// constant rather than a computed score: denials are asserted more
/// strongly than approvals.
pub fn firewall_trace(agent: &str, params: &FirewallParams) -> ReasoningTrace {
    let now = now_ms();

    let observations = vec![
        format!("Transaction type: {}", params.transaction_kind),
        if !params.simulation_run {
            "Simulation: skipped".to_string()
        } else if params.simulation_passed {
            "Simulation: passed".to_string()
        } else {
            "Simulation: failed".to_string()
        },
        format!(
            "Spend limit: {}",
            if params.spend_limit_ok {
                "within limit"
            } else {
                "exceeded"
            }
        ),
        format!(
            "Slippage: {}",
            if params.slippage_ok {
                "within tolerance"
            } else {
                "above tolerance"
            }
        ),
        format!(
            "Program allowlist: {}",
            if params.program_allowed {
                "target program allowed"
            } else {
                "target program not on allowlist"
            }
        ),
    ];

    let alternatives_considered = if params.approved {
        vec![Alternative {
            action: "block the transaction".into(),
            reason_rejected: format!("all firewall checks passed: {}", params.reason),
        }]
    } else {
        let failed = params.failed_checks();
        let reason_rejected = if failed.is_empty() {
            params.reason.clone()
        } else {
            format!("failed checks: {}", failed.join(", "))
        };
        vec![Alternative {
            action: "allow the transaction".into(),
            reason_rejected,
        }]
    };

    let confidence = if params.approved {
        FIREWALL_ALLOW_CONFIDENCE
    } else {
        FIREWALL_DENY_CONFIDENCE
    };

    ReasoningTrace {
        version: TRACE_SCHEMA_VERSION.into(),
        agent: agent.into(),
        timestamp_ms: now,
        action: TraceAction {
            kind: if params.approved {
                ActionKind::Transaction
            } else {
                ActionKind::Rejection
            },
            description: format!(
                "{} outgoing {} transaction",
                if params.approved { "allowed" } else { "blocked" },
                params.transaction_kind
            ),
            transaction_ref: None,
        },
        inputs: TraceInputs {
            data_sources: vec![DataSource {
                name: "transaction_firewall".into(),
                data: serde_json::json!({
                    "simulation_run": params.simulation_run,
                    "simulation_passed": params.simulation_passed,
                    "spend_limit_ok": params.spend_limit_ok,
                    "slippage_ok": params.slippage_ok,
                    "program_allowed": params.program_allowed,
                    "approved": params.approved,
                }),
                queried_at_ms: now,
            }],
            context: format!(
                "pre-flight screening of outgoing {} transaction",
                params.transaction_kind
            ),
        },
        analysis: TraceAnalysis {
            observations,
            logic: params.reason.clone(),
            alternatives_considered,
        },
        decision: TraceDecision {
            action: format!(
                "{} {}",
                if params.approved { "allow" } else { "deny" },
                params.transaction_kind
            ),
            confidence,
            risk_assessment: RiskAssessment::grade(params.approved, confidence),
            expected_outcome: if params.approved {
                "transaction proceeds to signing".to_string()
            } else {
                "transaction blocked before signing".to_string()
            },
        },
        metadata: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clean_params() -> FirewallParams {
        FirewallParams {
            transaction_kind: "swap".into(),
            simulation_run: true,
            simulation_passed: true,
            spend_limit_ok: true,
            slippage_ok: true,
            program_allowed: true,
            approved: true,
            reason: "all checks passed".into(),
        }
    }

    #[test]
    fn allowed_transaction_uses_allow_constants() {
        let trace = firewall_trace("sol-trader", &clean_params());

        assert_eq!(trace.action.kind, ActionKind::Transaction);
        assert_eq!(trace.decision.confidence, FIREWALL_ALLOW_CONFIDENCE);
        assert_eq!(trace.decision.risk_assessment, RiskAssessment::Low);
        assert_eq!(trace.analysis.observations.len(), 5);
        assert_eq!(trace.analysis.alternatives_considered.len(), 1);
        assert_eq!(
            trace.analysis.alternatives_considered[0].action,
            "block the transaction"
        );
    }

    #[test]
    fn denied_transaction_uses_deny_constants() {
        let mut params = clean_params();
        params.spend_limit_ok = false;
        params.approved = false;
        params.reason = "spend limit exceeded".into();

        let trace = firewall_trace("sol-trader", &params);

        assert_eq!(trace.action.kind, ActionKind::Rejection);
        assert_eq!(trace.decision.confidence, FIREWALL_DENY_CONFIDENCE);
        assert_eq!(trace.decision.risk_assessment, RiskAssessment::High);
        assert_eq!(trace.analysis.observations.len(), 5);
        assert_eq!(
            trace.analysis.alternatives_considered[0].action,
            "allow the transaction"
        );
        assert!(trace.analysis.alternatives_considered[0]
            .reason_rejected
            .contains("spend_limit"));
    }

    #[test]
    fn skipped_simulation_is_reported_as_skipped() {
        let mut params = clean_params();
        params.simulation_run = false;
        params.simulation_passed = false;

        let trace = firewall_trace("sol-trader", &params);

        assert_eq!(trace.analysis.observations[1], "Simulation: skipped");
        // A skipped simulation alone does not flip the verdict.
        assert_eq!(trace.action.kind, ActionKind::Transaction);
    }

    #[test]
    fn firewall_is_the_single_data_source() {
        let trace = firewall_trace("sol-trader", &clean_params());

        assert_eq!(trace.inputs.data_sources.len(), 1);
        assert_eq!(trace.inputs.data_sources[0].name, "transaction_firewall");
        assert_eq!(
            trace.inputs.data_sources[0].data["program_allowed"],
            serde_json::json!(true)
        );
    }

    #[test]
    fn policy_reason_lands_in_logic() {
        let mut params = clean_params();
        params.approved = false;
        params.reason = "program not on allowlist".into();
        params.program_allowed = false;

        let trace = firewall_trace("sol-trader", &params);
        assert_eq!(trace.analysis.logic, "program not on allowlist");
    }
}
