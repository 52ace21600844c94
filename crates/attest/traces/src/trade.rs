use attest_types::{
    now_ms, ActionKind, Alternative, DataSource, ReasoningTrace, RiskAssessment, TraceAction,
    TraceAnalysis, TraceDecision, TraceInputs, TradeDecision, TRACE_SCHEMA_VERSION,
};

/// Assemble the reasoning trace for a trade decision.
///
/// Pure with respect to the decision: every observation, alternative, and
/// verdict field is derived from `decision` alone. Only the timestamps are
/// read from the clock at call time. Inputs are recorded as-is; an empty
/// stage list or out-of-range confidence is the collaborator's to validate.
pub fn trade_trace(agent: &str, decision: &TradeDecision) -> ReasoningTrace {
    let now = now_ms();
    let approved = decision.approved();
    let token = short_mint(&decision.token_mint);

    let mut observations = vec![
        format!("Token {} under evaluation", token),
        format!(
            "Proposed action: {} {} SOL",
            decision.action, decision.amount
        ),
    ];
    for stage in &decision.stages {
        observations.push(format!(
            "Stage {}: {} (confidence {:.1})",
            stage.name,
            if stage.passed { "passed" } else { "failed" },
            stage.confidence
        ));
    }
    if let Some(check) = &decision.scam_check {
        observations.push(format!(
            "Scam check: {} across {} heuristics, risk {}",
            if check.is_scam { "flagged" } else { "clean" },
            check.checks.len(),
            check.risk_level
        ));
    }
    if let Some(signal) = &decision.cyclic_signal {
        observations.push(format!(
            "Cyclic alignment {:.2} over {} window",
            signal.alignment, signal.window
        ));
    }

    let alternatives_considered = if approved {
        vec![
            Alternative {
                action: "reject the trade".into(),
                reason_rejected: "every prediction stage passed and no scam flag was raised"
                    .into(),
            },
            Alternative {
                action: "wait for more confirmation".into(),
                reason_rejected: format!(
                    "confidence {:.1} across {} stages already meets the entry bar",
                    decision.confidence,
                    decision.stages.len()
                ),
            },
        ]
    } else {
        let failed = decision.failed_stages();
        let reason_rejected = if failed.is_empty() {
            "scam check flagged the token".to_string()
        } else {
            format!("failed stages: {}", failed.join(", "))
        };
        vec![Alternative {
            action: "proceed with the trade anyway".into(),
            reason_rejected,
        }]
    };

    let logic = if approved {
        format!(
            "All {} prediction stages confirmed and the token screened clean; \
             executing {} at confidence {:.1}",
            decision.stages.len(),
            decision.action,
            decision.confidence
        )
    } else {
        "Entry requires every prediction stage to pass and a clean scam screen; \
         at least one gate said no"
            .to_string()
    };

    let mut data_sources = vec![DataSource {
        name: "prediction_gate".into(),
        data: serde_json::json!({
            "stages": decision
                .stages
                .iter()
                .map(|stage| {
                    serde_json::json!({
                        "name": stage.name,
                        "passed": stage.passed,
                        "confidence": stage.confidence,
                    })
                })
                .collect::<Vec<_>>(),
            "overall_confidence": decision.confidence,
        }),
        queried_at_ms: now,
    }];
    if let Some(check) = &decision.scam_check {
        data_sources.push(DataSource {
            name: "scam_check".into(),
            data: serde_json::json!({
                "token_mint": check.token_mint,
                "is_scam": check.is_scam,
                "risk_level": check.risk_level,
                "checks": check.checks,
            }),
            queried_at_ms: now,
        });
    }
    if let Some(signal) = &decision.cyclic_signal {
        data_sources.push(DataSource {
            name: "cyclic_signals".into(),
            data: serde_json::json!({
                "alignment": signal.alignment,
                "window": signal.window,
            }),
            queried_at_ms: now,
        });
    }

    ReasoningTrace {
        version: TRACE_SCHEMA_VERSION.into(),
        agent: agent.into(),
        timestamp_ms: now,
        action: TraceAction {
            kind: if approved {
                ActionKind::Trade
            } else {
                ActionKind::Rejection
            },
            description: if approved {
                format!("{} {} SOL of token {}", decision.action, decision.amount, token)
            } else {
                format!("rejected {} of token {}", decision.action, token)
            },
            transaction_ref: None,
        },
        inputs: TraceInputs {
            data_sources,
            context: format!(
                "autonomous trade evaluation: {}-stage prediction gate{}{}",
                decision.stages.len(),
                if decision.scam_check.is_some() {
                    " with scam screen"
                } else {
                    ""
                },
                if decision.cyclic_signal.is_some() {
                    " and cyclic signals"
                } else {
                    ""
                }
            ),
        },
        analysis: TraceAnalysis {
            observations,
            logic,
            alternatives_considered,
        },
        decision: TraceDecision {
            action: if approved {
                format!("execute {} of {} SOL", decision.action, decision.amount)
            } else {
                "reject trade".to_string()
            },
            confidence: decision.confidence,
            risk_assessment: RiskAssessment::grade(approved, decision.confidence),
            expected_outcome: if approved {
                format!("position in {} opened within slippage limits", token)
            } else {
                "capital preserved, no position taken".to_string()
            },
        },
        metadata: None,
    }
}

/// First 8 characters of a mint address, marked when truncated.
fn short_mint(mint: &str) -> String {
    let prefix: String = mint.chars().take(8).collect();
    if prefix.len() < mint.len() {
        format!("{prefix}...")
    } else {
        prefix
    }
}
