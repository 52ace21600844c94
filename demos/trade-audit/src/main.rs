//! Trade Audit: Commit-Reveal Evidence Walkthrough
//!
//! Demonstrates the full evidence loop for an autonomous trading agent:
//!
//! 1. Commit — hash the reasoning trace before acting
//! 2. Act — execute the trade / send the transaction (simulated here)
//! 3. Reveal — publish the full trace after the fact
//! 4. Verify — anyone recomputes the digest and compares
//!
//! Also shows what the mechanism exists for: a trace edited after the
//! commitment fails verification, and an audit sweep pinpoints tampered
//! log entries.

use attest_commitment::{CommitmentLog, CommitmentResult};
use attest_traces::trade_trace;
use attest_types::{
    ActionKind, FirewallParams, PredictionStage, ScamCheckResult, TokenRiskLevel, TraceMetadata,
    TradeAction, TradeDecision,
};
use colored::Colorize;

fn header(title: &str) {
    println!();
    println!("{}", "═".repeat(72).cyan());
    println!("  {}", title.cyan().bold());
    println!("{}", "═".repeat(72).cyan());
}

fn format_time(ms: u64) -> String {
    chrono::DateTime::from_timestamp_millis(ms as i64)
        .map(|dt| dt.format("%H:%M:%S%.3f").to_string())
        .unwrap_or_else(|| ms.to_string())
}

fn print_commitment(result: &CommitmentResult) {
    let kind = result.trace.action.kind.to_string();
    let kind = match result.trace.action.kind {
        ActionKind::Trade => kind.green().bold(),
        ActionKind::Transaction => kind.blue().bold(),
        ActionKind::Rejection => kind.red().bold(),
    };
    println!(
        "  {}   committed:  {}",
        "│".dimmed(),
        result.hash.to_hex().yellow()
    );
    println!("  {}   kind:       {}", "│".dimmed(), kind);
    println!(
        "  {}   decision:   {} (confidence {:.0})",
        "│".dimmed(),
        result.trace.decision.action,
        result.trace.decision.confidence
    );
    println!(
        "  {}   risk:       {}",
        "│".dimmed(),
        result.trace.decision.risk_assessment
    );
    println!(
        "  {}   at:         {}",
        "│".dimmed(),
        format_time(result.committed_at_ms).dimmed()
    );
}

fn three_stage_buy() -> TradeDecision {
    TradeDecision {
        token_mint: "7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU".into(),
        action: TradeAction::Buy,
        amount: 1.5,
        stages: vec![
            PredictionStage {
                name: "momentum_1m".into(),
                passed: true,
                confidence: 85.0,
                reason: "short-term momentum positive".into(),
            },
            PredictionStage {
                name: "volume_5m".into(),
                passed: true,
                confidence: 78.0,
                reason: "volume holding above baseline".into(),
            },
            PredictionStage {
                name: "trend_15m".into(),
                passed: true,
                confidence: 82.0,
                reason: "uptrend intact on the longer window".into(),
            },
        ],
        scam_check: Some(ScamCheckResult {
            token_mint: "7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU".into(),
            is_scam: false,
            checks: vec![
                "liquidity_locked".into(),
                "mint_authority_revoked".into(),
                "holder_distribution".into(),
            ],
            risk_level: TokenRiskLevel::Safe,
        }),
        cyclic_signal: None,
        confidence: 82.0,
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .with_target(false)
        .init();

    println!();
    println!(
        "{}",
        "╔══════════════════════════════════════════════════════════════╗".cyan()
    );
    println!(
        "{}",
        "║    Trade Audit: Commit-Reveal Evidence Demo                  ║"
            .cyan()
            .bold()
    );
    println!(
        "{}",
        "╚══════════════════════════════════════════════════════════════╝".cyan()
    );

    let log = CommitmentLog::new("sol-trader");
    let session_id = uuid::Uuid::new_v4().to_string();

    // ── Scenario 1: Approved trade → commit, act, reveal, verify ────
    header("Scenario 1: Approved Trade (commit, act, reveal, verify)");

    let decision = three_stage_buy();
    println!(
        "  {} Evaluating {} {} SOL",
        "├".dimmed(),
        "buy".green(),
        decision.amount
    );
    for stage in &decision.stages {
        println!(
            "  {}   stage {:<12} {} (confidence {:.0})",
            "│".dimmed(),
            stage.name,
            if stage.passed {
                "PASS".green()
            } else {
                "FAIL".red()
            },
            stage.confidence
        );
    }

    let mut trace = trade_trace(log.agent(), &decision);
    trace.metadata = Some(
        TraceMetadata::new()
            .with_model("prediction-gate-v2")
            .with_session_id(session_id.clone()),
    );

    let approved = log.commit(trace).unwrap();
    print_commitment(&approved);

    let canonical = attest_canonical::canonical_json(&approved.trace).unwrap();
    println!(
        "  {}   canonical:  {} bytes, starts {}",
        "│".dimmed(),
        canonical.len(),
        format!("{}...", &canonical[..48]).dimmed()
    );

    println!("  {} Executing trade (simulated)", "│".dimmed());
    println!("  {} Revealing trace for verification", "│".dimmed());
    let ok = log.verify(&approved.hash, &approved.trace).unwrap();
    println!(
        "  {} Verification: {}",
        "└".dimmed(),
        if ok {
            "MATCH".green().bold()
        } else {
            "MISMATCH".red().bold()
        }
    );

    // ── Scenario 2: Failed stage → rejection is committed too ───────
    header("Scenario 2: Rejected Trade (confirmation stage failed)");

    let mut rejected_decision = three_stage_buy();
    rejected_decision.stages[1].passed = false;
    rejected_decision.stages[1].confidence = 41.0;
    rejected_decision.stages[1].reason = "volume collapsed mid-window".into();
    rejected_decision.confidence = 41.0;

    println!(
        "  {} Stage {} failed; rejection gets committed like any action",
        "├".dimmed(),
        "volume_5m".red()
    );
    let rejection = log.commit_trade_decision(&rejected_decision).unwrap();
    print_commitment(&rejection);
    println!(
        "  {} Alternative rejected: {} ({})",
        "└".dimmed(),
        rejection.trace.analysis.alternatives_considered[0].action,
        rejection.trace.analysis.alternatives_considered[0]
            .reason_rejected
            .dimmed()
    );

    // ── Scenario 3: Firewall verdicts ────────────────────────────────
    header("Scenario 3: Transaction Firewall (allow and deny)");

    let allow = FirewallParams {
        transaction_kind: "swap".into(),
        simulation_run: true,
        simulation_passed: true,
        spend_limit_ok: true,
        slippage_ok: true,
        program_allowed: true,
        approved: true,
        reason: "all checks passed".into(),
    };
    println!("  {} Outgoing swap, all checks green", "├".dimmed());
    let allowed = log.commit_firewall_decision(&allow).unwrap();
    print_commitment(&allowed);

    let deny = FirewallParams {
        spend_limit_ok: false,
        approved: false,
        reason: "spend limit exceeded".into(),
        ..allow
    };
    println!("  {} Outgoing swap over the spend limit", "├".dimmed());
    let denied = log.commit_firewall_decision(&deny).unwrap();
    print_commitment(&denied);

    // ── Scenario 4: Tampering is caught ──────────────────────────────
    header("Scenario 4: Tamper Detection");

    let mut forged = approved.trace.clone();
    forged.decision.confidence = 97.0;
    forged.analysis.logic = "flawless setup, never in doubt".into();

    println!(
        "  {} Revealed trace claims confidence {} instead of {}",
        "├".dimmed(),
        "97".red(),
        "82".green()
    );
    let recomputed = attest_canonical::digest(&forged).unwrap();
    println!(
        "  {}   committed:  {}",
        "│".dimmed(),
        approved.hash.to_hex().yellow()
    );
    println!(
        "  {}   recomputed: {}",
        "│".dimmed(),
        recomputed.to_hex().red()
    );
    let ok = log.verify(&approved.hash, &forged).unwrap();
    println!(
        "  {} Verification: {}",
        "└".dimmed(),
        if ok {
            "MATCH".green().bold()
        } else {
            "MISMATCH: reasoning was edited after the fact".red().bold()
        }
    );

    // ── Audit sweep over the full log ─────────────────────────────────
    header("Audit Sweep");

    log.audit().unwrap();
    println!(
        "  {} Recomputed every stored digest: {}",
        "├".dimmed(),
        "CLEAN".green().bold()
    );

    let stats = log.stats().unwrap();
    let mut kinds: Vec<_> = stats.by_action_kind.iter().collect();
    kinds.sort();
    println!(
        "  {} {} commitments on record for agent {}",
        "│".dimmed(),
        stats.total,
        log.agent().blue()
    );
    for (kind, count) in kinds {
        println!("  {}   {:<12} {}", "│".dimmed(), kind, count);
    }

    println!("  {} History:", "│".dimmed());
    for (index, entry) in log.commitments().unwrap().iter().enumerate() {
        println!(
            "  {}   [{}] {} {:<11} {}",
            "│".dimmed(),
            index,
            format_time(entry.committed_at_ms).dimmed(),
            entry.trace.action.kind.to_string(),
            entry.hash
        );
    }
    println!(
        "  {} Session {} complete",
        "└".dimmed(),
        session_id.dimmed()
    );
}
