use std::fmt;

use serde::{Deserialize, Serialize};

/// Direction of the trade under consideration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TradeAction {
    Buy,
    Sell,
    Hold,
}

impl fmt::Display for TradeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buy => write!(f, "buy"),
            Self::Sell => write!(f, "sell"),
            Self::Hold => write!(f, "hold"),
        }
    }
}

/// One confirmation window's verdict from the prediction-gate collaborator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PredictionStage {
    /// Window name, e.g. `momentum_1m`.
    pub name: String,
    /// Whether the window confirmed.
    pub passed: bool,
    /// Window confidence, 0-100.
    pub confidence: f64,
    /// Collaborator-supplied explanation.
    pub reason: String,
}

/// Risk label produced by the scam/liquidity collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenRiskLevel {
    Safe,
    Suspicious,
    Dangerous,
}

impl fmt::Display for TokenRiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Safe => write!(f, "safe"),
            Self::Suspicious => write!(f, "suspicious"),
            Self::Dangerous => write!(f, "dangerous"),
        }
    }
}

/// Scam/liquidity verdict for one token mint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScamCheckResult {
    pub token_mint: String,
    pub is_scam: bool,
    /// Names of the individual heuristics that ran.
    pub checks: Vec<String>,
    pub risk_level: TokenRiskLevel,
}

/// Cyclic-signal summary: how well current movement aligns with the
/// historical cycle over the given window.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CyclicSignal {
    pub alignment: f64,
    pub window: String,
}

/// Aggregated trade verdict handed over by the trading collaborators.
///
/// This type carries already-computed results only; nothing here validates
/// them. An empty stage list or an out-of-range confidence is accepted as-is
/// and recorded faithfully.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TradeDecision {
    pub token_mint: String,
    pub action: TradeAction,
    /// Trade size in SOL.
    pub amount: f64,
    /// Ordered confirmation windows; at least one by convention.
    pub stages: Vec<PredictionStage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scam_check: Option<ScamCheckResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cyclic_signal: Option<CyclicSignal>,
    /// Overall confidence, 0-100.
    pub confidence: f64,
}

impl TradeDecision {
    /// A decision is approved when every stage passed and the scam check,
    /// if one ran, came back clean.
    pub fn approved(&self) -> bool {
        self.stages.iter().all(|stage| stage.passed)
            && !self.scam_check.as_ref().is_some_and(|check| check.is_scam)
    }

    /// Names of the stages that failed, in stage order.
    pub fn failed_stages(&self) -> Vec<&str> {
        self.stages
            .iter()
            .filter(|stage| !stage.passed)
            .map(|stage| stage.name.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stage(name: &str, passed: bool, confidence: f64) -> PredictionStage {
        PredictionStage {
            name: name.into(),
            passed,
            confidence,
            reason: "window verdict".into(),
        }
    }

    fn decision(stages: Vec<PredictionStage>) -> TradeDecision {
        TradeDecision {
            token_mint: "7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU".into(),
            action: TradeAction::Buy,
            amount: 1.5,
            stages,
            scam_check: None,
            cyclic_signal: None,
            confidence: 82.0,
        }
    }

    #[test]
    fn approved_when_all_stages_pass_and_no_scam_check() {
        let d = decision(vec![stage("s1", true, 85.0), stage("s2", true, 78.0)]);
        assert!(d.approved());
        assert!(d.failed_stages().is_empty());
    }

    #[test]
    fn not_approved_when_any_stage_fails() {
        let d = decision(vec![stage("s1", true, 85.0), stage("s2", false, 40.0)]);
        assert!(!d.approved());
        assert_eq!(d.failed_stages(), vec!["s2"]);
    }

    #[test]
    fn not_approved_when_scam_flagged() {
        let mut d = decision(vec![stage("s1", true, 85.0)]);
        d.scam_check = Some(ScamCheckResult {
            token_mint: d.token_mint.clone(),
            is_scam: true,
            checks: vec!["liquidity_locked".into(), "mint_authority".into()],
            risk_level: TokenRiskLevel::Dangerous,
        });
        assert!(!d.approved());
    }

    #[test]
    fn approved_when_scam_check_clean() {
        let mut d = decision(vec![stage("s1", true, 85.0)]);
        d.scam_check = Some(ScamCheckResult {
            token_mint: d.token_mint.clone(),
            is_scam: false,
            checks: vec!["liquidity_locked".into()],
            risk_level: TokenRiskLevel::Safe,
        });
        assert!(d.approved());
    }

    #[test]
    fn empty_stage_list_is_accepted_as_is() {
        // Validation is the collaborator's responsibility; an empty list
        // vacuously approves.
        let d = decision(vec![]);
        assert!(d.approved());
    }

    #[test]
    fn risk_level_ordering() {
        assert!(TokenRiskLevel::Safe < TokenRiskLevel::Suspicious);
        assert!(TokenRiskLevel::Suspicious < TokenRiskLevel::Dangerous);
    }

    #[test]
    fn trade_action_display() {
        assert_eq!(TradeAction::Buy.to_string(), "buy");
        assert_eq!(TradeAction::Hold.to_string(), "hold");
    }

    #[test]
    fn decision_serde_roundtrip() {
        let mut d = decision(vec![stage("s1", true, 85.0)]);
        d.cyclic_signal = Some(CyclicSignal {
            alignment: 0.82,
            window: "24h".into(),
        });
        let json = serde_json::to_string(&d).unwrap();
        let restored: TradeDecision = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, d);
    }
}
