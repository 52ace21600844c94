use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Schema version stamped into every trace.
pub const TRACE_SCHEMA_VERSION: &str = "1.0.0";

/// The canonical evidence record committed before an action is taken.
///
/// A trace is immutable once constructed: the digest retained at commit time
/// covers every field, so any later mutation is detectable. Wall-clock fields
/// (`timestamp_ms`, `queried_at_ms`) are read at construction time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReasoningTrace {
    /// Schema version ([`TRACE_SCHEMA_VERSION`]).
    pub version: String,
    /// Name of the producing agent.
    pub agent: String,
    /// Creation instant, milliseconds since the Unix epoch.
    pub timestamp_ms: u64,
    /// What the agent is about to do (or refuse to do).
    pub action: TraceAction,
    /// Where the evidence came from.
    pub inputs: TraceInputs,
    /// What the agent observed and which alternatives it weighed.
    pub analysis: TraceAnalysis,
    /// The final call.
    pub decision: TraceDecision,
    /// Optional provenance of the producing process.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<TraceMetadata>,
}

/// Machine-readable category of the committed action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    /// A trade the agent decided to execute.
    Trade,
    /// A transaction the firewall decided to allow.
    Transaction,
    /// A trade or transaction the agent refused.
    Rejection,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trade => write!(f, "trade"),
            Self::Transaction => write!(f, "transaction"),
            Self::Rejection => write!(f, "rejection"),
        }
    }
}

/// The action this trace pre-commits.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TraceAction {
    /// Short machine-readable category.
    pub kind: ActionKind,
    /// Human-readable description of the action.
    pub description: String,
    /// Reference to the executed transaction, once one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_ref: Option<String>,
}

/// One named data source consulted while deciding.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataSource {
    /// Collaborator name, e.g. `prediction_gate`.
    pub name: String,
    /// Compact summary of what the source reported.
    pub data: serde_json::Value,
    /// When the source was read, milliseconds since the Unix epoch.
    pub queried_at_ms: u64,
}

/// Evidence inputs: data sources plus free-text context.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TraceInputs {
    pub data_sources: Vec<DataSource>,
    pub context: String,
}

/// An alternative the agent considered and set aside.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    /// The alternative action.
    pub action: String,
    /// Why it was not taken.
    pub reason_rejected: String,
}

/// What the agent observed and how it reasoned.
///
/// `observations` and `alternatives_considered` are ordered; element order is
/// semantically meaningful and is preserved by the canonical encoding.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TraceAnalysis {
    pub observations: Vec<String>,
    /// Free-text narrative connecting observations to the decision.
    pub logic: String,
    pub alternatives_considered: Vec<Alternative>,
}

/// Qualitative risk label attached to the final decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskAssessment {
    Low,
    Moderate,
    High,
}

impl RiskAssessment {
    /// Grade a decision: approved with confidence >= 80 is `Low`, approved
    /// below 80 is `Moderate`, and anything not approved is `High`.
    pub fn grade(approved: bool, confidence: f64) -> Self {
        if !approved {
            Self::High
        } else if confidence >= 80.0 {
            Self::Low
        } else {
            Self::Moderate
        }
    }
}

impl fmt::Display for RiskAssessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Moderate => write!(f, "moderate"),
            Self::High => write!(f, "high"),
        }
    }
}

/// The final call the agent committed to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TraceDecision {
    /// The chosen action, e.g. `execute buy`.
    pub action: String,
    /// Confidence in the decision, 0-100.
    pub confidence: f64,
    pub risk_assessment: RiskAssessment,
    /// What the agent expects to happen.
    pub expected_outcome: String,
}

/// Optional provenance of the producing process.
///
/// Every field is present-or-absent; absent fields are omitted from the
/// canonical encoding entirely, so absence is distinguishable from an
/// explicit empty value.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TraceMetadata {
    /// Model identifier, if a model produced the decision.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Session the decision belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    /// How long the decision took to produce.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
    /// Arbitrary scalar custom fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom: Option<BTreeMap<String, serde_json::Value>>,
}

impl TraceMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    /// Add a custom scalar field, creating the custom map on first use.
    pub fn with_custom(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.custom
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value);
        self
    }
}
