use serde::{Deserialize, Serialize};

/// Outcome of the transaction firewall's pre-flight checks.
///
/// The firewall evaluates an outgoing transaction against simulation and
/// policy gates before it is signed; this record carries the verdict into
/// the evidence trail.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FirewallParams {
    /// What kind of transaction was screened, e.g. `swap` or `transfer`.
    pub transaction_kind: String,
    /// Whether a dry-run simulation was attempted.
    pub simulation_run: bool,
    /// Whether the simulation succeeded. Meaningless when no simulation ran.
    pub simulation_passed: bool,
    pub spend_limit_ok: bool,
    pub slippage_ok: bool,
    pub program_allowed: bool,
    /// Final verdict after all checks.
    pub approved: bool,
    /// Human-readable explanation of the verdict.
    pub reason: String,
}

impl FirewallParams {
    /// Names of the policy checks that failed.
    ///
    /// Simulation only counts as failed when it actually ran.
    pub fn failed_checks(&self) -> Vec<&'static str> {
        let mut failed = Vec::new();
        if self.simulation_run && !self.simulation_passed {
            failed.push("simulation");
        }
        if !self.spend_limit_ok {
            failed.push("spend_limit");
        }
        if !self.slippage_ok {
            failed.push("slippage");
        }
        if !self.program_allowed {
            failed.push("program_allowlist");
        }
        failed
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
    fn no_failed_checks_when_all_pass() {
        assert!(clean_params().failed_checks().is_empty());
    }

    #[test]
    fn failed_checks_collects_each_gate() {
        let mut p = clean_params();
        p.simulation_passed = false;
        p.spend_limit_ok = false;
        p.program_allowed = false;
        p.approved = false;
        assert_eq!(
            p.failed_checks(),
            vec!["simulation", "spend_limit", "program_allowlist"]
        );
    }

    #[test]
    fn skipped_simulation_is_not_a_failure() {
        let mut p = clean_params();
        p.simulation_run = false;
        p.simulation_passed = false;
        assert!(p.failed_checks().is_empty());
    }
}
