//! Model input assumptions.
//!
//! All drivers of the forecast are hand-entered constants carried in one
//! immutable structure, set once at startup and passed explicitly into the
//! valuation. An optional TOML file can override any subset of fields;
//! everything else falls back to the documented defaults.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::scenario::{Scenario, ScenarioDeltas, ScenarioResult};
use crate::weighting::ScenarioWeights;

/// Hand-entered model assumptions.
///
/// Units follow the workbook convention: traded volumes and asset balances
/// in $B, rates in % or basis points, shares and deltas as decimal
/// fractions, revenue baselines in $M.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ModelInputs {
    /// Quarterly spot traded volume ($B)
    pub spot_volume_b: f64,
    /// Quarterly derivatives volume, effective notional ($B)
    pub deriv_volume_b: f64,
    /// Retail share of traded volume (decimal)
    pub retail_pct: f64,
    /// Blended take rate across spot and derivatives (bps)
    pub blended_take_bps: f64,

    /// Bear scenario volume delta (decimal vs base)
    pub bear_vol_delta: f64,
    /// Bull scenario volume delta (decimal vs base)
    pub bull_vol_delta: f64,
    /// Bear scenario take-rate delta (decimal)
    pub bear_take_delta: f64,
    /// Bull scenario take-rate delta (decimal)
    pub bull_take_delta: f64,

    /// Average USDC supply over the quarter ($B)
    pub usdc_supply_b: f64,
    /// Average short-term reference rate (%)
    pub short_rate_pct: f64,
    /// Exchange share of residual USDC interest (decimal)
    pub usdc_share: f64,
    /// Haircut off the short rate (bps)
    pub usdc_haircut_bps: f64,

    /// Staked assets under management ($B)
    pub staked_aum_b: f64,
    /// Net staking yield (% annual)
    pub net_staking_yield_pct: f64,
    /// Exchange take of staking yield (decimal)
    pub staking_take_pct: f64,

    /// Average assets under custody ($B)
    pub custody_auc_b: f64,
    /// Custody fee (bps annual)
    pub custody_fee_bps: f64,

    /// Other subscription & services baseline ($M)
    pub other_ss_baseline_m: f64,
    /// Interest & financing baseline ($M)
    pub interest_finance_m: f64,
    /// Other revenue baseline ($M)
    pub other_revenue_m: f64,

    /// Bear scenario subscription & services delta (decimal)
    pub bear_ss_delta: f64,
    /// Bull scenario subscription & services delta (decimal)
    pub bull_ss_delta: f64,
    /// Bear scenario other-revenue delta (decimal)
    pub bear_other_delta: f64,
    /// Bull scenario other-revenue delta (decimal)
    pub bull_other_delta: f64,

    /// Base scenario probability weight
    pub base_weight: f64,
    /// Bear scenario probability weight
    pub bear_weight: f64,
    /// Bull scenario probability weight
    pub bull_weight: f64,

    /// Prior-quarter transaction revenue comparative ($M)
    pub q2_txn_m: f64,
    /// Prior-quarter total revenue comparative ($M)
    pub q2_total_m: f64,
}

impl Default for ModelInputs {
    fn default() -> Self {
        Self {
            spot_volume_b: 284.0,
            deriv_volume_b: 150.0,
            retail_pct: 0.18,
            blended_take_bps: 23.0,
            bear_vol_delta: -0.15,
            bull_vol_delta: 0.12,
            bear_take_delta: -0.20,
            bull_take_delta: 0.08,
            usdc_supply_b: 67.26,
            short_rate_pct: 4.29,
            usdc_share: 0.50,
            usdc_haircut_bps: 45.0,
            staked_aum_b: 60.0,
            net_staking_yield_pct: 4.0,
            staking_take_pct: 0.25,
            custody_auc_b: 245.7,
            custody_fee_bps: 4.0,
            other_ss_baseline_m: 120.0,
            interest_finance_m: 70.0,
            other_revenue_m: 80.0,
            bear_ss_delta: -0.12,
            bull_ss_delta: 0.06,
            bear_other_delta: -0.15,
            bull_other_delta: 0.08,
            base_weight: 0.6,
            bear_weight: 0.2,
            bull_weight: 0.2,
            q2_txn_m: 764.27,
            q2_total_m: 1497.208,
        }
    }
}

impl ModelInputs {
    /// Load assumptions from a TOML file.
    ///
    /// Fields absent from the file keep their default values.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load assumptions from a path, or fall back to the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// The delta tuple a named scenario applies to the baseline drivers.
    ///
    /// Base is all-zero by construction.
    pub fn deltas(&self, scenario: Scenario) -> ScenarioDeltas {
        match scenario {
            Scenario::Base => ScenarioDeltas::default(),
            Scenario::Bear => ScenarioDeltas {
                volume: self.bear_vol_delta,
                take_rate: self.bear_take_delta,
                subscription: self.bear_ss_delta,
                other: self.bear_other_delta,
            },
            Scenario::Bull => ScenarioDeltas {
                volume: self.bull_vol_delta,
                take_rate: self.bull_take_delta,
                subscription: self.bull_ss_delta,
                other: self.bull_other_delta,
            },
        }
    }

    /// Evaluate one named scenario against these inputs.
    pub fn run_scenario(&self, scenario: Scenario) -> ScenarioResult {
        ScenarioResult::evaluate(self, self.deltas(scenario))
    }

    /// The scenario probability weights.
    pub fn weights(&self) -> ScenarioWeights {
        ScenarioWeights {
            base: self.base_weight,
            bear: self.bear_weight,
            bull: self.bull_weight,
        }
    }

    /// Sum of the three scenario weights.
    ///
    /// Expected to be 1.0 for a true probability-weighted blend, but never
    /// enforced; callers may scale deliberately. The workbook carries a
    /// manual check cell instead.
    pub fn weight_sum(&self) -> f64 {
        self.base_weight + self.bear_weight + self.bull_weight
    }
}

/// Input loading error
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// IO error reading the assumptions file
    #[error("IO error: {0}")]
    Io(String),
    /// Parse error in the assumptions file
    #[error("Parse error: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::io::Write;

    #[test]
    fn test_default_inputs() {
        let inputs = ModelInputs::default();
        assert_eq!(inputs.spot_volume_b, 284.0);
        assert_eq!(inputs.blended_take_bps, 23.0);
        assert_relative_eq!(inputs.weight_sum(), 1.0, max_relative = 1e-12);
    }

    #[test]
    fn test_base_deltas_are_zero() {
        let inputs = ModelInputs::default();
        assert_eq!(inputs.deltas(Scenario::Base), ScenarioDeltas::default());
    }

    #[test]
    fn test_bear_deltas() {
        let inputs = ModelInputs::default();
        let deltas = inputs.deltas(Scenario::Bear);
        assert_eq!(deltas.volume, -0.15);
        assert_eq!(deltas.take_rate, -0.20);
        assert_eq!(deltas.subscription, -0.12);
        assert_eq!(deltas.other, -0.15);
    }

    #[test]
    fn test_load_partial_override() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "spot_volume_b = 300.0\nbase_weight = 0.5").unwrap();

        let inputs = ModelInputs::load(file.path()).unwrap();
        assert_eq!(inputs.spot_volume_b, 300.0);
        assert_eq!(inputs.base_weight, 0.5);
        // Untouched fields keep their defaults
        assert_eq!(inputs.deriv_volume_b, 150.0);
        assert_eq!(inputs.bear_weight, 0.2);
    }

    #[test]
    fn test_load_missing_file() {
        let result = ModelInputs::load(Path::new("/nonexistent/assumptions.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_bad_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "spot_volume_b = \"not a number\"").unwrap();

        let result = ModelInputs::load(file.path());
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_or_default_without_path() {
        let inputs = ModelInputs::load_or_default(None).unwrap();
        assert_eq!(inputs, ModelInputs::default());
    }
}
