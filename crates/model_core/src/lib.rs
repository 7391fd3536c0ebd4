//! # Forecast Kernel
//!
//! Core valuation layer for the quarterly revenue forecast:
//!
//! - **Inputs**: the hand-entered macro and business assumptions as one
//!   immutable [`ModelInputs`] structure
//! - **Scenario valuation**: base/bear/bull delta tuples compounded across
//!   volume, take-rate and the yield-bearing revenue streams
//! - **Weighting**: the probability-weighted blend of the three scenarios
//!
//! The kernel is pure arithmetic. It performs no I/O and holds no global
//! state; independent runs never share anything, so tests can evaluate as
//! many input sets as they like side by side.

pub mod inputs;
pub mod scenario;
pub mod weighting;

pub use inputs::{ConfigError, ModelInputs};
pub use scenario::{Scenario, ScenarioDeltas, ScenarioResult};
pub use weighting::{ScenarioWeights, WeightedSummary};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::inputs::{ConfigError, ModelInputs};
    pub use crate::scenario::{Scenario, ScenarioDeltas, ScenarioResult};
    pub use crate::weighting::{ScenarioWeights, WeightedSummary};
    pub use crate::ForecastModel;
}

/// A fully evaluated forecast: the three scenario runs plus the
/// probability-weighted blend.
///
/// Everything is computed in memory before any report is rendered, so both
/// sinks (workbook CSV and summary JSON) consume the same artifact.
#[derive(Debug, Clone)]
pub struct ForecastModel {
    /// Base scenario (all deltas zero)
    pub base: ScenarioResult,
    /// Bear scenario
    pub bear: ScenarioResult,
    /// Bull scenario
    pub bull: ScenarioResult,
    /// Scenario probability weights
    pub weights: ScenarioWeights,
    /// Probability-weighted rollups
    pub weighted: WeightedSummary,
}

impl ForecastModel {
    /// Evaluate all three scenarios and the weighted blend against one
    /// input set.
    pub fn evaluate(inputs: &ModelInputs) -> Self {
        let base = inputs.run_scenario(Scenario::Base);
        let bear = inputs.run_scenario(Scenario::Bear);
        let bull = inputs.run_scenario(Scenario::Bull);
        let weights = inputs.weights();
        let weighted = WeightedSummary::blend(&base, &bear, &bull, weights);

        Self {
            base,
            bear,
            bull,
            weights,
            weighted,
        }
    }

    /// The scenario result for a named scenario.
    pub fn result(&self, scenario: Scenario) -> &ScenarioResult {
        match scenario {
            Scenario::Base => &self.base,
            Scenario::Bear => &self.bear,
            Scenario::Bull => &self.bull,
        }
    }
}
