//! Probability-weighted aggregation of the three scenarios.

use serde::Serialize;

use crate::scenario::ScenarioResult;

/// Scenario probability weights.
///
/// Expected to sum to 1.0 for a true expectation, but this is never
/// enforced: the blend is Σ(result × weight) as given, so scaled weights
/// produce a proportionally scaled output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScenarioWeights {
    /// Base scenario weight
    pub base: f64,
    /// Bear scenario weight
    pub bear: f64,
    /// Bull scenario weight
    pub bull: f64,
}

impl ScenarioWeights {
    /// Sum of the three weights.
    pub fn sum(&self) -> f64 {
        self.base + self.bear + self.bull
    }
}

/// Probability-weighted revenue rollups ($M).
///
/// Field names double as the keys of the JSON summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightedSummary {
    /// Weighted total revenue
    pub total_revenue_m: f64,
    /// Weighted transaction revenue
    pub transaction_m: f64,
    /// Weighted subscription & services revenue
    pub s_and_s_m: f64,
    /// Weighted other revenue
    pub other_m: f64,
}

impl WeightedSummary {
    /// Blend the three scenario results with the given weights, rollup by
    /// rollup. No normalisation is applied.
    pub fn blend(
        base: &ScenarioResult,
        bear: &ScenarioResult,
        bull: &ScenarioResult,
        weights: ScenarioWeights,
    ) -> Self {
        let weigh = |pick: fn(&ScenarioResult) -> f64| {
            pick(base) * weights.base + pick(bear) * weights.bear + pick(bull) * weights.bull
        };

        Self {
            total_revenue_m: weigh(|r| r.total_rev_m),
            transaction_m: weigh(|r| r.txn_rev_m),
            s_and_s_m: weigh(|r| r.ss_total_m),
            other_m: weigh(|r| r.other_rev_m),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::ModelInputs;
    use crate::scenario::Scenario;
    use approx::assert_relative_eq;

    fn scenario_results() -> (ScenarioResult, ScenarioResult, ScenarioResult) {
        let inputs = ModelInputs::default();
        (
            inputs.run_scenario(Scenario::Base),
            inputs.run_scenario(Scenario::Bear),
            inputs.run_scenario(Scenario::Bull),
        )
    }

    #[test]
    fn test_unit_weight_selects_single_scenario() {
        let (base, bear, bull) = scenario_results();

        let pick_base = WeightedSummary::blend(
            &base,
            &bear,
            &bull,
            ScenarioWeights { base: 1.0, bear: 0.0, bull: 0.0 },
        );
        assert_eq!(pick_base.total_revenue_m, base.total_rev_m);

        let pick_bear = WeightedSummary::blend(
            &base,
            &bear,
            &bull,
            ScenarioWeights { base: 0.0, bear: 1.0, bull: 0.0 },
        );
        assert_eq!(pick_bear.total_revenue_m, bear.total_rev_m);

        let pick_bull = WeightedSummary::blend(
            &base,
            &bear,
            &bull,
            ScenarioWeights { base: 0.0, bear: 0.0, bull: 1.0 },
        );
        assert_eq!(pick_bull.total_revenue_m, bull.total_rev_m);
    }

    #[test]
    fn test_blend_is_linear_in_weights() {
        let (base, bear, bull) = scenario_results();
        let weights = ScenarioWeights { base: 0.6, bear: 0.2, bull: 0.2 };
        let scaled = ScenarioWeights { base: 1.8, bear: 0.6, bull: 0.6 };

        let unit = WeightedSummary::blend(&base, &bear, &bull, weights);
        let tripled = WeightedSummary::blend(&base, &bear, &bull, scaled);

        assert_relative_eq!(tripled.total_revenue_m, 3.0 * unit.total_revenue_m, max_relative = 1e-12);
        assert_relative_eq!(tripled.transaction_m, 3.0 * unit.transaction_m, max_relative = 1e-12);
        assert_relative_eq!(tripled.s_and_s_m, 3.0 * unit.s_and_s_m, max_relative = 1e-12);
        assert_relative_eq!(tripled.other_m, 3.0 * unit.other_m, max_relative = 1e-12);
    }

    #[test]
    fn test_blend_matches_hand_sum() {
        let (base, bear, bull) = scenario_results();
        let weights = ScenarioWeights { base: 0.6, bear: 0.2, bull: 0.2 };

        let blended = WeightedSummary::blend(&base, &bear, &bull, weights);
        let expected =
            base.total_rev_m * 0.6 + bear.total_rev_m * 0.2 + bull.total_rev_m * 0.2;
        assert_relative_eq!(blended.total_revenue_m, expected, max_relative = 1e-12);
    }

    #[test]
    fn test_weight_sum() {
        let weights = ScenarioWeights { base: 0.6, bear: 0.2, bull: 0.2 };
        assert_relative_eq!(weights.sum(), 1.0, max_relative = 1e-12);
    }
}
