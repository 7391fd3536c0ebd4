//! Kernel Integration Tests
//!
//! End-to-end checks over the full evaluate-then-blend pipeline.

use approx::assert_relative_eq;
use model_core::prelude::*;

#[test]
fn test_full_evaluation_with_documented_inputs() {
    let inputs = ModelInputs::default();
    let model = ForecastModel::evaluate(&inputs);

    assert_eq!(model.base.total_vol_b, 434.0);
    assert_relative_eq!(model.base.txn_rev_m, 998.2, max_relative = 1e-12);

    // Weighted blend equals the hand-computed sum over rollups
    let expected_total = model.base.total_rev_m * inputs.base_weight
        + model.bear.total_rev_m * inputs.bear_weight
        + model.bull.total_rev_m * inputs.bull_weight;
    assert_relative_eq!(model.weighted.total_revenue_m, expected_total, max_relative = 1e-12);
}

#[test]
fn test_scenarios_are_ordered() {
    let model = ForecastModel::evaluate(&ModelInputs::default());

    // Downside deltas lower every rollup, upside deltas raise them
    assert!(model.bear.total_rev_m < model.base.total_rev_m);
    assert!(model.base.total_rev_m < model.bull.total_rev_m);
    assert!(model.bear.txn_rev_m < model.base.txn_rev_m);
    assert!(model.base.ss_total_m < model.bull.ss_total_m);
}

#[test]
fn test_independent_runs_share_no_state() {
    let defaults = ModelInputs::default();
    let mut shocked = ModelInputs::default();
    shocked.spot_volume_b = 100.0;

    let a = ForecastModel::evaluate(&defaults);
    let b = ForecastModel::evaluate(&shocked);
    let a_again = ForecastModel::evaluate(&defaults);

    assert_eq!(a.base.total_vol_b, a_again.base.total_vol_b);
    assert!(b.base.total_vol_b < a.base.total_vol_b);
}

#[test]
fn test_weighted_blend_with_degenerate_weights() {
    let mut inputs = ModelInputs::default();
    inputs.base_weight = 1.0;
    inputs.bear_weight = 0.0;
    inputs.bull_weight = 0.0;

    let model = ForecastModel::evaluate(&inputs);
    assert_eq!(model.weighted.total_revenue_m, model.base.total_rev_m);
    assert_eq!(model.weighted.transaction_m, model.base.txn_rev_m);
    assert_eq!(model.weighted.s_and_s_m, model.base.ss_total_m);
    assert_eq!(model.weighted.other_m, model.base.other_rev_m);
}
