//! Scenario valuation.
//!
//! One formula evaluates a complete set of revenue line items from the
//! baseline drivers and a four-way delta tuple. Three named scenarios
//! (base/bear/bull) are just three delta tuples applied to the same
//! immutable inputs.
//!
//! All quarterly conversions divide an annualised rate by 4 with no
//! day-count adjustment. No rounding happens here; rounding is display-only.

use serde::Serialize;

use crate::inputs::ModelInputs;

/// Named forecast scenarios
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    /// Baseline assumptions, all deltas zero
    Base,
    /// Downside scenario
    Bear,
    /// Upside scenario
    Bull,
}

impl Scenario {
    /// All scenarios in evaluation order
    pub fn all() -> [Self; 3] {
        [Self::Base, Self::Bear, Self::Bull]
    }

    /// Scenario name for display
    pub fn name(&self) -> &'static str {
        match self {
            Self::Base => "Base",
            Self::Bear => "Bear",
            Self::Bull => "Bull",
        }
    }
}

/// Signed relative shifts applied multiplicatively to the baseline drivers.
///
/// A value of −0.15 means 15% lower than baseline. Deltas are never clamped;
/// a delta below −1.0 drives the corresponding line item negative and the
/// result is passed through unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScenarioDeltas {
    /// Shift on spot and derivatives volume
    pub volume: f64,
    /// Shift on the blended take rate
    pub take_rate: f64,
    /// Shift on every subscription & services stream
    pub subscription: f64,
    /// Shift on other revenue
    pub other: f64,
}

/// Derived values for one scenario.
///
/// Field names double as the keys of the JSON summary, so they follow the
/// workbook convention: `_b` for $B, `_m` for $M, `_bps`/`_dec` for rates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioResult {
    /// Spot volume ($B)
    pub spot_vol_b: f64,
    /// Derivatives volume ($B)
    pub deriv_vol_b: f64,
    /// Total traded volume ($B)
    pub total_vol_b: f64,
    /// Blended take rate (bps)
    pub take_bps: f64,
    /// Blended take rate (decimal fraction)
    pub take_dec: f64,
    /// Transaction revenue ($M)
    pub txn_rev_m: f64,
    /// USDC interest revenue ($M)
    pub usdc_rev_m: f64,
    /// Staking revenue ($M)
    pub staking_rev_m: f64,
    /// Custody revenue ($M)
    pub custody_rev_m: f64,
    /// Interest & financing revenue ($M)
    pub interest_rev_m: f64,
    /// Other subscription & services revenue ($M)
    pub other_ss_rev_m: f64,
    /// Subscription & services total ($M)
    pub ss_total_m: f64,
    /// Other revenue ($M)
    pub other_rev_m: f64,
    /// Total revenue ($M)
    pub total_rev_m: f64,
}

impl ScenarioResult {
    /// Evaluate the revenue line items for one delta tuple.
    ///
    /// Pure arithmetic over the inputs: no validation, no clamping, and
    /// division only by literal unit-conversion constants.
    pub fn evaluate(inputs: &ModelInputs, deltas: ScenarioDeltas) -> Self {
        let spot_vol = inputs.spot_volume_b * (1.0 + deltas.volume);
        let deriv_vol = inputs.deriv_volume_b * (1.0 + deltas.volume);
        let total_vol_b = spot_vol + deriv_vol;
        let take_bps = inputs.blended_take_bps * (1.0 + deltas.take_rate);
        let take_dec = take_bps / 10000.0;
        let txn_rev_m = total_vol_b * take_dec * 1000.0;

        // Residual interest accrues at the short rate less the haircut
        let residual_rate_pct = inputs.short_rate_pct - (inputs.usdc_haircut_bps / 100.0);
        let usdc_rev_m = inputs.usdc_supply_b * (residual_rate_pct / 100.0) / 4.0
            * inputs.usdc_share
            * 1000.0
            * (1.0 + deltas.subscription);

        let staking_rev_m = inputs.staked_aum_b * (inputs.net_staking_yield_pct / 100.0) / 4.0
            * inputs.staking_take_pct
            * 1000.0
            * (1.0 + deltas.subscription);
        let custody_rev_m = inputs.custody_auc_b * (inputs.custody_fee_bps / 10000.0) / 4.0
            * 1000.0
            * (1.0 + deltas.subscription);
        let interest_rev_m = inputs.interest_finance_m * (1.0 + deltas.subscription);
        let other_ss_rev_m = inputs.other_ss_baseline_m * (1.0 + deltas.subscription);

        let ss_total_m = usdc_rev_m + staking_rev_m + custody_rev_m + interest_rev_m + other_ss_rev_m;
        let other_rev_m = inputs.other_revenue_m * (1.0 + deltas.other);
        let total_rev_m = txn_rev_m + ss_total_m + other_rev_m;

        Self {
            spot_vol_b: spot_vol,
            deriv_vol_b: deriv_vol,
            total_vol_b,
            take_bps,
            take_dec,
            txn_rev_m,
            usdc_rev_m,
            staking_rev_m,
            custody_rev_m,
            interest_rev_m,
            other_ss_rev_m,
            ss_total_m,
            other_rev_m,
            total_rev_m,
        }
    }
}
