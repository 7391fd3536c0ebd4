//! Workbook layout.
//!
//! Populates the forecast workbook grid: an editable inputs block, a
//! drivers block expressing the same model as spreadsheet formulas, a
//! forecast-by-category table, sanity checks, a sensitivity table and a
//! sources appendix.
//!
//! The formula cells reference other cells by address (`=E13*E16*1000`) and
//! are a second, human-checkable rendering of the model; the in-process
//! numbers never come from them.

use chrono::{NaiveDate, Utc};
use model_core::ModelInputs;

use crate::grid::Grid;

/// Workbook header metadata.
#[derive(Debug, Clone)]
pub struct WorkbookMeta {
    /// Company name shown in the header
    pub company: String,
    /// Report title
    pub title: String,
    /// Report author
    pub author: String,
    /// Report date (UTC)
    pub date: NaiveDate,
}

impl Default for WorkbookMeta {
    fn default() -> Self {
        Self {
            company: "Coinbase Global, Inc.".to_string(),
            title: "Q3'25 Revenue Forecast".to_string(),
            author: "Research Desk".to_string(),
            date: Utc::now().date_naive(),
        }
    }
}

/// Render the full workbook grid from the inputs.
///
/// The grid carries the model purely as formula text over the editable
/// input cells; the in-process [`model_core::ForecastModel`] values are
/// reported through the JSON summary instead and never enter the grid.
pub fn render(inputs: &ModelInputs, meta: &WorkbookMeta) -> Grid {
    let mut grid = Grid::workbook_sized();

    write_header(&mut grid, meta);
    write_inputs_block(&mut grid, inputs);
    write_drivers_block(&mut grid, inputs);
    write_forecast_table(&mut grid, inputs);
    write_sanity_checks(&mut grid);
    write_sensitivity_table(&mut grid);
    write_sources(&mut grid);
    write_version_log(&mut grid, meta);

    grid
}

/// Shortest round-trip rendering of a literal value cell (`284.0`, `0.18`).
fn num(v: f64) -> String {
    format!("{v:?}")
}

fn write_header(grid: &mut Grid, meta: &WorkbookMeta) {
    grid.set(1, 1, "Company");
    grid.set(1, 2, meta.company.clone());
    grid.set(2, 1, "Report");
    grid.set(2, 2, meta.title.clone());
    grid.set(3, 1, "Date");
    grid.set(3, 2, meta.date.format("%Y-%m-%d").to_string());
    grid.set(4, 1, "Author");
    grid.set(4, 2, meta.author.clone());
}

fn write_inputs_block(grid: &mut Grid, inputs: &ModelInputs) {
    grid.set(10, 1, "Inputs (edit cells in column B)");
    grid.set(10, 2, "Value");
    grid.set(10, 3, "Units / guidance");

    let rows: [(usize, &str, f64, &str); 27] = [
        (11, "Spot volume", inputs.spot_volume_b, "$B spot (CryptoCompare Jul-Sep; Sep 24-30 inferred)"),
        (12, "Derivatives volume", inputs.deriv_volume_b, "$B effective notional (inferred)"),
        (13, "Retail share", inputs.retail_pct, "Decimal"),
        (14, "Blended take rate", inputs.blended_take_bps, "bps blended"),
        (15, "Bear volume delta", inputs.bear_vol_delta, "Decimal vs base"),
        (16, "Bull volume delta", inputs.bull_vol_delta, "Decimal vs base"),
        (17, "Bear take delta", inputs.bear_take_delta, "Decimal"),
        (18, "Bull take delta", inputs.bull_take_delta, "Decimal"),
        (19, "Avg USDC supply", inputs.usdc_supply_b, "$B (CoinGecko mkt cap proxy)"),
        (20, "Avg short rate", inputs.short_rate_pct, "% (FRED DGS3MO avg)"),
        (21, "USDC share", inputs.usdc_share, "Decimal Coinbase share of residual"),
        (22, "USDC haircut", inputs.usdc_haircut_bps, "bps off short rate"),
        (23, "ETH staked AUM", inputs.staked_aum_b, "$B inferred from Q2"),
        (24, "Net staking yield", inputs.net_staking_yield_pct, "% annual"),
        (25, "Staking take %", inputs.staking_take_pct, "Decimal"),
        (26, "Custody AUC", inputs.custody_auc_b, "$B avg"),
        (27, "Custody fee", inputs.custody_fee_bps, "bps annual"),
        (28, "Other S&S baseline", inputs.other_ss_baseline_m, "$M"),
        (29, "Interest & finance baseline", inputs.interest_finance_m, "$M"),
        (30, "Other revenue baseline", inputs.other_revenue_m, "$M"),
        (31, "Bear S&S delta", inputs.bear_ss_delta, "Decimal"),
        (32, "Bull S&S delta", inputs.bull_ss_delta, "Decimal"),
        (33, "Bear other delta", inputs.bear_other_delta, "Decimal"),
        (34, "Bull other delta", inputs.bull_other_delta, "Decimal"),
        (35, "Base weight", inputs.base_weight, "Probability"),
        (36, "Bear weight", inputs.bear_weight, "Probability"),
        (37, "Bull weight", inputs.bull_weight, "Probability"),
    ];

    for (row, label, value, note) in rows {
        grid.set(row, 1, label);
        grid.set(row, 2, num(value));
        grid.set(row, 3, note);
    }

    // Manual-inspection invariant; never enforced in code
    grid.set(38, 1, "Weight sum check");
    grid.set(38, 2, "=B35+B36+B37");
    grid.set(38, 3, "Should equal 1.0");
}

fn write_drivers_block(grid: &mut Grid, inputs: &ModelInputs) {
    grid.set(10, 4, "Drivers");
    grid.set(10, 5, "Base");
    grid.set(10, 6, "Bear");
    grid.set(10, 7, "Bull");
    grid.set(10, 8, "Units / notes");

    let qoq_txn = format!(
        "=IF({q2}>0,(E17-{q2})/{q2},0)",
        q2 = num(inputs.q2_txn_m)
    );
    let qoq_txn_bear = format!(
        "=IF({q2}>0,(F17-{q2})/{q2},0)",
        q2 = num(inputs.q2_txn_m)
    );
    let qoq_txn_bull = format!(
        "=IF({q2}>0,(G17-{q2})/{q2},0)",
        q2 = num(inputs.q2_txn_m)
    );
    let qoq_total = format!(
        "=IF({q2}>0,(E26-{q2})/{q2},0)",
        q2 = num(inputs.q2_total_m)
    );
    let qoq_total_bear = format!(
        "=IF({q2}>0,(F26-{q2})/{q2},0)",
        q2 = num(inputs.q2_total_m)
    );
    let qoq_total_bull = format!(
        "=IF({q2}>0,(G26-{q2})/{q2},0)",
        q2 = num(inputs.q2_total_m)
    );

    let rows: [(usize, &str, &str, &str, &str, &str); 21] = [
        (11, "Spot volume ($B)", "=B11", "=B11*(1+$B$15)", "=B11*(1+$B$16)", "CryptoCompare"),
        (12, "Derivatives volume ($B)", "=B12", "=B12*(1+$B$15)", "=B12*(1+$B$16)", "Effective notional"),
        (13, "Total traded volume ($B)", "=E11+E12", "=F11+F12", "=G11+G12", "Spot + derivatives"),
        (14, "Retail mix %", "=B13", "=B13", "=B13", "Input"),
        (15, "Blended take rate (bps)", "=B14", "=B14*(1+$B$17)", "=B14*(1+$B$18)", "Input +/- deltas"),
        (16, "Blended take rate (decimal)", "=E15/10000", "=F15/10000", "=G15/10000", "bps/10,000"),
        (17, "Transaction revenue ($M)", "=E13*E16*1000", "=F13*F16*1000", "=G13*G16*1000", "TxnRev formula"),
        (18, "Residual rate (%)", "=$B$20-($B$22/100)", "=$B$20-($B$22/100)", "=$B$20-($B$22/100)", "Short rate less haircut"),
        (19, "USDC interest ($M)", "=$B$19*(E18/100)/4*$B$21*1000", "=E19*(1+$B$31)", "=E19*(1+$B$32)", "Coinbase share"),
        (20, "Staking revenue ($M)", "=$B$23*($B$24/100)/4*$B$25*1000", "=E20*(1+$B$31)", "=E20*(1+$B$32)", "ETH staking"),
        (21, "Custody revenue ($M)", "=$B$26*($B$27/10000)/4*1000", "=E21*(1+$B$31)", "=E21*(1+$B$32)", "AUC x fee"),
        (22, "Interest & finance ($M)", "=$B$29", "=E22*(1+$B$31)", "=E22*(1+$B$32)", "Prime financing"),
        (23, "Other S&S ($M)", "=$B$28", "=E23*(1+$B$31)", "=E23*(1+$B$32)", "Other services"),
        (24, "Subscription & Services ($M)", "=SUM(E19:E23)", "=SUM(F19:F23)", "=SUM(G19:G23)", "USDC+Staking+Custody+Other"),
        (25, "Other revenue ($M)", "=$B$30", "=$B$30*(1+$B$33)", "=$B$30*(1+$B$34)", "Corporate interest etc."),
        (26, "Total revenue ($M)", "=E17+E24+E25", "=F17+F24+F25", "=G17+G24+G25", "Sum"),
        (27, "Weighted contribution ($M)", "=E26*$B$35", "=F26*$B$36", "=G26*$B$37", "Scenario weight"),
        (28, "Prob-weighted total ($M)", "=SUM(E27:G27)", "", "", "Probability weighted"),
        (29, "Implied take rate (bps)", "=IF(E13>0,E17/(E13*1000)*10000,0)", "=IF(F13>0,F17/(F13*1000)*10000,0)", "=IF(G13>0,G17/(G13*1000)*10000,0)", "Check vs input"),
        (30, "Txn vs Q2 delta %", &qoq_txn, &qoq_txn_bear, &qoq_txn_bull, "QoQ growth"),
        (31, "Total vs Q2 delta %", &qoq_total, &qoq_total_bear, &qoq_total_bull, "QoQ growth"),
    ];

    for (row, label, base_f, bear_f, bull_f, note) in rows {
        grid.set(row, 4, label);
        if !base_f.is_empty() {
            grid.set(row, 5, base_f);
        }
        if !bear_f.is_empty() {
            grid.set(row, 6, bear_f);
        }
        if !bull_f.is_empty() {
            grid.set(row, 7, bull_f);
        }
        grid.set(row, 8, note);
    }
}

fn write_forecast_table(grid: &mut Grid, inputs: &ModelInputs) {
    grid.set(45, 1, "Forecast by Category");
    grid.set(46, 1, "Category");
    grid.set(46, 2, "Base ($M)");
    grid.set(46, 3, "Bear ($M)");
    grid.set(46, 4, "Bull ($M)");
    grid.set(46, 5, "Prob-weighted ($M)");
    grid.set(46, 6, "Q2'25 actual ($M)");
    grid.set(46, 7, "Δ vs Q2 (Base)");
    grid.set(46, 8, "Notes");

    let rows: [(usize, &str, &str, &str, &str, &str, f64, &str, &str); 12] = [
        (47, "Transaction Revenue", "=E17", "=F17", "=G17", "=SUMPRODUCT(B35:B37,B47:D47)", inputs.q2_txn_m, "=B47-F47", "Volumes & take"),
        (48, " - Spot volume ($B)", "=E11", "=F11", "=G11", "=SUMPRODUCT(B35:B37,E11:G11)", 237.0, "=B48-F48", "CryptoCompare"),
        (49, " - Derivatives volume ($B)", "=E12", "=F12", "=G12", "=SUMPRODUCT(B35:B37,E12:G12)", 0.0, "=B49-F49", "Effective notional"),
        (50, " - Blended take rate (bps)", "=E15", "=F15", "=G15", "=SUMPRODUCT(B35:B37,E15:G15)", inputs.blended_take_bps, "=B50-F50", ""),
        (52, "Subscription & Services", "=E24", "=F24", "=G24", "=SUMPRODUCT(B35:B37,E24:G24)", 655.826, "=B52-F52", "USDC + staking + custody"),
        (53, " - USDC interest", "=E19", "=F19", "=G19", "=SUMPRODUCT(B35:B37,E19:G19)", 332.497, "=B53-F53", ""),
        (54, " - Staking revenue", "=E20", "=F20", "=G20", "=SUMPRODUCT(B35:B37,E20:G20)", 144.535, "=B54-F54", ""),
        (55, " - Custody fees", "=E21", "=F21", "=G21", "=SUMPRODUCT(B35:B37,E21:G21)", 119.478, "=B55-F55", "Record inflows"),
        (56, " - Interest & finance", "=E22", "=F22", "=G22", "=SUMPRODUCT(B35:B37,E22:G22)", 59.316, "=B56-F56", "Prime financing"),
        (57, " - Other S&S", "=E23", "=F23", "=G23", "=SUMPRODUCT(B35:B37,E23:G23)", 119.478, "=B57-F57", "Onchain services"),
        (60, "Other Revenue", "=E25", "=F25", "=G25", "=SUMPRODUCT(B35:B37,E25:G25)", 77.112, "=B60-F60", "Corporate interest"),
        (62, "Total Revenue", "=E26", "=F26", "=G26", "=SUMPRODUCT(B35:B37,E26:G26)", inputs.q2_total_m, "=B62-F62", ""),
    ];

    for (row, label, base_f, bear_f, bull_f, weighted_f, q2_val, delta_f, note) in rows {
        grid.set(row, 1, label);
        grid.set(row, 2, base_f);
        grid.set(row, 3, bear_f);
        grid.set(row, 4, bull_f);
        grid.set(row, 5, weighted_f);
        grid.set(row, 6, num(q2_val));
        grid.set(row, 7, delta_f);
        grid.set(row, 8, note);
    }
}

fn write_sanity_checks(grid: &mut Grid) {
    grid.set(85, 1, "Sanity Checks");

    let rows: [(usize, &str, &str, &str); 6] = [
        (86, "Scenario weights sum", "=B35+B36+B37", "Should equal 1"),
        (87, "Prob-weighted (drivers)", "=E28", ""),
        (88, "Prob-weighted (table)", "=B62*$B$35+C62*$B$36+D62*$B$37", "Cross-check"),
        (89, "Implied take vs input (bps)", "=B29-$B$14", "Base minus input"),
        (90, "Take rate drift vs hist avg", "=IF(ABS((B29-0.0032217)*10000)>6,\"Review\",\"OK\")", "Flag if >60 bps shift"),
        (91, "Modeled total vs Q2 delta %", "=B31", "QoQ change"),
    ];

    for (row, label, formula, note) in rows {
        grid.set(row, 1, label);
        grid.set(row, 2, formula);
        grid.set(row, 3, note);
    }
}

fn write_sensitivity_table(grid: &mut Grid) {
    const LABELS: [&str; 5] = ["-20%", "-10%", "Base", "+10%", "+20%"];

    fn pct(label: &str) -> f64 {
        if label == "Base" {
            0.0
        } else {
            label.trim_end_matches('%').parse::<f64>().unwrap_or(0.0) / 100.0
        }
    }

    grid.set(115, 1, "Sensitivity: Total Revenue ($M)");
    grid.set(117, 1, "Volume change → / Take rate ↓");
    for (idx, label) in LABELS.iter().enumerate() {
        grid.set(117, idx + 2, *label);
    }

    for (ridx, row_label) in LABELS.iter().enumerate() {
        let row = ridx + 118;
        let label_text = if *row_label == "Base" {
            format!("{row_label} *")
        } else {
            (*row_label).to_string()
        };
        grid.set(row, 1, label_text);

        for (cidx, col_label) in LABELS.iter().enumerate() {
            let vol_factor = 1.0 + pct(col_label);
            let take_factor = 1.0 + pct(row_label);
            let formula = format!(
                "=($E$13*{})*($E$16*{})*1000+$E$24+$E$25",
                num(vol_factor),
                num(take_factor)
            );
            grid.set(row, cidx + 2, formula);
        }
    }
    grid.set(123, 1, "* Base cell");
}

fn write_sources(grid: &mut Grid) {
    grid.set(165, 1, "Sources & Notes");

    let sources = [
        "- CryptoCompare Coinbase spot volume JSON (https://min-api.cryptocompare.com/data/exchange/histoday?e=Coinbase&tsym=USD)",
        "- CoinGecko market chart range for BTC/ETH/USDC (https://api.coingecko.com/api/v3/coins/{asset}/market_chart/range)",
        "- FRED DGS3MO & FEDFUNDS CSV (https://fred.stlouisfed.org/graph/fredgraph.csv?id=SERIES)",
        "- DefiLlama cbETH TVL (https://api.llama.fi/protocol/coinbase-wrapped-staked-eth)",
        "- Coinbase Q2'25 Shareholder Letter (local: Quarter 2/Q2-2025-Shareholder-Letter.pdf)",
        "- Coinbase Q1'25 Shareholder Letter (local: Quarter 1/Q1-25-Shareholder-Letter-1.pdf)",
    ];

    for (offset, item) in sources.iter().enumerate() {
        grid.set(166 + offset, 1, *item);
    }
}

fn write_version_log(grid: &mut Grid, meta: &WorkbookMeta) {
    grid.set(225, 1, "Version Log");
    grid.set(226, 1, meta.date.format("%Y-%m-%d").to_string());
}
