//! File sinks for the rendered artifacts.

use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::info;

use model_core::{ForecastModel, ScenarioResult, ScenarioWeights, WeightedSummary};

use crate::error::ReportError;
use crate::grid::Grid;

/// JSON summary of the computed scenario values.
///
/// Field order matches the workbook convention: the three scenarios, then
/// the weights, then the weighted rollups.
#[derive(Debug, Serialize)]
struct ModelSummary<'a> {
    base: &'a ScenarioResult,
    bear: &'a ScenarioResult,
    bull: &'a ScenarioResult,
    weights: ScenarioWeights,
    weighted: &'a WeightedSummary,
}

/// Write the workbook grid as CSV, creating the parent directory if needed.
pub fn write_workbook_csv(path: &Path, grid: &Grid) -> Result<(), ReportError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, grid.to_csv())?;

    info!(path = %path.display(), rows = grid.rows(), "Workbook CSV written");
    Ok(())
}

/// Write the JSON summary of the evaluated model, creating the parent
/// directory if needed.
pub fn write_summary_json(path: &Path, model: &ForecastModel) -> Result<(), ReportError> {
    let summary = ModelSummary {
        base: &model.base,
        bear: &model.bear,
        bull: &model.bull,
        weights: model.weights,
        weighted: &model.weighted,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(&summary)?)?;

    info!(path = %path.display(), "Model summary written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use model_core::ModelInputs;

    #[test]
    fn test_write_workbook_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output").join("model.csv");

        let mut grid = Grid::new(2, 2);
        grid.set(1, 1, "a");
        write_workbook_csv(&path, &grid).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "a,\n,\n");
    }

    #[test]
    fn test_write_summary_json_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model_summary.json");

        let model = ForecastModel::evaluate(&ModelInputs::default());
        write_summary_json(&path, &model).unwrap();

        let parsed: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert!(parsed["base"]["txn_rev_m"].is_number());
        assert!(parsed["bear"]["ss_total_m"].is_number());
        assert!(parsed["bull"]["total_rev_m"].is_number());
        assert_eq!(parsed["weights"]["base"], 0.6);
        assert!(parsed["weighted"]["total_revenue_m"].is_number());
        assert!(parsed["weighted"]["s_and_s_m"].is_number());
    }
}
