use thiserror::Error;

use crate::domain::attributes::{
    AdjustmentError, AdjustmentOverrides, AttributeBaseline, AttributeProfile,
};
use crate::domain::timeline::EvmSeries;
use crate::domain::transaction::TransactionRecord;
use crate::services::dataset_modifier::modify_dataset;
use crate::services::evm_calculation::calculate_evm;
use crate::services::impact_assessment::{ImpactAssessmentError, assess_impacts};
use crate::services::table_import::{TableImportError, load_attributes_table, load_cost_table};
use crate::services::timeline_alignment::align_timelines;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("no rows in the {table} table match item '{item_id}'")]
    EmptySelection { table: &'static str, item_id: String },
    #[error("invalid adjustment: {0}")]
    Adjustment(#[from] AdjustmentError),
    #[error("impact assessment failed: {0}")]
    Assessment(#[from] ImpactAssessmentError),
    #[error("failed to load input table: {0}")]
    Import(#[from] TableImportError),
}

/// Runs the full pipeline for one item: filter both tables, average the
/// attribute rows, resolve the user targets, assess impacts, re-price and
/// re-date the transactions, align both streams monthly, and compute the
/// EVM series. Holds no state between invocations.
pub fn run_impact_analysis(
    cost_table: &[TransactionRecord],
    attributes_table: &[AttributeProfile],
    item_id: &str,
    overrides: &AdjustmentOverrides,
) -> Result<EvmSeries, AnalysisError> {
    let transactions = filter_transactions(cost_table, item_id)?;
    let profiles = filter_profiles(attributes_table, item_id)?;

    let baseline = AttributeBaseline::from_profiles(&profiles).ok_or_else(|| {
        AnalysisError::EmptySelection {
            table: "attributes",
            item_id: item_id.to_string(),
        }
    })?;
    let adjustment = overrides.resolve(&baseline)?;
    let impacts = assess_impacts(&baseline, &adjustment)?;

    let modified = modify_dataset(&transactions, &impacts);
    let timeline = align_timelines(&transactions, &modified);
    Ok(calculate_evm(&timeline))
}

/// Loads both CSV tables and runs the analysis.
pub fn analyze_csv_files(
    cost_path: &str,
    attributes_path: &str,
    item_id: &str,
    overrides: &AdjustmentOverrides,
) -> Result<EvmSeries, AnalysisError> {
    let cost_table = load_cost_table(cost_path)?;
    let attributes_table = load_attributes_table(attributes_path)?;
    run_impact_analysis(&cost_table, attributes_table.as_slice(), item_id, overrides)
}

fn filter_transactions(
    records: &[TransactionRecord],
    item_id: &str,
) -> Result<Vec<TransactionRecord>, AnalysisError> {
    let filtered: Vec<TransactionRecord> = records
        .iter()
        .filter(|record| record.item_id == item_id)
        .cloned()
        .collect();
    if filtered.is_empty() {
        return Err(AnalysisError::EmptySelection {
            table: "cost",
            item_id: item_id.to_string(),
        });
    }
    Ok(filtered)
}

fn filter_profiles(
    profiles: &[AttributeProfile],
    item_id: &str,
) -> Result<Vec<AttributeProfile>, AnalysisError> {
    let filtered: Vec<AttributeProfile> = profiles
        .iter()
        .filter(|profile| profile.item_id == item_id)
        .cloned()
        .collect();
    if filtered.is_empty() {
        return Err(AnalysisError::EmptySelection {
            table: "attributes",
            item_id: item_id.to_string(),
        });
    }
    Ok(filtered)
}
