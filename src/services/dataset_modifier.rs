use chrono::Duration;

use crate::domain::impacts::ImpactFactors;
use crate::domain::transaction::{CostCategory, TransactionRecord};

/// Applies impact factors to a copy of the transaction table. Labor and
/// material costs are rescaled, other categories keep their cost, and every
/// date moves by the shift (negative shifts move transactions earlier).
/// Row count, order, item ids and categories are preserved.
pub fn modify_dataset(
    records: &[TransactionRecord],
    impacts: &ImpactFactors,
) -> Vec<TransactionRecord> {
    let shift = Duration::days(impacts.date_shift_days);
    records
        .iter()
        .map(|record| {
            let cost = match record.category {
                CostCategory::Labor => record.cost * impacts.labor_multiplier,
                CostCategory::Material => record.cost * impacts.material_multiplier,
                CostCategory::Other => record.cost,
            };
            TransactionRecord {
                date: record.date + shift,
                cost,
                item_id: record.item_id.clone(),
                category: record.category,
            }
        })
        .collect()
}
