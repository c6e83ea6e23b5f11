use chrono::NaiveDate;

/// Cost categories recognized by the impact pipeline. Anything else in the
/// source data passes through unscaled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CostCategory {
    Labor,
    Material,
    Other,
}

impl CostCategory {
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "Labor" => CostCategory::Labor,
            "Material" => CostCategory::Material,
            _ => CostCategory::Other,
        }
    }
}

/// One time-phased cost booking for an item.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    pub date: NaiveDate,
    pub cost: f64,
    pub item_id: String,
    pub category: CostCategory,
}
