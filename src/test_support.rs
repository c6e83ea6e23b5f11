use chrono::NaiveDate;

use crate::domain::attributes::AttributeProfile;
use crate::domain::transaction::{CostCategory, TransactionRecord};

pub fn on_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn build_transaction(
    item_id: &str,
    date: NaiveDate,
    cost: f64,
    category: CostCategory,
) -> TransactionRecord {
    TransactionRecord {
        date,
        cost,
        item_id: item_id.to_string(),
        category,
    }
}

pub fn build_profile(
    item_id: &str,
    unit_cost: f64,
    lead_time_days: f64,
    yield_fraction: f64,
    labor_hours: f64,
) -> AttributeProfile {
    AttributeProfile {
        item_id: item_id.to_string(),
        unit_cost,
        lead_time_days,
        yield_fraction,
        labor_hours,
    }
}
