use std::io::{self, Write};

use serde::Serialize;

use crate::domain::timeline::EvmSeries;

#[derive(Serialize)]
struct EvmPeriodRecord {
    period_end: String,
    baseline_cost: f64,
    modified_cost: f64,
    planned_value: f64,
    schedule_percent_complete: f64,
    actual_cost: f64,
    percent_complete: f64,
    earned_value: f64,
    schedule_variance: f64,
    cost_variance: f64,
}

#[derive(Serialize)]
struct EvmReport {
    budget_at_completion: f64,
    estimate_at_completion: f64,
    periods: Vec<EvmPeriodRecord>,
}

pub fn serialize_evm_series_to_yaml<W: Write>(
    writer: &mut W,
    series: &EvmSeries,
) -> io::Result<()> {
    let report = EvmReport {
        budget_at_completion: series.summary.budget_at_completion,
        estimate_at_completion: series.summary.estimate_at_completion,
        periods: series
            .periods
            .iter()
            .map(|p| EvmPeriodRecord {
                period_end: p.period_end.format("%Y-%m-%d").to_string(),
                baseline_cost: p.baseline_cost,
                modified_cost: p.modified_cost,
                planned_value: p.planned_value,
                schedule_percent_complete: p.schedule_percent_complete,
                actual_cost: p.actual_cost,
                percent_complete: p.percent_complete,
                earned_value: p.earned_value,
                schedule_variance: p.schedule_variance,
                cost_variance: p.cost_variance,
            })
            .collect(),
    };

    let yaml = serde_yaml::to_string(&report).map_err(io::Error::other)?;
    writer.write_all(yaml.as_bytes())
}
