use chrono::NaiveDate;

/// One calendar-month bucket of the shared timeline. `period_end` is the
/// last day of the month; months with no transactions carry cost 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelinePeriod {
    pub period_end: NaiveDate,
    pub baseline_cost: f64,
    pub modified_cost: f64,
}

/// A [`TimelinePeriod`] annotated with cumulative EVM metrics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvmPeriod {
    pub period_end: NaiveDate,
    pub baseline_cost: f64,
    pub modified_cost: f64,
    pub planned_value: f64,
    pub schedule_percent_complete: f64,
    pub actual_cost: f64,
    pub percent_complete: f64,
    pub earned_value: f64,
    pub schedule_variance: f64,
    pub cost_variance: f64,
}

/// Whole-series scalars.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvmSummary {
    pub budget_at_completion: f64,
    pub estimate_at_completion: f64,
}

/// The full analysis result handed to presentation code.
#[derive(Debug, Clone, PartialEq)]
pub struct EvmSeries {
    pub summary: EvmSummary,
    pub periods: Vec<EvmPeriod>,
}
