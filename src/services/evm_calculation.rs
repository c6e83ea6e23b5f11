use crate::domain::timeline::{EvmPeriod, EvmSeries, EvmSummary, TimelinePeriod};

/// Walks the aligned timeline once, in order, accumulating planned value and
/// actual cost and deriving the EVM metrics per period.
///
/// BAC and EAC are whole-series totals computed up front. An item with a
/// zero BAC or EAC is not an error: the dependent percentages and earned
/// value are reported as 0 instead.
pub fn calculate_evm(timeline: &[TimelinePeriod]) -> EvmSeries {
    let budget_at_completion: f64 = timeline.iter().map(|p| p.baseline_cost).sum();
    let estimate_at_completion: f64 = timeline.iter().map(|p| p.modified_cost).sum();

    let mut planned_value = 0.0;
    let mut actual_cost = 0.0;
    let mut periods = Vec::with_capacity(timeline.len());
    for period in timeline {
        planned_value += period.baseline_cost;
        actual_cost += period.modified_cost;

        let schedule_percent_complete = if budget_at_completion != 0.0 {
            planned_value / budget_at_completion * 100.0
        } else {
            0.0
        };
        let percent_complete = if estimate_at_completion != 0.0 {
            actual_cost / estimate_at_completion * 100.0
        } else {
            0.0
        };
        let earned_value = percent_complete * budget_at_completion / 100.0;

        periods.push(EvmPeriod {
            period_end: period.period_end,
            baseline_cost: period.baseline_cost,
            modified_cost: period.modified_cost,
            planned_value,
            schedule_percent_complete,
            actual_cost,
            percent_complete,
            earned_value,
            schedule_variance: planned_value - earned_value,
            cost_variance: earned_value - actual_cost,
        });
    }

    EvmSeries {
        summary: EvmSummary {
            budget_at_completion,
            estimate_at_completion,
        },
        periods,
    }
}
