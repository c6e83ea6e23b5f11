use crate::domain::timeline::EvmSeries;

/// Renders the analysis result as a short text report: the whole-series
/// totals plus the final period's cumulative metrics.
pub fn format_evm_summary(item_id: &str, series: &EvmSeries) -> String {
    let mut lines = Vec::new();
    lines.push(format!("EVM Impact Report for item {item_id}"));
    lines.push(format!("Periods: {}", series.periods.len()));
    lines.push(format!(
        "Budget at completion (BAC): ${:.2}",
        series.summary.budget_at_completion
    ));
    lines.push(format!(
        "Estimate at completion (EAC): ${:.2}",
        series.summary.estimate_at_completion
    ));

    if let Some(last) = series.periods.last() {
        lines.push(String::new());
        lines.push(format!(
            "Cumulative through {}:",
            last.period_end.format("%Y-%m-%d")
        ));
        lines.push(format!("  Planned value:     ${:.2}", last.planned_value));
        lines.push(format!("  Actual cost:       ${:.2}", last.actual_cost));
        lines.push(format!("  Earned value:      ${:.2}", last.earned_value));
        lines.push(format!("  Schedule variance: ${:.2}", last.schedule_variance));
        lines.push(format!("  Cost variance:     ${:.2}", last.cost_variance));
        lines.push(format!(
            "  Planned % complete: {:.2}%",
            last.schedule_percent_complete
        ));
        lines.push(format!(
            "  Current % complete: {:.2}%",
            last.percent_complete
        ));
    }

    lines.join("\n")
}
