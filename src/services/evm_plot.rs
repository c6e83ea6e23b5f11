use plotters::prelude::*;
use thiserror::Error;

use crate::domain::timeline::EvmSeries;

#[derive(Error, Debug)]
pub enum EvmPlotError {
    #[error("the analysis produced no timeline periods to plot")]
    EmptyTimeline,
    #[error("failed to render evm chart: {0}")]
    Render(String),
}

/// Renders the cumulative baseline vs. modified cost curves as a PNG, with
/// BAC and EAC called out in the legend. The per-period cumulative values
/// are already on the series (`planned_value`, `actual_cost`).
pub fn plot_evm_series(output_path: &str, series: &EvmSeries) -> Result<(), EvmPlotError> {
    if series.periods.is_empty() {
        return Err(EvmPlotError::EmptyTimeline);
    }
    render_evm_png(output_path, series)
}

fn render_evm_png(output_path: &str, series: &EvmSeries) -> Result<(), EvmPlotError> {
    let max_x = series.periods.len().max(1) as i32;
    let min_y = series
        .periods
        .iter()
        .flat_map(|p| [p.planned_value, p.actual_cost])
        .fold(0.0f64, f64::min);
    let max_y = series
        .periods
        .iter()
        .flat_map(|p| [p.planned_value, p.actual_cost])
        .fold(f64::EPSILON, f64::max);

    let root = BitMapBackend::new(output_path, (900, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| EvmPlotError::Render(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Time Phased Cost", ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(80)
        .build_cartesian_2d(0..max_x, min_y..max_y * 1.05)
        .map_err(|e| EvmPlotError::Render(e.to_string()))?;

    let label_count = series.periods.len().min(10).max(1);
    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Month")
        .y_desc("Cumulative cost")
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .x_labels(label_count)
        .x_label_formatter(&|index| {
            if *index < 0 {
                return String::new();
            }
            series
                .periods
                .get(*index as usize)
                .map(|p| p.period_end.format("%Y-%m-%d").to_string())
                .unwrap_or_default()
        })
        .y_label_formatter(&|value| format!("${value:.0}"))
        .draw()
        .map_err(|e| EvmPlotError::Render(e.to_string()))?;

    let baseline_color = RGBColor(30, 122, 204);
    let modified_color = RGBColor(46, 155, 97);

    chart
        .draw_series(LineSeries::new(
            series
                .periods
                .iter()
                .enumerate()
                .map(|(idx, p)| (idx as i32, p.planned_value)),
            baseline_color.stroke_width(2),
        ))
        .map_err(|e| EvmPlotError::Render(e.to_string()))?
        .label(format!(
            "Baseline (BAC ${:.2})",
            series.summary.budget_at_completion
        ))
        .legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], baseline_color.stroke_width(2))
        });

    chart
        .draw_series(LineSeries::new(
            series
                .periods
                .iter()
                .enumerate()
                .map(|(idx, p)| (idx as i32, p.actual_cost)),
            modified_color.stroke_width(2),
        ))
        .map_err(|e| EvmPlotError::Render(e.to_string()))?
        .label(format!(
            "Modified (EAC ${:.2})",
            series.summary.estimate_at_completion
        ))
        .legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], modified_color.stroke_width(2))
        });

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .border_style(&BLACK)
        .background_style(&WHITE.mix(0.8))
        .label_font(("sans-serif", 18))
        .draw()
        .map_err(|e| EvmPlotError::Render(e.to_string()))?;

    root.present()
        .map_err(|e| EvmPlotError::Render(e.to_string()))?;
    Ok(())
}
