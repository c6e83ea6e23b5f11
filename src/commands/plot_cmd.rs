use crate::commands::base_commands::Commands;
use crate::domain::attributes::AdjustmentOverrides;
use crate::services::analysis::analyze_csv_files;
use crate::services::evm_plot::plot_evm_series;

pub fn plot_command(cmd: Commands) {
    if let Commands::Plot {
        cost,
        attributes,
        item,
        lead_time,
        unit_cost,
        yield_percent,
        hours,
        output,
    } = cmd
    {
        let overrides = AdjustmentOverrides {
            lead_time_days: lead_time,
            unit_cost,
            yield_fraction: yield_percent.map(|percent| percent / 100.0),
            labor_hours: hours,
        };

        let series = match analyze_csv_files(&cost, &attributes, &item, &overrides) {
            Ok(series) => series,
            Err(e) => {
                eprintln!("Failed to analyze item {item}: {e}");
                return;
            }
        };

        match plot_evm_series(&output, &series) {
            Ok(()) => println!("EVM chart written to {output}"),
            Err(e) => eprintln!("Failed to plot EVM chart: {e}"),
        }
    }
}
