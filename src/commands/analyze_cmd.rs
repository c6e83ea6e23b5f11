use crate::commands::base_commands::Commands;
use crate::commands::report_format::format_evm_summary;
use crate::domain::attributes::AdjustmentOverrides;
use crate::services::analysis::analyze_csv_files;
use crate::services::report_yaml::serialize_evm_series_to_yaml;

pub fn analyze_command(cmd: Commands) {
    if let Commands::Analyze {
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

        let mut buffer = Vec::new();
        if let Err(e) = serialize_evm_series_to_yaml(&mut buffer, &series) {
            eprintln!("Failed to serialize EVM report to YAML: {e:?}");
            return;
        }

        if let Err(e) = std::fs::write(&output, buffer) {
            eprintln!("Failed to write output file: {e:?}");
        } else {
            println!("{}", format_evm_summary(&item, &series));
            println!();
            println!("EVM report written to {output}");
        }
    }
}
