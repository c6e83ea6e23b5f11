use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the EVM impact analysis for one item and write the series as YAML
    Analyze {
        /// Cost transactions CSV file
        #[arg(short, long)]
        cost: String,
        /// Item attributes CSV file
        #[arg(short, long)]
        attributes: String,
        /// Item number to analyze
        #[arg(short, long)]
        item: String,
        /// Target lead time in days (defaults to the item's baseline)
        #[arg(long)]
        lead_time: Option<f64>,
        /// Target unit cost (defaults to the item's baseline)
        #[arg(long)]
        unit_cost: Option<f64>,
        /// Target yield as a percentage, e.g. 85 (defaults to the item's baseline)
        #[arg(long)]
        yield_percent: Option<f64>,
        /// Target labor hours (defaults to the item's baseline)
        #[arg(long)]
        hours: Option<f64>,
        /// Output YAML file
        #[arg(short, long)]
        output: String,
    },
    /// Plot cumulative baseline vs modified cost for one item as a PNG chart
    Plot {
        /// Cost transactions CSV file
        #[arg(short, long)]
        cost: String,
        /// Item attributes CSV file
        #[arg(short, long)]
        attributes: String,
        /// Item number to analyze
        #[arg(short, long)]
        item: String,
        /// Target lead time in days (defaults to the item's baseline)
        #[arg(long)]
        lead_time: Option<f64>,
        /// Target unit cost (defaults to the item's baseline)
        #[arg(long)]
        unit_cost: Option<f64>,
        /// Target yield as a percentage, e.g. 85 (defaults to the item's baseline)
        #[arg(long)]
        yield_percent: Option<f64>,
        /// Target labor hours (defaults to the item's baseline)
        #[arg(long)]
        hours: Option<f64>,
        /// Output PNG file
        #[arg(short, long)]
        output: String,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyze_parses_required_arguments() {
        let args = CliArgs::parse_from([
            "evimpact",
            "analyze",
            "-c",
            "costs.csv",
            "-a",
            "attributes.csv",
            "-i",
            "10001",
            "-o",
            "report.yaml",
        ]);

        if let Commands::Analyze {
            cost,
            attributes,
            item,
            lead_time,
            output,
            ..
        } = args.command
        {
            assert_eq!(cost, "costs.csv");
            assert_eq!(attributes, "attributes.csv");
            assert_eq!(item, "10001");
            assert_eq!(lead_time, None);
            assert_eq!(output, "report.yaml");
        } else {
            panic!("expected analyze command");
        }
    }

    #[test]
    fn analyze_accepts_target_overrides() {
        let args = CliArgs::parse_from([
            "evimpact",
            "analyze",
            "-c",
            "costs.csv",
            "-a",
            "attributes.csv",
            "-i",
            "10001",
            "-o",
            "report.yaml",
            "--lead-time",
            "25",
            "--unit-cost",
            "30.5",
            "--yield-percent",
            "90",
            "--hours",
            "3",
        ]);

        if let Commands::Analyze {
            lead_time,
            unit_cost,
            yield_percent,
            hours,
            ..
        } = args.command
        {
            assert_eq!(lead_time, Some(25.0));
            assert_eq!(unit_cost, Some(30.5));
            assert_eq!(yield_percent, Some(90.0));
            assert_eq!(hours, Some(3.0));
        } else {
            panic!("expected analyze command");
        }
    }
}
