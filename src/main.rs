mod commands;
mod domain;
mod services;
#[cfg(test)]
mod test_support;

use clap::{CommandFactory, Parser};

use crate::commands::analyze_cmd::analyze_command;
use crate::commands::base_commands::{CliArgs, Commands};
use crate::commands::plot_cmd::plot_command;

fn main() {
    let args = CliArgs::parse();
    match args.command {
        cmd @ Commands::Analyze { .. } => analyze_command(cmd),
        cmd @ Commands::Plot { .. } => plot_command(cmd),
        Commands::Completions { shell } => {
            let mut cli = CliArgs::command();
            clap_complete::generate(shell, &mut cli, "evimpact", &mut std::io::stdout());
        }
    }
}
