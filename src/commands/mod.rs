pub mod analyze_cmd;
pub mod base_commands;
pub mod plot_cmd;
pub mod report_format;
