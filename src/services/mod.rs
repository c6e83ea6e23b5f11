pub mod analysis;
pub mod dataset_modifier;
pub mod evm_calculation;
pub mod evm_plot;
pub mod impact_assessment;
pub mod report_yaml;
pub mod table_import;
pub mod timeline_alignment;
