pub mod stage1_generate;
pub mod stage2_metrics;
pub mod stage3_report;
