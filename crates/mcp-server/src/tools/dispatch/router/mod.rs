// Per-tool handlers invoked by the dispatcher.

pub(super) mod analyze_code_complexity;
pub(super) mod benchmark_performance;
pub(super) mod create_optimization_report;
pub(super) mod detect_optimization_patterns;
pub(super) mod error;
pub(super) mod generate_test_cases;
