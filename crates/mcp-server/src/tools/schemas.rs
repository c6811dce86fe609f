pub mod analyze_code_complexity;
pub mod benchmark_performance;
pub mod create_optimization_report;
pub mod detect_optimization_patterns;
pub mod generate_test_cases;
