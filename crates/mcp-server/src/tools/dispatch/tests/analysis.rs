use super::super::*;
use experiment_analysis::FixedRandom;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn dispatcher() -> Dispatcher {
    Dispatcher::new(Arc::new(ToolRegistry::new()), Box::new(FixedRandom::new(0.5)))
}

fn call(dispatcher: &Dispatcher, tool: &str, args: Value) -> Value {
    let arguments = args.as_object().cloned();
    let response = dispatcher.invoke(tool, arguments).expect("tool call succeeds");
    assert_eq!(response.content.len(), 1);
    serde_json::from_str(response.first_text().expect("text block")).expect("json payload")
}

#[test]
fn nested_loops_are_classified_quadratic() {
    let out = call(
        &dispatcher(),
        "analyze_code_complexity",
        json!({
            "code": "for (;;) { for (;;) {} }",
            "language": "javascript",
            "optimization_target": "performance"
        }),
    );
    assert_eq!(out["complexity"]["time_complexity"], json!("O(n²)"));
    assert_eq!(out["complexity"]["space_complexity"], json!("O(n)"));
    assert_eq!(out["complexity"]["loop_count"], json!(2));
    assert_eq!(out["complexity"]["nested_loops"], json!(1));
    assert!(out["patterns"].is_array());
    assert!(out["recommended_patterns"].as_array().unwrap().len() <= 3);
    assert_eq!(out["suggestions"].as_array().unwrap().len(), 3);
}

#[test]
fn analysis_sections_can_be_switched_off() {
    let out = call(
        &dispatcher(),
        "analyze_code_complexity",
        json!({
            "code": "return 1",
            "language": "python",
            "optimization_target": "memory",
            "include_patterns": false,
            "include_complexity": false
        }),
    );
    let object = out.as_object().unwrap();
    assert!(!object.contains_key("complexity"));
    assert!(!object.contains_key("patterns"));
    assert!(!object.contains_key("recommended_patterns"));
    assert_eq!(out["optimization_target"], json!("memory"));
}

#[test]
fn null_flags_fall_back_to_defaults() {
    let out = call(
        &dispatcher(),
        "analyze_code_complexity",
        json!({
            "code": "x = 1",
            "language": "python",
            "optimization_target": "performance",
            "include_patterns": null,
            "include_complexity": null
        }),
    );
    assert!(out["complexity"].is_object());
    assert!(out["patterns"].is_array());
}

#[test]
fn linear_lookups_score_high_for_caching() {
    let out = call(
        &dispatcher(),
        "detect_optimization_patterns",
        json!({
            "code_snippet": "for (const id of ids) { if (items.indexOf(id) >= 0) hits++; }",
            "language": "javascript",
            "pattern_types": ["caching"]
        }),
    );
    let patterns = out["patterns"].as_array().unwrap();
    assert_eq!(patterns.len(), 1);
    assert_eq!(patterns[0]["pattern_name"], json!("caching"));
    assert!(patterns[0]["applicability_score"].as_f64().unwrap() >= 0.9);
    assert_eq!(out["total_detected"], json!(1));
}

#[test]
fn default_pattern_catalog_is_used_when_omitted() {
    let out = call(
        &dispatcher(),
        "detect_optimization_patterns",
        json!({ "code_snippet": "let x = 1;", "language": "rust" }),
    );
    assert_eq!(
        out["requested"],
        json!([
            "dynamic_programming",
            "caching",
            "two_pointers",
            "sliding_window",
            "hash_maps"
        ])
    );
    let names: Vec<&str> = out["patterns"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["pattern_name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["two_pointers", "sliding_window", "hash_maps"]);
    assert_eq!(out["recommendations"].as_array().unwrap().len(), 3);
}

#[test]
fn correctness_category_expands_to_five_titles() {
    let out = call(
        &dispatcher(),
        "generate_test_cases",
        json!({
            "function_signature": "def add(a, b)",
            "language": "python",
            "test_categories": ["correctness"]
        }),
    );
    let suites = out["test_suites"].as_array().unwrap();
    assert_eq!(suites.len(), 1);
    assert_eq!(suites[0]["category"], json!("correctness"));
    assert_eq!(suites[0]["tests"].as_array().unwrap().len(), 5);
    assert_eq!(out["framework"], json!("pytest"));
    assert_eq!(out["total_tests"], json!(5));
}

#[test]
fn test_categories_default_to_all_four() {
    let out = call(
        &dispatcher(),
        "generate_test_cases",
        json!({ "function_signature": "fn f()", "language": "rust" }),
    );
    assert_eq!(out["test_suites"].as_array().unwrap().len(), 4);
    assert_eq!(out["total_tests"], json!(20));
}
