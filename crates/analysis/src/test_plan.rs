use serde::{Deserialize, Serialize};

pub const EDGE_CASES: &str = "edge_cases";
pub const PERFORMANCE: &str = "performance";
pub const CORRECTNESS: &str = "correctness";
pub const ERROR_HANDLING: &str = "error_handling";

pub const DEFAULT_TEST_CATEGORIES: &[&str] = &[EDGE_CASES, PERFORMANCE, CORRECTNESS, ERROR_HANDLING];

const GENERIC_FRAMEWORK: &str = "generic";

const EDGE_CASE_TESTS: &[&str] = &[
    "Empty input",
    "Single element input",
    "Maximum size input",
    "Null or missing values",
    "Boundary values (minimum and maximum)",
];

const PERFORMANCE_TESTS: &[&str] = &[
    "Large input (1,000,000 elements)",
    "Worst-case input ordering",
    "Repeated calls with identical input",
    "Memory usage under sustained load",
    "Completes within the time budget",
];

const CORRECTNESS_TESTS: &[&str] = &[
    "Typical input produces expected output",
    "Output matches reference implementation",
    "Idempotent on repeated invocation",
    "Preserves input invariants",
    "Handles duplicate values correctly",
];

const ERROR_HANDLING_TESTS: &[&str] = &[
    "Invalid argument type is rejected",
    "Out-of-range values raise a clear error",
    "Malformed input does not crash",
    "Errors propagate with a descriptive message",
    "Resources are released after failure",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestSuite {
    pub category: String,
    pub tests: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestPlan {
    pub function_signature: String,
    pub language: String,
    pub framework: String,
    pub test_suites: Vec<TestSuite>,
    pub total_tests: usize,
}

fn scenarios_for(category: &str) -> Option<&'static [&'static str]> {
    match category {
        EDGE_CASES => Some(EDGE_CASE_TESTS),
        PERFORMANCE => Some(PERFORMANCE_TESTS),
        CORRECTNESS => Some(CORRECTNESS_TESTS),
        ERROR_HANDLING => Some(ERROR_HANDLING_TESTS),
        _ => None,
    }
}

pub fn framework_for(language: &str) -> &'static str {
    match language.trim().to_ascii_lowercase().as_str() {
        "python" | "py" => "pytest",
        "javascript" | "js" | "typescript" | "ts" => "jest",
        "rust" | "rs" => "cargo test",
        "go" | "golang" => "go test",
        "java" => "JUnit 5",
        "c#" | "csharp" => "xUnit",
        "cpp" | "c++" => "GoogleTest",
        "ruby" | "rb" => "RSpec",
        _ => GENERIC_FRAMEWORK,
    }
}

fn suite_for(category: &str) -> TestSuite {
    let tests = match scenarios_for(category) {
        Some(scenarios) => scenarios.iter().map(|s| s.to_string()).collect(),
        None => vec![format!("Generic {} test", category.replace('_', " "))],
    };
    TestSuite {
        category: category.to_string(),
        tests,
    }
}

pub fn generate<S: AsRef<str>>(function_signature: &str, language: &str, categories: &[S]) -> TestPlan {
    let test_suites: Vec<TestSuite> = categories.iter().map(|c| suite_for(c.as_ref())).collect();
    let total_tests = test_suites.iter().map(|suite| suite.tests.len()).sum();
    TestPlan {
        function_signature: function_signature.to_string(),
        language: language.to_string(),
        framework: framework_for(language).to_string(),
        test_suites,
        total_tests,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn correctness_only_yields_five_titles() {
        let plan = generate("fn sum(xs: &[i64]) -> i64", "rust", &[CORRECTNESS]);
        assert_eq!(plan.test_suites.len(), 1);
        assert_eq!(plan.test_suites[0].category, CORRECTNESS);
        assert_eq!(plan.test_suites[0].tests.len(), 5);
        assert!(plan.test_suites[0]
            .tests
            .iter()
            .all(|t| CORRECTNESS_TESTS.contains(&t.as_str())));
        assert_eq!(plan.framework, "cargo test");
        assert_eq!(plan.total_tests, 5);
    }

    #[test]
    fn default_categories_cover_twenty_scenarios() {
        let plan = generate("def f(x)", "Python", DEFAULT_TEST_CATEGORIES);
        assert_eq!(plan.test_suites.len(), 4);
        assert_eq!(plan.total_tests, 20);
        assert_eq!(plan.framework, "pytest");
    }

    #[test]
    fn unknown_category_gets_placeholder() {
        let plan = generate("f()", "cobol", &["security"]);
        assert_eq!(
            plan.test_suites,
            vec![TestSuite {
                category: "security".to_string(),
                tests: vec!["Generic security test".to_string()],
            }]
        );
        assert_eq!(plan.framework, "generic");
    }

    #[test]
    fn framework_mapping_is_case_insensitive() {
        assert_eq!(framework_for("TypeScript"), "jest");
        assert_eq!(framework_for(" Go "), "go test");
        assert_eq!(framework_for("elixir"), "generic");
    }
}
