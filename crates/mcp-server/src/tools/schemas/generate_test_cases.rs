use experiment_analysis::test_plan::DEFAULT_TEST_CATEGORIES;
use rmcp::schemars;
use serde::Deserialize;

fn default_test_categories() -> Vec<String> {
    DEFAULT_TEST_CATEGORIES.iter().map(|s| s.to_string()).collect()
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GenerateTestCasesRequest {
    #[schemars(description = "Signature of the function under test")]
    pub function_signature: String,

    #[schemars(description = "Programming language (selects the test framework convention)")]
    pub language: String,

    #[serde(default = "default_test_categories")]
    #[schemars(
        description = "Categories to expand: edge_cases, performance, correctness, error_handling"
    )]
    pub test_categories: Vec<String>,
}
