use experiment_analysis::{AlgorithmFinding, ComplexityResult, PatternResult, PerformanceIssue};
use rmcp::schemars;
use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AnalyzeCodeComplexityRequest {
    /// Source code to analyze
    #[schemars(description = "Source code to analyze (any language)")]
    pub code: String,

    /// Programming language of the snippet
    #[schemars(description = "Programming language (e.g. python, javascript, rust)")]
    pub language: String,

    /// What the optimization should favor
    #[schemars(description = "Optimization target: performance, memory, readability, or security")]
    pub optimization_target: String,

    #[serde(default = "default_true")]
    #[schemars(description = "Run optimization pattern detection over the default pattern catalog")]
    pub include_patterns: bool,

    #[serde(default = "default_true")]
    #[schemars(description = "Include loop/recursion counts and Big-O classification")]
    pub include_complexity: bool,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeCodeComplexityResult {
    pub language: String,
    pub optimization_target: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complexity: Option<ComplexityResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patterns: Option<Vec<PatternResult>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommended_patterns: Option<Vec<PatternResult>>,
    pub algorithms: Vec<AlgorithmFinding>,
    pub performance_issues: Vec<PerformanceIssue>,
    pub suggestions: Vec<String>,
}
