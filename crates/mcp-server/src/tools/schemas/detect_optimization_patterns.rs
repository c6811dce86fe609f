use experiment_analysis::patterns::DEFAULT_PATTERN_TYPES;
use experiment_analysis::PatternResult;
use rmcp::schemars;
use serde::{Deserialize, Serialize};

fn default_pattern_types() -> Vec<String> {
    DEFAULT_PATTERN_TYPES.iter().map(|s| s.to_string()).collect()
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct DetectOptimizationPatternsRequest {
    #[schemars(description = "Code snippet to inspect")]
    pub code_snippet: String,

    #[schemars(description = "Programming language of the snippet")]
    pub language: String,

    /// Unknown names are scored with a neutral default
    #[serde(default = "default_pattern_types")]
    #[schemars(
        description = "Patterns to score: dynamic_programming, caching, two_pointers, sliding_window, hash_maps (others get a neutral score)"
    )]
    pub pattern_types: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct DetectOptimizationPatternsResult {
    pub language: String,
    pub requested: Vec<String>,
    /// Patterns scoring above 0.3, in request order
    pub patterns: Vec<PatternResult>,
    /// Top 3 by score
    pub recommendations: Vec<PatternResult>,
    pub total_detected: usize,
}
