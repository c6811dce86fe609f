use experiment_analysis::CodeVariant;
use rmcp::schemars;
use serde::Deserialize;

pub const DEFAULT_TEST_ITERATIONS: u64 = 1_000;

fn default_test_iterations() -> u64 {
    DEFAULT_TEST_ITERATIONS
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct BenchmarkPerformanceRequest {
    #[schemars(description = "Original implementation used as the baseline")]
    pub original_code: String,

    /// Candidate implementations to compare against the baseline
    #[schemars(description = "Optimized variants to benchmark (at least one)")]
    pub optimized_variants: Vec<CodeVariantInput>,

    #[schemars(description = "Programming language of all snippets")]
    pub language: String,

    #[serde(default = "default_test_iterations")]
    #[schemars(description = "Simulated iterations per variant")]
    pub test_iterations: u64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CodeVariantInput {
    #[schemars(description = "Short variant name")]
    pub name: String,

    #[schemars(description = "Variant source code")]
    pub code: String,

    #[serde(default)]
    #[schemars(description = "What the variant changes")]
    pub description: String,
}

impl From<CodeVariantInput> for CodeVariant {
    fn from(input: CodeVariantInput) -> Self {
        Self {
            name: input.name,
            code: input.code,
            description: input.description,
        }
    }
}
