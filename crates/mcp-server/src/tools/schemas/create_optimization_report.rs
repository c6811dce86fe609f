use experiment_protocol::JsonObject;
use rmcp::schemars;
use serde::Deserialize;

fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CreateOptimizationReportRequest {
    /// Typically the output of `benchmark_performance`; missing fields count as zero/empty
    #[schemars(
        description = "Experiment results object (e.g. benchmark_performance output: results, best_variant, average_improvement)"
    )]
    pub experiment_data: JsonObject,

    #[serde(default = "default_true")]
    #[schemars(description = "Attach an ASCII bar chart")]
    pub include_visualizations: bool,
}
