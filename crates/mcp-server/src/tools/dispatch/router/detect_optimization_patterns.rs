use super::super::Dispatcher;
use super::error::ToolError;
use crate::tools::schemas::detect_optimization_patterns::{
    DetectOptimizationPatternsRequest, DetectOptimizationPatternsResult,
};
use experiment_analysis::patterns;

pub(in crate::tools::dispatch) fn detect_optimization_patterns(
    _service: &Dispatcher,
    request: DetectOptimizationPatternsRequest,
) -> Result<DetectOptimizationPatternsResult, ToolError> {
    let found = patterns::detect(
        &request.code_snippet,
        &request.language,
        request.pattern_types.as_slice(),
    );
    let recommendations = patterns::recommend(&found);

    Ok(DetectOptimizationPatternsResult {
        language: request.language,
        requested: request.pattern_types,
        total_detected: found.len(),
        patterns: found,
        recommendations,
    })
}
