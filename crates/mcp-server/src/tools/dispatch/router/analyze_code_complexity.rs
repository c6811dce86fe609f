use super::super::Dispatcher;
use super::error::ToolError;
use crate::tools::schemas::analyze_code_complexity::{
    AnalyzeCodeComplexityRequest, AnalyzeCodeComplexityResult,
};
use experiment_analysis::patterns::{self, DEFAULT_PATTERN_TYPES};
use experiment_analysis::{complexity, smells};

pub(in crate::tools::dispatch) fn analyze_code_complexity(
    _service: &Dispatcher,
    request: AnalyzeCodeComplexityRequest,
) -> Result<AnalyzeCodeComplexityResult, ToolError> {
    let code = request.code.as_str();
    let language = request.language.as_str();

    let complexity = request
        .include_complexity
        .then(|| complexity::analyze(code, language));

    let (found, recommended) = if request.include_patterns {
        let found = patterns::detect(code, language, DEFAULT_PATTERN_TYPES);
        let recommended = patterns::recommend(&found);
        (Some(found), Some(recommended))
    } else {
        (None, None)
    };

    Ok(AnalyzeCodeComplexityResult {
        complexity,
        patterns: found,
        recommended_patterns: recommended,
        algorithms: smells::detect_algorithms(code),
        performance_issues: smells::detect_performance_issues(code, language),
        suggestions: smells::target_suggestions(&request.optimization_target),
        language: request.language,
        optimization_target: request.optimization_target,
    })
}
