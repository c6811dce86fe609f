use super::super::Dispatcher;
use super::error::ToolError;
use crate::tools::schemas::benchmark_performance::BenchmarkPerformanceRequest;
use experiment_analysis::{benchmark, BenchmarkReport, CodeVariant};

const MIN_ITERATIONS: u64 = 1;

pub(in crate::tools::dispatch) fn benchmark_performance(
    service: &Dispatcher,
    request: BenchmarkPerformanceRequest,
) -> Result<BenchmarkReport, ToolError> {
    let iterations = request
        .test_iterations
        .clamp(MIN_ITERATIONS, service.max_iterations().max(MIN_ITERATIONS));
    let variants: Vec<CodeVariant> = request
        .optimized_variants
        .into_iter()
        .map(CodeVariant::from)
        .collect();

    let report = service.with_random(|rng| {
        benchmark::simulate(
            &request.original_code,
            &variants,
            &request.language,
            iterations,
            rng,
        )
    })?;
    Ok(report)
}
