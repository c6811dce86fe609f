use crate::complexity;
use crate::error::{AnalysisError, Result};
use crate::random::RandomSource;
use serde::{Deserialize, Serialize};

/// Floor applied to complexity scores before dividing.
pub const SCORE_FLOOR: f64 = 0.1;
pub const MIN_IMPROVEMENT_PERCENT: f64 = -20.0;
pub const MIN_MEMORY_MB: f64 = 0.5;
const BASE_MEMORY_MB: f64 = 10.0;
const MEMORY_SLOPE_MB: f64 = 30.0;
const JITTER_LOW: f64 = 0.8;
const JITTER_SPAN: f64 = 0.4;

/// A caller-supplied alternative implementation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeVariant {
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantBenchmark {
    pub name: String,
    pub description: String,
    pub complexity_score: usize,
    pub improvement_factor: f64,
    pub execution_time_ms: f64,
    pub memory_usage_mb: f64,
    pub improvement_percentage: f64,
    pub iterations_completed: u64,
    pub total_execution_time_ms: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestVariant {
    pub name: String,
    pub improvement_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkReport {
    pub language: String,
    pub iterations: u64,
    pub baseline_complexity_score: usize,
    pub results: Vec<VariantBenchmark>,
    pub best_variant: BestVariant,
    pub average_improvement: f64,
    /// Always true: numbers are derived from complexity scores, not measured.
    pub simulated: bool,
}

/// `baseline / variant`, both floored at [`SCORE_FLOOR`].
pub fn improvement_factor(baseline: f64, variant: f64) -> f64 {
    baseline.max(SCORE_FLOOR) / variant.max(SCORE_FLOOR)
}

/// Inverse improvement factor with ±20% jitter from `unit` in `[0, 1)`.
pub fn execution_time_ms(factor: f64, unit: f64) -> f64 {
    (1.0 / factor) * (JITTER_LOW + JITTER_SPAN * unit)
}

pub fn memory_usage_mb(factor: f64) -> f64 {
    (BASE_MEMORY_MB - MEMORY_SLOPE_MB * (factor - 1.0).max(0.0)).max(MIN_MEMORY_MB)
}

pub fn improvement_percentage(execution_time_ms: f64) -> f64 {
    ((1.0 - execution_time_ms) * 100.0).max(MIN_IMPROVEMENT_PERCENT)
}

fn pick_best(results: &[VariantBenchmark]) -> Option<BestVariant> {
    let mut best: Option<&VariantBenchmark> = None;
    for result in results {
        match best {
            Some(current) if result.improvement_percentage <= current.improvement_percentage => {}
            _ => best = Some(result),
        }
    }
    best.map(|winner| BestVariant {
        name: winner.name.clone(),
        improvement_percentage: winner.improvement_percentage,
    })
}

/// Derives synthetic timings for each variant relative to `original_code`.
pub fn simulate(
    original_code: &str,
    variants: &[CodeVariant],
    language: &str,
    iterations: u64,
    rng: &mut dyn RandomSource,
) -> Result<BenchmarkReport> {
    if variants.is_empty() {
        return Err(AnalysisError::EmptyVariants);
    }

    let baseline = complexity::analyze(original_code, language);
    let results: Vec<VariantBenchmark> = variants
        .iter()
        .map(|variant| {
            let score = complexity::analyze(&variant.code, language).complexity_score;
            let factor = improvement_factor(baseline.score(), score as f64);
            let time_ms = execution_time_ms(factor, rng.next_unit());
            VariantBenchmark {
                name: variant.name.clone(),
                description: variant.description.clone(),
                complexity_score: score,
                improvement_factor: factor,
                execution_time_ms: time_ms,
                memory_usage_mb: memory_usage_mb(factor),
                improvement_percentage: improvement_percentage(time_ms),
                iterations_completed: iterations,
                total_execution_time_ms: time_ms * iterations as f64,
            }
        })
        .collect();

    let best_variant = pick_best(&results).ok_or(AnalysisError::EmptyVariants)?;
    let average_improvement = results
        .iter()
        .map(|r| r.improvement_percentage)
        .sum::<f64>()
        / results.len() as f64;

    log::debug!(
        "benchmark: baseline={} variants={} best={} avg={average_improvement:.2}",
        baseline.complexity_score,
        results.len(),
        best_variant.name
    );

    Ok(BenchmarkReport {
        language: language.to_string(),
        iterations,
        baseline_complexity_score: baseline.complexity_score,
        results,
        best_variant,
        average_improvement,
        simulated: true,
    })
}
