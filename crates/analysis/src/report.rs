use serde::{Deserialize, Serialize};

const CHART: &str = "\
Performance Improvement (relative to original)
Original   |####################| 100%
Variant 1  |################    |  80%
Variant 2  |############        |  60%
Variant 3  |########            |  40%
";

const RECOMMENDATIONS: &[&str] = &[
    "Adopt the best-performing variant after validating it against the full test suite.",
    "Re-run the benchmark on production-sized inputs before rollout.",
    "Profile memory usage of the chosen variant under sustained load.",
    "Keep the original implementation as a reference for regression tests.",
];

/// Experiment results as handed back by a caller. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentData {
    pub experiment_id: Option<String>,
    pub language: Option<String>,
    pub results: Vec<ExperimentResult>,
    pub best_variant: Option<ExperimentBest>,
    pub average_improvement: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentResult {
    pub name: String,
    pub improvement_percentage: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentBest {
    pub name: String,
    pub improvement_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total_variants: usize,
    pub improved_variants: usize,
    pub best_variant: Option<String>,
    pub best_improvement: f64,
    pub average_improvement: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationReport {
    pub experiment_id: Option<String>,
    pub language: Option<String>,
    pub summary: ReportSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visualization: Option<String>,
    pub recommendations: Vec<String>,
    pub generated_at_unix_ms: u64,
}

fn summarize(data: &ExperimentData) -> ReportSummary {
    let best = data.best_variant.as_ref();
    ReportSummary {
        total_variants: data.results.len(),
        improved_variants: data
            .results
            .iter()
            .filter(|r| r.improvement_percentage > 0.0)
            .count(),
        best_variant: best.map(|b| b.name.clone()),
        best_improvement: best.map(|b| b.improvement_percentage).unwrap_or(0.0),
        average_improvement: data.average_improvement,
    }
}

pub fn ascii_chart() -> &'static str {
    CHART
}

pub fn compose(data: &ExperimentData, include_visualization: bool, generated_at_unix_ms: u64) -> OptimizationReport {
    OptimizationReport {
        experiment_id: data.experiment_id.clone(),
        language: data.language.clone(),
        summary: summarize(data),
        visualization: include_visualization.then(|| ascii_chart().to_string()),
        recommendations: RECOMMENDATIONS.iter().map(|s| s.to_string()).collect(),
        generated_at_unix_ms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn empty_data_defaults_to_zero() {
        let data: ExperimentData = serde_json::from_value(json!({})).unwrap();
        let report = compose(&data, false, 0);
        assert_eq!(
            report.summary,
            ReportSummary {
                total_variants: 0,
                improved_variants: 0,
                best_variant: None,
                best_improvement: 0.0,
                average_improvement: 0.0,
            }
        );
        assert_eq!(report.visualization, None);
        assert_eq!(report.recommendations.len(), RECOMMENDATIONS.len());
    }

    #[test]
    fn benchmark_shaped_data_is_summarized() {
        let data: ExperimentData = serde_json::from_value(json!({
            "language": "javascript",
            "iterations": 1000,
            "results": [
                { "name": "hash", "improvement_percentage": 62.5, "memory_usage_mb": 0.5 },
                { "name": "same", "improvement_percentage": -4.0 }
            ],
            "best_variant": { "name": "hash", "improvement_percentage": 62.5 },
            "average_improvement": 29.25
        }))
        .unwrap();
        let report = compose(&data, true, 1);
        assert_eq!(report.summary.total_variants, 2);
        assert_eq!(report.summary.improved_variants, 1);
        assert_eq!(report.summary.best_variant.as_deref(), Some("hash"));
        assert_eq!(report.summary.best_improvement, 62.5);
        assert_eq!(report.language.as_deref(), Some("javascript"));
        assert!(report.visualization.unwrap().contains("Variant 1"));
    }

    #[test]
    fn visualization_is_the_static_chart() {
        let data: ExperimentData = serde_json::from_value(json!({ "results": [] })).unwrap();
        let report = compose(&data, true, 0);
        assert_eq!(report.visualization.as_deref(), Some(ascii_chart()));
    }
}
