use super::dispatch::ToolName;
use super::schemas::analyze_code_complexity::AnalyzeCodeComplexityRequest;
use super::schemas::benchmark_performance::BenchmarkPerformanceRequest;
use super::schemas::create_optimization_report::CreateOptimizationReportRequest;
use super::schemas::detect_optimization_patterns::DetectOptimizationPatternsRequest;
use super::schemas::generate_test_cases::GenerateTestCasesRequest;
use experiment_protocol::{JsonObject, ToolDefinition, PROTOCOL_SCHEMA_VERSION};
use rmcp::schemars::{self, generate::SchemaSettings};
use serde_json::json;
use std::sync::Arc;

#[derive(Clone, Copy, Debug)]
pub(crate) struct ToolDescriptor {
    pub(crate) name: ToolName,
    pub(crate) summary: &'static str,
    pub(crate) description: &'static str,
}

pub(crate) const TOOL_CATALOG: &[ToolDescriptor] = &[
    ToolDescriptor {
        name: ToolName::AnalyzeCodeComplexity,
        summary: "Loop/recursion counts, Big-O class, patterns and smells.",
        description: "Analyze a code snippet: loop and nesting counts, a recursion proxy, Big-O time/space classification and a complexity score. Optionally scores optimization patterns and lists algorithm shapes, language-specific performance issues and target-specific suggestions.",
    },
    ToolDescriptor {
        name: ToolName::BenchmarkPerformance,
        summary: "Simulated timings of variants vs. the original.",
        description: "Compare optimized variants against the original code. Timings are simulated from complexity-score ratios with bounded random jitter (not executed). Returns per-variant time, memory and improvement plus the best variant and the average improvement.",
    },
    ToolDescriptor {
        name: ToolName::DetectOptimizationPatterns,
        summary: "Applicability scores for optimization patterns.",
        description: "Score how well optimization patterns (dynamic programming, caching, two pointers, sliding window, hash maps) apply to a snippet. Only patterns scoring above 0.3 are returned, plus a top-3 recommendation list.",
    },
    ToolDescriptor {
        name: ToolName::GenerateTestCases,
        summary: "Canned test scenarios per category + framework.",
        description: "Expand test categories (edge_cases, performance, correctness, error_handling) into scenario titles for a function signature and suggest a test framework for the language.",
    },
    ToolDescriptor {
        name: ToolName::CreateOptimizationReport,
        summary: "Summary report (+ ASCII chart) from experiment data.",
        description: "Build an optimization report from experiment results: summary counts, best variant, average improvement, an optional ASCII bar chart and generic next-step recommendations.",
    },
];

fn schema_for<T: schemars::JsonSchema>() -> JsonObject {
    let mut settings = SchemaSettings::draft07();
    settings.inline_subschemas = true;
    let schema = settings.into_generator().into_root_schema_for::<T>();
    match serde_json::to_value(schema) {
        Ok(serde_json::Value::Object(object)) => object,
        Ok(other) => {
            log::warn!("input schema is not an object: {other}");
            JsonObject::new()
        }
        Err(err) => {
            log::warn!("failed to serialize input schema: {err}");
            JsonObject::new()
        }
    }
}

fn input_schema(tool: ToolName) -> JsonObject {
    match tool {
        ToolName::AnalyzeCodeComplexity => schema_for::<AnalyzeCodeComplexityRequest>(),
        ToolName::BenchmarkPerformance => schema_for::<BenchmarkPerformanceRequest>(),
        ToolName::DetectOptimizationPatterns => schema_for::<DetectOptimizationPatternsRequest>(),
        ToolName::GenerateTestCases => schema_for::<GenerateTestCasesRequest>(),
        ToolName::CreateOptimizationReport => schema_for::<CreateOptimizationReportRequest>(),
    }
}

/// Immutable tool catalog, built once at startup and shared by reference.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    tools: Vec<ToolDefinition>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        let tools = TOOL_CATALOG
            .iter()
            .map(|tool| ToolDefinition {
                name: tool.name.as_str().to_string(),
                description: tool.description.to_string(),
                input_schema: input_schema(tool.name),
            })
            .collect();
        Self { tools }
    }

    pub fn list_tools(&self) -> &[ToolDefinition] {
        &self.tools
    }

    pub fn get(&self, name: &str) -> Option<&ToolDefinition> {
        self.tools.iter().find(|tool| tool.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn mcp_tools(&self) -> Vec<rmcp::model::Tool> {
        self.tools
            .iter()
            .map(|tool| {
                rmcp::model::Tool::new(
                    tool.name.clone(),
                    tool.description.clone(),
                    Arc::new(tool.input_schema.clone()),
                )
            })
            .collect()
    }

    pub fn inventory_json(&self, version: &str) -> serde_json::Value {
        json!({
            "binary": "experiment-mcp",
            "version": version,
            "schema_version": PROTOCOL_SCHEMA_VERSION,
            "count": self.tools.len(),
            "tools": self.tools,
        })
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn tool_instructions() -> String {
    let mut lines = vec![
        "Code experiment tools: heuristic analysis and simulated benchmarks for code snippets."
            .to_string(),
        "Recommended flow: analyze_code_complexity → detect_optimization_patterns → benchmark_performance → create_optimization_report."
            .to_string(),
        "Tools:".to_string(),
    ];
    for tool in TOOL_CATALOG {
        lines.push(format!("- {}: {}", tool.name.as_str(), tool.summary));
    }
    lines.join("\n")
}
