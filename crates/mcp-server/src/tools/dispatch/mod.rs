//! Tool dispatch for the experiment server.
//!
//! Resolves a tool name, decodes its arguments into the typed request, runs the handler and
//! wraps the JSON result in a single text content block.

mod router;

pub(crate) use router::error::mcp_error;

use super::catalog::ToolRegistry;
use experiment_analysis::RandomSource;
use experiment_protocol::{JsonObject, ProtocolError, ToolResponse};
use router::error::ToolError;
use std::str::FromStr;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Instant;

/// Upper bound applied to `test_iterations` when nothing else is configured.
pub const DEFAULT_MAX_ITERATIONS: u64 = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolName {
    AnalyzeCodeComplexity,
    BenchmarkPerformance,
    DetectOptimizationPatterns,
    GenerateTestCases,
    CreateOptimizationReport,
}

impl ToolName {
    pub const ALL: [ToolName; 5] = [
        ToolName::AnalyzeCodeComplexity,
        ToolName::BenchmarkPerformance,
        ToolName::DetectOptimizationPatterns,
        ToolName::GenerateTestCases,
        ToolName::CreateOptimizationReport,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AnalyzeCodeComplexity => "analyze_code_complexity",
            Self::BenchmarkPerformance => "benchmark_performance",
            Self::DetectOptimizationPatterns => "detect_optimization_patterns",
            Self::GenerateTestCases => "generate_test_cases",
            Self::CreateOptimizationReport => "create_optimization_report",
        }
    }
}

impl FromStr for ToolName {
    type Err = ProtocolError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tool| tool.as_str() == name)
            .ok_or_else(|| ProtocolError::tool_not_found(name))
    }
}

/// Routes tool calls to their handlers. Handlers share the registry and the random source.
pub struct Dispatcher {
    registry: Arc<ToolRegistry>,
    rng: Mutex<Box<dyn RandomSource>>,
    max_iterations: u64,
}

impl Dispatcher {
    pub fn new(registry: Arc<ToolRegistry>, rng: Box<dyn RandomSource>) -> Self {
        Self {
            registry,
            rng: Mutex::new(rng),
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }

    pub fn with_max_iterations(mut self, max_iterations: u64) -> Self {
        self.max_iterations = max_iterations.max(1);
        self
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    pub(crate) fn max_iterations(&self) -> u64 {
        self.max_iterations
    }

    /// Runs `f` with exclusive access to the random source.
    pub(crate) fn with_random<T>(&self, f: impl FnOnce(&mut dyn RandomSource) -> T) -> T {
        let mut guard = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        f(guard.as_mut())
    }

    /// Executes the named tool. Unknown names fail with `MethodNotFound`, everything else that
    /// goes wrong surfaces as `InternalError`.
    pub fn invoke(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<ToolResponse, ProtocolError> {
        let started = Instant::now();
        let tool = ToolName::from_str(name)?;
        if !self.registry.contains(tool.as_str()) {
            return Err(ProtocolError::tool_not_found(name));
        }

        let result = self.run(tool, without_nulls(arguments.unwrap_or_default()));
        let elapsed_ms = started.elapsed().as_millis();
        match &result {
            Ok(_) => log::debug!("{} completed in {elapsed_ms}ms", tool.as_str()),
            Err(err) => log::warn!("{} failed after {elapsed_ms}ms: {err}", tool.as_str()),
        }
        result.map_err(ProtocolError::from)
    }

    fn run(&self, tool: ToolName, input: JsonObject) -> Result<ToolResponse, ToolError> {
        let input = serde_json::Value::Object(input);

        macro_rules! typed_call {
            ($req:ty, $func:path) => {{
                let request = serde_json::from_value::<$req>(input).map_err(|source| {
                    ToolError::InvalidArguments {
                        tool: tool.as_str(),
                        source,
                    }
                })?;
                let output = $func(self, request)?;
                ToolResponse::json(&output).map_err(|source| ToolError::Serialize {
                    tool: tool.as_str(),
                    source,
                })
            }};
        }

        use super::schemas::analyze_code_complexity::AnalyzeCodeComplexityRequest;
        use super::schemas::benchmark_performance::BenchmarkPerformanceRequest;
        use super::schemas::create_optimization_report::CreateOptimizationReportRequest;
        use super::schemas::detect_optimization_patterns::DetectOptimizationPatternsRequest;
        use super::schemas::generate_test_cases::GenerateTestCasesRequest;

        match tool {
            ToolName::AnalyzeCodeComplexity => typed_call!(
                AnalyzeCodeComplexityRequest,
                router::analyze_code_complexity::analyze_code_complexity
            ),
            ToolName::BenchmarkPerformance => typed_call!(
                BenchmarkPerformanceRequest,
                router::benchmark_performance::benchmark_performance
            ),
            ToolName::DetectOptimizationPatterns => typed_call!(
                DetectOptimizationPatternsRequest,
                router::detect_optimization_patterns::detect_optimization_patterns
            ),
            ToolName::GenerateTestCases => typed_call!(
                GenerateTestCasesRequest,
                router::generate_test_cases::generate_test_cases
            ),
            ToolName::CreateOptimizationReport => typed_call!(
                CreateOptimizationReportRequest,
                router::create_optimization_report::create_optimization_report
            ),
        }
    }
}

/// Top-level `null` arguments count as absent so that defaults apply.
fn without_nulls(mut arguments: JsonObject) -> JsonObject {
    arguments.retain(|_, value| !value.is_null());
    arguments
}
