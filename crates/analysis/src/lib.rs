//! # Experiment Analysis
//!
//! Deterministic, string-level heuristics behind the experiment tools.
//!
//! ## Architecture
//!
//! ```text
//! source string
//!     │
//!     ├──> complexity   (loop / nesting / recursion counts → score)
//!     │       │
//!     │       └──> benchmark (score ratios + RandomSource jitter → synthetic timings)
//!     │
//!     ├──> patterns     (fixed catalog → applicability scores, top-3 view)
//!     ├──> smells       (algorithm shapes, language-specific issues)
//!     │
//! categories ──> test_plan (canned scenario lists + framework convention)
//! results    ──> report    (summary counts + static chart)
//! ```
//!
//! None of these read or write shared state; only the benchmark takes a
//! caller-owned [`RandomSource`].

pub mod benchmark;
pub mod complexity;
mod error;
pub mod patterns;
pub mod random;
pub mod report;
pub mod smells;
pub mod test_plan;

pub use benchmark::{BenchmarkReport, BestVariant, CodeVariant, VariantBenchmark};
pub use complexity::ComplexityResult;
pub use error::{AnalysisError, Result};
pub use patterns::{Difficulty, PatternResult};
pub use random::{FixedRandom, RandomSource, SeededRandom, ThreadRandom};
pub use report::{ExperimentData, OptimizationReport, ReportSummary};
pub use smells::{AlgorithmFinding, Level, PerformanceIssue};
pub use test_plan::{TestPlan, TestSuite};
