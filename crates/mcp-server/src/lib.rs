//! Experiment MCP Server
//!
//! Heuristic code-experiment tools for AI agents over the MCP protocol.
//!
//! ## Tools
//!
//! - `analyze_code_complexity` - Loop/recursion counts and a Big-O estimate
//! - `benchmark_performance` - Simulated timings of optimized variants
//! - `detect_optimization_patterns` - Applicability scores for optimization patterns
//! - `generate_test_cases` - Test scenario titles per category
//! - `create_optimization_report` - Summary report from experiment results
//!
//! ## Usage
//!
//! Add to your MCP client configuration:
//! ```json
//! {
//!   "mcpServers": {
//!     "experiment": {
//!       "command": "experiment-mcp"
//!     }
//!   }
//! }
//! ```

use anyhow::Result;
use experiment_analysis::{RandomSource, SeededRandom, ThreadRandom};
use rmcp::transport::stdio;
use rmcp::ServiceExt;
use std::sync::Arc;

pub mod runtime_env;
pub mod tools;

use runtime_env::ServerConfig;
use tools::{Dispatcher, ExperimentService, ToolRegistry};

const PRINT_TOOLS_FLAG: &str = "--print-tools";

fn random_source(config: &ServerConfig) -> Box<dyn RandomSource> {
    match config.seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(ThreadRandom),
    }
}

pub fn build_dispatcher(config: &ServerConfig) -> Dispatcher {
    Dispatcher::new(Arc::new(ToolRegistry::new()), random_source(config))
        .with_max_iterations(config.max_iterations)
}

pub async fn main_entry() -> Result<()> {
    if std::env::args().skip(1).any(|arg| arg == PRINT_TOOLS_FLAG) {
        let inventory = ToolRegistry::new().inventory_json(env!("CARGO_PKG_VERSION"));
        println!("{}", serde_json::to_string_pretty(&inventory)?);
        return Ok(());
    }

    let config = ServerConfig::from_env();

    // stdout carries protocol frames; logs go to stderr.
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_filter.as_str()),
    )
    .target(env_logger::Target::Stderr)
    .init();

    for warning in &config.warnings {
        log::warn!("{warning}");
    }
    log::info!(
        "Starting experiment MCP server (seeded={}, max_iterations={})",
        config.seed.is_some(),
        config.max_iterations
    );

    let service = ExperimentService::new(Arc::new(build_dispatcher(&config)));
    let server = service.serve(stdio()).await?;
    server.waiting().await?;

    log::info!("Experiment MCP server stopped");
    Ok(())
}
