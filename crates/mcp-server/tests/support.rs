use anyhow::{Context, Result};
use rmcp::model::{CallToolRequestParam, CallToolResult};
use rmcp::service::{RunningService, ServiceExt};
use rmcp::transport::TokioChildProcess;
use rmcp::{RoleClient, ServiceError};
use std::path::PathBuf;
use std::time::Duration;
use tokio::process::Command;

pub const TIMEOUT: Duration = Duration::from_secs(10);

pub fn locate_experiment_mcp_bin() -> Result<PathBuf> {
    if let Some(path) = option_env!("CARGO_BIN_EXE_experiment-mcp") {
        return Ok(PathBuf::from(path));
    }

    // `.../target/{debug|release}/deps/<test>` → `.../target/{debug|release}/experiment-mcp`
    if let Ok(exe) = std::env::current_exe() {
        if let Some(target_profile_dir) = exe.parent().and_then(|p| p.parent()) {
            let candidate = target_profile_dir.join("experiment-mcp");
            if candidate.exists() {
                return Ok(candidate);
            }
        }
    }

    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let repo_root = manifest_dir
        .ancestors()
        .nth(2)
        .context("failed to resolve repo root from CARGO_MANIFEST_DIR")?;
    for rel in ["target/debug/experiment-mcp", "target/release/experiment-mcp"] {
        let candidate = repo_root.join(rel);
        if candidate.exists() {
            return Ok(candidate);
        }
    }

    anyhow::bail!(
        "failed to locate experiment-mcp binary; build with: cargo build -p experiment-mcp"
    )
}

pub fn server_command() -> Result<Command> {
    let mut cmd = Command::new(locate_experiment_mcp_bin()?);
    cmd.env("RUST_LOG", "warn");
    cmd.env("EXPERIMENT_MCP_SEED", "7");
    Ok(cmd)
}

pub async fn start_server() -> Result<RunningService<RoleClient, ()>> {
    let transport = TokioChildProcess::new(server_command()?).context("spawn mcp server")?;
    let service = tokio::time::timeout(TIMEOUT, ().serve(transport))
        .await
        .context("timeout starting MCP server")??;
    Ok(service)
}

pub async fn call_tool_raw(
    service: &RunningService<RoleClient, ()>,
    name: &str,
    args: serde_json::Value,
) -> Result<Result<CallToolResult, ServiceError>> {
    tokio::time::timeout(
        TIMEOUT,
        service.call_tool(CallToolRequestParam {
            name: name.to_string().into(),
            arguments: args.as_object().cloned(),
        }),
    )
    .await
    .with_context(|| format!("timeout calling {name}"))
}

/// Calls `name` and parses its single JSON text block.
pub async fn call_tool_json(
    service: &RunningService<RoleClient, ()>,
    name: &str,
    args: serde_json::Value,
) -> Result<serde_json::Value> {
    let result = call_tool_raw(service, name, args)
        .await?
        .with_context(|| format!("call {name}"))?;
    assert_ne!(result.is_error, Some(true), "{name} returned error");
    assert_eq!(result.content.len(), 1, "{name} should return one block");
    let text = result
        .content
        .first()
        .and_then(|c| c.as_text())
        .map(|t| t.text.as_str())
        .with_context(|| format!("{name} missing text output"))?;
    serde_json::from_str(text).with_context(|| format!("parse {name} output"))
}
