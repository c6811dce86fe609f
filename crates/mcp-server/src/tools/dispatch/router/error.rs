use experiment_analysis::AnalysisError;
use experiment_protocol::ProtocolError;
use rmcp::model::ErrorCode as RpcErrorCode;
use rmcp::ErrorData as McpError;
use serde_json::json;
use thiserror::Error;

/// Failure raised while a handler runs.
#[derive(Error, Debug)]
pub enum ToolError {
    /// Passed through to the caller untouched.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error("Invalid arguments for {tool}: {source}")]
    InvalidArguments {
        tool: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize {tool} result: {source}")]
    Serialize {
        tool: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl From<ToolError> for ProtocolError {
    fn from(err: ToolError) -> Self {
        match err {
            ToolError::Protocol(inner) => inner,
            other => ProtocolError::internal(other.to_string()),
        }
    }
}

pub(crate) fn mcp_error(err: &ProtocolError) -> McpError {
    let code = err.code();
    McpError::new(
        RpcErrorCode(code.json_rpc_code()),
        err.message().to_string(),
        Some(json!({ "code": code.as_str() })),
    )
}
