//! Experiment MCP tool surface.
//!
//! Schemas, the static catalog and the dispatcher live in submodules; this module adapts them to
//! the rmcp server handler.

pub(crate) mod catalog;
pub(crate) mod dispatch;
mod schemas;
mod util;

pub use catalog::ToolRegistry;
pub use dispatch::{Dispatcher, ToolName};

use dispatch::mcp_error;
use rmcp::model::{
    CallToolRequestParam, CallToolResult, Content, Implementation, ListToolsResult,
    PaginatedRequestParam, ServerCapabilities, ServerInfo,
};
use rmcp::service::RequestContext;
use rmcp::{ErrorData as McpError, RoleServer, ServerHandler};
use std::sync::Arc;

/// Experiment MCP service
#[derive(Clone)]
pub struct ExperimentService {
    dispatcher: Arc<Dispatcher>,
}

impl ExperimentService {
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }
}

impl ServerHandler for ExperimentService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(catalog::tool_instructions()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult::with_all_items(
            self.dispatcher.registry().mcp_tools(),
        ))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let response = self
            .dispatcher
            .invoke(&request.name, request.arguments)
            .map_err(|err| mcp_error(&err))?;
        let content = response
            .content
            .into_iter()
            .map(|block| Content::text(block.into_text()))
            .collect();
        Ok(CallToolResult::success(content))
    }
}
