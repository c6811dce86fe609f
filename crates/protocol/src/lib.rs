use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const PROTOCOL_SCHEMA_VERSION: u32 = 1;

pub type JsonObject = serde_json::Map<String, serde_json::Value>;

/// A named, schema-described operation advertised to callers.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: JsonObject,
}

impl ToolDefinition {
    /// Names of the fields the input schema lists under `required`.
    pub fn required_fields(&self) -> Vec<&str> {
        self.input_schema
            .get("required")
            .and_then(|v| v.as_array())
            .map(|items| items.iter().filter_map(|v| v.as_str()).collect())
            .unwrap_or_default()
    }

    /// Default value the schema documents for `field`, if any.
    pub fn field_default(&self, field: &str) -> Option<&serde_json::Value> {
        self.input_schema
            .get("properties")
            .and_then(|props| props.get(field))
            .and_then(|prop| prop.get("default"))
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TextContent {
    Text { text: String },
}

impl TextContent {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Text { text } => text,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Self::Text { text } => text,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
pub struct ToolResponse {
    pub content: Vec<TextContent>,
}

impl ToolResponse {
    /// Single text block carrying a pretty-printed JSON payload.
    pub fn json<T: Serialize>(value: &T) -> serde_json::Result<Self> {
        let text = serde_json::to_string_pretty(value)?;
        Ok(Self {
            content: vec![TextContent::text(text)],
        })
    }

    pub fn first_text(&self) -> Option<&str> {
        self.content.first().map(TextContent::as_str)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    MethodNotFound,
    InternalError,
}

impl ErrorCode {
    /// JSON-RPC 2.0 numeric code.
    pub const fn json_rpc_code(self) -> i32 {
        match self {
            Self::MethodNotFound => -32601,
            Self::InternalError => -32603,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MethodNotFound => "method_not_found",
            Self::InternalError => "internal_error",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("{0}")]
    MethodNotFound(String),

    #[error("{0}")]
    InternalError(String),
}

impl ProtocolError {
    pub fn tool_not_found(name: &str) -> Self {
        Self::MethodNotFound(format!("Tool {name} not found"))
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::MethodNotFound(_) => ErrorCode::MethodNotFound,
            Self::InternalError(_) => ErrorCode::InternalError,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::MethodNotFound(message) | Self::InternalError(message) => message,
        }
    }
}
