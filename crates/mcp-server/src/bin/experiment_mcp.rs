use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    experiment_mcp::main_entry().await
}
