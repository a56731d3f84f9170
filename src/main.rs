//! TDEE Calculator
//!
//! An MCP server exposing the BMR and TDEE calculators over stdio.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tdee::build_info::BuildStamp;
use tdee::mcp::TdeeService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout stays reserved for MCP framing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("tdee=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    info!("{}", BuildStamp::current().banner());
    info!("starting MCP server on stdio");

    let service = TdeeService::new();
    let transport = (stdin(), stdout());

    let server = service.serve(transport).await?;
    server.waiting().await?;

    info!("MCP client disconnected, shutting down");
    Ok(())
}
