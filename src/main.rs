//! Nutritional Intake Resolution Engine
//!
//! An MCP server exposing the intake resolution engine over stdio.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

mod build_info;
mod engine;
mod mcp;
mod models;
mod tools;

use engine::ReferenceStore;
use mcp::IntakeService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (output to stderr to not interfere with MCP stdio)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("intake=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    // Print startup banner to stderr
    build_info::print_startup_banner();
    eprintln!("Starting MCP server on stdio...");

    // Build the reference table once; it is read-only afterward
    let store = ReferenceStore::standard();
    eprintln!(
        "Reference table: {} foods, {} keywords",
        store.food_count(),
        store.keyword_count()
    );

    // Create the intake service
    let service = IntakeService::new(store);

    // Create stdio transport
    let transport = (stdin(), stdout());

    // Start the MCP server
    let server = service.serve(transport).await?;

    // Wait for the server to complete
    server.waiting().await?;

    Ok(())
}
