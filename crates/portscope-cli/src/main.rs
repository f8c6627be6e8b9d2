//! portscope - PortScope banner search CLI
//!
//! A command-line client for the PortScope banner search API.

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    portscope_cli::run().await
}
