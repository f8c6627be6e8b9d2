//! Basic example demonstrating PortScope API usage.
//!
//! Run with: cargo run --example basic_search
//!
//! Set the PORTSCOPE_API_KEY environment variable before running.

use portscope::{PortscopeClient, Result};

#[tokio::main]
async fn main() -> Result<()> {
    // Get API key from environment
    let api_key = std::env::var("PORTSCOPE_API_KEY")
        .expect("PORTSCOPE_API_KEY environment variable is required");

    // Create client
    let client = PortscopeClient::new(&api_key);

    // Get your public IP
    println!("=== My IP ===");
    let my_ip = client.tools().my_ip().await?;
    println!("Your IP: {my_ip}");
    println!();

    // Count matches without fetching them
    println!("=== Search Count ===");
    let count = client.search().count("port:22").send().await?;
    println!("Total SSH banners: {}", count.total);
    println!();

    // Fetch a small page of matches
    println!("=== Search: apache ===");
    let results = client.search().query("apache").limit(5).send().await?;
    println!("Total matches: {}", results.total);
    for banner in &results.matches {
        if let Some(ip) = banner.field("ip_str") {
            println!("  {}", ip.as_text().unwrap_or("?"));
        }
    }

    Ok(())
}
