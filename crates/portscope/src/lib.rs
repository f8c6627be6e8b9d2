//! Rust client for the PortScope banner search API.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use portscope::PortscopeClient;
//!
//! #[tokio::main]
//! async fn main() -> portscope::Result<()> {
//!     let client = PortscopeClient::new("your-api-key");
//!
//!     // Count matches without fetching them
//!     let count = client.search().count("port:22").send().await?;
//!     println!("Total: {} banners", count.total);
//!
//!     // Search with query
//!     let results = client.search()
//!         .query("apache country:US")
//!         .limit(10)
//!         .send()
//!         .await?;
//!
//!     for banner in &results.matches {
//!         println!("{:?}", banner.field("ip_str"));
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `default` - Uses rustls for TLS
//! - `rustls` - Use rustls for TLS (recommended)
//! - `native-tls` - Use system native TLS

#![doc(html_root_url = "https://docs.rs/portscope/0.6.2")]

// Re-export core types
pub use portscope_core::*;

// Re-export client
pub use portscope_client::{PortscopeClient, PortscopeClientBuilder};

// Re-export runtime for convenience
pub use tokio;
pub use serde;
pub use serde_json;
