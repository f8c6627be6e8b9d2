//! Core types and errors for the PortScope API client.
//!
//! This crate provides the foundational types used across the PortScope
//! library:
//!
//! - **Types**: [`Banner`] records and their field decoding, plus the
//!   response types for the search, count and myip endpoints
//! - **Errors**: Comprehensive error handling with [`PortscopeError`]
//!
//! # Example
//!
//! ```rust
//! use portscope_core::{Banner, FieldValue};
//!
//! let banner: Banner = serde_json::from_str(r#"{"ip_str":"1.2.3.4","port":443}"#)?;
//! assert_eq!(banner.field("ip_str"), Some(FieldValue::Text("1.2.3.4".into())));
//! # Ok::<(), serde_json::Error>(())
//! ```

#![doc(html_root_url = "https://docs.rs/portscope-core/0.6.2")]

mod error;
pub mod types;

pub use error::{PortscopeError, Result};
pub use types::*;
