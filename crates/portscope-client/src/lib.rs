//! HTTP client for the PortScope API.
//!
//! This crate provides the main [`PortscopeClient`] for interacting with the PortScope API.

#![doc(html_root_url = "https://docs.rs/portscope-client/0.6.2")]

mod client;
pub mod api;

pub use client::{PortscopeClient, PortscopeClientBuilder};
pub use portscope_core::{PortscopeError, Result};
