//! # portscope-cli
//!
//! Command-line interface for the PortScope banner search API.
//!
//! ## Features
//!
//! - **Live search**: query the banner index and render delimited rows
//! - **Offline parsing**: re-render downloaded `.json` / `.json.gz` result files
//! - **Field selection**: choose and order output columns per invocation
//! - **Colorized output**: per-field colors when writing to a terminal

pub mod cli;
pub mod config;
pub mod files;
pub mod output;

pub use cli::run;
