//! Command-line argument definitions using clap.

use clap::{Args, Parser, Subcommand};

/// Command-line client for the PortScope banner search API
///
/// Search the banner index, count matches, look up your own IP, and
/// re-render downloaded result files as delimited rows.
///
/// Get your API key at: https://account.portscope.io
#[derive(Parser, Debug)]
#[command(name = "portscope")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// PortScope API key (or set PORTSCOPE_API_KEY env var)
    #[arg(short = 'k', long, env = "PORTSCOPE_API_KEY", global = true)]
    pub api_key: Option<String>,

    /// Increase verbosity
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Store your API key for later invocations
    Init(InitArgs),

    /// Count matches without fetching them
    Count(CountArgs),

    /// Show your public IP address
    Myip,

    /// Search the banner index
    Search(SearchArgs),

    /// Render a downloaded banner file offline
    Parse(ParseArgs),
}

// ============================================================================
// Init command
// ============================================================================

#[derive(Args, Debug)]
pub struct InitArgs {
    /// API key to store
    pub key: String,
}

// ============================================================================
// Count command
// ============================================================================

#[derive(Args, Debug)]
pub struct CountArgs {
    /// Search query (e.g., "apache country:US port:80")
    #[arg(required = true)]
    pub query: Vec<String>,
}

// ============================================================================
// Search command
// ============================================================================

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search query (e.g., "apache country:US port:80")
    #[arg(required = true)]
    pub query: Vec<String>,

    /// Colorize rendered fields (default)
    #[arg(long, overrides_with = "no_color")]
    pub color: bool,

    /// Disable colorized output
    #[arg(long = "no-color", overrides_with = "color")]
    pub no_color: bool,

    /// Comma-separated list of banner fields to show
    #[arg(short, long, default_value = "ip_str,port,hostnames,data")]
    pub fields: String,

    /// Maximum number of results to fetch (up to 1000)
    #[arg(short, long, default_value_t = 100)]
    pub limit: u32,

    /// Separator between fields
    #[arg(short, long, default_value = "\t")]
    pub separator: String,
}

impl SearchArgs {
    /// Effective color choice after the --color/--no-color pair is resolved.
    #[must_use]
    pub fn colorize(&self) -> bool {
        !self.no_color
    }
}

// ============================================================================
// Parse command
// ============================================================================

#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Banner file to render (.json or .json.gz)
    pub filename: String,

    /// Colorize rendered fields (default)
    #[arg(long, overrides_with = "no_color")]
    pub color: bool,

    /// Disable colorized output
    #[arg(long = "no-color", overrides_with = "color")]
    pub no_color: bool,

    /// Comma-separated list of banner fields to show
    #[arg(short, long, default_value = "ip_str,port,hostnames,data")]
    pub fields: String,

    /// Separator between fields
    #[arg(short, long, default_value = "\t")]
    pub separator: String,
}

impl ParseArgs {
    /// Effective color choice after the --color/--no-color pair is resolved.
    #[must_use]
    pub fn colorize(&self) -> bool {
        !self.no_color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(argv: &[&str]) -> Commands {
        Cli::try_parse_from(argv).unwrap().command
    }

    #[test]
    fn test_color_defaults_on() {
        let Commands::Search(args) = command(&["portscope", "search", "nginx"]) else {
            panic!("expected search");
        };
        assert!(args.colorize());
    }

    #[test]
    fn test_last_color_flag_wins() {
        let Commands::Search(args) =
            command(&["portscope", "search", "--color", "--no-color", "nginx"])
        else {
            panic!("expected search");
        };
        assert!(!args.colorize());

        let Commands::Search(args) =
            command(&["portscope", "search", "--no-color", "--color", "nginx"])
        else {
            panic!("expected search");
        };
        assert!(args.colorize());
    }

    #[test]
    fn test_parse_resolves_the_flag_pair_the_same_way() {
        let Commands::Parse(args) = command(&["portscope", "parse", "--no-color", "f.json"])
        else {
            panic!("expected parse");
        };
        assert!(!args.colorize());
    }
}
