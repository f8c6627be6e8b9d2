//! Command implementations.

pub mod count;
pub mod init;
pub mod myip;
pub mod parse;
pub mod search;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// PortScope API key
    pub api_key: Option<String>,

    /// Verbose output
    pub verbose: bool,
}

impl Context {
    /// Get the API key, returning an error if not set.
    pub fn require_api_key(&self) -> anyhow::Result<&str> {
        self.api_key
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("no API key found, run `portscope init <key>` first"))
    }

    /// Create a PortScope client with the configured API key.
    ///
    /// `PORTSCOPE_BASE_URL` points the client at an alternate endpoint
    /// instead of the production API.
    pub fn client(&self) -> anyhow::Result<portscope::PortscopeClient> {
        let key = self.require_api_key()?;
        if let Ok(base) = std::env::var("PORTSCOPE_BASE_URL") {
            return Ok(portscope::PortscopeClient::builder(key)
                .base_url(base)
                .build());
        }
        Ok(portscope::PortscopeClient::new(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_api_key_points_at_init() {
        let ctx = Context {
            api_key: None,
            verbose: false,
        };
        let err = ctx.require_api_key().unwrap_err();
        assert!(err.to_string().contains("portscope init"));
    }

    #[test]
    fn test_present_api_key_is_returned() {
        let ctx = Context {
            api_key: Some("abc".to_string()),
            verbose: false,
        };
        assert_eq!(ctx.require_api_key().unwrap(), "abc");
    }
}
