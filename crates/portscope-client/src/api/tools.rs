//! Utility API endpoints.

use crate::PortscopeClient;
use portscope_core::{MyIp, Result};

/// Utility API endpoints
pub struct ToolsApi<'a> {
    client: &'a PortscopeClient,
}

impl<'a> ToolsApi<'a> {
    pub(crate) fn new(client: &'a PortscopeClient) -> Self {
        Self { client }
    }

    /// Get your current public IP address as seen by the API
    pub async fn my_ip(&self) -> Result<MyIp> {
        self.client.get("/tools/myip").await
    }
}
