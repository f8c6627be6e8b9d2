//! Banner search API endpoints.

use crate::PortscopeClient;
use portscope_core::{BannerCount, PortscopeError, Result, SearchResults};

/// Most matches a single search request may ask for
pub const MAX_SEARCH_RESULTS: u32 = 1000;

/// Number of matches requested when no limit is given
pub const DEFAULT_SEARCH_LIMIT: u32 = 100;

/// Search API endpoints
pub struct SearchApi<'a> {
    client: &'a PortscopeClient,
}

impl<'a> SearchApi<'a> {
    pub(crate) fn new(client: &'a PortscopeClient) -> Self {
        Self { client }
    }

    /// Search the banner index with a query string
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let results = client.search().query("apache").limit(10).send().await?;
    /// println!("Total: {}", results.total);
    /// ```
    #[must_use]
    pub fn query(&self, query: impl Into<String>) -> SearchRequestBuilder<'a> {
        SearchRequestBuilder::new(self.client, query.into())
    }

    /// Get the number of matches for a query without fetching any of them
    #[must_use]
    pub fn count(&self, query: impl Into<String>) -> CountRequestBuilder<'a> {
        CountRequestBuilder::new(self.client, query.into())
    }
}

/// Builder for search requests
pub struct SearchRequestBuilder<'a> {
    client: &'a PortscopeClient,
    query: String,
    limit: u32,
}

impl<'a> SearchRequestBuilder<'a> {
    fn new(client: &'a PortscopeClient, query: String) -> Self {
        Self {
            client,
            query,
            limit: DEFAULT_SEARCH_LIMIT,
        }
    }

    /// Set how many matches to fetch, up to [`MAX_SEARCH_RESULTS`]
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Execute the search
    pub async fn send(self) -> Result<SearchResults> {
        let query = validated(&self.query)?;
        if self.limit > MAX_SEARCH_RESULTS {
            return Err(PortscopeError::LimitExceeded {
                requested: self.limit,
                max: MAX_SEARCH_RESULTS,
            });
        }

        let limit = self.limit.to_string();
        let params = [("query", query), ("limit", limit.as_str())];

        self.client.get_with_query("/banners/search", &params).await
    }
}

/// Builder for count requests
pub struct CountRequestBuilder<'a> {
    client: &'a PortscopeClient,
    query: String,
}

impl<'a> CountRequestBuilder<'a> {
    fn new(client: &'a PortscopeClient, query: String) -> Self {
        Self { client, query }
    }

    /// Execute the count request
    pub async fn send(self) -> Result<BannerCount> {
        let query = validated(&self.query)?;

        self.client
            .get_with_query("/banners/count", &[("query", query)])
            .await
    }
}

/// Queries must contain something once surrounding whitespace is trimmed
fn validated(query: &str) -> Result<&str> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Err(PortscopeError::InvalidQuery(
            "empty search query".to_string(),
        ));
    }
    Ok(trimmed)
}
