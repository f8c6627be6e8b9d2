use super::Banner;
use serde::{Deserialize, Serialize};

/// Search results from /banners/search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResults {
    /// Matching banner records
    pub matches: Vec<Banner>,

    /// Total number of results in the index
    pub total: u64,
}

impl SearchResults {
    /// Returns true if there are no results
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Returns the number of matches in this batch
    #[must_use]
    pub fn len(&self) -> usize {
        self.matches.len()
    }
}

/// Result count from /banners/count
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BannerCount {
    /// Total number of matching results
    pub total: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_results_decode() {
        let body = r#"{"matches":[{"ip_str":"1.2.3.4","port":80}],"total":42}"#;
        let results: SearchResults = serde_json::from_str(body).unwrap();
        assert_eq!(results.total, 42);
        assert_eq!(results.len(), 1);
        assert!(!results.is_empty());
        assert_eq!(
            results.matches[0].get("port"),
            Some(&serde_json::json!(80))
        );
    }

    #[test]
    fn test_count_decode() {
        let count: BannerCount = serde_json::from_str(r#"{"total":1234}"#).unwrap();
        assert_eq!(count.total, 1234);
    }
}
