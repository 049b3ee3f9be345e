use rand::prelude::IndexedRandom;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Search parameters for a scrape run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchParams {
    /// Free-text search query
    pub query: String,
    /// Location filter, free text
    pub location: String,
    /// Number of result pages to walk
    pub pages: usize,
    /// Fetch the full description for every listing found
    pub fetch_descriptions: bool,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            query: "Python Developer".to_string(),
            location: "Chennai".to_string(),
            pages: 1,
            fetch_descriptions: false,
        }
    }
}

/// Scrape failures the orchestration needs to tell apart from plain
/// navigation or protocol errors.
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    /// The listing container never appeared. On the first page this means
    /// the scrape is broken (or the markup changed); on later pages it is
    /// read as the end of the result set.
    #[error("no listing cards rendered within {0:?}")]
    ListingsNotRendered(Duration),
}

/// Browser identities rotated across sessions and detail fetches.
pub const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) Chrome/123 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) Safari/605.1.15",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
];

pub fn random_user_agent() -> &'static str {
    USER_AGENTS.choose(&mut rand::rng()).unwrap()
}
