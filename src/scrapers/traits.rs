use crate::models::JobListing;
use crate::scrapers::types::SearchParams;
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for all job-board scrapers
/// This allows easy addition of new boards (LinkedIn, Glassdoor, etc) in the future
#[async_trait]
pub trait ScraperTrait: Send + Sync {
    /// Walk the board's result pages for the given search
    async fn scrape(&self, params: &SearchParams) -> Result<Vec<JobListing>>;

    /// Get the name of the scraper source
    fn source_name(&self) -> &'static str;
}
