use crate::models::JobListing;
use crate::scrapers::types::random_user_agent;
use crate::text::clean_text;
use anyhow::{Context, Result};
use futures::stream::{self, StreamExt};
use reqwest::header::USER_AGENT;
use reqwest::Client;
use scraper::{Html, Selector};
use std::time::Duration;
use tracing::{info, warn};

const FETCH_TIMEOUT: Duration = Duration::from_secs(15);
const MAX_IN_FLIGHT: usize = 5;
const DESCRIPTION_CONTAINER: &str = "#jobDescriptionText";

/// Fetches full job descriptions from detail pages over plain HTTP, a
/// bounded number at a time.
pub struct DescriptionEnricher {
    client: Client,
}

impl DescriptionEnricher {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self { client })
    }

    /// Fill in `description` for every listing that has a detail URL.
    /// Fetches run concurrently but each result lands back in its own record
    /// slot, so listing order never depends on completion order.
    pub async fn enrich(&self, listings: &mut [JobListing]) {
        let fetches: Vec<_> = listings
            .iter()
            .enumerate()
            .filter(|(_, listing)| !listing.url.is_empty())
            .map(|(index, listing)| {
                let client = self.client.clone();
                let url = listing.url.clone();
                async move { (index, fetch_description(&client, &url).await) }
            })
            .collect();

        let total = fetches.len();
        let results: Vec<(usize, Option<String>)> = stream::iter(fetches)
            .buffer_unordered(MAX_IN_FLIGHT)
            .collect()
            .await;

        let failed = results.iter().filter(|(_, d)| d.is_none()).count();
        apply_descriptions(listings, results);

        if failed > 0 {
            warn!("{}/{} description fetches failed", failed, total);
        } else {
            info!("Fetched {} descriptions", total);
        }
    }
}

/// `None` marks a failed fetch; a fetched page without the description
/// container comes back as `Some("")`.
async fn fetch_description(client: &Client, url: &str) -> Option<String> {
    match fetch_detail_page(client, url).await {
        Ok(body) => Some(extract_description(&body)),
        Err(e) => {
            warn!("Description fetch failed for {}: {:#}", url, e);
            None
        }
    }
}

async fn fetch_detail_page(client: &Client, url: &str) -> Result<String> {
    let response = client
        .get(url)
        .header(USER_AGENT, random_user_agent())
        .send()
        .await
        .context("Failed to fetch detail page")?
        .error_for_status()
        .context("Detail page returned an error status")?;

    response.text().await.context("Failed to read response body")
}

fn extract_description(html: &str) -> String {
    let document = Html::parse_document(html);
    let container = Selector::parse(DESCRIPTION_CONTAINER).unwrap();

    document
        .select(&container)
        .next()
        .map(|node| clean_text(&node.text().collect::<String>()))
        .unwrap_or_default()
}

fn apply_descriptions(listings: &mut [JobListing], results: Vec<(usize, Option<String>)>) {
    for (index, description) in results {
        if let Some(listing) = listings.get_mut(index) {
            listing.description = description;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn listing(url: &str) -> JobListing {
        JobListing {
            title: "Engineer".to_string(),
            company: "Initech".to_string(),
            location: "Chennai".to_string(),
            salary: None,
            rating: None,
            description: None,
            date_posted: NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
            url: url.to_string(),
        }
    }

    #[test]
    fn write_back_is_by_index_not_completion_order() {
        let mut listings = vec![listing("a"), listing("b"), listing("c")];
        // completion order reversed relative to record order
        let results = vec![
            (2, Some("third".to_string())),
            (0, Some("first".to_string())),
            (1, None),
        ];

        apply_descriptions(&mut listings, results);

        assert_eq!(listings[0].description.as_deref(), Some("first"));
        assert!(listings[1].description.is_none());
        assert_eq!(listings[2].description.as_deref(), Some("third"));
    }

    #[test]
    fn extracts_and_normalizes_description_text() {
        let html = r#"
            <html><body>
              <div id="jobDescriptionText">
                <p>Build   scrapers.</p>
                <p>Ship
                them.</p>
              </div>
            </body></html>
        "#;
        assert_eq!(extract_description(html), "Build scrapers. Ship them.");
    }

    #[test]
    fn missing_container_yields_empty_string() {
        assert_eq!(extract_description("<html><body></body></html>"), "");
    }
}
