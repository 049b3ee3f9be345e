use crate::models::JobListing;
use crate::scrapers::browser::BrowserSession;
use crate::scrapers::traits::ScraperTrait;
use crate::scrapers::types::{ScrapeError, SearchParams};
use crate::text::{clean_text, relative_date};
use anyhow::Result;
use async_trait::async_trait;
use chrono::{Local, NaiveDate};
use headless_chrome::Tab;
use scraper::{ElementRef, Html, Selector};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

pub const BASE_URL: &str = "https://www.indeed.com";
pub const RESULTS_PER_PAGE: usize = 10;

const LISTING_CARD: &str = "div.job_seen_beacon";
const RENDER_TIMEOUT: Duration = Duration::from_secs(10);
const PAGE_THROTTLE: Duration = Duration::from_secs(1);

/// Browser-based scraper for Indeed search results.
///
/// One browser session is owned for the whole run; result pages are walked
/// sequentially on a single tab.
pub struct IndeedScraper {
    session: BrowserSession,
}

impl IndeedScraper {
    pub fn new() -> Result<Self> {
        Ok(Self {
            session: BrowserSession::launch()?,
        })
    }

    /// Navigate to one result page and pull every listing card out of the
    /// rendered DOM. Fails with [`ScrapeError::ListingsNotRendered`] when no
    /// card appears within the render timeout.
    fn scrape_list_page(&self, tab: &Arc<Tab>, url: &str) -> Result<Vec<JobListing>> {
        tab.navigate_to(url)?;
        tab.wait_until_navigated()?;

        if tab
            .wait_for_element_with_custom_timeout(LISTING_CARD, RENDER_TIMEOUT)
            .is_err()
        {
            return Err(ScrapeError::ListingsNotRendered(RENDER_TIMEOUT).into());
        }

        let html = tab.get_content()?;
        Ok(parse_listings(&html, Local::now().date_naive()))
    }
}

#[async_trait]
impl ScraperTrait for IndeedScraper {
    async fn scrape(&self, params: &SearchParams) -> Result<Vec<JobListing>> {
        let tab = self.session.new_tab()?;
        let mut listings = Vec::new();

        for page in 0..params.pages {
            let url = search_url(&params.query, &params.location, page * RESULTS_PER_PAGE);
            info!("Scraping page {}/{}: {}", page + 1, params.pages, url);

            match self.scrape_list_page(&tab, &url) {
                Ok(page_listings) => {
                    info!("Found {} listing cards", page_listings.len());
                    listings.extend(page_listings);
                }
                // A page past the first that never renders a card is read as
                // the end of the result set, not as a broken scrape.
                Err(e) if page > 0 && e.downcast_ref::<ScrapeError>().is_some() => {
                    warn!("Page {} rendered no listings, stopping: {:#}", page + 1, e);
                    break;
                }
                Err(e) => return Err(e),
            }

            tokio::time::sleep(PAGE_THROTTLE).await;
        }

        Ok(listings)
    }

    fn source_name(&self) -> &'static str {
        "Indeed"
    }
}

/// Compose the search URL for one result page. `offset` is the zero-based
/// index of the first result on the page (`start` query parameter).
pub fn search_url(query: &str, location: &str, offset: usize) -> String {
    let start = offset.to_string();
    let url = Url::parse_with_params(
        &format!("{}/jobs", BASE_URL),
        [("q", query), ("l", location), ("start", start.as_str())],
    )
    .expect("search url components are valid");
    url.to_string()
}

/// Extract one record per listing card. A field missing from a card degrades
/// that field only, never the record.
fn parse_listings(html: &str, today: NaiveDate) -> Vec<JobListing> {
    let document = Html::parse_document(html);

    let card = Selector::parse(LISTING_CARD).unwrap();
    let title = Selector::parse("h2.jobTitle").unwrap();
    let company = Selector::parse("span.companyName").unwrap();
    let location = Selector::parse("div.companyLocation").unwrap();
    let salary = Selector::parse("div.metadata.salary-snippet-container").unwrap();
    let rating = Selector::parse("span.ratingsDisplay").unwrap();
    let date = Selector::parse("span.date").unwrap();
    let link = Selector::parse("a").unwrap();

    document
        .select(&card)
        .map(|element| {
            let date_text = select_text(element, &date).unwrap_or_default();
            let listing = JobListing {
                title: select_text(element, &title).unwrap_or_default(),
                company: select_text(element, &company).unwrap_or_default(),
                location: select_text(element, &location).unwrap_or_default(),
                salary: select_text(element, &salary),
                rating: select_text(element, &rating),
                description: None,
                date_posted: relative_date(&date_text, today),
                url: select_href(element, &link).map(absolutize).unwrap_or_default(),
            };
            debug!("Parsed card: {} at {}", listing.title, listing.company);
            listing
        })
        .collect()
}

fn select_text(element: ElementRef<'_>, selector: &Selector) -> Option<String> {
    let text = element.select(selector).next()?.text().collect::<String>();
    let text = clean_text(&text);
    (!text.is_empty()).then_some(text)
}

fn select_href(element: ElementRef<'_>, selector: &Selector) -> Option<String> {
    element
        .select(selector)
        .next()?
        .value()
        .attr("href")
        .map(str::to_string)
}

/// Detail links on result pages are site-relative; rewrite them against the
/// site origin. Already-absolute links pass through untouched.
fn absolutize(href: String) -> String {
    if href.starts_with('/') {
        format!("{}{}", BASE_URL, href)
    } else {
        href
    }
}
