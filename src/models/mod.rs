use chrono::NaiveDate;
use serde::Serialize;

/// One search-result listing scraped from a rendered result page.
///
/// Field order matches the CSV column order. `salary` and `rating` are
/// `None` when the listing card does not carry them; `description` is `None`
/// until enrichment runs and stays `None` if the detail fetch fails, while a
/// fetched detail page without a description container yields `Some("")`.
#[derive(Debug, Clone, Serialize)]
pub struct JobListing {
    #[serde(rename = "job_title")]
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: Option<String>,
    pub rating: Option<String>,
    #[serde(rename = "job_description")]
    pub description: Option<String>,
    pub date_posted: NaiveDate,
    #[serde(rename = "job_url")]
    pub url: String,
}
