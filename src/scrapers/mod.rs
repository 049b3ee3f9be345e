pub mod browser;
pub mod enrich;
pub mod indeed;
pub mod traits;
pub mod types;

pub use enrich::DescriptionEnricher;
pub use indeed::IndeedScraper;
pub use traits::ScraperTrait;
pub use types::{ScrapeError, SearchParams};
