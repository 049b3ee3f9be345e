mod models;
mod scrapers;
mod text;
mod writer;

use clap::Parser;
use scrapers::{DescriptionEnricher, IndeedScraper, ScraperTrait, SearchParams};
use tracing::{info, Level};

#[derive(Debug, Parser)]
#[command(name = "job-scout", version, about = "Scrape Indeed job listings into a timestamped CSV")]
struct Cli {
    /// Free-text search query
    #[arg(short, long, default_value = "Python Developer")]
    query: String,

    /// Location filter
    #[arg(short, long, default_value = "Chennai")]
    location: String,

    /// Number of result pages to scrape
    #[arg(short, long, default_value_t = 1)]
    pages: usize,

    /// Also fetch the full description for every listing
    #[arg(short = 'd', long)]
    descriptions: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let cli = Cli::parse();
    let params = SearchParams {
        query: cli.query,
        location: cli.location,
        pages: cli.pages,
        fetch_descriptions: cli.descriptions,
    };

    run(params).await
}

async fn run(params: SearchParams) -> anyhow::Result<()> {
    // the output filename is stamped from the run's start, not write time
    let started = chrono::Local::now();

    let scraper = IndeedScraper::new()?;
    info!(
        "Searching {} for \"{}\" in \"{}\" ({} page(s))",
        scraper.source_name(),
        params.query,
        params.location,
        params.pages
    );

    let mut listings = scraper.scrape(&params).await?;
    info!("✅ Scraped {} listings", listings.len());

    if params.fetch_descriptions {
        let enricher = DescriptionEnricher::new()?;
        enricher.enrich(&mut listings).await;
    }

    let path = writer::output_path(started);
    writer::save_to_csv(&listings, &path)?;
    info!("💾 Saved {} listings to {}", listings.len(), path.display());

    Ok(())
}
