use crate::models::JobListing;
use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use std::fs::File;
use std::path::{Path, PathBuf};

pub const COLUMNS: [&str; 8] = [
    "job_title",
    "company",
    "location",
    "salary",
    "rating",
    "job_description",
    "date_posted",
    "job_url",
];

/// Output filename for a run that started at `started`, stamped to second
/// granularity.
pub fn output_path(started: DateTime<Local>) -> PathBuf {
    PathBuf::from(format!("indeed_jobs_{}.csv", started.format("%Y%m%d_%H%M%S")))
}

/// Serialize all records as UTF-8 CSV. The header row is written even when
/// there are no records.
pub fn save_to_csv(listings: &[JobListing], path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(file);

    writer.write_record(COLUMNS)?;
    for listing in listings {
        writer.serialize(listing)?;
    }

    writer.flush()?;
    Ok(())
}
