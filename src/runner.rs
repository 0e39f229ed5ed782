use std::path::PathBuf;
use std::time::Instant;

use log::{error, info, warn};
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use url::Url;

use crate::config::ScrapeConfig;
use crate::csv_writer;
use crate::extractor::{Extractor, MuseumRecord};
use crate::fetcher::PageFetcher;
use crate::progress::Progress;
use crate::user_agent;

/// What one pass over the directory produced.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub pages_ok: usize,
    pub pages_failed: usize,
    pub records_extracted: usize,
    pub blocks_skipped: usize,
    pub output_path: Option<PathBuf>,
}

impl RunSummary {
    /// True when every page was fetched and parsed and nothing extracted was
    /// lost on the way to disk. Skipped blocks do not count against a run.
    pub fn is_complete(&self) -> bool {
        self.pages_failed == 0 && (self.records_extracted == 0 || self.output_path.is_some())
    }
}

/// One full pass over the directory: user agent and fetch per page, extract,
/// accumulate, then hand the batch to the writer. Failures are contained at
/// page granularity; the loop never aborts early, and the elapsed-time line
/// is logged whatever the outcome.
pub fn run(
    config: &ScrapeConfig,
    fetcher: &dyn PageFetcher,
    progress: &mut dyn Progress,
) -> RunSummary {
    let started = Instant::now();
    let mut summary = RunSummary::default();
    let total = config.pages as usize;

    if let Err(e) = Url::parse(&config.base_url) {
        error!("Invalid URL: {}: {}", config.base_url, e);
        summary.pages_failed = total;
    } else {
        let extractor = Extractor::new();
        let mut batch: Vec<MuseumRecord> = Vec::new();

        progress.begin(total);
        for page in 1..=config.pages {
            let url = format!("{}?page={}", config.base_url, page);
            let agent = user_agent::random_user_agent(&config.user_agent_file);

            let mut headers = HeaderMap::new();
            let agent_value = HeaderValue::from_str(&agent)
                .unwrap_or_else(|_| HeaderValue::from_static(user_agent::FALLBACK_USER_AGENT));
            headers.insert(USER_AGENT, agent_value);

            match fetcher.fetch(&url, headers) {
                Ok(html) => match extractor.extract(&html) {
                    Ok(extraction) => {
                        summary.pages_ok += 1;
                        summary.blocks_skipped += extraction.skipped.len();
                        batch.extend(extraction.records);
                    }
                    Err(e) => {
                        summary.pages_failed += 1;
                        error!("[page {}] {}", page, e);
                    }
                },
                Err(_) => {
                    summary.pages_failed += 1;
                    warn!("[page {}] no data could be extracted", page);
                }
            }

            progress.page_done(page as usize, total);
        }
        progress.finish();

        summary.records_extracted = batch.len();
        if !batch.is_empty() {
            match csv_writer::save_records(&batch, &config.output_dir) {
                Ok(path) => summary.output_path = Some(path),
                Err(e) => error!("Failed to save CSV: {}", e),
            }
        }
    }

    info!(
        "Scraping complete. {} records in {:.2} seconds",
        summary.records_extracted,
        started.elapsed().as_secs_f64()
    );

    summary
}
