use log::{info, warn};

use museum_scraper_lib::config::ScrapeConfig;
use museum_scraper_lib::fetcher::HttpFetcher;
use museum_scraper_lib::progress::ConsoleProgress;
use museum_scraper_lib::{logger, runner};

fn main() {
    logger::init();
    info!("Starting museum directory scraper...");

    let config = ScrapeConfig::default();
    let fetcher = HttpFetcher::new(config.timeout);
    let mut progress = ConsoleProgress::new();

    let summary = runner::run(&config, &fetcher, &mut progress);

    if !summary.is_complete() {
        if summary.pages_failed > 0 {
            warn!(
                "Partial run: {} of {} pages yielded no data",
                summary.pages_failed, config.pages
            );
        } else {
            warn!("Partial run: extracted records were not saved");
        }
        std::process::exit(1);
    }
}
