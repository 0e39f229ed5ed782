use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str =
    "https://museums.ca/site/aboutthecma/services/canadianmuseumdirectory";
pub const DEFAULT_PAGES: u32 = 5;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_OUTPUT_DIR: &str = "data";
pub const DEFAULT_USER_AGENT_FILE: &str = "user_agent.txt";

/// Settings for one scraping run.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    /// Listing endpoint without the `page` query parameter.
    pub base_url: String,
    /// How many pages to fetch, starting at page 1.
    pub pages: u32,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Directory the timestamped CSV lands in; created if missing.
    pub output_dir: PathBuf,
    /// Line-oriented file of user-agent strings, re-read per request.
    pub user_agent_file: PathBuf,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        ScrapeConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            pages: DEFAULT_PAGES,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            user_agent_file: PathBuf::from(DEFAULT_USER_AGENT_FILE),
        }
    }
}
