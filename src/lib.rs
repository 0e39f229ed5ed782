pub mod config;
pub mod csv_writer;
pub mod extractor;
pub mod fetcher;
pub mod logger;
pub mod progress;
pub mod runner;
pub mod user_agent;

// Exporting types for convenience
pub use config::ScrapeConfig;
pub use extractor::{Extraction, Extractor, MuseumRecord};
pub use fetcher::{FetchError, HttpFetcher, PageFetcher};
pub use progress::{ConsoleProgress, NullProgress, Progress};
pub use runner::RunSummary;
