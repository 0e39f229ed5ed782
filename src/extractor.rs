use log::warn;
use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const CONTAINER_SELECTOR: &str = "#rosterRecords";
const BLOCK_SELECTOR: &str = "div.postBlock";
const TITLE_SELECTOR: &str = "a.postTitle";
const DATE_SELECTOR: &str = "div.postDate";
const ANCHOR_SELECTOR: &str = "a";

/// One museum listing. `link` is stored exactly as published, so it may be
/// relative to the directory site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MuseumRecord {
    pub title: String,
    pub address: String,
    pub link: String,
}

/// Page-level failure: there is no listing container to enumerate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("'rosterRecords' element not found")]
    ContainerMissing,
}

/// Why a single listing block was dropped. The rest of the page is
/// unaffected.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum SkipReason {
    #[error("title not found")]
    MissingTitle,
    #[error("insufficient 'postDate' entries: found {0}, need 2")]
    InsufficientDateFields(usize),
    #[error("link not found")]
    MissingLink,
}

/// A block that failed field validation, with its position in the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkippedBlock {
    pub index: usize,
    pub reason: SkipReason,
}

/// Outcome of scanning one page: records in document order plus a diagnostic
/// for every block that was dropped.
#[derive(Debug, Default)]
pub struct Extraction {
    pub records: Vec<MuseumRecord>,
    pub skipped: Vec<SkippedBlock>,
}

pub struct Extractor {
    container: Selector,
    block: Selector,
    title: Selector,
    date: Selector,
    anchor: Selector,
}

impl Extractor {
    pub fn new() -> Self {
        Extractor {
            container: Selector::parse(CONTAINER_SELECTOR).unwrap(),
            block: Selector::parse(BLOCK_SELECTOR).unwrap(),
            title: Selector::parse(TITLE_SELECTOR).unwrap(),
            date: Selector::parse(DATE_SELECTOR).unwrap(),
            anchor: Selector::parse(ANCHOR_SELECTOR).unwrap(),
        }
    }

    /// Walks every listing block under the container. A malformed block is
    /// logged with its index and skipped; it never aborts the page.
    pub fn extract(&self, html: &str) -> Result<Extraction, ExtractError> {
        let document = Html::parse_document(html);

        let container = document
            .select(&self.container)
            .next()
            .ok_or(ExtractError::ContainerMissing)?;

        let mut extraction = Extraction::default();
        for (index, block) in container.select(&self.block).enumerate() {
            match self.extract_block(block) {
                Ok(record) => extraction.records.push(record),
                Err(reason) => {
                    warn!("[{}] {}", index, reason);
                    extraction.skipped.push(SkippedBlock { index, reason });
                }
            }
        }

        Ok(extraction)
    }

    fn extract_block(&self, block: ElementRef<'_>) -> Result<MuseumRecord, SkipReason> {
        let title = block
            .select(&self.title)
            .next()
            .ok_or(SkipReason::MissingTitle)?
            .text()
            .collect::<String>()
            .trim()
            .to_string();

        let dates: Vec<ElementRef<'_>> = block.select(&self.date).collect();
        if dates.len() < 2 {
            return Err(SkipReason::InsufficientDateFields(dates.len()));
        }
        let address = dates[0].text().collect::<String>().trim().to_string();

        // The second postDate cell carries the detail link; a missing href
        // still yields a record, just with an empty link.
        let link = dates[1]
            .select(&self.anchor)
            .next()
            .ok_or(SkipReason::MissingLink)?
            .value()
            .attr("href")
            .unwrap_or("")
            .trim()
            .to_string();

        Ok(MuseumRecord {
            title,
            address,
            link,
        })
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Extractor::new()
    }
}
