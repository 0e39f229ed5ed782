use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Local;
use log::info;
use thiserror::Error;

use crate::extractor::MuseumRecord;

const FILE_PREFIX: &str = "museums";
const HEADER: [&str; 3] = ["Title", "Address", "Link"];

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("could not create output directory {dir:?}: {source}")]
    CreateDir { dir: PathBuf, source: io::Error },
    #[error("csv write failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("could not flush output file: {0}")]
    Io(#[from] io::Error),
}

/// Writes the batch to a timestamped CSV under `output_dir`, creating the
/// directory when missing. Returns the path of the file written.
pub fn save_records(records: &[MuseumRecord], output_dir: &Path) -> Result<PathBuf, WriteError> {
    fs::create_dir_all(output_dir).map_err(|source| WriteError::CreateDir {
        dir: output_dir.to_path_buf(),
        source,
    })?;

    let timestamp = Local::now().format("%Y-%m-%d_%H-%M-%S");
    let path = output_dir.join(format!("{}_{}.csv", FILE_PREFIX, timestamp));

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(&path)?;
    writer.write_record(HEADER)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    info!("Saved {} records to '{}'", records.len(), path.display());
    Ok(path)
}
