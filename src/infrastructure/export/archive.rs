use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::domain::{Asset, Platform};

use super::csv::build_csv;
use super::partition::partition_assets;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("archive: {0}")]
    Archive(#[from] zip::result::ZipError),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

/// Builds the downloadable bundle: one CSV per export category, zipped.
pub fn export_archive(assets: &[Asset], platform: Platform) -> Result<Vec<u8>, ExportError> {
    let entries: Vec<(&'static str, String)> = partition_assets(assets)
        .into_iter()
        .map(|(category, members)| (category.csv_file_name(), build_csv(&members, platform)))
        .collect();

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for (name, content) in &entries {
        zip.start_file(*name, options)?;
        zip.write_all(content.as_bytes())?;
    }

    let cursor = zip.finish()?;
    Ok(cursor.into_inner())
}
