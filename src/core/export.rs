use csv::WriterBuilder;

use crate::core::{Listing, OutputFormat};
use crate::utils::error::{Result, ScrapeError};

/// Column headers of the exported table, in output order.
pub const COLUMNS: [&str; 3] = ["Name", "Price", "Link"];

/// Base name of the exported file; the extension follows the format.
pub const OUTPUT_FILE_STEM: &str = "scraped_data";

pub fn output_filename(format: OutputFormat) -> String {
    format!("{}.{}", OUTPUT_FILE_STEM, format.extension())
}

/// Renders listings as one table: a header row, then one row per listing in
/// the order given. The header is written even when there are no listings.
pub fn render_table(listings: &[Listing], format: OutputFormat) -> Result<Vec<u8>> {
    let delimiter = match format {
        OutputFormat::Csv => b',',
        OutputFormat::Tsv => b'\t',
    };

    let mut writer = WriterBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(COLUMNS)?;
    for listing in listings {
        writer.serialize(listing)?;
    }
    writer.flush()?;

    writer
        .into_inner()
        .map_err(|e| ScrapeError::IoError(e.into_error()))
}
