use super::types::{PodcastRecord, PodcastTable};
use crate::error::LoadError;
use polars::prelude::*;
use std::io::Cursor;

/// Canonical column names, in the order the source lays them out.
pub const CANONICAL_COLUMNS: [&str; 7] = [
    "podcast_id",
    "link",
    "title",
    "avg_rating",
    "ratings_count",
    "author",
    "main_category",
];

/// Loads the podcast table from a URL (`http://`, `https://`) or a local path.
///
/// Source header names are ignored: columns are renamed positionally to
/// [`CANONICAL_COLUMNS`].
///
/// # Errors
///
/// - [`LoadError::Unreachable`] if the source cannot be fetched or opened
/// - [`LoadError::Schema`] if the header does not have exactly 7 columns
/// - [`LoadError::Parse`] if rows are inconsistent with the header
pub fn load_table(source: &str) -> Result<PodcastTable, LoadError> {
    let start = std::time::Instant::now();
    tracing::info!("Loading podcast table from {source}");

    let bytes = read_source(source)?;
    let table = parse_table(bytes)?;

    tracing::info!(
        rows = table.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Podcast table loaded"
    );
    Ok(table)
}

/// Parses already fetched CSV content into the table.
///
/// # Errors
///
/// - [`LoadError::Schema`] if the header does not have exactly 7 columns
/// - [`LoadError::Parse`] if a row has more or fewer fields than the header,
///   or the content is not valid CSV
pub fn parse_table(bytes: Vec<u8>) -> Result<PodcastTable, LoadError> {
    check_row_widths(&bytes)?;

    // Read every column as text; numeric parsing happens per field below so a
    // stray value cannot fail schema inference for the whole column.
    let mut df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .into_reader_with_file_handle(Cursor::new(bytes))
        .finish()?;
    df.set_column_names(CANONICAL_COLUMNS)?;

    let [ids, links, titles, ratings, counts, authors, categories] =
        CANONICAL_COLUMNS.map(|name| text_column(&df, name));
    let (ids, links, titles, ratings, counts, authors, categories) =
        (ids?, links?, titles?, ratings?, counts?, authors?, categories?);

    let mut records = Vec::with_capacity(df.height());
    for (row, podcast_id) in ids.into_iter().enumerate() {
        records.push(PodcastRecord {
            podcast_id: podcast_id.unwrap_or_default(),
            link: take(&links, row),
            title: take(&titles, row),
            avg_rating: parse_rating(ratings.get(row).and_then(Option::as_deref)),
            ratings_count: parse_count(counts.get(row).and_then(Option::as_deref)),
            author: take(&authors, row),
            main_category: take(&categories, row),
        });
    }

    Ok(PodcastTable::from_records(records))
}

/// Checks the header width, then that every row has exactly as many fields.
///
/// The polars reader pads short rows with nulls, which would shift a row's
/// trailing values out of their columns.
fn check_row_widths(bytes: &[u8]) -> Result<(), LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(bytes);

    let found = reader.byte_headers()?.len();
    if found != CANONICAL_COLUMNS.len() {
        return Err(LoadError::Schema {
            expected: CANONICAL_COLUMNS.len(),
            found,
        });
    }

    let mut record = csv::ByteRecord::new();
    while reader.read_byte_record(&mut record)? {}
    Ok(())
}

fn read_source(source: &str) -> Result<Vec<u8>, LoadError> {
    let unreachable = |reason: String| LoadError::Unreachable {
        source: source.to_owned(),
        reason,
    };

    if is_remote(source) {
        let response = reqwest::blocking::get(source)
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(|e| unreachable(e.to_string()))?;
        let bytes = response.bytes().map_err(|e| unreachable(e.to_string()))?;
        Ok(bytes.to_vec())
    } else {
        std::fs::read(source).map_err(|e| unreachable(e.to_string()))
    }
}

pub(crate) fn is_remote(source: &str) -> bool {
    let lower = source.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

fn text_column(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>, LoadError> {
    let values = df
        .column(name)?
        .as_materialized_series()
        .str()?
        .into_iter()
        .map(|v| v.map(str::to_owned))
        .collect();
    Ok(values)
}

fn take(column: &[Option<String>], row: usize) -> String {
    column
        .get(row)
        .cloned()
        .flatten()
        .unwrap_or_default()
}

fn parse_rating(raw: Option<&str>) -> Option<f64> {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| !v.is_nan())
}

// Counts occasionally arrive as "12.0"; anything unparseable counts as zero
fn parse_count(raw: Option<&str>) -> u64 {
    let Some(s) = raw.map(str::trim) else {
        return 0;
    };
    s.parse::<u64>()
        .ok()
        .or_else(|| {
            s.parse::<f64>()
                .ok()
                .filter(|v| v.is_finite() && *v >= 0.0)
                .map(|v| v as u64)
        })
        .unwrap_or(0)
}
