//! Spreadsheet export of the derived views.
//!
//! The file format follows the extension: `.parquet` writes Parquet, anything
//! else writes CSV with a header row. Link cells hold the display markup,
//! exactly as the dashboard tables show it.

use crate::error::{DashboardError, Result, ResultExt as _};
use crate::podcasts::{DirectoryView, RankedView};
use polars::prelude::*;
use std::path::Path;

pub const TOP_FILE_NAME: &str = "top_10_podcasts.csv";
pub const DIRECTORY_FILE_NAME: &str = "directory_podcasts.csv";

/// Title of the save dialog. Tables are not written as Excel workbooks.
pub const SAVE_DIALOG_TITLE: &str = "Save table as CSV or Parquet";

/// Headers of the Top-K export.
pub const RANKED_HEADERS: [&str; 2] = ["Title", "Link"];
/// Headers of the directory export.
pub const DIRECTORY_HEADERS: [&str; 3] = ["Title", "Link", "Avg Rating"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Parquet,
}

impl ExportFormat {
    /// Formats offered by the save dialog, default first.
    pub const ALL: [Self; 2] = [Self::Csv, Self::Parquet];

    pub fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Parquet => "parquet",
        }
    }

    /// Dialog filter name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Csv => "CSV File (opens in spreadsheet apps)",
            Self::Parquet => "Parquet File",
        }
    }

    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_lowercase();
        if ext == "parquet" {
            Self::Parquet
        } else {
            Self::Csv
        }
    }
}

pub fn ranked_frame(view: &RankedView) -> Result<DataFrame> {
    let titles: Vec<&str> = view.iter().map(|e| e.title.as_str()).collect();
    let links: Vec<String> = view.iter().map(|e| e.link.markup()).collect();

    let [title, link] = RANKED_HEADERS;
    let df = DataFrame::new(vec![
        Column::new(title.into(), titles),
        Column::new(link.into(), links),
    ])?;
    Ok(df)
}

pub fn directory_frame(view: &DirectoryView) -> Result<DataFrame> {
    let titles: Vec<&str> = view.iter().map(|e| e.title.as_str()).collect();
    let links: Vec<String> = view.iter().map(|e| e.link.markup()).collect();
    let ratings: Vec<Option<f64>> = view.iter().map(|e| e.avg_rating).collect();

    let [title, link, rating] = DIRECTORY_HEADERS;
    let df = DataFrame::new(vec![
        Column::new(title.into(), titles),
        Column::new(link.into(), links),
        Column::new(rating.into(), ratings),
    ])?;
    Ok(df)
}

/// Writes the Top-K view (`Title`, `Link`).
pub fn write_ranked(view: &RankedView, path: &Path) -> Result<()> {
    let mut df = ranked_frame(view)?;
    save_frame(&mut df, path)
}

/// Writes the directory view (`Title`, `Link`, `Avg Rating`).
pub fn write_directory(view: &DirectoryView, path: &Path) -> Result<()> {
    let mut df = directory_frame(view)?;
    save_frame(&mut df, path)
}

fn save_frame(df: &mut DataFrame, path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(DashboardError::InvalidPath(
            "No export destination given".to_owned(),
        ));
    }

    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    match ExportFormat::from_path(path) {
        ExportFormat::Parquet => {
            ParquetWriter::new(file)
                .finish(df)
                .map_err(|e| DashboardError::Export(e.to_string()))?;
        }
        ExportFormat::Csv => {
            CsvWriter::new(file)
                .include_header(true)
                .finish(df)
                .map_err(|e| DashboardError::Export(e.to_string()))?;
        }
    }

    tracing::info!(rows = df.height(), "Exported view to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::podcasts::{DirectoryEntry, DisplayLink, RankedEntry};
    use anyhow::Result;

    fn ranked() -> RankedView {
        vec![
            RankedEntry {
                title: "Goal Line".to_owned(),
                link: DisplayLink::new("https://p/1"),
            },
            RankedEntry {
                title: "Hoops".to_owned(),
                link: DisplayLink::new("https://p/2"),
            },
        ]
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            ExportFormat::from_path(Path::new("out.PARQUET")),
            ExportFormat::Parquet
        );
        assert_eq!(ExportFormat::from_path(Path::new("out.csv")), ExportFormat::Csv);
        assert_eq!(ExportFormat::from_path(Path::new("out")), ExportFormat::Csv);
        // An Excel name still gets CSV content
        assert_eq!(ExportFormat::from_path(Path::new("out.xlsx")), ExportFormat::Csv);
    }

    #[test]
    fn test_dialog_filters_match_writers() {
        for format in ExportFormat::ALL {
            let name = format!("table.{}", format.extension());
            assert_eq!(ExportFormat::from_path(Path::new(&name)), format);
        }
        assert!(ExportFormat::ALL[0].label().starts_with("CSV"));
        assert!(!SAVE_DIALOG_TITLE.contains("Excel"));
    }

    #[test]
    fn test_ranked_csv_has_title_and_link() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join(TOP_FILE_NAME);
        write_ranked(&ranked(), &path)?;

        let content = std::fs::read_to_string(&path)?;
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("Title,Link"));
        assert_eq!(
            lines.next(),
            Some("Goal Line,[Click here to listen to the podcast](https://p/1)")
        );
        assert_eq!(content.lines().count(), 3);
        Ok(())
    }

    #[test]
    fn test_directory_csv_has_rating_column() -> Result<()> {
        let view = vec![
            DirectoryEntry {
                title: "Goal Line".to_owned(),
                link: DisplayLink::new("https://p/1"),
                avg_rating: Some(4.5),
            },
            DirectoryEntry {
                title: "Quiet".to_owned(),
                link: DisplayLink::new("https://p/3"),
                avg_rating: None,
            },
        ];
        let dir = tempfile::tempdir()?;
        let path = dir.path().join(DIRECTORY_FILE_NAME);
        write_directory(&view, &path)?;

        let content = std::fs::read_to_string(&path)?;
        assert_eq!(content.lines().next(), Some("Title,Link,Avg Rating"));
        assert!(content.contains("Goal Line,[Click here to listen to the podcast](https://p/1),4.5"));
        Ok(())
    }

    #[test]
    fn test_parquet_export_writes_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("top.parquet");
        write_ranked(&ranked(), &path)?;
        assert!(path.exists());
        Ok(())
    }

    #[test]
    fn test_empty_view_still_exports_header() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("empty.csv");
        write_ranked(&Vec::new(), &path)?;
        let content = std::fs::read_to_string(&path)?;
        assert_eq!(content.trim_end(), "Title,Link");
        Ok(())
    }

    #[test]
    fn test_frames_have_view_heights() -> Result<()> {
        let df = ranked_frame(&ranked())?;
        assert_eq!(df.height(), 2);
        assert_eq!(df.width(), 2);
        Ok(())
    }
}
