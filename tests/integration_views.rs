//! Integration tests for the full load-query-export workflow
//!
//! These tests load the fixture dataset from disk and verify the views the
//! dashboard shows for it.

use podcast_dashboard::error::LoadError;
use podcast_dashboard::export;
use podcast_dashboard::podcasts::{self, DEFAULT_TOP_K};

const FIXTURE: &str = "testdata/podcasts.csv";

#[test]
fn test_load_fixture() -> anyhow::Result<()> {
    let table = podcasts::load_table(FIXTURE)?;
    assert_eq!(table.len(), 16, "Should have 16 rows");

    let unrated: Vec<&str> = table
        .records()
        .iter()
        .filter(|r| r.avg_rating.is_none())
        .map(|r| r.title.as_str())
        .collect();
    assert_eq!(unrated, ["Anchor Leg"]);
    Ok(())
}

#[test]
fn test_category_histogram() -> anyhow::Result<()> {
    let table = podcasts::load_table(FIXTURE)?;
    let counts = podcasts::category_counts(&table);

    assert_eq!(counts.total(), table.len());
    assert_eq!(
        counts.sorted_by_count(),
        vec![("Sports", 12), ("Comedy", 2), ("News", 1), ("Science", 1)]
    );
    Ok(())
}

#[test]
fn test_top_ten_sports() -> anyhow::Result<()> {
    let table = podcasts::load_table(FIXTURE)?;
    let top = podcasts::top_k_by_category(&table, "Sports", DEFAULT_TOP_K);

    let titles: Vec<&str> = top.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(
        titles,
        [
            "Box Score Daily",
            "The Final Whistle",
            "courtside",
            "Bullpen Banter",
            "Wire to Wire",
            "Open Court",
            "Runs, Hits & Errors",
            "Photo Finish",
            "The Ninth Inning",
            "Gridiron Notes",
        ],
        "Rating desc, ratings count desc, table order on exact ties"
    );
    Ok(())
}

#[test]
fn test_sports_directory() -> anyhow::Result<()> {
    let table = podcasts::load_table(FIXTURE)?;
    let directory = podcasts::directory_by_category(&table, "Sports");

    assert_eq!(directory.len(), 12);
    let titles: Vec<&str> = directory.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles.first(), Some(&"Anchor Leg"));
    assert_eq!(titles.last(), Some(&"courtside"));
    for pair in titles.windows(2) {
        if let [a, b] = pair {
            assert!(a <= b, "{a} should sort before {b}");
        }
    }
    Ok(())
}

#[test]
fn test_unknown_category_is_empty() -> anyhow::Result<()> {
    let table = podcasts::load_table(FIXTURE)?;
    assert!(podcasts::top_k_by_category(&table, "True Crime", DEFAULT_TOP_K).is_empty());
    assert!(podcasts::directory_by_category(&table, "True Crime").is_empty());
    Ok(())
}

#[test]
fn test_six_column_file_is_rejected() {
    let result = podcasts::load_table("testdata/six_columns.csv");
    assert!(
        matches!(result, Err(LoadError::Schema { found: 6, .. })),
        "Should reject a file without the 7-column layout"
    );
}

#[test]
fn test_export_views() -> anyhow::Result<()> {
    let table = podcasts::load_table(FIXTURE)?;
    let dir = tempfile::tempdir()?;

    let top_path = dir.path().join(export::TOP_FILE_NAME);
    export::write_ranked(
        &podcasts::top_k_by_category(&table, "Comedy", DEFAULT_TOP_K),
        &top_path,
    )?;
    let content = std::fs::read_to_string(&top_path)?;
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines,
        [
            "Title,Link",
            "Stand-Up Hour,[Click here to listen to the podcast](https://podcasts.apple.com/us/podcast/id007)",
            "Laugh Lines,[Click here to listen to the podcast](https://podcasts.apple.com/us/podcast/id002)",
        ]
    );

    let directory_path = dir.path().join(export::DIRECTORY_FILE_NAME);
    export::write_directory(
        &podcasts::directory_by_category(&table, "Sports"),
        &directory_path,
    )?;
    let content = std::fs::read_to_string(&directory_path)?;
    assert_eq!(content.lines().next(), Some("Title,Link,Avg Rating"));
    assert_eq!(content.lines().count(), 13);
    Ok(())
}
