use super::*;


/// Builds a record with the fields the views look at; the rest are derived.
pub(super) fn record(category: &str, title: &str, rating: Option<f64>, count: u64) -> PodcastRecord {
    PodcastRecord {
        podcast_id: format!("{category}-{title}"),
        link: format!("https://podcasts.apple.com/{title}"),
        title: title.to_owned(),
        avg_rating: rating,
        ratings_count: count,
        author: "Author".to_owned(),
        main_category: category.to_owned(),
    }
}

pub(super) fn mixed_table() -> PodcastTable {
    PodcastTable::from_records(vec![
        record("Sports", "Morning Kickoff", Some(4.2), 30),
        record("Comedy", "Laugh Track", Some(4.9), 120),
        record("Sports", "bench talk", Some(4.8), 5),
        record("Sports", "Full Time", None, 900),
        record("Sports", "Extra Innings", Some(4.8), 50),
        record("News", "Daily Brief", Some(3.1), 2_000),
        record("Sports", "Above the Rim", Some(2.5), 1),
        record("Comedy", "Open Mic", Some(4.1), 7),
    ])
}

#[test]
fn test_records_accessible_in_table_order() {
    let table = mixed_table();
    assert_eq!(table.len(), 8);
    assert_eq!(table.records()[0].title, "Morning Kickoff");
    assert_eq!(table.in_category("Comedy").count(), 2);
}
