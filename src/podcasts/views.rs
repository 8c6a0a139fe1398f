use super::links::DisplayLink;
use super::types::{
    CategoryCounts, DirectoryEntry, DirectoryView, PodcastRecord, PodcastTable, RankedEntry,
    RankedView,
};
use std::cmp::Ordering;

/// Size of the ranked view shown on the dashboard.
pub const DEFAULT_TOP_K: usize = 10;

/// Histogram of `main_category` over the whole table.
pub fn category_counts(table: &PodcastTable) -> CategoryCounts {
    let mut counts = CategoryCounts::default();
    for record in table.records() {
        counts.increment(&record.main_category);
    }
    counts
}

/// Distinct categories in order of first appearance.
pub fn categories(table: &PodcastTable) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    table
        .records()
        .iter()
        .filter(|r| seen.insert(r.main_category.as_str()))
        .map(|r| r.main_category.clone())
        .collect()
}

/// The `k` best rated podcasts of `category`.
///
/// Ordered by rating descending, then by ratings count descending. Records
/// without a rating rank after every rated one. The sort is stable so exact
/// ties keep table order. An unknown category yields an empty view.
pub fn top_k_by_category(table: &PodcastTable, category: &str, k: usize) -> RankedView {
    let mut matching: Vec<&PodcastRecord> = table.in_category(category).collect();
    matching.sort_by(|a, b| rank_order(a, b));

    let view: RankedView = matching
        .into_iter()
        .take(k)
        .map(|r| RankedEntry {
            title: r.title.clone(),
            link: DisplayLink::new(r.link.as_str()),
        })
        .collect();

    tracing::debug!(category, k, rows = view.len(), "Computed top-k view");
    view
}

/// Every podcast of `category`, alphabetically by title.
///
/// Titles compare with the default string ordering (by code point, so
/// uppercase sorts before lowercase). Equal titles keep table order.
pub fn directory_by_category(table: &PodcastTable, category: &str) -> DirectoryView {
    let mut matching: Vec<&PodcastRecord> = table.in_category(category).collect();
    matching.sort_by(|a, b| a.title.cmp(&b.title));

    let view: DirectoryView = matching
        .into_iter()
        .map(|r| DirectoryEntry {
            title: r.title.clone(),
            link: DisplayLink::new(r.link.as_str()),
            avg_rating: r.avg_rating,
        })
        .collect();

    tracing::debug!(category, rows = view.len(), "Computed directory view");
    view
}

fn rank_order(a: &PodcastRecord, b: &PodcastRecord) -> Ordering {
    rating_desc(a.avg_rating, b.avg_rating).then_with(|| b.ratings_count.cmp(&a.ratings_count))
}

// Missing ratings behave like negative infinity
fn rating_desc(a: Option<f64>, b: Option<f64>) -> Ordering {
    let known = |v: Option<f64>| v.filter(|x| !x.is_nan());
    match (known(a), known(b)) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_desc_places_missing_last() {
        assert_eq!(rating_desc(Some(4.0), Some(3.0)), Ordering::Less);
        assert_eq!(rating_desc(Some(3.0), Some(4.0)), Ordering::Greater);
        assert_eq!(rating_desc(Some(0.0), None), Ordering::Less);
        assert_eq!(rating_desc(None, Some(0.0)), Ordering::Greater);
        assert_eq!(rating_desc(None, None), Ordering::Equal);
        assert_eq!(rating_desc(Some(f64::NAN), Some(1.0)), Ordering::Greater);
    }
}
