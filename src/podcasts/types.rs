use super::links::DisplayLink;
use std::collections::BTreeMap;

// DATA STRUCTURES

/// One row of the source dataset, in canonical column order.
#[derive(Clone, Debug, PartialEq)]
pub struct PodcastRecord {
    pub podcast_id: String,
    pub link: String,
    pub title: String,
    /// Missing (or NaN) in the source becomes `None`.
    pub avg_rating: Option<f64>,
    pub ratings_count: u64,
    pub author: String,
    pub main_category: String,
}

/// The loaded dataset. Read-only once constructed.
#[derive(Clone, Debug, Default)]
pub struct PodcastTable {
    records: Vec<PodcastRecord>,
}

impl PodcastTable {
    pub fn from_records(records: Vec<PodcastRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[PodcastRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records of one category, in table order.
    pub fn in_category<'a>(
        &'a self,
        category: &'a str,
    ) -> impl Iterator<Item = &'a PodcastRecord> + 'a {
        self.records
            .iter()
            .filter(move |r| r.main_category == category)
    }
}

impl FromIterator<PodcastRecord> for PodcastTable {
    fn from_iter<I: IntoIterator<Item = PodcastRecord>>(iter: I) -> Self {
        Self::from_records(iter.into_iter().collect())
    }
}

/// Number of records per observed category.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoryCounts {
    counts: BTreeMap<String, usize>,
}

impl CategoryCounts {
    pub(crate) fn increment(&mut self, category: &str) {
        *self.counts.entry(category.to_owned()).or_insert(0) += 1;
    }

    pub fn get(&self, category: &str) -> Option<usize> {
        self.counts.get(category).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Largest category first; equal counts fall back to label order.
    pub fn sorted_by_count(&self) -> Vec<(&str, usize)> {
        let mut pairs: Vec<(&str, usize)> = self.iter().collect();
        pairs.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        pairs
    }
}

/// Row of the Top-K view.
#[derive(Clone, Debug, PartialEq)]
pub struct RankedEntry {
    pub title: String,
    pub link: DisplayLink,
}

/// Row of the directory view.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectoryEntry {
    pub title: String,
    pub link: DisplayLink,
    pub avg_rating: Option<f64>,
}

pub type RankedView = Vec<RankedEntry>;
pub type DirectoryView = Vec<DirectoryEntry>;
