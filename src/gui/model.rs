//! Dashboard state, independent of the rendering code.
//!
//! The model owns the shared table and the two views of the selected
//! category. Selecting a category recomputes both views synchronously; the
//! sort and page state of each table only reorders what is displayed.

use crate::config::DashboardSettings;
use crate::error::Result;
use crate::podcasts::{
    self, CategoryCounts, DirectoryEntry, DirectoryView, DisplayLink, PodcastTable, RankedEntry,
    RankedView,
};
use std::cmp::Ordering;
use std::path::Path;
use std::sync::Arc;

/// What a table cell shows.
pub enum Cell<'a> {
    Text(String),
    Link(&'a DisplayLink),
}

/// A row type the dashboard tables know how to display and sort.
pub trait TableRow {
    const HEADERS: &'static [&'static str];

    fn cell(&self, column: usize) -> Cell<'_>;

    fn compare(&self, other: &Self, column: usize) -> Ordering;
}

impl TableRow for RankedEntry {
    const HEADERS: &'static [&'static str] = &crate::export::RANKED_HEADERS;

    fn cell(&self, column: usize) -> Cell<'_> {
        match column {
            0 => Cell::Text(self.title.clone()),
            _ => Cell::Link(&self.link),
        }
    }

    fn compare(&self, other: &Self, column: usize) -> Ordering {
        match column {
            0 => self.title.cmp(&other.title),
            _ => self.link.uri().cmp(other.link.uri()),
        }
    }
}

impl TableRow for DirectoryEntry {
    const HEADERS: &'static [&'static str] = &crate::export::DIRECTORY_HEADERS;

    fn cell(&self, column: usize) -> Cell<'_> {
        match column {
            0 => Cell::Text(self.title.clone()),
            1 => Cell::Link(&self.link),
            _ => Cell::Text(crate::utils::fmt_rating(self.avg_rating)),
        }
    }

    fn compare(&self, other: &Self, column: usize) -> Ordering {
        match column {
            0 => self.title.cmp(&other.title),
            1 => self.link.uri().cmp(other.link.uri()),
            _ => match (self.avg_rating, other.avg_rating) {
                (Some(a), Some(b)) => a.total_cmp(&b),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortKey {
    pub column: usize,
    pub ascending: bool,
}

/// Header sorting and pagination of one table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableState {
    pub sort: Option<SortKey>,
    pub page: usize,
    pub page_size: usize,
}

impl TableState {
    pub fn new(page_size: usize) -> Self {
        Self {
            sort: None,
            page: 0,
            page_size: page_size.max(1),
        }
    }

    /// First click sorts ascending, the next one flips the direction.
    pub fn toggle_sort(&mut self, column: usize) {
        self.sort = match self.sort {
            Some(key) if key.column == column => Some(SortKey {
                column,
                ascending: !key.ascending,
            }),
            _ => Some(SortKey {
                column,
                ascending: true,
            }),
        };
        self.page = 0;
    }

    pub fn reset(&mut self) {
        self.sort = None;
        self.page = 0;
    }

    pub fn page_count(&self, len: usize) -> usize {
        len.div_ceil(self.page_size).max(1)
    }

    pub fn next_page(&mut self, len: usize) {
        if self.page + 1 < self.page_count(len) {
            self.page += 1;
        }
    }

    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    /// Indices into `rows` for the current page, in display order.
    pub fn visible_rows<R: TableRow>(&self, rows: &[R]) -> Vec<usize> {
        let mut order: Vec<usize> = (0..rows.len()).collect();
        if let Some(key) = self.sort {
            order.sort_by(|&a, &b| match (rows.get(a), rows.get(b)) {
                (Some(ra), Some(rb)) => {
                    let ord = ra.compare(rb, key.column);
                    if key.ascending { ord } else { ord.reverse() }
                }
                _ => Ordering::Equal,
            });
        }
        order
            .into_iter()
            .skip(self.page * self.page_size)
            .take(self.page_size)
            .collect()
    }
}

pub struct DashboardModel {
    table: Arc<PodcastTable>,
    pub counts: CategoryCounts,
    pub categories: Vec<String>,
    pub selected: String,
    pub top_k: usize,
    pub top: RankedView,
    pub directory: DirectoryView,
    pub top_table: TableState,
    pub directory_table: TableState,
}

impl DashboardModel {
    pub fn new(table: Arc<PodcastTable>, settings: &DashboardSettings) -> Self {
        let counts = podcasts::category_counts(&table);
        let categories = podcasts::categories(&table);

        let initial = if categories.contains(&settings.default_category) {
            settings.default_category.clone()
        } else {
            categories.first().cloned().unwrap_or_default()
        };

        let mut model = Self {
            table,
            counts,
            categories,
            selected: String::new(),
            top_k: settings.top_k,
            top: Vec::new(),
            directory: Vec::new(),
            top_table: TableState::new(settings.top_page_size),
            directory_table: TableState::new(settings.directory_page_size),
        };
        model.select_category(&initial);
        model
    }

    pub fn table(&self) -> &PodcastTable {
        &self.table
    }

    /// Handler for a category selection: refreshes both views.
    pub fn select_category(&mut self, category: &str) {
        self.selected = category.to_owned();
        self.top = podcasts::top_k_by_category(&self.table, category, self.top_k);
        self.directory = podcasts::directory_by_category(&self.table, category);
        self.top_table.reset();
        self.directory_table.reset();
        tracing::info!(
            category,
            top = self.top.len(),
            directory = self.directory.len(),
            "Category selected"
        );
    }

    /// Copies the selected category into `settings` as the next start-up
    /// default. Returns `false` when it was already the default.
    pub fn remember_selection(&self, settings: &mut DashboardSettings) -> bool {
        if settings.default_category == self.selected {
            return false;
        }
        settings.default_category.clone_from(&self.selected);
        true
    }

    pub fn export_top(&self, path: &Path) -> Result<()> {
        crate::export::write_ranked(&self.top, path)
    }

    pub fn export_directory(&self, path: &Path) -> Result<()> {
        crate::export::write_directory(&self.directory, path)
    }
}
