//! The podcast catalogue: loading, derived views and link presentation.
//!
//! Everything in here is plain data in, plain data out. The table is loaded
//! once with [`load_table`] and then only read:
//!
//! ```no_run
//! use podcast_dashboard::podcasts::{self, DEFAULT_TOP_K};
//!
//! # fn example() -> Result<(), podcast_dashboard::error::LoadError> {
//! let table = podcasts::load_table("testdata/podcasts.csv")?;
//!
//! let counts = podcasts::category_counts(&table);
//! let top = podcasts::top_k_by_category(&table, "Sports", DEFAULT_TOP_K);
//! let directory = podcasts::directory_by_category(&table, "Sports");
//! println!("{} categories, {} top, {} listed", counts.len(), top.len(), directory.len());
//! # Ok(())
//! # }
//! ```

pub mod io;
pub mod links;
pub mod types;
pub mod views;

pub use io::{CANONICAL_COLUMNS, load_table, parse_table};
pub use links::{DisplayLink, LINK_LABEL, to_display_link};
pub use types::{
    CategoryCounts, DirectoryEntry, DirectoryView, PodcastRecord, PodcastTable, RankedEntry,
    RankedView,
};
pub use views::{
    DEFAULT_TOP_K, categories, category_counts, directory_by_category, top_k_by_category,
};

#[cfg(test)]
mod tests;
