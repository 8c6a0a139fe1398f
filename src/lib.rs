//! # Apple Podcasts Dashboard
//!
//! Loads a static dataset of podcast metadata once, then answers three
//! questions about it: how many podcasts each category has, which podcasts of
//! a category rate best, and what the full alphabetical directory of a
//! category looks like.
//!
//! ## Quick Start
//!
//! ```no_run
//! use podcast_dashboard::podcasts;
//!
//! # fn example() -> anyhow::Result<()> {
//! let table = podcasts::load_table("testdata/podcasts.csv")?;
//!
//! for (category, count) in podcasts::category_counts(&table).sorted_by_count() {
//!     println!("{category}: {count}");
//! }
//!
//! let top = podcasts::top_k_by_category(&table, "Sports", podcasts::DEFAULT_TOP_K);
//! podcast_dashboard::export::write_ranked(&top, "top_10_podcasts.csv".as_ref())?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Core Modules
//!
//! - [`podcasts`]: table loading, derived views and link presentation
//! - [`export`]: CSV/Parquet export of the views
//! - [`gui`]: the `egui` dashboard shell
//! - [`config`]: persisted dashboard settings
//! - [`logging`]: `tracing` setup
//! - [`error`]: error types and handling utilities
//!
//! ## Immutability
//!
//! The table has no mutating API. It is shared as `Arc<PodcastTable>` and every
//! view is recomputed from it on demand, so queries are safe to run from any
//! thread without locking.

#![warn(clippy::all, rust_2018_idioms)]

pub mod config;
pub mod error;
pub mod export;
pub mod gui;
pub mod logging;
pub mod podcasts;
pub mod theme;
pub mod utils;
