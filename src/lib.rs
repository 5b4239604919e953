//! habit-view - Collect habit tracker tables from markdown journals
//!
//! Daily journals carry small pipe tables whose rows are tagged with a habit
//! marker. This library finds those journals, pulls the tagged rows out,
//! merges them by habit name and renders one markdown history per habit.
//!
//! ```no_run
//! use habit_view::{config::Config, pipeline};
//!
//! let config = Config::load_workspace(".").unwrap();
//! let summary = pipeline::run(&config).unwrap();
//! println!("{} habit(s)", summary.habits);
//! ```

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod aggregator;
pub mod config;
pub mod error;
pub mod extractor;
pub mod models;
pub mod output;
pub mod paths;
pub mod pipeline;
pub mod report;
pub mod walker;

pub use error::{HabitError, Result};
