// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! cuesort: Sound Effect Sorter
//!
//! Moves a flat directory of creature sound effects into
//! `<root>/<entity>/<action>/` folders, keyed on the entity and cue codes
//! embedded in each file name.

pub mod classifier;
pub mod config;
pub mod error;
pub mod mover;
pub mod router;
pub mod scanner;
pub mod sorter;
pub mod tables;

#[cfg(test)]
mod test_log;

pub use config::AppConfig;
pub use error::{CueSortError, Result};
pub use sorter::{FileOutcome, SortOptions, SortReport, Sorter};
