//! GitHub portfolio analysis
//!
//! # Overview
//!
//! Given a GitHub user name, the library fetches the user's public repositories (first API page only),
//! turns every repository into a [`record::RepositoryRecord`] and derives a few aggregates from the table:
//! total star count, the most frequent primary language and how many repositories were created per year.
//!
//! A repository is stale when it has not been updated for more than 365 whole days.
//! Staleness is computed once, against a single snapshot time shared by all records of one report.
//!
//! The report can be printed as plain text ([`report`]) and exported as CSV, as a short PDF summary
//! with a leaderboard of the five most starred repositories ([`export`]) and as an SVG growth chart ([`chart`]).
//! Exports are produced in memory, writing them to disk is left to the caller.

#[cfg(feature = "api")]
pub mod api;

#[cfg(feature = "analyzer")]
pub mod analyzer;
#[cfg(feature = "analyzer")]
pub mod chart;
#[cfg(feature = "analyzer")]
pub mod export;
#[cfg(feature = "analyzer")]
mod payload;
#[cfg(feature = "analyzer")]
pub mod record;
#[cfg(feature = "analyzer")]
pub mod report;
#[cfg(feature = "analyzer")]
pub mod stats;

#[cfg(feature = "analyzer")]
pub use analyzer::{Analysis, PortfolioAnalyzer};
