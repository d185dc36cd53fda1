//! Skillboard Catalog
//!
//! Holds the skill collection and the pure query and aggregation functions
//! that presentation layers render from.
//!
//! ## Features
//!
//! - Explicitly constructed, immutable [`Catalog`] passed by reference
//! - Bundled catalog and overlap analysis compiled into the binary
//! - Loading alternative catalogs from YAML files
//! - Severity tallies, rating tallies and a flat-deduction quality score
//!
//! ## Scoring
//!
//! The quality score starts at 100 and subtracts a fixed penalty per finding
//! (critical 25, high 15, medium 8, low 3), clamped at 0. It is derived from
//! findings only and is independent of the hand-assigned rating.

#![deny(unsafe_code, dead_code, unused_imports, unused_variables, missing_docs)]

pub mod analysis;
pub mod catalog;
pub mod error;
pub mod scoring;

pub use analysis::{AnalysisReport, CategoryCount, OverlapAnalysis, OverlapCategory};
pub use catalog::{Catalog, CatalogIssue, CatalogSummary};
pub use error::CatalogError;
pub use scoring::{
    all_findings, count_by_severity, group_by_severity, quality_score, rating_counts, ScoreBand,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Catalog, CatalogError, ScoreBand};
    pub use skillboard_types::{Finding, Rating, Severity, Skill};
}
