//! Skillboard Types - Core types for the skill catalog
//!
//! Skills, their bundled security findings, and the closed severity/rating
//! classifications shared by the catalog and its consumers.

#![deny(unsafe_code, dead_code, unused_imports, unused_variables, missing_docs)]

pub mod counts;
pub mod severity;
pub mod skill;

pub use counts::{RatingCounts, SeverityCounts};
pub use severity::{Rating, Severity};
pub use skill::{Demo, Finding, Skill, SKILLS_REPO_URL};
