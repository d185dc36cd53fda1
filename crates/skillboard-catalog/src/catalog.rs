//! The skill collection and its queries
//!
//! A [`Catalog`] is built once, from the bundled data or a YAML file, and is
//! read-only afterwards. Consumers get it by reference.

use regex::Regex;
use serde::Serialize;
use skillboard_types::{Finding, RatingCounts, SeverityCounts, Skill};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::error::{CatalogError, Result};
use crate::scoring;

/// Bundled catalog data
const BUILTIN_SKILLS: &str = include_str!("../data/skills.yaml");

/// Lowercase, hyphen-separated slug tokens
const SLUG_PATTERN: &str = r"^[a-z0-9]+(-[a-z0-9]+)*$";

/// Immutable collection of skills
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    skills: Vec<Skill>,
}

impl Catalog {
    /// Create a catalog from skills, keeping their order
    ///
    /// Duplicate slugs are logged but kept; lookups resolve to the first one.
    pub fn new(skills: Vec<Skill>) -> Self {
        for (first, duplicate) in duplicate_slugs(&skills) {
            warn!(
                "Duplicate skill slug '{}' at positions {} and {}",
                skills[duplicate].slug, first, duplicate
            );
        }

        debug!("Catalog created with {} skills", skills.len());
        Self { skills }
    }

    /// The catalog bundled with this crate
    pub fn builtin() -> Result<Self> {
        Self::from_yaml_str(BUILTIN_SKILLS)
    }

    /// Parse a catalog from a YAML sequence of skills
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let skills: Vec<Skill> = serde_yaml::from_str(yaml)?;
        Ok(Self::new(skills))
    }

    /// Load a catalog from a YAML file
    pub fn from_path(path: &Path) -> Result<Self> {
        let yaml = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = Self::from_yaml_str(&yaml)?;
        info!("Loaded {} skills from {:?}", catalog.len(), path);
        Ok(catalog)
    }

    /// All skills in catalog order
    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    /// Find a skill by slug. First match wins.
    pub fn find_by_slug(&self, slug: &str) -> Option<&Skill> {
        self.skills.iter().find(|s| s.slug == slug)
    }

    /// Number of skills
    pub fn len(&self) -> usize {
        self.skills.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// Every finding across the catalog
    pub fn all_findings(&self) -> Vec<&Finding> {
        scoring::all_findings(&self.skills)
    }

    /// Skills per hand-assigned rating
    pub fn rating_counts(&self) -> RatingCounts {
        scoring::rating_counts(&self.skills)
    }

    /// Headline numbers for the catalog overview
    pub fn summary(&self) -> CatalogSummary {
        let findings = self.all_findings();
        let severity = scoring::count_by_severity(findings.iter().copied());

        CatalogSummary {
            skills: self.skills.len(),
            findings: findings.len(),
            critical_high: severity.critical + severity.high,
            medium_low: severity.medium + severity.low,
            severity,
            ratings: self.rating_counts(),
        }
    }

    /// Check data conventions that are not enforced on construction
    pub fn validate(&self) -> Result<Vec<CatalogIssue>> {
        let slug_re = Regex::new(SLUG_PATTERN)?;

        let mut issues: Vec<CatalogIssue> = self
            .skills
            .iter()
            .filter(|skill| !slug_re.is_match(&skill.slug))
            .map(|skill| CatalogIssue::InvalidSlug {
                slug: skill.slug.clone(),
            })
            .collect();

        issues.extend(
            duplicate_slugs(&self.skills)
                .into_iter()
                .map(|(first, duplicate)| CatalogIssue::DuplicateSlug {
                    slug: self.skills[duplicate].slug.clone(),
                    first,
                    duplicate,
                }),
        );

        Ok(issues)
    }
}

/// `(first, duplicate)` positions for every skill whose slug appeared earlier
fn duplicate_slugs(skills: &[Skill]) -> Vec<(usize, usize)> {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    skills
        .iter()
        .enumerate()
        .filter_map(|(index, skill)| {
            let first = *seen.entry(skill.slug.as_str()).or_insert(index);
            (first != index).then_some((first, index))
        })
        .collect()
}

/// Headline numbers for the catalog overview
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogSummary {
    /// Skills audited
    pub skills: usize,
    /// Findings across all skills
    pub findings: usize,
    /// Critical plus high findings
    pub critical_high: usize,
    /// Medium plus low findings
    pub medium_low: usize,
    /// Findings per severity
    pub severity: SeverityCounts,
    /// Skills per rating
    pub ratings: RatingCounts,
}

/// A data convention the catalog breaks
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CatalogIssue {
    /// Two skills share a slug
    DuplicateSlug {
        /// Shared slug
        slug: String,
        /// Position of the skill lookups resolve to
        first: usize,
        /// Position of the shadowed skill
        duplicate: usize,
    },
    /// Slug is not a lowercase hyphenated token
    InvalidSlug {
        /// Offending slug
        slug: String,
    },
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogIssue::DuplicateSlug {
                slug,
                first,
                duplicate,
            } => write!(
                f,
                "slug '{}' at position {} shadows position {}",
                slug, first, duplicate
            ),
            CatalogIssue::InvalidSlug { slug } => {
                write!(f, "slug '{}' is not a lowercase hyphenated token", slug)
            }
        }
    }
}
