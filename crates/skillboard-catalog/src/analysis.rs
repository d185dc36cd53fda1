//! Overlap analysis of cataloged skills against a baseline skill
//!
//! Each entry records how much of a skill the baseline already covers and
//! what the skill adds on top.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Bundled analysis data
const BUILTIN_ANALYSIS: &str = include_str!("../data/analysis.yaml");

/// How a skill relates to the baseline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverlapCategory {
    /// The baseline already does everything the skill does
    Redundant,
    /// Same domain, different layer of the stack
    DifferentLayer,
    /// Some capabilities overlap
    Partial,
    /// The skill builds on the baseline
    Dependency,
    /// Disjoint domains
    NoOverlap,
}

impl OverlapCategory {
    /// All categories in summary order
    pub const ALL: [OverlapCategory; 5] = [
        OverlapCategory::Redundant,
        OverlapCategory::DifferentLayer,
        OverlapCategory::Partial,
        OverlapCategory::Dependency,
        OverlapCategory::NoOverlap,
    ];

    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            OverlapCategory::Redundant => "Redundant",
            OverlapCategory::DifferentLayer => "Different Layer",
            OverlapCategory::Partial => "Partial Overlap",
            OverlapCategory::Dependency => "Dependency",
            OverlapCategory::NoOverlap => "No Overlap",
        }
    }
}

/// One skill compared against the baseline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlapAnalysis {
    /// Display name of the analysed skill
    pub skill: String,
    /// Relation to the baseline
    pub category: OverlapCategory,
    /// What the baseline already covers
    pub baseline_overlap: String,
    /// What only this skill provides
    pub unique_capabilities: Vec<String>,
    /// One-paragraph conclusion
    pub verdict: String,
}

/// Number of analyses in a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    /// Category
    pub category: OverlapCategory,
    /// Display label of the category
    pub label: &'static str,
    /// Analyses in the category
    pub count: usize,
}

/// The full analysis: baseline capabilities plus per-skill comparisons
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// Name of the skill everything is compared against
    pub baseline: String,
    /// Capability domains the baseline covers
    pub baseline_capabilities: Vec<String>,
    /// Per-skill comparisons
    pub analyses: Vec<OverlapAnalysis>,
}

impl AnalysisReport {
    /// The analysis bundled with this crate
    pub fn builtin() -> Result<Self> {
        Self::from_yaml_str(BUILTIN_ANALYSIS)
    }

    /// Parse a report from YAML
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Analyses per category; every category is present, in summary order
    pub fn category_counts(&self) -> Vec<CategoryCount> {
        OverlapCategory::ALL
            .into_iter()
            .map(|category| CategoryCount {
                category,
                label: category.label(),
                count: self
                    .analyses
                    .iter()
                    .filter(|a| a.category == category)
                    .count(),
            })
            .collect()
    }

    /// Analyses in one category, in report order
    pub fn in_category(&self, category: OverlapCategory) -> impl Iterator<Item = &OverlapAnalysis> {
        self.analyses.iter().filter(move |a| a.category == category)
    }
}
