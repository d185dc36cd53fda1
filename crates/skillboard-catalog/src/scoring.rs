//! Severity aggregation and quality scoring
//!
//! Every function here is pure and total over its input.

use serde::{Deserialize, Serialize};
use skillboard_types::{Finding, RatingCounts, Severity, SeverityCounts, Skill};

/// Score of a skill with no findings
pub const MAX_SCORE: u8 = 100;

/// Tally findings per severity. All four levels are always present.
pub fn count_by_severity<'a>(findings: impl IntoIterator<Item = &'a Finding>) -> SeverityCounts {
    let mut counts = SeverityCounts::default();
    for finding in findings {
        counts.record(finding.severity);
    }
    counts
}

/// Every finding of every skill, in collection order then finding order
pub fn all_findings(skills: &[Skill]) -> Vec<&Finding> {
    skills
        .iter()
        .flat_map(|skill| skill.security_findings.iter())
        .collect()
}

/// Flat-deduction quality score in `0..=100`
///
/// Starts at 100 and subtracts each finding's severity penalty, clamped at 0.
pub fn quality_score<'a>(findings: impl IntoIterator<Item = &'a Finding>) -> u8 {
    let deduction = findings
        .into_iter()
        .fold(0u32, |acc, f| acc.saturating_add(f.severity.penalty()));

    // Bounded by MAX_SCORE, so the narrowing cannot truncate
    u32::from(MAX_SCORE).saturating_sub(deduction) as u8
}

/// Tally skills per hand-assigned rating
pub fn rating_counts(skills: &[Skill]) -> RatingCounts {
    let mut counts = RatingCounts::default();
    for skill in skills {
        counts.record(skill.overall_rating);
    }
    counts
}

/// Findings grouped by severity, most severe first
///
/// Empty groups are omitted. Within a group the input order is kept.
pub fn group_by_severity<'a>(
    findings: impl IntoIterator<Item = &'a Finding>,
) -> Vec<(Severity, Vec<&'a Finding>)> {
    let findings: Vec<&Finding> = findings.into_iter().collect();

    Severity::ALL
        .into_iter()
        .filter_map(|severity| {
            let group: Vec<&Finding> = findings
                .iter()
                .copied()
                .filter(|f| f.severity == severity)
                .collect();
            (!group.is_empty()).then_some((severity, group))
        })
        .collect()
}

/// Coarse band a quality score falls into, used for highlighting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    /// 90 and above
    Strong,
    /// 75 to 89
    Fair,
    /// Below 75
    Weak,
}

impl ScoreBand {
    /// Band for a score
    pub fn from_score(score: u8) -> Self {
        match score {
            90.. => ScoreBand::Strong,
            75..=89 => ScoreBand::Fair,
            _ => ScoreBand::Weak,
        }
    }

    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            ScoreBand::Strong => "strong",
            ScoreBand::Fair => "fair",
            ScoreBand::Weak => "weak",
        }
    }
}
