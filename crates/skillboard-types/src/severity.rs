//! Severity and rating classifications

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a single finding.
///
/// Variants are declared lowest first so the derived ordering gives
/// `Critical > High > Medium > Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Minor issue, informational
    Low,
    /// Exploitable under specific conditions
    Medium,
    /// Serious issue with a realistic attack path
    High,
    /// Direct loss of funds or full compromise
    Critical,
}

impl Severity {
    /// All severities in display order, most severe first
    pub const ALL: [Severity; 4] = [
        Severity::Critical,
        Severity::High,
        Severity::Medium,
        Severity::Low,
    ];

    /// Points deducted from the quality score for one finding of this severity
    pub fn penalty(self) -> u32 {
        match self {
            Severity::Critical => 25,
            Severity::High => 15,
            Severity::Medium => 8,
            Severity::Low => 3,
        }
    }

    /// Lowercase label used on finding badges
    pub fn label(self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Hand-assigned overall classification of a skill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    /// No notable findings
    Clean,
    /// Findings worth reading before install
    Warning,
    /// Findings that need attention before install
    Flagged,
}

impl Rating {
    /// All ratings in badge order
    pub const ALL: [Rating; 3] = [Rating::Clean, Rating::Warning, Rating::Flagged];

    /// Badge text shown next to a skill
    pub fn label(self) -> &'static str {
        match self {
            Rating::Clean => "Clean",
            Rating::Warning => "Has Notes",
            Rating::Flagged => "Needs Attention",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Critical > Severity::High);
        assert!(Severity::High > Severity::Medium);
        assert!(Severity::Medium > Severity::Low);

        let mut sorted = Severity::ALL.to_vec();
        sorted.sort();
        sorted.reverse();
        assert_eq!(sorted, Severity::ALL.to_vec());
    }

    #[test]
    fn test_severity_penalties() {
        assert_eq!(Severity::Critical.penalty(), 25);
        assert_eq!(Severity::High.penalty(), 15);
        assert_eq!(Severity::Medium.penalty(), 8);
        assert_eq!(Severity::Low.penalty(), 3);
    }

    #[test]
    fn test_unknown_severity_rejected() {
        let parsed: Result<Severity, _> = serde_json::from_str("\"severe\"");
        assert!(parsed.is_err());

        let parsed: Severity = serde_json::from_str("\"critical\"").unwrap();
        assert_eq!(parsed, Severity::Critical);
    }

    #[test]
    fn test_rating_labels() {
        assert_eq!(Rating::Clean.label(), "Clean");
        assert_eq!(Rating::Warning.label(), "Has Notes");
        assert_eq!(Rating::Flagged.to_string(), "Needs Attention");

        let parsed: Result<Rating, _> = serde_json::from_str("\"unknown\"");
        assert!(parsed.is_err());
    }
}
