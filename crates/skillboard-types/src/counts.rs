//! Per-severity and per-rating tallies

use crate::{Rating, Severity};
use serde::{Deserialize, Serialize};

/// Number of findings at each severity level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityCounts {
    /// Critical findings
    pub critical: usize,
    /// High findings
    pub high: usize,
    /// Medium findings
    pub medium: usize,
    /// Low findings
    pub low: usize,
}

impl SeverityCounts {
    /// Count one more finding of the given severity
    pub fn record(&mut self, severity: Severity) {
        match severity {
            Severity::Critical => self.critical += 1,
            Severity::High => self.high += 1,
            Severity::Medium => self.medium += 1,
            Severity::Low => self.low += 1,
        }
    }

    /// Count for a single severity
    pub fn get(&self, severity: Severity) -> usize {
        match severity {
            Severity::Critical => self.critical,
            Severity::High => self.high,
            Severity::Medium => self.medium,
            Severity::Low => self.low,
        }
    }

    /// Sum over all severities
    pub fn total(&self) -> usize {
        self.critical + self.high + self.medium + self.low
    }

    /// Non-zero counts, most severe first
    pub fn non_zero(&self) -> impl Iterator<Item = (Severity, usize)> + '_ {
        Severity::ALL
            .into_iter()
            .map(|s| (s, self.get(s)))
            .filter(|(_, n)| *n > 0)
    }
}

/// Number of skills carrying each hand-assigned rating
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingCounts {
    /// Skills rated clean
    pub clean: usize,
    /// Skills rated warning
    pub warning: usize,
    /// Skills rated flagged
    pub flagged: usize,
}

impl RatingCounts {
    /// Count one more skill with the given rating
    pub fn record(&mut self, rating: Rating) {
        match rating {
            Rating::Clean => self.clean += 1,
            Rating::Warning => self.warning += 1,
            Rating::Flagged => self.flagged += 1,
        }
    }

    /// Count for a single rating
    pub fn get(&self, rating: Rating) -> usize {
        match rating {
            Rating::Clean => self.clean,
            Rating::Warning => self.warning,
            Rating::Flagged => self.flagged,
        }
    }

    /// Sum over all ratings
    pub fn total(&self) -> usize {
        self.clean + self.warning + self.flagged
    }
}
