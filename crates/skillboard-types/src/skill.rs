//! Skill and finding records

use crate::{Rating, Severity};
use serde::{Deserialize, Serialize};

/// Repository hosting the source of every cataloged skill
pub const SKILLS_REPO_URL: &str = "https://github.com/BankrBot/openclaw-skills";

/// A single illustrative code sample
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Demo {
    /// File name shown above the snippet
    pub title: String,
    /// Free-text language label used for highlighting
    pub language: String,
    /// Snippet body
    pub code: String,
}

/// A static security note attached to a skill
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// How serious the note is
    pub severity: Severity,
    /// One-line headline
    pub title: String,
    /// Path of the file the note refers to
    pub file: String,
    /// What the issue is
    pub description: String,
    /// How to address it
    pub recommendation: String,
}

impl Finding {
    /// Create a finding
    pub fn new(
        severity: Severity,
        title: impl Into<String>,
        file: impl Into<String>,
        description: impl Into<String>,
        recommendation: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            title: title.into(),
            file: file.into(),
            description: description.into(),
            recommendation: recommendation.into(),
        }
    }
}

/// A cataloged third-party skill
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    /// Unique, URL-safe identifier (lowercase, hyphenated)
    pub slug: String,
    /// Display name
    pub name: String,
    /// Who publishes the skill
    pub provider: String,
    /// Link to the provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_url: Option<String>,
    /// Short pitch
    pub description: String,
    /// Example usage
    pub demo: Demo,
    /// Setup instructions, in order
    #[serde(default)]
    pub setup: Vec<String>,
    /// Security notes, in display order
    #[serde(default)]
    pub security_findings: Vec<Finding>,
    /// Hand-assigned classification
    pub overall_rating: Rating,
}

impl Skill {
    /// Number of security findings
    pub fn finding_count(&self) -> usize {
        self.security_findings.len()
    }

    /// Link to the skill source in the skills repository
    pub fn source_url(&self) -> String {
        format!("{}/tree/main/{}", SKILLS_REPO_URL, self.slug)
    }

    /// Prompt an agent can be given to install this skill
    pub fn install_command(&self) -> String {
        format!("install the {} skill from {}", self.slug, self.source_url())
    }

    /// Setup steps numbered from 1
    pub fn numbered_setup(&self) -> impl Iterator<Item = (usize, &str)> {
        self.setup
            .iter()
            .enumerate()
            .map(|(i, step)| (i + 1, step.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SKILL_YAML: &str = r#"
slug: bankr-signals
name: Bankr Signals
provider: BankrBot
providerUrl: https://github.com/BankrBot
description: Social copy-trading signals.
demo:
  title: signals-config.ts
  language: typescript
  code: "await bankrSignals.watch({})"
setup:
  - "Install: `npx openclaw install bankr-signals`"
  - Requires Bankr skill as dependency
securityFindings:
  - severity: low
    title: Rate Limit Bypass on Signal Polling
    file: bankr-signals/scripts/poll.ts
    description: The polling interval has no server-side enforcement.
    recommendation: Enforce rate limits server-side.
overallRating: warning
"#;

    #[test]
    fn test_parse_skill() {
        let skill: Skill = serde_yaml::from_str(SKILL_YAML).unwrap();
        assert_eq!(skill.slug, "bankr-signals");
        assert_eq!(
            skill.provider_url.as_deref(),
            Some("https://github.com/BankrBot")
        );
        assert_eq!(skill.overall_rating, Rating::Warning);
        assert_eq!(skill.finding_count(), 1);
        assert_eq!(skill.security_findings[0].severity, Severity::Low);
    }

    #[test]
    fn test_setup_order_preserved() {
        let skill: Skill = serde_yaml::from_str(SKILL_YAML).unwrap();
        let steps: Vec<_> = skill.numbered_setup().collect();
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].0, 1);
        assert!(steps[0].1.starts_with("Install"));
        assert_eq!(steps[1], (2, "Requires Bankr skill as dependency"));
    }

    #[test]
    fn test_install_command() {
        let skill: Skill = serde_yaml::from_str(SKILL_YAML).unwrap();
        assert_eq!(
            skill.source_url(),
            "https://github.com/BankrBot/openclaw-skills/tree/main/bankr-signals"
        );
        assert_eq!(
            skill.install_command(),
            "install the bankr-signals skill from https://github.com/BankrBot/openclaw-skills/tree/main/bankr-signals"
        );
    }

    #[test]
    fn test_invalid_severity_rejected() {
        let yaml = SKILL_YAML.replace("severity: low", "severity: severe");
        let parsed: Result<Skill, _> = serde_yaml::from_str(&yaml);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_camel_case_on_the_wire() {
        let skill: Skill = serde_yaml::from_str(SKILL_YAML).unwrap();
        let json = serde_json::to_value(&skill).unwrap();
        assert!(json.get("securityFindings").is_some());
        assert_eq!(json["overallRating"], "warning");
    }
}
