use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::output::{print_one, print_out};
use anyhow::{anyhow, bail, Context, Result};
use serde::Serialize;
use skillboard_catalog::{
    count_by_severity, group_by_severity, quality_score, AnalysisReport, Catalog, CatalogSummary,
    CategoryCount, OverlapAnalysis, ScoreBand,
};
use skillboard_types::{Rating, Severity, SeverityCounts, Skill};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Catalog service - loads the catalog and runs one command against it
pub struct CatalogService {
    config: Config,
}

impl CatalogService {
    /// Create a new catalog service
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Run a single command
    pub fn run(self, cli: Cli) -> Result<()> {
        // Initialize logging
        skillboard_logging::init_logging(&self.config.logging.level)?;

        let catalog = self.load_catalog(cli.catalog.as_deref())?;
        info!("Catalog ready with {} skills", catalog.len());

        execute(&catalog, cli.command, cli.json)
    }

    /// Resolve the catalog: CLI flag, then configuration, then the bundled data
    fn load_catalog(&self, flag: Option<&Path>) -> Result<Catalog> {
        let path: Option<PathBuf> = flag
            .map(Path::to_path_buf)
            .or_else(|| self.config.catalog_path());

        match path {
            Some(path) => {
                debug!("Loading catalog from {:?}", path);
                Catalog::from_path(&path)
                    .with_context(|| format!("Failed to load catalog from {}", path.display()))
            }
            None => Catalog::builtin().context("Bundled catalog is malformed"),
        }
    }
}

/// Run one command against a loaded catalog
fn execute(catalog: &Catalog, command: Commands, json: bool) -> Result<()> {
    match command {
        Commands::List => {
            let rows: Vec<SkillRow> = catalog.skills().iter().map(SkillRow::from).collect();
            print_out(json, true, &rows, render_row)
        }
        Commands::Show { slug } => {
            let skill = catalog
                .find_by_slug(&slug)
                .ok_or_else(|| anyhow!("skill '{}' not found", slug))?;
            print_one(json, SkillDetail::new(skill), render_detail)
        }
        Commands::Stats => print_one(json, catalog.summary(), render_summary),
        Commands::Analysis => {
            let report = AnalysisReport::builtin().context("Bundled analysis is malformed")?;
            print_one(json, AnalysisView::new(&report), render_analysis)
        }
        Commands::Check => {
            let issues = catalog.validate()?;
            if issues.is_empty() && !json {
                println!("catalog ok: {} skills", catalog.len());
            } else {
                print_out(json, issues.is_empty(), &issues, |issue| issue.to_string())?;
            }

            if !issues.is_empty() {
                bail!("{} catalog issue(s) found", issues.len());
            }
            Ok(())
        }
    }
}

/// One line of the skill listing
#[derive(Debug, Serialize)]
struct SkillRow<'a> {
    slug: &'a str,
    name: &'a str,
    provider: &'a str,
    rating: Rating,
    findings: usize,
}

impl<'a> From<&'a Skill> for SkillRow<'a> {
    fn from(skill: &'a Skill) -> Self {
        Self {
            slug: &skill.slug,
            name: &skill.name,
            provider: &skill.provider,
            rating: skill.overall_rating,
            findings: skill.finding_count(),
        }
    }
}

fn render_row(row: &SkillRow) -> String {
    format!(
        "{:<18} {:<18} {:<12} {:<16} {} finding{}",
        row.slug,
        row.name,
        row.provider,
        row.rating.label(),
        row.findings,
        if row.findings == 1 { "" } else { "s" }
    )
}

/// A skill with its derived numbers
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SkillDetail<'a> {
    #[serde(flatten)]
    skill: &'a Skill,
    score: u8,
    score_band: ScoreBand,
    severity_counts: SeverityCounts,
    install_command: String,
    source_url: String,
}

impl<'a> SkillDetail<'a> {
    fn new(skill: &'a Skill) -> Self {
        let score = quality_score(&skill.security_findings);
        Self {
            skill,
            score,
            score_band: ScoreBand::from_score(score),
            severity_counts: count_by_severity(&skill.security_findings),
            install_command: skill.install_command(),
            source_url: skill.source_url(),
        }
    }
}

fn render_detail(detail: &SkillDetail) -> String {
    let skill = detail.skill;
    let mut out = String::new();

    let _ = writeln!(out, "{} ({}) by {}", skill.name, skill.slug, skill.provider);
    if let Some(url) = &skill.provider_url {
        let _ = writeln!(out, "  {}", url);
    }
    let _ = writeln!(
        out,
        "Rating: {}    Skill score: {} ({}, experimental)",
        skill.overall_rating,
        detail.score,
        detail.score_band.label()
    );
    let _ = writeln!(out, "$ {}", detail.install_command);
    let _ = writeln!(out, "Source: {}", detail.source_url);
    let _ = writeln!(out, "\n{}", skill.description);

    let _ = writeln!(
        out,
        "\nWhat it does: {} [{}]",
        skill.demo.title, skill.demo.language
    );
    for line in skill.demo.code.lines() {
        let _ = writeln!(out, "    {}", line);
    }

    if !skill.setup.is_empty() {
        let _ = writeln!(out, "\nSetup");
        for (n, step) in skill.numbered_setup() {
            let _ = writeln!(out, "  {}. {}", n, step);
        }
    }

    let _ = writeln!(out, "\nCode review");
    let _ = writeln!(out, "  {}", render_pills(&detail.severity_counts));

    for (severity, findings) in group_by_severity(&skill.security_findings) {
        for finding in findings {
            let _ = writeln!(
                out,
                "\n  [{}] {}",
                severity.label().to_uppercase(),
                finding.title
            );
            let _ = writeln!(out, "  file: {}", finding.file);
            let _ = writeln!(out, "  {}", finding.description);
            let _ = writeln!(out, "  Recommendation: {}", finding.recommendation);
        }
    }

    out.trim_end().to_string()
}

/// Non-zero severity counts, or "No notes"
fn render_pills(counts: &SeverityCounts) -> String {
    let pills: Vec<String> = counts
        .non_zero()
        .map(|(severity, n)| format!("{}: {}", severity, n))
        .collect();

    if pills.is_empty() {
        "No notes".to_string()
    } else {
        pills.join("  ")
    }
}

fn render_summary(summary: &CatalogSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Skills audited   {}", summary.skills);
    let _ = writeln!(out, "Total findings   {}", summary.findings);
    let _ = writeln!(out, "Critical / High  {}", summary.critical_high);
    let _ = writeln!(out, "Medium / Low     {}", summary.medium_low);
    let _ = writeln!(out);
    for severity in Severity::ALL {
        let _ = writeln!(
            out,
            "  {:<10} {}",
            severity.label(),
            summary.severity.get(severity)
        );
    }
    let _ = writeln!(out);
    for rating in Rating::ALL {
        let _ = writeln!(
            out,
            "  {:<16} {}",
            rating.label(),
            summary.ratings.get(rating)
        );
    }
    out.trim_end().to_string()
}

/// Overlap analysis with per-category totals
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalysisView<'a> {
    baseline: &'a str,
    baseline_capabilities: &'a [String],
    categories: Vec<CategoryCount>,
    analyses: &'a [OverlapAnalysis],
}

impl<'a> AnalysisView<'a> {
    fn new(report: &'a AnalysisReport) -> Self {
        Self {
            baseline: &report.baseline,
            baseline_capabilities: &report.baseline_capabilities,
            categories: report.category_counts(),
            analyses: &report.analyses,
        }
    }
}

fn render_analysis(view: &AnalysisView) -> String {
    let mut out = String::new();

    for category in &view.categories {
        let _ = writeln!(out, "{:<16} {}", category.label, category.count);
    }

    let _ = writeln!(
        out,
        "\n{} capabilities ({} domains)",
        view.baseline,
        view.baseline_capabilities.len()
    );
    for capability in view.baseline_capabilities {
        let _ = writeln!(out, "  - {}", capability);
    }

    for analysis in view.analyses {
        let _ = writeln!(out, "\n{} [{}]", analysis.skill, analysis.category.label());
        let _ = writeln!(out, "  {} overlap: {}", view.baseline, analysis.baseline_overlap);
        for capability in &analysis.unique_capabilities {
            let _ = writeln!(out, "  + {}", capability);
        }
        let _ = writeln!(out, "  Verdict: {}", analysis.verdict);
    }

    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::builtin().unwrap()
    }

    #[test]
    fn test_render_row_pluralizes() {
        let catalog = catalog();
        let botchan = SkillRow::from(catalog.find_by_slug("botchan").unwrap());
        assert!(render_row(&botchan).ends_with("1 finding"));

        let bankr = SkillRow::from(catalog.find_by_slug("bankr").unwrap());
        let line = render_row(&bankr);
        assert!(line.starts_with("bankr "));
        assert!(line.contains("Needs Attention"));
        assert!(line.ends_with("3 findings"));
    }

    #[test]
    fn test_render_detail_groups_by_severity() {
        let catalog = catalog();
        let detail = SkillDetail::new(catalog.find_by_slug("bankr").unwrap());
        assert_eq!(detail.score, 52);
        assert_eq!(detail.score_band, ScoreBand::Weak);

        let text = render_detail(&detail);
        assert!(text.contains("Skill score: 52 (weak, experimental)"));
        assert!(text.contains("  1. Install the skill"));
        assert!(text.contains("critical: 1  high: 1  medium: 1"));

        let critical = text.find("[CRITICAL]").unwrap();
        let medium = text.find("[MEDIUM]").unwrap();
        assert!(critical < medium);
    }

    #[test]
    fn test_detail_json_is_flat() {
        let catalog = catalog();
        let detail = SkillDetail::new(catalog.find_by_slug("veil").unwrap());
        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["slug"], "veil");
        assert_eq!(json["score"], 77);
        assert_eq!(json["scoreBand"], "fair");
        assert_eq!(json["severityCounts"]["high"], 1);
        assert!(json["installCommand"]
            .as_str()
            .unwrap()
            .starts_with("install the veil skill"));
    }

    #[test]
    fn test_show_unknown_slug_fails() {
        let err = execute(
            &catalog(),
            Commands::Show {
                slug: "does-not-exist".to_string(),
            },
            false,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "skill 'does-not-exist' not found");
    }

    #[test]
    fn test_show_known_slug_succeeds() {
        let result = execute(
            &catalog(),
            Commands::Show {
                slug: "bankr".to_string(),
            },
            true,
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_check_fails_on_duplicate_slug() {
        let builtin = catalog();
        let mut skills = builtin.skills().to_vec();
        skills.push(skills[0].clone());
        let broken = Catalog::new(skills);

        let err = execute(&broken, Commands::Check, false).unwrap_err();
        assert_eq!(err.to_string(), "1 catalog issue(s) found");

        let err = execute(&broken, Commands::Check, true).unwrap_err();
        assert_eq!(err.to_string(), "1 catalog issue(s) found");
    }

    #[test]
    fn test_check_passes_on_bundled_catalog() {
        assert!(execute(&catalog(), Commands::Check, false).is_ok());
        assert!(execute(&catalog(), Commands::Check, true).is_ok());
    }

    #[test]
    fn test_render_pills_without_findings() {
        assert_eq!(render_pills(&SeverityCounts::default()), "No notes");
    }

    #[test]
    fn test_render_summary() {
        let text = render_summary(&catalog().summary());
        assert!(text.starts_with("Skills audited   12"));
        assert!(text.contains("Total findings   23"));
        assert!(text.contains("Has Notes"));
    }

    #[test]
    fn test_render_analysis() {
        let report = AnalysisReport::builtin().unwrap();
        let text = render_analysis(&AnalysisView::new(&report));
        assert!(text.starts_with("Redundant        0"));
        assert!(text.contains("No Overlap       6"));
        assert!(text.contains("Yoink [Dependency]"));
    }
}
