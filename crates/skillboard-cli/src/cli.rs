use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "skillboard", version, about = "Browse audited agent skills")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "Catalog YAML file to load instead of the configured or bundled one"
    )]
    pub catalog: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every skill with its rating and finding count
    List,
    /// Show one skill: score, setup steps and findings
    Show { slug: String },
    /// Catalog-wide finding and rating totals
    Stats,
    /// Overlap of each skill with the baseline skill
    Analysis,
    /// Check catalog data conventions
    Check,
}
