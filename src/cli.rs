use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::application::dto::{DateSelection, OutputFormat, DEFAULT_SEARCH_SIZE};
use crate::stats_analysis::domain::{DatePreset, Granularity};

/// npm package statistics from the command line
#[derive(Parser, Debug)]
#[command(name = "npm-stats")]
#[command(version)]
#[command(
    about = "npm package statistics: downloads, dependency trees, bundle size and repository health",
    long_about = None
)]
pub struct Args {
    /// Path to a config file (defaults to ./npm-stats.config.yml when present)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format: json or markdown
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Suppress progress messages on stderr
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Download statistics for a package
    Stats {
        /// Package name, e.g. react or @types/node
        package: String,

        #[command(flatten)]
        dates: DateArgs,

        /// Chart resolution: daily, weekly or monthly
        #[arg(short, long)]
        granularity: Option<Granularity>,

        /// Number of versions listed in the per-version table
        #[arg(long, value_name = "N")]
        top_versions: Option<usize>,
    },

    /// Dependency tree of the latest published version
    Tree {
        package: String,

        /// Deepest level whose dependencies are listed (root is 1)
        #[arg(short, long, value_name = "N")]
        depth: Option<usize>,
    },

    /// Package metadata: npms.io score, bundle size, TypeScript support, releases, GitHub
    Info { package: String },

    /// Search the npm registry
    Search {
        query: String,

        /// Maximum number of results
        #[arg(short, long, default_value_t = DEFAULT_SEARCH_SIZE)]
        size: usize,
    },

    /// Compare download statistics of 2 to 4 packages
    Compare {
        #[arg(required = true, value_name = "PACKAGE")]
        packages: Vec<String>,

        #[command(flatten)]
        dates: DateArgs,

        /// Resolution of the merged series: daily, weekly or monthly
        #[arg(short, long)]
        granularity: Option<Granularity>,
    },
}

/// Reporting period options shared by `stats` and `compare`
#[derive(clap::Args, Debug, Clone, Default)]
pub struct DateArgs {
    /// First day, YYYY-MM-DD
    #[arg(long, requires = "end", conflicts_with = "preset")]
    pub start: Option<String>,

    /// Last day, YYYY-MM-DD
    #[arg(long, requires = "start")]
    pub end: Option<String>,

    /// Quick range ending yesterday: 7d, 1m, 6m, 1y or 2y (default 1m)
    #[arg(short, long)]
    pub preset: Option<DatePreset>,
}

impl DateArgs {
    pub fn selection(&self) -> DateSelection {
        match (&self.start, &self.end, self.preset) {
            (Some(start), Some(end), _) => DateSelection::Explicit {
                start: start.clone(),
                end: end.clone(),
            },
            (_, _, Some(preset)) => DateSelection::Preset(preset),
            _ => DateSelection::default(),
        }
    }
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
