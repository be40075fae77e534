use clap::{Parser, Subcommand};
use deptree::application::dto::OutputFormat;
use std::path::PathBuf;

/// Parse build-tool dependency reports into trees and deduplicated graphs
#[derive(Parser, Debug)]
#[command(name = "deptree")]
#[command(version)]
#[command(about = "Parse build-tool dependency reports into trees and deduplicated graphs", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to a config file (defaults to ./deptree.config.yml when present)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Show debug logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only show warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse a raw dependency report into a tree document
    Parse(ParseArgs),
    /// Filter a tree document by keywords or to project dependencies
    Filter(FilterArgs),
    /// Convert a report or tree document into a deduplicated graph
    Graph(GraphArgs),
    /// List the distinct module:version coordinates of a report or tree document
    Enlist(EnlistArgs),
}

#[derive(clap::Args, Debug)]
pub struct ParseArgs {
    /// Dependency report (e.g. the output of `gradle dependencies`)
    pub input: PathBuf,

    /// Regular expression marking the start of a classpath section
    #[arg(long, value_name = "REGEX")]
    pub header_pattern: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(clap::Args, Debug)]
pub struct FilterArgs {
    /// Tree document written by `deptree parse`
    pub tree: PathBuf,

    #[command(flatten)]
    pub tree_filter: TreeFilterArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(clap::Args, Debug)]
pub struct GraphArgs {
    /// Dependency report, or a tree document when the name ends in .json
    pub input: PathBuf,

    /// Maximum distance (hops) from the root to include nodes
    #[arg(short, long, value_name = "HOPS")]
    pub distance: Option<usize>,

    /// Exclude nodes whose id contains this keyword (case-sensitive)
    #[arg(short, long, value_name = "KEYWORD")]
    pub exclude: Option<String>,

    #[command(flatten)]
    pub tree_filter: TreeFilterArgs,

    /// Regular expression marking the start of a classpath section
    #[arg(long, value_name = "REGEX")]
    pub header_pattern: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(clap::Args, Debug)]
pub struct EnlistArgs {
    /// Dependency report, or a tree document when the name ends in .json
    pub input: PathBuf,

    /// Regular expression marking the start of a classpath section
    #[arg(long, value_name = "REGEX")]
    pub header_pattern: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(clap::Args, Debug, Default)]
pub struct TreeFilterArgs {
    /// Comma-separated keywords matched against module names (case-insensitive)
    #[arg(long = "filter", value_name = "KEYWORDS")]
    pub filter: Option<String>,

    /// Keep only project (in-repository) dependencies
    #[arg(short, long)]
    pub project_only: bool,
}

#[derive(clap::Args, Debug, Default)]
pub struct OutputArgs {
    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format: json or yaml (defaults to json; yaml for enlist)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
