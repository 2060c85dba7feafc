use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "bookindex",
    version,
    about = "Back-of-book index generation from a PDF and term lists"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the page index for the given term and name lists
    Generate(GenerateArgs),
    /// Dump extracted page text for inspection
    Pages(PagesArgs),
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Source PDF document
    pub pdf: PathBuf,

    /// File with one index term per line
    #[arg(long)]
    pub terms: Option<PathBuf>,

    /// File with one name per line, optionally in "Last, First" form
    #[arg(long)]
    pub names: Option<PathBuf>,

    /// Write the formatted index here instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Emit the result (or error) as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,

    #[arg(long, default_value_t = 50)]
    pub max_size_mib: u64,
}

#[derive(Args, Debug, Clone)]
pub struct PagesArgs {
    /// Source PDF document
    pub pdf: PathBuf,

    /// Print only this 1-based page
    #[arg(long)]
    pub page: Option<usize>,

    /// Show the lowercased, whitespace-collapsed form the matcher sees
    #[arg(long, default_value_t = false)]
    pub collapsed: bool,

    #[arg(long, default_value_t = 50)]
    pub max_size_mib: u64,
}
