use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI parser for the `cohort-tools` binary.
#[derive(Debug, Parser)]
#[command(
    name = "cohort-tools",
    version,
    about = "Cohort Tools API - cohorts and students over HTTP"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Extra TOML config file, layered above the user and project files
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Run the HTTP server.
    Serve(ServeArgs),
    /// Import cohorts and students from JSON files.
    Seed(SeedArgs),
    /// Print the effective configuration as TOML.
    Config,
}

#[derive(Clone, Debug, Args)]
pub struct ServeArgs {
    /// Interface to bind (overrides server.host)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides server.port)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Database path or libsql:// URL (overrides database.url)
    #[arg(short, long)]
    pub database: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct SeedArgs {
    /// JSON array of cohorts
    #[arg(long)]
    pub cohorts: Option<PathBuf>,

    /// JSON array of students
    #[arg(long)]
    pub students: Option<PathBuf>,

    /// Database path or libsql:// URL (overrides database.url)
    #[arg(short, long)]
    pub database: Option<String>,
}
