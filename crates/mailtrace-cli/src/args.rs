use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mailtrace")]
#[command(about = "Extract and analyze email activity from mail server logs", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, default_value = "~/.mailtrace", global = true)]
    pub data_dir: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Run the full pipeline: extract, stage, migrate, report")]
    Run {
        /// Path to the log file to ingest
        log_file: PathBuf,

        #[arg(long, help = "Print per-stage progress detail")]
        verbose: bool,
    },

    #[command(about = "Print the aggregate report for the existing history database")]
    Report,

    #[command(about = "Write a default config.toml into the data dir")]
    Init,
}
