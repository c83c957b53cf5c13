//! CLI argument definitions for scoretop.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "scoretop")]
#[command(about = "Extracts top player scores from an NBT scoreboard file", version)]
pub struct Args {
    /// Number of scores to keep per objective (0 keeps all)
    #[arg(short, long)]
    pub number: Option<usize>,

    /// File to read scores from
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// File to write the report to
    #[arg(short = 't', long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Playerdata directory for UUID and name extraction (needs Spigot/Bukkit)
    #[arg(short, long, value_name = "DIR")]
    pub playerdata: Option<PathBuf>,

    /// Sort ascending by default
    #[arg(short, long, conflicts_with = "descending")]
    pub ascending: bool,

    /// Sort descending by default
    #[arg(short, long)]
    pub descending: bool,

    /// Objective sorted opposite to the default direction (repeatable)
    #[arg(short, long, value_name = "OBJECTIVE")]
    pub reverse: Vec<String>,

    /// Combine rule as "<regex> <new_name>" (repeatable)
    #[arg(long, value_name = "RULE")]
    pub combine: Vec<String>,

    /// Convert rule as "<key> <objective>" (repeatable), e.g. "hms play_time"
    #[arg(long, value_name = "RULE")]
    pub convert: Vec<String>,

    /// Objective to keep; anything not listed is dropped (repeatable)
    #[arg(short, long, value_name = "OBJECTIVE")]
    pub whitelist: Vec<String>,

    /// Objective to drop from the report (repeatable)
    #[arg(short, long, value_name = "OBJECTIVE")]
    pub blacklist: Vec<String>,

    /// Remove source objectives consumed by combine rules
    #[arg(long)]
    pub delete_combined: bool,

    /// Config file; CLI arguments override it
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}
