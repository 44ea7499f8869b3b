use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "device-inventory")]
#[command(about = "Collect facts from network devices into a spreadsheet inventory")]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Poll every target and write the inventory spreadsheet
    Collect(CollectArgs),

    /// Query one device and print its facts
    Facts(FactsArgs),

    /// List available device-type drivers
    Drivers,

    /// Configuration file helpers
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Args)]
pub struct CollectArgs {
    /// Path to a YAML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Device address to poll (repeatable, replaces configured targets)
    #[arg(short, long = "target")]
    pub targets: Vec<String>,

    /// Device-type driver
    #[arg(short, long)]
    pub driver: Option<String>,

    /// Directory the spreadsheet is written to
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Spreadsheet base name (the run date is appended)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Format used to echo collected records
    #[arg(short, long, value_enum, default_value = "pretty")]
    pub format: OutputFormat,
}

#[derive(Args)]
pub struct FactsArgs {
    /// Device address
    pub address: String,

    /// Device-type driver
    #[arg(short, long, default_value = "ios")]
    pub driver: String,

    /// Management port
    #[arg(short, long, default_value = "22")]
    pub port: u16,

    /// Connect/command timeout in seconds
    #[arg(short, long, default_value = "30")]
    pub timeout: u64,

    /// Output format (json, yaml, or pretty)
    #[arg(short, long, value_enum, default_value = "pretty")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print an example configuration file
    Example,
    /// Print the default configuration file location
    Path,
}
