mod cli;
mod commands;
mod config;
mod drivers;
mod error;
mod inventory;
mod output;

use clap::Parser;
use cli::{Cli, Commands};
use commands::{
    handle_collect_command,
    handle_config_command,
    handle_drivers_command,
    handle_facts_command,
};
use output::print_error;

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("device_inventory={}", log_level).into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let result = match &cli.command {
        Commands::Collect(args) => handle_collect_command(args),
        Commands::Facts(args) => handle_facts_command(args),
        Commands::Drivers => handle_drivers_command(),
        Commands::Config(cmd) => handle_config_command(cmd),
    };

    if let Err(e) = result {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
