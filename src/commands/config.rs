use crate::cli::ConfigCommands;
use crate::config::{default_config_path_string, generate_example_config};

pub fn handle_config_command(cmd: &ConfigCommands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        ConfigCommands::Example => print!("{}", generate_example_config()),
        ConfigCommands::Path => println!("{}", default_config_path_string()),
    }
    Ok(())
}
