use std::time::Duration;

use crate::cli::FactsArgs;
use crate::config::Credentials;
use crate::drivers::{get_network_driver, ConnectionParams, Session};
use crate::output::{output_data, print_info};

pub fn handle_facts_command(args: &FactsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let constructor = get_network_driver(&args.driver)?;
    let credentials = Credentials::from_env();

    let driver = constructor(ConnectionParams {
        address: args.address.clone(),
        username: credentials.username,
        password: credentials.password,
        port: args.port,
        timeout: Duration::from_secs(args.timeout),
    });

    print_info(&format!("Connecting to {}", args.address));
    let mut session = Session::open(driver, &args.address)?;
    let facts = session.get_facts()?;
    session.close()?;

    output_data(&facts, args.format)?;
    Ok(())
}
