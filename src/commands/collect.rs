use chrono::{Local, NaiveDate};
use std::path::PathBuf;

use crate::cli::CollectArgs;
use crate::config::{ConfigOverrides, Credentials, InventoryConfig};
use crate::drivers::{get_network_driver, ConnectionParams};
use crate::error::Result;
use crate::inventory::{collect_inventory, write_inventory, CollectionReport};
use crate::output::{output_data, print_success, print_warning};

pub fn handle_collect_command(args: &CollectArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = InventoryConfig::load(args.config.as_deref())?;
    config.apply(ConfigOverrides {
        targets: args.targets.clone(),
        driver: args.driver.clone(),
        output_dir: args.output_dir.clone(),
        file_name: args.name.clone(),
    });
    config.validate()?;

    if config.targets.is_empty() {
        print_warning("No targets configured, writing an empty inventory");
    }

    let credentials = Credentials::from_env();
    tracing::debug!(?config, ?credentials, "starting collection");

    let today = Local::now().date_naive();
    let (report, path) = run_inventory(&config, &credentials, today)?;

    output_data(&report.records, args.format)?;

    for failed in &report.failures {
        print_warning(&format!("{} was skipped: {}", failed.address, failed.error));
    }
    print_success(&format!(
        "Collected {} of {} devices, inventory written to {}",
        report.records.len(),
        report.attempted(),
        path.display()
    ));
    Ok(())
}

/// Collect from every configured target and write the spreadsheet.
/// Only a failed write is an error; device failures land in the report.
pub fn run_inventory(
    config: &InventoryConfig,
    credentials: &Credentials,
    date: NaiveDate,
) -> Result<(CollectionReport, PathBuf)> {
    let report = collect_inventory(
        &config.targets,
        |address| {
            let constructor = get_network_driver(&config.driver)?;
            Ok(constructor(ConnectionParams::new(address, credentials, config)))
        },
        date,
    );

    let path = write_inventory(&report.records, &config.output_dir, &config.file_name, date)?;
    Ok((report, path))
}
