use chrono::NaiveDate;

use crate::drivers::{NetworkDriver, Session};
use crate::error::DriverError;
use crate::inventory::types::{CollectionReport, DeviceRecord, FailedDevice};
use crate::output::{print_info, print_warning};

/// Query one device through `driver` and build its record.
///
/// The session is closed before returning, on success and on error alike.
/// Open and fact errors are returned; a close error is only logged.
pub fn collect_device(
    driver: Box<dyn NetworkDriver>,
    address: &str,
    collection_date: NaiveDate,
) -> Result<DeviceRecord, DriverError> {
    let mut session = Session::open(driver, address)?;

    print_info(&format!("Gathering facts from {}", address));
    let facts = session.get_facts()?;
    // close failures are logged, the record is kept
    if let Err(e) = session.close() {
        tracing::warn!(address, error = %e, "failed to close session");
    }

    Ok(DeviceRecord::from_facts(facts, address, collection_date))
}

/// Poll every target in order, one at a time.
///
/// `connect` builds the driver for an address; errors from it or from the
/// device are logged and the address is skipped.
pub fn collect_inventory<F>(targets: &[String], mut connect: F, collection_date: NaiveDate) -> CollectionReport
where
    F: FnMut(&str) -> Result<Box<dyn NetworkDriver>, DriverError>,
{
    let mut report = CollectionReport::default();

    for address in targets {
        print_info(&format!("Connecting to {}", address));

        let result = connect(address).and_then(|driver| collect_device(driver, address, collection_date));

        match result {
            Ok(record) => {
                print_info(&format!("Adding {} to inventory", address));
                tracing::debug!(?record, "device collected");
                report.records.push(record);
            }
            Err(e) => {
                print_warning(&format!("There has been an error connecting to {}: {}", address, e));
                report.failures.push(FailedDevice {
                    address: address.clone(),
                    error: e.to_string(),
                });
            }
        }
    }

    report
}
