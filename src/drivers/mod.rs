// Device-type drivers and the session wrapper around them
pub mod ios;
pub mod session;

use serde::Serialize;
use std::time::Duration;

use crate::config::{Credentials, InventoryConfig};
use crate::error::DriverError;

pub use session::Session;

/// The fact set every driver returns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Facts {
    pub hostname: String,
    pub vendor: String,
    pub model: String,
    pub os_version: String,
    pub serial_number: String,
    pub uptime_seconds: Option<u64>,
}

/// Uniform connect/query interface over a device's management protocol.
pub trait NetworkDriver {
    fn open(&mut self) -> Result<(), DriverError>;

    fn get_facts(&mut self) -> Result<Facts, DriverError>;

    /// Must be safe to call on a driver that never opened or already closed.
    fn close(&mut self) -> Result<(), DriverError>;
}

/// Everything a driver constructor needs to reach one device.
#[derive(Debug, Clone)]
pub struct ConnectionParams {
    pub address: String,
    pub username: Option<String>,
    pub password: Option<String>,
    pub port: u16,
    pub timeout: Duration,
}

impl ConnectionParams {
    pub fn new(address: &str, credentials: &Credentials, config: &InventoryConfig) -> Self {
        ConnectionParams {
            address: address.to_string(),
            username: credentials.username.clone(),
            password: credentials.password.clone(),
            port: config.port,
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }
}

pub type DriverConstructor = fn(ConnectionParams) -> Box<dyn NetworkDriver>;

const DRIVERS: &[(&str, DriverConstructor)] = &[("ios", ios::IosDriver::boxed)];

/// Look up a driver constructor by its device-type name.
pub fn get_network_driver(name: &str) -> Result<DriverConstructor, DriverError> {
    let wanted = name.trim().to_lowercase();
    DRIVERS
        .iter()
        .find(|(driver, _)| *driver == wanted)
        .map(|(_, constructor)| *constructor)
        .ok_or_else(|| DriverError::UnsupportedDriver(name.to_string()))
}

pub fn available_drivers() -> Vec<&'static str> {
    DRIVERS.iter().map(|(name, _)| *name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_ios_driver_case_insensitively() {
        assert!(get_network_driver("ios").is_ok());
        assert!(get_network_driver(" IOS ").is_ok());
    }

    #[test]
    fn rejects_unknown_driver() {
        match get_network_driver("junos") {
            Err(DriverError::UnsupportedDriver(name)) => assert_eq!(name, "junos"),
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("junos should not resolve"),
        }
    }

    #[test]
    fn lists_registered_drivers() {
        assert_eq!(available_drivers(), vec!["ios"]);
    }
}
