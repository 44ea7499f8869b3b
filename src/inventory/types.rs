use chrono::NaiveDate;
use serde::Serialize;

use crate::drivers::Facts;

/// Spreadsheet header, in `DeviceRecord` field order.
pub const COLUMNS: [&str; 7] = [
    "hostname",
    "ip address",
    "vendor",
    "model",
    "operating system",
    "serial number",
    "date",
];

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One successfully queried device.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceRecord {
    pub hostname: String,
    #[serde(rename = "ip address")]
    pub ip_address: String,
    pub vendor: String,
    pub model: String,
    #[serde(rename = "operating system")]
    pub os_version: String,
    #[serde(rename = "serial number")]
    pub serial_number: String,
    #[serde(rename = "date")]
    pub collection_date: NaiveDate,
}

impl DeviceRecord {
    pub fn from_facts(facts: Facts, address: &str, collection_date: NaiveDate) -> Self {
        DeviceRecord {
            hostname: facts.hostname,
            ip_address: address.to_string(),
            vendor: facts.vendor,
            model: facts.model,
            os_version: facts.os_version,
            serial_number: facts.serial_number,
            collection_date,
        }
    }

    /// Cell values matching `COLUMNS`.
    pub fn row(&self) -> [String; 7] {
        [
            self.hostname.clone(),
            self.ip_address.clone(),
            self.vendor.clone(),
            self.model.clone(),
            self.os_version.clone(),
            self.serial_number.clone(),
            self.collection_date.format(DATE_FORMAT).to_string(),
        ]
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FailedDevice {
    pub address: String,
    pub error: String,
}

/// Outcome of one collection run. Only `records` reach the spreadsheet.
#[derive(Debug, Default, Serialize)]
pub struct CollectionReport {
    pub records: Vec<DeviceRecord>,
    pub failures: Vec<FailedDevice>,
}

impl CollectionReport {
    pub fn attempted(&self) -> usize {
        self.records.len() + self.failures.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DeviceRecord {
        DeviceRecord::from_facts(
            Facts {
                hostname: "core-sw".to_string(),
                vendor: "Cisco".to_string(),
                model: "WS-C3850-24P".to_string(),
                os_version: "16.3.5".to_string(),
                serial_number: "FOC1111X111".to_string(),
                uptime_seconds: Some(60),
            },
            "10.0.0.1",
            NaiveDate::from_ymd_opt(2026, 10, 18).unwrap(),
        )
    }

    #[test]
    fn row_follows_column_order() {
        assert_eq!(
            sample().row(),
            [
                "core-sw",
                "10.0.0.1",
                "Cisco",
                "WS-C3850-24P",
                "16.3.5",
                "FOC1111X111",
                "2026-10-18",
            ]
            .map(String::from)
        );
    }

    #[test]
    fn serializes_with_column_names() {
        let value = serde_json::to_value(sample()).unwrap();
        let object = value.as_object().unwrap();
        for column in COLUMNS {
            assert!(object.contains_key(column), "missing {column}");
        }
        assert_eq!(object["date"], "2026-10-18");
        assert_eq!(object["ip address"], "10.0.0.1");
    }
}
