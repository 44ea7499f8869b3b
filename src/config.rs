use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{InventoryError, Result};

const ENV_USERNAME: &str = "USERNAME";
const ENV_PASSWORD: &str = "PASSWORD";

pub const DEFAULT_DRIVER: &str = "ios";
pub const DEFAULT_FILE_NAME: &str = "Network Device Inventory";
const DEFAULT_PORT: u16 = 22;
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Device login credentials. Either half may be missing; the driver is
/// left to fail at authentication in that case.
#[derive(Clone, Default)]
pub struct Credentials {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl Credentials {
    /// Read `USERNAME` and `PASSWORD` from the process environment.
    pub fn from_env() -> Self {
        Credentials {
            username: std::env::var(ENV_USERNAME).ok(),
            password: std::env::var(ENV_PASSWORD).ok(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Run configuration: what to poll and where to write the result.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    pub targets: Vec<String>,
    pub driver: String,
    pub output_dir: PathBuf,
    pub file_name: String,
    pub port: u16,
    pub timeout_secs: u64,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        InventoryConfig {
            targets: Vec::new(),
            driver: DEFAULT_DRIVER.to_string(),
            output_dir: PathBuf::from("./"),
            file_name: DEFAULT_FILE_NAME.to_string(),
            port: DEFAULT_PORT,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Command line values that take precedence over the config file.
#[derive(Debug, Default)]
pub struct ConfigOverrides {
    pub targets: Vec<String>,
    pub driver: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub file_name: Option<String>,
}

impl InventoryConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| InventoryError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_yaml::from_str(&content).map_err(|source| InventoryError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Load from an explicit path, or from the default location when it
    /// exists, or fall back to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match default_config_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => {
                tracing::debug!("No config file found, using defaults");
                Ok(InventoryConfig::default())
            }
        }
    }

    pub fn apply(&mut self, overrides: ConfigOverrides) {
        if !overrides.targets.is_empty() {
            self.targets = overrides.targets;
        }
        if let Some(driver) = overrides.driver {
            self.driver = driver;
        }
        if let Some(dir) = overrides.output_dir {
            self.output_dir = dir;
        }
        if let Some(name) = overrides.file_name {
            self.file_name = name;
        }
    }

    /// Targets are trimmed in place; blank ones are rejected.
    pub fn validate(&mut self) -> Result<()> {
        for (idx, target) in self.targets.iter_mut().enumerate() {
            let trimmed = target.trim();
            if trimmed.is_empty() {
                return Err(InventoryError::Config(format!("target #{} is empty", idx + 1)));
            }
            *target = trimmed.to_string();
        }

        if self.driver.trim().is_empty() {
            return Err(InventoryError::Config("driver must not be empty".to_string()));
        }
        if self.file_name.trim().is_empty() {
            return Err(InventoryError::Config("file_name must not be empty".to_string()));
        }
        if self.timeout_secs == 0 {
            return Err(InventoryError::Config("timeout_secs must be greater than 0".to_string()));
        }
        Ok(())
    }
}

/// `<config_dir>/device-inventory/config.yaml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
        .map(|p| p.join("device-inventory").join("config.yaml"))
}

pub fn default_config_path_string() -> String {
    default_config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "~/.config/device-inventory/config.yaml".to_string())
}

pub fn generate_example_config() -> String {
    r#"# Device Inventory Configuration
# Place this file at: ~/.config/device-inventory/config.yaml
# Credentials are read from the USERNAME and PASSWORD environment variables.

# Addresses to poll, in order
targets:
  - 192.168.1.1
  - 10.0.0.1
  - 172.16.0.1

# Device-type driver (see `device-inventory drivers`)
driver: ios

# Where the spreadsheet is written and its base name.
# The run date is appended: "<file_name> - YYYY-MM-DD.xlsx"
output_dir: ./
file_name: Network Device Inventory

# SSH port and connect/command timeout
port: 22
timeout_secs: 30
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn example_config_parses() {
        let config: InventoryConfig = serde_yaml::from_str(&generate_example_config()).unwrap();
        assert_eq!(config.targets, vec!["192.168.1.1", "10.0.0.1", "172.16.0.1"]);
        assert_eq!(config.driver, "ios");
        assert_eq!(config.file_name, DEFAULT_FILE_NAME);
        assert_eq!(config.port, 22);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "targets: [\"10.1.1.1\"]\nport: 2222").unwrap();

        let config = InventoryConfig::from_file(file.path()).unwrap();
        assert_eq!(config.targets, vec!["10.1.1.1"]);
        assert_eq!(config.port, 2222);
        assert_eq!(config.driver, DEFAULT_DRIVER);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.output_dir, PathBuf::from("./"));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "targets: 42: nope").unwrap();

        assert!(matches!(
            InventoryConfig::from_file(file.path()),
            Err(InventoryError::ConfigParse { .. })
        ));
    }

    #[test]
    fn missing_explicit_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.yaml");
        assert!(matches!(
            InventoryConfig::load(Some(missing.as_path())),
            Err(InventoryError::ConfigRead { .. })
        ));
    }

    #[test]
    fn overrides_replace_targets_and_settings() {
        let mut config = InventoryConfig {
            targets: vec!["10.0.0.1".to_string()],
            ..Default::default()
        };
        config.apply(ConfigOverrides {
            targets: vec!["10.9.9.9".to_string(), "10.9.9.10".to_string()],
            driver: Some("ios".to_string()),
            output_dir: Some(PathBuf::from("/tmp/out")),
            file_name: Some("Lab".to_string()),
        });

        assert_eq!(config.targets, vec!["10.9.9.9", "10.9.9.10"]);
        assert_eq!(config.output_dir, PathBuf::from("/tmp/out"));
        assert_eq!(config.file_name, "Lab");
    }

    #[test]
    fn empty_overrides_keep_file_values() {
        let mut config = InventoryConfig {
            targets: vec!["10.0.0.1".to_string()],
            ..Default::default()
        };
        config.apply(ConfigOverrides::default());
        assert_eq!(config.targets, vec!["10.0.0.1"]);
    }

    #[test]
    fn validate_trims_and_rejects_blank_targets() {
        let mut config = InventoryConfig {
            targets: vec!["  10.0.0.1 ".to_string()],
            ..Default::default()
        };
        config.validate().unwrap();
        assert_eq!(config.targets, vec!["10.0.0.1"]);

        config.targets.push("   ".to_string());
        assert!(matches!(config.validate(), Err(InventoryError::Config(_))));
    }

    #[test]
    fn empty_target_list_is_valid() {
        let mut config = InventoryConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn credentials_debug_redacts_password() {
        let creds = Credentials {
            username: Some("admin".to_string()),
            password: Some("hunter2".to_string()),
        };
        let rendered = format!("{:?}", creds);
        assert!(rendered.contains("admin"));
        assert!(rendered.contains("<redacted>"));
        assert!(!rendered.contains("hunter2"));
    }
}
