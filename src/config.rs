//! Backend configuration
//!
//! The provider itself has no tunables. The hwmon backend can be pointed at a
//! different sysfs root (useful for containers and tests) and taught about
//! additional CPU drivers.
//!
//! ```
//! use cpu_temp_provider::config::HwmonConfig;
//!
//! let config = HwmonConfig::from_json(r#"{ "cpu_drivers": ["coretemp"] }"#).unwrap();
//! assert!(config.cpu_enabled);
//! assert_eq!(config.cpu_drivers, vec!["coretemp".to_string()]);
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::hardware::constants::{DEFAULT_CPU_DRIVERS, DEFAULT_HWMON_ROOT};

/// Configuration for [`HwmonSession`](crate::hardware::hwmon::HwmonSession)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HwmonConfig {
    /// Directory containing the `hwmonN` device directories
    pub root: PathBuf,
    /// Whether CPU devices are enumerated when the session opens
    pub cpu_enabled: bool,
    /// Driver names classified as CPU hardware
    pub cpu_drivers: Vec<String>,
}

impl Default for HwmonConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_HWMON_ROOT),
            cpu_enabled: true,
            cpu_drivers: DEFAULT_CPU_DRIVERS.iter().map(|d| d.to_string()).collect(),
        }
    }
}

impl HwmonConfig {
    /// Default configuration rooted at a different hwmon directory
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into(), ..Self::default() }
    }

    /// Parses a JSON configuration document; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub(crate) fn is_cpu_driver(&self, driver: &str) -> bool {
        self.cpu_drivers.iter().any(|d| d == driver)
    }
}
