//! CPU Temp Provider - aggregate CPU temperature for host applications
//!
//! This crate reports a single CPU temperature reading through a narrow plugin
//! contract: initialize once, poll as often as needed, dispose when done. The
//! host only sees the [`TemperatureProvider`](traits::TemperatureProvider) trait;
//! the hardware behind it is reached through a
//! [`MonitoringSession`](hardware::MonitoringSession) backend.
//!
//! # Sensor selection
//!
//! During initialization the provider picks the first CPU hardware node and
//! fixes its sensor set once:
//!
//! - a temperature sensor whose name contains `PACKAGE` or `TOTAL`
//!   (case-insensitive) is used alone
//! - otherwise every temperature sensor on the node is averaged
//!
//! Readings average only the sensors that currently have a value; with none
//! present the reading is NaN.
//!
//! # Examples
//!
//! ```no_run
//! use cpu_temp_provider::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let mut provider = CpuTemperatureProvider::new();
//!     provider.initialize()?;
//!     println!("CPU: {:.1}°C", provider.get_temperature()?);
//!     provider.dispose();
//!     Ok(())
//! }
//! ```
//!
//! # Error Handling
//!
//! A machine without a CPU temperature sensor fails initialization with
//! [`Error::PlatformNotSupported`]. The backend session is already closed when
//! the error reaches the caller.
//!
//! ```
//! use cpu_temp_provider::{Error, Result};
//!
//! fn example(found: bool) -> Result<()> {
//!     if !found {
//!         return Err(Error::PlatformNotSupported("No CPU temperature sensor(s) found.".to_string()));
//!     }
//!     Ok(())
//! }
//!
//! assert!(example(false).is_err());
//! ```

pub mod config;
pub mod error;
pub mod hardware;
pub mod shared;
pub mod temperature;
pub mod traits;

pub use error::{Error, Result};

/// Re-export common types for convenience
pub mod prelude {
    pub use crate::config::HwmonConfig;
    pub use crate::hardware::hwmon::HwmonSession;
    pub use crate::hardware::{HardwareType, MonitoringSession, Sensor, SensorType};
    pub use crate::shared::SharedProvider;
    pub use crate::temperature::CpuTemperatureProvider;
    pub use crate::traits::TemperatureProvider;
    pub use crate::Error;
    pub use crate::Result;
}
