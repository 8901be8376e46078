//! CPU temperature provider
//!
//! [`CpuTemperatureProvider`] turns a hardware-monitoring session into one
//! number: the CPU temperature in degrees Celsius.
//!
//! # Examples
//!
//! ```no_run
//! use cpu_temp_provider::temperature::CpuTemperatureProvider;
//! use cpu_temp_provider::traits::TemperatureProvider;
//!
//! let mut provider = CpuTemperatureProvider::new();
//! provider.initialize()?;
//! for _ in 0..3 {
//!     println!("CPU Temperature: {:.1}°C", provider.get_temperature()?);
//! }
//! provider.dispose();
//! # Ok::<(), cpu_temp_provider::Error>(())
//! ```

/// Temperature provider constants
pub mod constants;

mod provider;
mod selection;

pub use provider::CpuTemperatureProvider;
pub use selection::{is_aggregate_sensor, mean_of_present, select_sensors};
