//! Hardware-monitoring backend abstraction
//!
//! A [`MonitoringSession`] is the handle to whatever layer actually talks to the
//! hardware. It owns a list of hardware nodes (one per physical device), and each
//! node owns its sensors. Callers never hold references into the session: nodes
//! and sensors are addressed through [`HardwareId`] and [`SensorId`] handles that
//! stay valid until the session is closed.
//!
//! The crate ships one real backend, [`hwmon::HwmonSession`], which reads the
//! Linux `/sys/class/hwmon` tree. Tests substitute their own sessions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Hardware monitoring constants
pub mod constants;
/// Linux sysfs hwmon backend
pub mod hwmon;

#[cfg(test)]
use mockall::automock;

/// Handle to a hardware node, issued by a [`MonitoringSession`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HardwareId(pub usize);

impl fmt::Display for HardwareId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hw{}", self.0)
    }
}

/// Handle to a sensor, unique within its hardware node
///
/// Sensor ids follow the node's native sensor ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SensorId(pub usize);

/// Kind of physical device a hardware node represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HardwareType {
    Cpu,
    Gpu,
    Storage,
    Memory,
    Mainboard,
    Other,
}

/// Kind of quantity a sensor measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorType {
    /// Degrees Celsius
    Temperature,
    /// Volts
    Voltage,
    /// Revolutions per minute
    Fan,
    /// Watts
    Power,
}

/// A hardware node as listed by a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hardware {
    pub id: HardwareId,
    pub name: String,
    pub hardware_type: HardwareType,
}

impl Hardware {
    pub fn new(id: HardwareId, name: impl Into<String>, hardware_type: HardwareType) -> Self {
        Self { id, name: name.into(), hardware_type }
    }
}

/// Snapshot of a sensor belonging to a hardware node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sensor {
    pub id: SensorId,
    pub name: String,
    pub sensor_type: SensorType,
    /// Last refreshed reading; `None` before the first refresh or while the
    /// sensor is unavailable
    pub value: Option<f64>,
}

impl Sensor {
    pub fn new(id: SensorId, name: impl Into<String>, sensor_type: SensorType, value: Option<f64>) -> Self {
        Self { id, name: name.into(), sensor_type, value }
    }

    pub fn is_temperature(&self) -> bool {
        self.sensor_type == SensorType::Temperature
    }
}

/// Session with a hardware-monitoring backend
///
/// Implementations are synchronous and not reentrant. After [`close`](Self::close)
/// the session must not be queried again until it is reopened.
#[cfg_attr(test, automock)]
pub trait MonitoringSession: Send + fmt::Debug {
    /// Opens the session and enumerates hardware nodes
    fn open(&mut self) -> Result<()>;

    /// Closes the session and drops all node and sensor state
    fn close(&mut self);

    fn is_open(&self) -> bool;

    /// Lists hardware nodes in the backend's native order
    fn hardware(&self) -> Vec<Hardware>;

    /// Re-samples every sensor of the given node
    fn update(&mut self, hardware: HardwareId) -> Result<()>;

    /// Lists the sensors of the given node in native order
    fn sensors(&self, hardware: HardwareId) -> Result<Vec<Sensor>>;
}
