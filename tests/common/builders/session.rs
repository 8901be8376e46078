use std::sync::Arc;

use cpu_temp_provider::hardware::{Hardware, HardwareId, HardwareType, Sensor, SensorId, SensorType};
use parking_lot::Mutex;

use crate::common::mocks::session::{FakeNode, FakeSession, SessionState};

/// Builder for creating FakeSession test instances
#[derive(Debug, Default)]
pub struct FakeSessionBuilder {
    nodes: Vec<FakeNode>,
}

impl FakeSessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node with arbitrary sensors given as (name, type, reading)
    pub fn with_node(mut self, name: &str, hardware_type: HardwareType, sensors: &[(&str, SensorType, Option<f64>)]) -> Self {
        let id = HardwareId(self.nodes.len());
        let node = FakeNode {
            hardware: Hardware::new(id, name, hardware_type),
            sensors: sensors
                .iter()
                .enumerate()
                .map(|(i, (name, sensor_type, _))| Sensor::new(SensorId(i), *name, *sensor_type, None))
                .collect(),
            readings: sensors.iter().map(|(_, _, reading)| *reading).collect(),
        };
        self.nodes.push(node);
        self
    }

    /// Adds a CPU node whose sensors are all temperature sensors
    pub fn with_cpu(self, sensors: &[(&str, Option<f64>)]) -> Self {
        let sensors: Vec<_> = sensors.iter().map(|(name, reading)| (*name, SensorType::Temperature, *reading)).collect();
        self.with_node("cpu", HardwareType::Cpu, &sensors)
    }

    pub fn build(self) -> (FakeSession, Arc<Mutex<SessionState>>) {
        let session = FakeSession::new(self.nodes);
        let state = session.state();
        (session, state)
    }
}
