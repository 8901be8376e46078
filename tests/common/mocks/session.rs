use std::sync::Arc;

use cpu_temp_provider::hardware::{Hardware, HardwareId, MonitoringSession, Sensor};
use cpu_temp_provider::{Error, Result};
use parking_lot::Mutex;

/// One hardware node of a fake session
#[derive(Debug, Clone)]
pub struct FakeNode {
    pub hardware: Hardware,
    /// Sensors as the session reports them; values change only on update
    pub sensors: Vec<Sensor>,
    /// What the next update will read for each sensor
    pub readings: Vec<Option<f64>>,
}

/// Observable state shared between a fake session and the test driving it
#[derive(Debug, Default)]
pub struct SessionState {
    pub open: bool,
    pub open_calls: u32,
    pub close_calls: u32,
    pub hardware_calls: u32,
    pub update_calls: Vec<HardwareId>,
    pub nodes: Vec<FakeNode>,
}

impl SessionState {
    pub fn set_reading(&mut self, hardware: HardwareId, sensor: usize, value: Option<f64>) {
        self.nodes[hardware.0].readings[sensor] = value;
    }
}

/// In-memory [`MonitoringSession`] whose calls can be inspected after it has
/// been handed to a provider
#[derive(Debug, Clone)]
pub struct FakeSession {
    state: Arc<Mutex<SessionState>>,
}

impl FakeSession {
    pub fn new(nodes: Vec<FakeNode>) -> Self {
        let state = SessionState { nodes, ..SessionState::default() };
        Self { state: Arc::new(Mutex::new(state)) }
    }

    pub fn state(&self) -> Arc<Mutex<SessionState>> {
        Arc::clone(&self.state)
    }
}

impl MonitoringSession for FakeSession {
    fn open(&mut self) -> Result<()> {
        let mut state = self.state.lock();
        state.open = true;
        state.open_calls += 1;
        Ok(())
    }

    fn close(&mut self) {
        let mut state = self.state.lock();
        state.open = false;
        state.close_calls += 1;
    }

    fn is_open(&self) -> bool {
        self.state.lock().open
    }

    fn hardware(&self) -> Vec<Hardware> {
        let mut state = self.state.lock();
        state.hardware_calls += 1;
        if !state.open {
            return Vec::new();
        }
        state.nodes.iter().map(|n| n.hardware.clone()).collect()
    }

    fn update(&mut self, hardware: HardwareId) -> Result<()> {
        let mut state = self.state.lock();
        if !state.open {
            return Err(Error::SessionClosed);
        }
        state.update_calls.push(hardware);
        let node = state.nodes.get_mut(hardware.0).ok_or(Error::UnknownHardware(hardware))?;
        for (sensor, reading) in node.sensors.iter_mut().zip(&node.readings) {
            sensor.value = *reading;
        }
        Ok(())
    }

    fn sensors(&self, hardware: HardwareId) -> Result<Vec<Sensor>> {
        let state = self.state.lock();
        if !state.open {
            return Err(Error::SessionClosed);
        }
        state
            .nodes
            .get(hardware.0)
            .map(|n| n.sensors.clone())
            .ok_or(Error::UnknownHardware(hardware))
    }
}
