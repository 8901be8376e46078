use scopeguard::ScopeGuard;
use tracing::{debug, info, instrument, warn};

use super::constants::NO_CPU_SENSORS_MESSAGE;
use super::selection::{mean_of_present, select_sensors};
use crate::config::HwmonConfig;
use crate::error::{Error, Result};
use crate::hardware::hwmon::HwmonSession;
use crate::hardware::{HardwareId, HardwareType, MonitoringSession, Sensor};
use crate::traits::TemperatureProvider;

/// Reports the CPU temperature from a [`MonitoringSession`]
///
/// On initialization the provider opens its session, finds the first CPU node,
/// and fixes the set of sensors it will read from then on (see
/// [`select_sensors`]). Each [`get_temperature`](TemperatureProvider::get_temperature)
/// refreshes that node and averages whichever selected sensors have a value.
#[derive(Debug)]
pub struct CpuTemperatureProvider {
    session: Option<Box<dyn MonitoringSession>>,
    cpu: Option<HardwareId>,
    selected: Option<Vec<Sensor>>,
    initialized: bool,
}

impl CpuTemperatureProvider {
    /// Creates a provider reading the system hwmon tree
    pub fn new() -> Self {
        Self::with_config(HwmonConfig::default())
    }

    /// Creates a provider reading an hwmon tree with the given configuration
    pub fn with_config(config: HwmonConfig) -> Self {
        Self::with_session(HwmonSession::new(config))
    }

    /// Creates a provider on top of any monitoring backend
    pub fn with_session<S: MonitoringSession + 'static>(session: S) -> Self {
        Self { session: Some(Box::new(session)), cpu: None, selected: None, initialized: false }
    }

    /// Sensors chosen during initialization
    ///
    /// Values in the returned snapshots are those seen at selection time.
    pub fn selected_sensors(&self) -> Option<&[Sensor]> {
        self.selected.as_deref()
    }

    /// The CPU node found during initialization
    pub fn cpu_hardware(&self) -> Option<HardwareId> {
        self.cpu
    }

    /// Whether the provider still holds its monitoring session
    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }
}

impl Default for CpuTemperatureProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// Finds the first CPU node and selects its sensors
///
/// Returns `None` when there is no CPU node or it has no temperature sensor.
fn discover(session: &mut dyn MonitoringSession) -> Result<Option<(HardwareId, Vec<Sensor>)>> {
    let Some(cpu) = session.hardware().into_iter().find(|h| h.hardware_type == HardwareType::Cpu) else {
        warn!("no CPU hardware node found");
        return Ok(None);
    };
    debug!(cpu = %cpu.name, id = %cpu.id, "found CPU hardware node");

    session.update(cpu.id)?;
    let sensors = session.sensors(cpu.id)?;
    let selected = select_sensors(&sensors);
    if selected.is_empty() {
        warn!(cpu = %cpu.name, sensors = sensors.len(), "CPU node has no temperature sensors");
        return Ok(None);
    }

    Ok(Some((cpu.id, selected)))
}

impl TemperatureProvider for CpuTemperatureProvider {
    fn is_initialized(&self) -> bool {
        self.initialized
    }

    #[instrument(skip(self))]
    fn initialize(&mut self) -> Result<()> {
        if self.initialized {
            return Ok(());
        }

        let session = self.session.take().ok_or(Error::SessionClosed)?;
        // Closes the session on every early return below; released on success.
        let mut session = scopeguard::guard(session, |mut session| {
            session.close();
            debug!("monitoring session closed after failed initialization");
        });

        session.open()?;
        let Some((cpu, selected)) = discover(&mut **session)? else {
            return Err(Error::platform_not_supported(NO_CPU_SENSORS_MESSAGE));
        };

        let names: Vec<&str> = selected.iter().map(|s| s.name.as_str()).collect();
        info!(%cpu, sensors = ?names, "CPU temperature provider initialized");

        self.session = Some(ScopeGuard::into_inner(session));
        self.cpu = Some(cpu);
        self.selected = Some(selected);
        self.initialized = true;
        Ok(())
    }

    fn get_temperature(&mut self) -> Result<f64> {
        let (Some(cpu), Some(selected)) = (self.cpu, self.selected.as_ref()) else {
            return Err(Error::NotInitialized);
        };
        let session = self.session.as_mut().ok_or(Error::SessionClosed)?;

        session.update(cpu)?;
        let current = session.sensors(cpu)?;
        let values = selected
            .iter()
            .map(|sensor| current.iter().find(|c| c.id == sensor.id).and_then(|c| c.value));

        Ok(mean_of_present(values))
    }

    fn dispose(&mut self) {
        if let Some(mut session) = self.session.take() {
            session.close();
            debug!("monitoring session closed");
        }
    }
}

impl Drop for CpuTemperatureProvider {
    fn drop(&mut self) {
        self.dispose();
    }
}
