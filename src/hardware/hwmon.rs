//! Linux hwmon backend
//!
//! Every `hwmonN` directory under the configured root becomes one hardware node,
//! named after the driver in its `name` file. Channels are discovered from their
//! `*_input` files:
//!
//! | file            | sensor type   | unit on disk |
//! |-----------------|---------------|--------------|
//! | `tempN_input`   | Temperature   | m°C          |
//! | `inN_input`     | Voltage       | mV           |
//! | `fanN_input`    | Fan           | RPM          |
//! | `powerN_input`  | Power         | µW           |
//!
//! A channel's name comes from the matching `*_label` file (`Package id 0`,
//! `Core 3`, `Tctl`, ...) and falls back to the channel stem (`temp2`).
//! Nodes are ordered by hwmon index, channels by kind and then channel index.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, trace, warn};

use super::constants::*;
use super::{Hardware, HardwareId, HardwareType, MonitoringSession, Sensor, SensorId, SensorType};
use crate::config::HwmonConfig;
use crate::error::{Error, Result};

/// Channel kinds in native ordering, with the divisor converting raw values to SI units
const CHANNEL_KINDS: [(&str, SensorType, f64); 4] = [
    ("temp", SensorType::Temperature, TEMPERATURE_DIVISOR),
    ("in", SensorType::Voltage, VOLTAGE_DIVISOR),
    ("fan", SensorType::Fan, 1.0),
    ("power", SensorType::Power, POWER_DIVISOR),
];

#[derive(Debug)]
struct Channel {
    name: String,
    sensor_type: SensorType,
    input: PathBuf,
    divisor: f64,
    value: Option<f64>,
}

#[derive(Debug)]
struct Device {
    name: String,
    hardware_type: HardwareType,
    channels: Vec<Channel>,
}

/// [`MonitoringSession`] backed by `/sys/class/hwmon`
#[derive(Debug)]
pub struct HwmonSession {
    config: HwmonConfig,
    devices: Vec<Device>,
    open: bool,
}

impl HwmonSession {
    pub fn new(config: HwmonConfig) -> Self {
        Self { config, devices: Vec::new(), open: false }
    }

    pub fn config(&self) -> &HwmonConfig {
        &self.config
    }

    fn classify(&self, driver: &str) -> HardwareType {
        if self.config.is_cpu_driver(driver) {
            HardwareType::Cpu
        } else if GPU_DRIVERS.contains(&driver) {
            HardwareType::Gpu
        } else if STORAGE_DRIVERS.contains(&driver) {
            HardwareType::Storage
        } else if MEMORY_DRIVERS.contains(&driver) {
            HardwareType::Memory
        } else if MAINBOARD_DRIVERS.contains(&driver) {
            HardwareType::Mainboard
        } else {
            HardwareType::Other
        }
    }

    fn device(&self, hardware: HardwareId) -> Result<&Device> {
        if !self.open {
            return Err(Error::SessionClosed);
        }
        self.devices.get(hardware.0).ok_or(Error::UnknownHardware(hardware))
    }

    fn device_mut(&mut self, hardware: HardwareId) -> Result<&mut Device> {
        if !self.open {
            return Err(Error::SessionClosed);
        }
        self.devices.get_mut(hardware.0).ok_or(Error::UnknownHardware(hardware))
    }
}

impl Default for HwmonSession {
    fn default() -> Self {
        Self::new(HwmonConfig::default())
    }
}

impl MonitoringSession for HwmonSession {
    fn open(&mut self) -> Result<()> {
        if self.open {
            return Ok(());
        }

        let entries = match fs::read_dir(&self.config.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!(root = %self.config.root.display(), "hwmon root does not exist");
                self.open = true;
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        let mut dirs: Vec<(u32, PathBuf)> = entries
            .flatten()
            .filter_map(|entry| {
                let file_name = entry.file_name();
                let index = hwmon_index(&file_name.to_string_lossy())?;
                Some((index, entry.path()))
            })
            .collect();
        dirs.sort_by_key(|(index, _)| *index);

        for (index, path) in dirs {
            let name = read_trimmed(&path.join(HWMON_NAME_FILE)).unwrap_or_else(|| format!("{HWMON_DIR_PREFIX}{index}"));
            let hardware_type = self.classify(&name);
            if hardware_type == HardwareType::Cpu && !self.config.cpu_enabled {
                debug!(device = %name, "skipping CPU device, CPU enumeration disabled");
                continue;
            }

            let channels = match read_channels(&path) {
                Ok(channels) => channels,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "failed to read hwmon device");
                    continue;
                }
            };

            debug!(device = %name, ?hardware_type, channels = channels.len(), "found hwmon device");
            self.devices.push(Device { name, hardware_type, channels });
        }

        self.open = true;
        Ok(())
    }

    fn close(&mut self) {
        if self.open {
            debug!(devices = self.devices.len(), "closing hwmon session");
        }
        self.devices.clear();
        self.open = false;
    }

    fn is_open(&self) -> bool {
        self.open
    }

    fn hardware(&self) -> Vec<Hardware> {
        if !self.open {
            return Vec::new();
        }
        self.devices
            .iter()
            .enumerate()
            .map(|(i, device)| Hardware::new(HardwareId(i), device.name.clone(), device.hardware_type))
            .collect()
    }

    fn update(&mut self, hardware: HardwareId) -> Result<()> {
        let device = self.device_mut(hardware)?;
        for channel in &mut device.channels {
            channel.value = read_value(&channel.input, channel.divisor);
        }
        Ok(())
    }

    fn sensors(&self, hardware: HardwareId) -> Result<Vec<Sensor>> {
        let device = self.device(hardware)?;
        Ok(device
            .channels
            .iter()
            .enumerate()
            .map(|(i, channel)| Sensor::new(SensorId(i), channel.name.clone(), channel.sensor_type, channel.value))
            .collect())
    }
}

fn hwmon_index(dir_name: &str) -> Option<u32> {
    dir_name.strip_prefix(HWMON_DIR_PREFIX)?.parse().ok()
}

/// Splits `temp3_input` into (kind index, channel index, stem)
fn parse_input_file(file_name: &str) -> Option<(usize, u32, &str)> {
    let stem = file_name.strip_suffix(INPUT_SUFFIX)?;
    CHANNEL_KINDS.iter().enumerate().find_map(|(kind, (prefix, _, _))| {
        let index = stem.strip_prefix(prefix)?.parse().ok()?;
        Some((kind, index, stem))
    })
}

fn read_channels(dir: &Path) -> io::Result<Vec<Channel>> {
    let mut found: Vec<(usize, u32, Channel)> = Vec::new();

    for entry in fs::read_dir(dir)?.flatten() {
        let file_name = entry.file_name();
        let file_name = file_name.to_string_lossy();
        let Some((kind, index, stem)) = parse_input_file(&file_name) else {
            continue;
        };

        let (_, sensor_type, divisor) = CHANNEL_KINDS[kind];
        let name = read_trimmed(&dir.join(format!("{stem}{LABEL_SUFFIX}"))).unwrap_or_else(|| stem.to_string());
        found.push((kind, index, Channel { name, sensor_type, input: entry.path(), divisor, value: None }));
    }

    found.sort_by_key(|(kind, index, _)| (*kind, *index));
    Ok(found.into_iter().map(|(_, _, channel)| channel).collect())
}

fn read_trimmed(path: &Path) -> Option<String> {
    let contents = fs::read_to_string(path).ok()?;
    let trimmed = contents.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn read_value(path: &Path, divisor: f64) -> Option<f64> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            trace!(path = %path.display(), error = %e, "sensor input unreadable");
            return None;
        }
    };

    match raw.trim().parse::<f64>() {
        Ok(value) => Some(value / divisor),
        Err(_) => {
            trace!(path = %path.display(), raw = raw.trim(), "sensor input not numeric");
            None
        }
    }
}
