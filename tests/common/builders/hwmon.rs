use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Builder for fake `/sys/class/hwmon` trees
pub struct HwmonTreeBuilder {
    root: TempDir,
}

impl HwmonTreeBuilder {
    pub fn new() -> Self {
        Self { root: TempDir::new().expect("Failed to create temp dir") }
    }

    fn device_dir(&self, device: u32) -> PathBuf {
        self.root.path().join(format!("hwmon{device}"))
    }

    /// Adds `hwmonN` with the given driver name
    pub fn with_device(self, device: u32, driver: &str) -> Self {
        let dir = self.device_dir(device);
        fs::create_dir_all(&dir).expect("Failed to create device dir");
        fs::write(dir.join("name"), format!("{driver}\n")).expect("Failed to write name");
        self
    }

    /// Adds `tempN_input` (and `tempN_label` when given) in millidegrees Celsius
    pub fn with_temp(self, device: u32, channel: u32, label: Option<&str>, millidegrees: i64) -> Self {
        let dir = self.device_dir(device);
        fs::write(dir.join(format!("temp{channel}_input")), format!("{millidegrees}\n")).expect("Failed to write input");
        if let Some(label) = label {
            fs::write(dir.join(format!("temp{channel}_label")), format!("{label}\n")).expect("Failed to write label");
        }
        self
    }

    /// Writes an arbitrary file into a device directory
    pub fn with_file(self, device: u32, name: &str, contents: &str) -> Self {
        fs::write(self.device_dir(device).join(name), contents).expect("Failed to write file");
        self
    }

    pub fn build(self) -> TempDir {
        self.root
    }
}
