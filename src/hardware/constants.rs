/// Default location of the hwmon class directory
pub const DEFAULT_HWMON_ROOT: &str = "/sys/class/hwmon";

/// Prefix of every hwmon device directory
pub const HWMON_DIR_PREFIX: &str = "hwmon";

/// File holding a device's driver name
pub const HWMON_NAME_FILE: &str = "name";

/// Suffix of a channel's input file
pub const INPUT_SUFFIX: &str = "_input";

/// Suffix of a channel's label file
pub const LABEL_SUFFIX: &str = "_label";

/// hwmon drivers that report CPU package or core temperatures
pub const DEFAULT_CPU_DRIVERS: &[&str] = &[
    "coretemp",
    "k10temp",
    "zenpower",
    "cpu_thermal",
    "cpu-thermal",
    "fam15h_power",
    "via_cputemp",
];

/// hwmon drivers for discrete and integrated GPUs
pub const GPU_DRIVERS: &[&str] = &["amdgpu", "radeon", "nouveau", "i915", "xe"];

/// hwmon drivers for storage devices
pub const STORAGE_DRIVERS: &[&str] = &["nvme", "drivetemp"];

/// hwmon drivers for memory modules
pub const MEMORY_DRIVERS: &[&str] = &["jc42", "spd5118"];

/// hwmon drivers for motherboard Super I/O and ACPI zones
pub const MAINBOARD_DRIVERS: &[&str] = &["acpitz", "nct6775", "it87", "asus_wmi_sensors", "pch_cannonlake"];

/// Millidegrees Celsius per degree
pub const TEMPERATURE_DIVISOR: f64 = 1000.0;

/// Millivolts per volt
pub const VOLTAGE_DIVISOR: f64 = 1000.0;

/// Microwatts per watt
pub const POWER_DIVISOR: f64 = 1_000_000.0;
