/// Message carried by the error raised when no usable sensor exists
pub const NO_CPU_SENSORS_MESSAGE: &str = "No CPU temperature sensor(s) found.";

/// Upper-case name fragments marking a sensor that already aggregates the whole package
pub const AGGREGATE_SENSOR_KEYWORDS: &[&str] = &["PACKAGE", "TOTAL"];
