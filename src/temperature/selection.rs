//! Sensor selection and aggregation
//!
//! CPUs expose anything from a single package sensor to one sensor per core.
//! If the node has a sensor that already represents the whole package (its
//! name contains `PACKAGE` or `TOTAL`, case-insensitively), that single sensor
//! is the reading. Otherwise every temperature sensor on the node is averaged.

use crate::hardware::Sensor;

use super::constants::AGGREGATE_SENSOR_KEYWORDS;

/// Returns true if the sensor name marks a package-wide reading
pub fn is_aggregate_sensor(name: &str) -> bool {
    let upper = name.to_uppercase();
    AGGREGATE_SENSOR_KEYWORDS.iter().any(|keyword| upper.contains(keyword))
}

/// Picks the sensors that represent the CPU temperature
///
/// Only [`SensorType::Temperature`](crate::hardware::SensorType::Temperature)
/// sensors are considered; values are ignored. The first aggregate sensor in
/// native order wins outright. Without one, all temperature sensors are
/// returned in their original order, which may be an empty list.
pub fn select_sensors(sensors: &[Sensor]) -> Vec<Sensor> {
    let temperatures: Vec<&Sensor> = sensors.iter().filter(|s| s.is_temperature()).collect();

    match temperatures.iter().find(|s| is_aggregate_sensor(&s.name)) {
        Some(sensor) => vec![(*sensor).clone()],
        None => temperatures.into_iter().cloned().collect(),
    }
}

/// Arithmetic mean of the present values
///
/// Absent values are skipped and do not count towards the denominator. When no
/// value is present the result is `0.0 / 0.0`, i.e. NaN.
pub fn mean_of_present<I>(values: I) -> f64
where
    I: IntoIterator<Item = Option<f64>>,
{
    let (sum, count) = values.into_iter().flatten().fold((0.0, 0u32), |(sum, count), value| (sum + value, count + 1));
    sum / f64::from(count)
}
