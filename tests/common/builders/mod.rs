pub mod hwmon;
pub mod session;
