//! Polls the CPU temperature from the local hwmon tree and prints JSON lines.
//!
//! ```text
//! RUST_LOG=cpu_temp_provider=debug cargo run --example poll_cpu_temperature -- 5
//! ```

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use cpu_temp_provider::prelude::*;
use serde_json::json;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let samples: u32 = std::env::args().nth(1).and_then(|arg| arg.parse().ok()).unwrap_or(5);

    let mut provider = CpuTemperatureProvider::new();
    provider.initialize()?;

    if let Some(sensors) = provider.selected_sensors() {
        let names: Vec<&str> = sensors.iter().map(|s| s.name.as_str()).collect();
        println!("{}", json!({ "selected_sensors": names }));
    }

    for _ in 0..samples {
        let celsius = provider.get_temperature()?;
        let timestamp = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_secs();
        // NaN is not representable in JSON and serializes as null
        println!("{}", json!({ "timestamp": timestamp, "celsius": celsius }));
        std::thread::sleep(Duration::from_secs(1));
    }

    provider.dispose();
    Ok(())
}
