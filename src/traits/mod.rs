// Traits module
//
// Host-facing capabilities. Backend traits live next to their implementations
// in `hardware`.

pub mod provider;

pub use provider::TemperatureProvider;
