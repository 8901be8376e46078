use crate::error::Result;

/// Capability a host drives to obtain a single temperature reading
///
/// Hosts hold providers as `Box<dyn TemperatureProvider>` and never depend on a
/// concrete backend. The lifecycle is: [`initialize`](Self::initialize) once,
/// poll [`get_temperature`](Self::get_temperature) as often as needed, then
/// [`dispose`](Self::dispose).
///
/// # Examples
///
/// ```no_run
/// use cpu_temp_provider::prelude::*;
///
/// fn main() -> Result<()> {
///     let mut provider: Box<dyn TemperatureProvider> = Box::new(CpuTemperatureProvider::new());
///     provider.initialize()?;
///     println!("CPU: {:.1}°C", provider.get_temperature()?);
///     provider.dispose();
///     Ok(())
/// }
/// ```
pub trait TemperatureProvider: Send {
    /// True once [`initialize`](Self::initialize) has succeeded, even after disposal
    fn is_initialized(&self) -> bool;

    /// Discovers the sensors to read. Calling it again after success does nothing.
    fn initialize(&mut self) -> Result<()>;

    /// Refreshes the hardware and returns the current temperature in °C
    ///
    /// Returns NaN when none of the selected sensors currently has a value.
    fn get_temperature(&mut self) -> Result<f64>;

    /// Releases the backend. Safe to call any number of times.
    fn dispose(&mut self);
}
