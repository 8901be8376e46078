//! Thread-shareable provider handle
//!
//! Providers take `&mut self` and are not reentrant. When a host polls from more
//! than one thread, wrap the provider in a [`SharedProvider`]: clones share the
//! same provider and every call holds its lock for the duration of the call.

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use crate::error::Result;
use crate::traits::TemperatureProvider;

#[derive(Debug)]
pub struct SharedProvider<P> {
    inner: Arc<Mutex<P>>,
}

impl<P> Clone for SharedProvider<P> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<P: TemperatureProvider> SharedProvider<P> {
    pub fn new(provider: P) -> Self {
        Self { inner: Arc::new(Mutex::new(provider)) }
    }

    /// Locks the provider for a sequence of calls
    pub fn lock(&self) -> MutexGuard<'_, P> {
        self.inner.lock()
    }
}

impl<P: TemperatureProvider> TemperatureProvider for SharedProvider<P> {
    fn is_initialized(&self) -> bool {
        self.inner.lock().is_initialized()
    }

    fn initialize(&mut self) -> Result<()> {
        self.inner.lock().initialize()
    }

    fn get_temperature(&mut self) -> Result<f64> {
        self.inner.lock().get_temperature()
    }

    fn dispose(&mut self) {
        self.inner.lock().dispose()
    }
}
