use std::fmt::Debug;

use log::*;

/// Receives what `Kokodoko` learns at each step.
/// All methods default to doing nothing.
pub trait Observer {
    fn metadatum(&self, _tab: &str, _key: &str, _value: &dyn Debug) {}

    fn failed(&self, _error: &dyn std::error::Error) {}
}

#[derive(Debug, Default)]
pub struct NoopObserver;

impl Observer for NoopObserver {}

/// An `Observer` that writes to the `log` crate.
#[derive(Debug, Default)]
pub struct LogObserver;

impl Observer for LogObserver {
    fn metadatum(&self, tab: &str, key: &str, value: &dyn Debug) {
        debug!("{tab}: {key}={value:?}");
    }

    fn failed(&self, error: &dyn std::error::Error) {
        debug!("failed: {error}");
        let mut source = error.source();
        while let Some(error) = source {
            debug!("  caused by: {error}");
            source = error.source();
        }
    }
}
