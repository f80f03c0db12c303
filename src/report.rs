#[cfg(test)]
use std::sync::{Arc, Mutex};

/// Operator-facing sink for the seed echo and non-fatal warnings.
pub trait Reporter {
    fn seed(
        &self,
        seed: u64,
    );

    fn warn(
        &self,
        message: &str,
    );
}

/// Forwards to the installed `tracing` subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn seed(
        &self,
        seed: u64,
    ) {
        tracing::info!("Seed: {seed}");
    }

    fn warn(
        &self,
        message: &str,
    ) {
        tracing::warn!("WARNING: {message}");
    }
}

/// Keeps everything it is told; used by tests to observe reporting.
#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub struct RecordingReporter {
    seeds: Arc<Mutex<Vec<u64>>>,
    warnings: Arc<Mutex<Vec<String>>>,
}

#[cfg(test)]
impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeds(&self) -> Vec<u64> {
        self.seeds.lock().map(|s| s.clone()).unwrap_or_default()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.warnings.lock().map(|w| w.clone()).unwrap_or_default()
    }
}

#[cfg(test)]
impl Reporter for RecordingReporter {
    fn seed(
        &self,
        seed: u64,
    ) {
        if let Ok(mut seeds) = self.seeds.lock() {
            seeds.push(seed);
        }
    }

    fn warn(
        &self,
        message: &str,
    ) {
        if let Ok(mut warnings) = self.warnings.lock() {
            warnings.push(message.to_owned());
        }
    }
}
