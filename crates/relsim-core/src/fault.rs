//! Randomized fault injection.
//!
//! [`FaultInjector`] decides whether a request should fail, given the
//! configured error rate and a [`FaultSource`] of uniform draws. The
//! source is a trait object so tests can force either branch or seed
//! the generator.

use std::fmt;
use std::sync::{Arc, Mutex};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Source of uniform random values in `[0, 1)`.
pub trait FaultSource: Send + Sync {
    fn draw(&self) -> f64;
}

/// Production source backed by the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngSource;

impl FaultSource for ThreadRngSource {
    fn draw(&self) -> f64 {
        rand::random::<f64>()
    }
}

/// Reproducible source for statistical tests.
#[derive(Debug)]
pub struct SeededSource {
    rng: Mutex<SmallRng>,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(SmallRng::seed_from_u64(seed)),
        }
    }
}

impl FaultSource for SeededSource {
    fn draw(&self) -> f64 {
        // A poisoned lock still holds a usable generator.
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        rng.random::<f64>()
    }
}

/// Always returns the same value. `FixedSource(0.0)` fails whenever the
/// error rate is positive; `FixedSource(0.999)` fails only at rate 1.0.
#[derive(Debug, Clone, Copy)]
pub struct FixedSource(pub f64);

impl FaultSource for FixedSource {
    fn draw(&self) -> f64 {
        self.0
    }
}

/// Decides, per request, whether to inject a synthetic failure.
#[derive(Clone)]
pub struct FaultInjector {
    error_rate: f64,
    source: Arc<dyn FaultSource>,
}

impl FaultInjector {
    pub fn new(error_rate: f64, source: Arc<dyn FaultSource>) -> Self {
        Self { error_rate, source }
    }

    /// Injector using the thread-local RNG.
    pub fn with_thread_rng(error_rate: f64) -> Self {
        Self::new(error_rate, Arc::new(ThreadRngSource))
    }

    pub fn error_rate(&self) -> f64 {
        self.error_rate
    }

    /// Returns true if this request should fail.
    ///
    /// The source is only consulted when the error rate is positive, so
    /// a zero rate can never fail regardless of the draw.
    pub fn should_fail(&self) -> bool {
        self.error_rate > 0.0 && self.source.draw() < self.error_rate
    }
}

impl fmt::Debug for FaultInjector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FaultInjector")
            .field("error_rate", &self.error_rate)
            .finish_non_exhaustive()
    }
}
