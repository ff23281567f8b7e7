//! # Sources State
//!
//! The clock and entropy handed to the core's generators. Production uses
//! the wall clock and the thread RNG; tests swap in fixed doubles.

use std::fmt;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use swiftconnect_core::reference::{Clock, RandomSource, SystemClock, ThreadRandom};

type SharedClock = Arc<dyn Clock + Send + Sync>;
type SharedRandom = Arc<Mutex<Box<dyn RandomSource + Send>>>;

#[derive(Clone)]
pub struct SourcesState {
    clock: SharedClock,
    rng: SharedRandom,
}

impl SourcesState {
    pub fn new(
        clock: impl Clock + Send + Sync + 'static,
        rng: impl RandomSource + Send + 'static,
    ) -> Self {
        SourcesState {
            clock: Arc::new(clock),
            rng: Arc::new(Mutex::new(Box::new(rng))),
        }
    }

    /// Wall clock with the given entropy.
    pub fn with_random(rng: impl RandomSource + Send + 'static) -> Self {
        Self::new(SystemClock, rng)
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Executes a function with exclusive access to the entropy source.
    pub fn with_rng<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut dyn RandomSource) -> R,
    {
        let mut rng = self.rng.lock().expect("Random source mutex poisoned");
        f(&mut **rng)
    }
}

impl Default for SourcesState {
    fn default() -> Self {
        Self::new(SystemClock, ThreadRandom)
    }
}

impl fmt::Debug for SourcesState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourcesState").field("now", &self.now()).finish_non_exhaustive()
    }
}
