//! Performance instrumentation for the intent-dispatch hot path.
//!
//! Gesture callbacks arrive 60+ times per second during a drag, so the
//! store's apply/publish path is timed with RAII scope timers. Zero-cost
//! when the `profiling` feature is disabled.

use std::time::Instant;
use tracing::{trace, warn};

/// Threshold above which a timed scope logs at warn level, in ms. Half a
/// frame at 60 FPS: anything slower risks visible gesture lag.
pub const SLOW_SCOPE_MS: f64 = 8.0;

/// RAII timer for a code block. Logs on drop.
pub struct ScopedTimer {
    name: &'static str,
    threshold_ms: f64,
    start: Instant,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            threshold_ms,
            start: Instant::now(),
        }
    }

    pub fn for_profiling(name: &'static str) -> Self {
        Self::new(name, SLOW_SCOPE_MS)
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.start.elapsed().as_secs_f64() * 1000.0;
        if elapsed_ms > self.threshold_ms {
            warn!(scope = self.name, elapsed_ms, "slow scope");
        } else {
            trace!(scope = self.name, elapsed_ms, "scope timing");
        }
    }
}

/// Profile a scope with the given name. Zero-cost when profiling is
/// disabled.
///
/// # Example
/// ```ignore
/// fn apply_intent() {
///     profile_scope!("apply_intent");
///     // ... work ...
/// }
/// ```
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name; // Suppress unused variable warning
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}
