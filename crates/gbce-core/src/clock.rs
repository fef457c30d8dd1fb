//! Market time in whole seconds.
//!
//! The market never owns time: it reads a [`Clock`] to stamp trades and to
//! place the trailing aggregation window. Clocks use interior mutability so
//! the host can keep an `Arc` and advance it while the market holds another.

use std::sync::atomic::{AtomicI64, Ordering};

use time::OffsetDateTime;

/// Source of the current time in seconds.
pub trait Clock: Send + Sync {
    /// Current time in seconds.
    fn now(&self) -> i64;

    /// Moves the clock by `seconds`, which may be negative.
    fn advance(&self, seconds: i64);
}

/// Wall clock reading Unix seconds, shifted by any accumulated `advance`.
#[derive(Debug, Default)]
pub struct SystemClock {
    offset: AtomicI64,
}

impl SystemClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        OffsetDateTime::now_utc().unix_timestamp() + self.offset.load(Ordering::SeqCst)
    }

    fn advance(&self, seconds: i64) {
        self.offset.fetch_add(seconds, Ordering::SeqCst);
    }
}

/// Clock that only moves when advanced. Used for deterministic replay and tests.
#[derive(Debug, Default)]
pub struct ManualClock {
    current: AtomicI64,
}

impl ManualClock {
    pub fn new(initial: i64) -> Self {
        Self {
            current: AtomicI64::new(initial),
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> i64 {
        self.current.load(Ordering::SeqCst)
    }

    fn advance(&self, seconds: i64) {
        self.current.fetch_add(seconds, Ordering::SeqCst);
    }
}
