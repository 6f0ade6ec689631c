//! Bounded progress counter shared by the count-based task kinds.

use serde::Serialize;
use tracing::debug;

/// A `done` out of `total` counter with `1 <= total` and `done <= total`.
///
/// Both setters re-check the pair, so the invariant holds whichever field
/// is changed first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoundedCount {
    done: u32,
    total: u32,
}

impl BoundedCount {
    /// Create a counter, clamping both values into range.
    pub fn new(total: i64, done: i64) -> Self {
        let mut count = Self { done: 0, total: 1 };
        count.set_total(total);
        count.set_done(done);
        count
    }

    /// Items done.
    pub fn done(&self) -> u32 {
        self.done
    }

    /// Capacity.
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Set the capacity (minimum 1), pulling `done` down if it no longer fits.
    pub fn set_total(&mut self, total: i64) {
        self.total = total.clamp(1, i64::from(u32::MAX)) as u32;
        if self.done > self.total {
            debug!("Clamping done count {} to new total {}", self.done, self.total);
            self.done = self.total;
        }
    }

    /// Set the amount done, clamped to `0..=total`.
    pub fn set_done(&mut self, done: i64) {
        self.done = done.clamp(0, i64::from(self.total)) as u32;
    }

    /// `done / total`.
    pub fn fraction(&self) -> f64 {
        f64::from(self.done) / f64::from(self.total)
    }
}
