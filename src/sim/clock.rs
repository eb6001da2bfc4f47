//! Fixed-rate simulation clock
//!
//! Time is counted in ticks so every timer is exact and reproducible. The
//! clock only advances on ticks that actually simulate, which means pausing
//! freezes power-up and effect timers.

use serde::{Deserialize, Serialize};

use crate::consts::{TICK_DT, TICK_RATE};

/// A point in simulation time, measured in ticks since the clock started
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct SimInstant(pub u64);

impl SimInstant {
    pub const ZERO: SimInstant = SimInstant(0);

    #[inline]
    pub fn ticks(self) -> u64 {
        self.0
    }

    /// Seconds since the clock started
    #[inline]
    pub fn as_secs(self) -> f32 {
        self.0 as f32 * TICK_DT
    }

    /// The instant `secs` seconds after this one (rounded to whole ticks)
    pub fn after_secs(self, secs: f32) -> SimInstant {
        SimInstant(self.0 + secs_to_ticks(secs))
    }

    /// Ticks elapsed since `earlier` (zero if `earlier` is in the future)
    #[inline]
    pub fn ticks_since(self, earlier: SimInstant) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

/// Convert a duration in seconds to whole ticks
#[inline]
pub fn secs_to_ticks(secs: f32) -> u64 {
    (secs.max(0.0) * TICK_RATE as f32).round() as u64
}

/// Monotonic tick counter owned by the world
#[derive(Debug, Clone, Default)]
pub struct Clock {
    now: SimInstant,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current simulation time
    #[inline]
    pub fn now(&self) -> SimInstant {
        self.now
    }

    /// Advance by one tick and return the new time
    pub fn advance(&mut self) -> SimInstant {
        self.now.0 += 1;
        self.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_is_monotonic() {
        let mut clock = Clock::new();
        assert_eq!(clock.now(), SimInstant::ZERO);
        let a = clock.advance();
        let b = clock.advance();
        assert!(b > a);
        assert_eq!(clock.now().ticks(), 2);
    }

    #[test]
    fn test_after_secs_rounds_to_ticks() {
        assert_eq!(SimInstant::ZERO.after_secs(5.0), SimInstant(300));
        assert_eq!(SimInstant(10).after_secs(7.0), SimInstant(430));
        assert_eq!(secs_to_ticks(-1.0), 0);
    }

    #[test]
    fn test_ticks_since_saturates() {
        assert_eq!(SimInstant(5).ticks_since(SimInstant(9)), 0);
        assert_eq!(SimInstant(9).ticks_since(SimInstant(5)), 4);
    }
}
