//! Game tick conversions.
//!
//! The simulation runs at a fixed [`TICKS_PER_SECOND`]. Zero is treated as
//! "not set" and converts to `None`.

pub const TICKS_PER_SECOND: f64 = 5.0;

/// Convert a per-tick rate to a per-second rate.
pub fn per_tick_to_per_second(per_tick: f64) -> Option<f64> {
    (per_tick != 0.0).then(|| per_tick * TICKS_PER_SECOND)
}

/// Convert a duration in ticks to seconds.
pub fn ticks_to_seconds(ticks: f64) -> Option<f64> {
    (ticks != 0.0).then(|| ticks / TICKS_PER_SECOND)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        assert_eq!(per_tick_to_per_second(2.0), Some(10.0));
        assert_eq!(per_tick_to_per_second(-0.1), Some(-0.5));
        assert_eq!(per_tick_to_per_second(0.0), None);
        assert_eq!(ticks_to_seconds(10.0), Some(2.0));
        assert_eq!(ticks_to_seconds(3.0), Some(0.6));
        assert_eq!(ticks_to_seconds(0.0), None);
    }
}
