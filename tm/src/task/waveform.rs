//! Triangle waveform every task samples

use std::time::Duration;

use crate::domain::FieldRange;

/// Length of one full ramp up and back down
pub const WAVE_PERIOD: Duration = Duration::from_secs(1);

/// Sample the task waveform `elapsed` after the task's first iteration
pub fn make_step(elapsed: Duration, range: FieldRange) -> f32 {
    triangle_wave(elapsed, WAVE_PERIOD, range)
}

/// Linear ramp from `range.min` to `range.max` over the first half of
/// `period`, then back down over the second half. Wraps every `period`.
///
/// The phase is taken in integer nanoseconds before any float conversion,
/// so resolution does not degrade as `elapsed` grows.
pub fn triangle_wave(elapsed: Duration, period: Duration, range: FieldRange) -> f32 {
    let period_ns = period.as_nanos().max(1);
    let fraction = (elapsed.as_nanos() % period_ns) as f64 / period_ns as f64;
    let (min, max) = (f64::from(range.min), f64::from(range.max));
    let span = max - min;
    let value = if fraction < 0.5 {
        min + span * (fraction * 2.0)
    } else {
        max - span * ((fraction - 0.5) * 2.0)
    };
    // Rounding near the ends must not push the sample out of the store's range
    (value as f32).clamp(range.min, range.max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ANGLE_RANGE, COORD_RANGE, PI};
    use std::collections::HashSet;

    fn assert_close(actual: f32, expected: f32) {
        assert!((actual - expected).abs() < 1e-5, "expected {}, got {}", expected, actual);
    }

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_coord_wave_key_points() {
        assert_close(make_step(ms(0), COORD_RANGE), -1.0);
        assert_close(make_step(ms(250), COORD_RANGE), 0.0);
        assert_close(make_step(ms(500), COORD_RANGE), 1.0);
        assert_close(make_step(ms(750), COORD_RANGE), 0.0);
        assert_close(make_step(ms(1000), COORD_RANGE), -1.0);
    }

    #[test]
    fn test_angle_wave_key_points() {
        assert_close(make_step(ms(0), ANGLE_RANGE), -PI);
        assert_close(make_step(ms(250), ANGLE_RANGE), 0.0);
        assert_close(make_step(ms(500), ANGLE_RANGE), PI);
    }

    #[test]
    fn test_wave_wraps() {
        assert_close(make_step(ms(3250), COORD_RANGE), make_step(ms(250), COORD_RANGE));
        assert_close(make_step(ms(10_600), COORD_RANGE), make_step(ms(600), COORD_RANGE));
    }

    #[test]
    fn test_wave_keeps_resolution_after_long_runs() {
        let offset = Duration::from_secs(40 * 24 * 3600);
        let mut distinct = HashSet::new();
        for step in 0..100u64 {
            let late = make_step(offset + ms(step * 10), COORD_RANGE);
            let early = make_step(ms(step * 10), COORD_RANGE);
            assert_close(late, early);
            distinct.insert(late.to_bits());
        }
        // The ramp is symmetric, so t and 1s - t share a sample: 51 distinct values
        assert!(distinct.len() >= 50, "only {} distinct samples", distinct.len());
    }

    #[test]
    fn test_wave_stays_in_range() {
        for i in 0..10_000u64 {
            let t = Duration::from_micros(i * 730);
            assert!(COORD_RANGE.contains(make_step(t, COORD_RANGE)), "coord out of range at {:?}", t);
            assert!(ANGLE_RANGE.contains(make_step(t, ANGLE_RANGE)), "angle out of range at {:?}", t);
        }
    }

    #[test]
    fn test_custom_period() {
        let range = FieldRange::new(0.0, 10.0);
        let period = Duration::from_secs(4);
        assert_close(triangle_wave(Duration::from_secs(1), period, range), 5.0);
        assert_close(triangle_wave(Duration::from_secs(2), period, range), 10.0);
        assert_close(triangle_wave(Duration::from_secs(3), period, range), 5.0);
    }
}
