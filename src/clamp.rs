//! Range clamping for raw telemetry values.
//!
//! Every reading is clamped to its display range at the point of use, so a
//! misbehaving sender can never push a gauge past full scale or a percentage
//! past 100. One function per numeric kind keeps call sites cast-free.
//!
//! The upper bound is checked first. With inverted bounds (`min > max`) the
//! result is therefore `max` for values above it and `min` otherwise; callers
//! are expected to pass `min <= max`.

/// Clamp a float into `min..=max`.
pub fn clamp_f32(value: f32, min: f32, max: f32) -> f32 {
    if value > max {
        max
    } else if value < min {
        min
    } else {
        value
    }
}

/// Clamp a signed integer into `min..=max`.
pub fn clamp_i32(value: i32, min: i32, max: i32) -> i32 {
    if value > max {
        max
    } else if value < min {
        min
    } else {
        value
    }
}

/// Clamp an unsigned integer into `min..=max`.
pub fn clamp_u32(value: u32, min: u32, max: u32) -> u32 {
    if value > max {
        max
    } else if value < min {
        min
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_range_values_pass_through() {
        assert_eq!(clamp_i32(7_500, 0, 15_000), 7_500);
        assert_eq!(clamp_u32(42, 0, 100), 42);
        assert_eq!(clamp_f32(3.5, -12.0, 12.0), 3.5);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert_eq!(clamp_i32(0, 0, 100), 0);
        assert_eq!(clamp_i32(100, 0, 100), 100);
        assert_eq!(clamp_u32(15_000, 0, 15_000), 15_000);
        assert_eq!(clamp_f32(-12.0, -12.0, 12.0), -12.0);
    }

    #[test]
    fn test_saturates_both_sides() {
        assert_eq!(clamp_i32(-20_000, -15_000, 15_000), -15_000);
        assert_eq!(clamp_i32(99_999, -15_000, 15_000), 15_000);
        assert_eq!(clamp_u32(70_000, 0, 15_000), 15_000);
        assert_eq!(clamp_f32(150.0, 0.0, 100.0), 100.0);
        assert_eq!(clamp_f32(-0.5, 0.0, 100.0), 0.0);
    }

    #[test]
    fn test_result_always_within_bounds() {
        // Cheap pseudo-random sweep over a wide input range.
        let mut x: i64 = 0x2545_F491;
        for _ in 0..1_000 {
            x = x.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1_442_695_040_888_963_407);
            let v = (x >> 16) as i32;
            let c = clamp_i32(v, -15_000, 15_000);
            assert!((-15_000..=15_000).contains(&c));
            if (-15_000..=15_000).contains(&v) {
                assert_eq!(c, v);
            }
        }
    }

    #[test]
    fn test_inverted_bounds_prefer_max() {
        // Documented degenerate behavior: max wins for large inputs.
        assert_eq!(clamp_i32(500, 100, 0), 0);
        assert_eq!(clamp_i32(-500, 100, 0), 100);
    }
}
