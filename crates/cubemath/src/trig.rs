//! Exact trigonometry for multiples of 90 degrees.

/// Returns `(cos θ, sin θ)` for `θ = quarter_turns × 90°`, exactly.
///
/// Any integer is accepted; the angle is reduced modulo a full turn first.
///
/// ```
/// # use cubemath::quarter_turn_cos_sin;
/// assert_eq!(quarter_turn_cos_sin(1), (0, 1));
/// assert_eq!(quarter_turn_cos_sin(-1), (0, -1));
/// assert_eq!(quarter_turn_cos_sin(6), (-1, 0));
/// ```
pub const fn quarter_turn_cos_sin(quarter_turns: i32) -> (i8, i8) {
    const TABLE: [(i8, i8); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];
    TABLE[quarter_turns.rem_euclid(4) as usize]
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_quarter_turn_table() {
        assert_eq!(quarter_turn_cos_sin(0), (1, 0));
        assert_eq!(quarter_turn_cos_sin(1), (0, 1));
        assert_eq!(quarter_turn_cos_sin(2), (-1, 0));
        assert_eq!(quarter_turn_cos_sin(3), (0, -1));
        assert_eq!(quarter_turn_cos_sin(i32::MIN), (1, 0));
    }

    proptest! {
        #[test]
        fn proptest_matches_rounded_float_trig(quarter_turns in -1000_i32..1000) {
            let angle = quarter_turns as f64 * std::f64::consts::FRAC_PI_2;
            let (c, s) = quarter_turn_cos_sin(quarter_turns);
            prop_assert_eq!(c as f64, angle.cos().round());
            prop_assert_eq!(s as f64, angle.sin().round());
        }
    }
}
