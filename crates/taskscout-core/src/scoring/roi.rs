//! Reward per hour.

/// Floor applied to the divisor.
pub const MIN_HOURS: f64 = 0.5;

/// `reward / max(hours, MIN_HOURS)`.
///
/// Negative rewards are not rejected; they simply produce a negative roi.
pub fn roi(reward: i64, hours: f64) -> f64 {
    reward as f64 / hours.max(MIN_HOURS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1000, 2.0, 500.0)]
    #[case(1000, 0.5, 2000.0)]
    #[case(600, 6.0, 100.0)]
    #[case(0, 3.0, 0.0)]
    #[case(100, 0.1, 200.0)]
    #[case(100, 0.0, 200.0)]
    #[case(-300, 3.0, -100.0)]
    fn roi_divides_by_floored_hours(#[case] reward: i64, #[case] hours: f64, #[case] expected: f64) {
        assert_eq!(roi(reward, hours), expected);
    }
}
