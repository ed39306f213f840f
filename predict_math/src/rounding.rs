//! Presentation rounding for reported values

/// Round to a fixed number of decimal places
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

/// Round to two decimal places, the precision used for monetary and
/// stock-level outputs
pub fn round2(value: f64) -> f64 {
    round_to(value, 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_two_places() {
        assert_eq!(round2(3.14159), 3.14);
        assert_eq!(round2(2.718), 2.72);
        assert_eq!(round2(-2.718), -2.72);
    }

    #[test]
    fn round_to_four_places() {
        assert_eq!(round_to(0.123456, 4), 0.1235);
    }

    #[test]
    fn integers_are_unchanged() {
        assert_eq!(round2(42.0), 42.0);
    }
}
