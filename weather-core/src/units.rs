use crate::error::ConfigError;

/// Degree unit shown in the block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Fahrenheit,
    Celsius,
}

impl Unit {
    /// Validate the two mutually exclusive unit toggles.
    pub fn from_flags(farenheit: bool, celsius: bool) -> Result<Self, ConfigError> {
        match (farenheit, celsius) {
            (true, false) => Ok(Unit::Fahrenheit),
            (false, true) => Ok(Unit::Celsius),
            (true, true) => Err(ConfigError::ConflictingUnits),
            (false, false) => Err(ConfigError::MissingUnit),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Fahrenheit => "fahrenheit",
            Unit::Celsius => "celsius",
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Convert a Fahrenheit reading into `unit`, rounded to `precision` decimals.
pub fn convert(temperature_f: f64, unit: Unit, precision: usize) -> f64 {
    let value = match unit {
        Unit::Fahrenheit => temperature_f,
        Unit::Celsius => (temperature_f - 32.0) * 5.0 / 9.0,
    };
    round_to(value, precision)
}

/// Decimal places past which an `f64` carries no further digits.
pub const MAX_PRECISION: usize = 17;

/// Round to `precision` decimal places.
///
/// Goes through the exact decimal expansion of `value`, so 72.345 (stored as
/// 72.34499..) rounds to 72.3, and exact halves round to even. Precisions
/// above [`MAX_PRECISION`] leave the value unrounded.
pub fn round_to(value: f64, precision: usize) -> f64 {
    if precision > MAX_PRECISION {
        return normalize_zero(value);
    }
    let rounded = format!("{value:.precision$}").parse().unwrap_or(value);
    normalize_zero(rounded)
}

// -0.0 would otherwise render as "-0".
fn normalize_zero(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_flags_accepts_exactly_one_unit() {
        assert_eq!(Unit::from_flags(true, false), Ok(Unit::Fahrenheit));
        assert_eq!(Unit::from_flags(false, true), Ok(Unit::Celsius));
    }

    #[test]
    fn from_flags_rejects_both_and_neither() {
        assert_eq!(Unit::from_flags(true, true), Err(ConfigError::ConflictingUnits));
        assert_eq!(Unit::from_flags(false, false), Err(ConfigError::MissingUnit));
    }

    #[test]
    fn fahrenheit_only_rounds() {
        assert_eq!(convert(72.6, Unit::Fahrenheit, 0), 73.0);
        assert_eq!(convert(72.345, Unit::Fahrenheit, 1), 72.3);
        assert_eq!(convert(-4.25, Unit::Fahrenheit, 2), -4.25);
    }

    #[test]
    fn celsius_converts_before_rounding() {
        assert_eq!(convert(50.0, Unit::Celsius, 0), 10.0);
        assert_eq!(convert(212.0, Unit::Celsius, 0), 100.0);
        // 70F = 21.111..C
        assert_eq!(convert(70.0, Unit::Celsius, 0), 21.0);
        assert_eq!(convert(70.0, Unit::Celsius, 2), 21.11);
    }

    #[test]
    fn halves_round_to_even() {
        assert_eq!(round_to(0.5, 0), 0.0);
        assert_eq!(round_to(1.5, 0), 2.0);
        assert_eq!(round_to(2.5, 0), 2.0);
    }

    #[test]
    fn negative_zero_is_normalized() {
        // 31.5F = -0.277..C
        let c = convert(31.5, Unit::Celsius, 0);
        assert_eq!(c, 0.0);
        assert!(c.is_sign_positive());
    }

    #[test]
    fn rounding_follows_stored_decimal_value() {
        assert_eq!(round_to(72.345, 1), 72.3);
        assert_eq!(round_to(1.25, MAX_PRECISION), 1.25);
    }

    #[test]
    fn precision_past_f64_digits_is_left_unrounded() {
        assert_eq!(round_to(72.0, usize::MAX), 72.0);
        assert_eq!(round_to(1.25, MAX_PRECISION + 1), 1.25);
        assert_eq!(convert(50.0, Unit::Celsius, 1_000_000_000), 10.0);
    }
}
