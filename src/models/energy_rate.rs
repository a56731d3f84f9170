//! Energy rate model

use std::fmt;

use serde::{Deserialize, Serialize};

/// Energy expenditure in kilocalories per day, kept at full precision
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnergyRate(f64);

impl EnergyRate {
    pub const fn from_kcal_per_day(kcal: f64) -> Self {
        Self(kcal)
    }

    pub const fn kcal_per_day(&self) -> f64 {
        self.0
    }
}

impl From<f64> for EnergyRate {
    fn from(kcal: f64) -> Self {
        Self(kcal)
    }
}

impl From<EnergyRate> for f64 {
    fn from(rate: EnergyRate) -> Self {
        rate.0
    }
}

/// Formats with two decimals unless a precision is given
impl fmt::Display for EnergyRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(2);
        write!(f, "{:.*} kcal/day", precision, self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let rate = EnergyRate::from_kcal_per_day(1673.75);
        assert_eq!(rate.to_string(), "1673.75 kcal/day");
        assert_eq!(format!("{:.0}", rate), "1674 kcal/day");
    }

    #[test]
    fn test_serializes_as_number() {
        let rate = EnergyRate::from(2069.7);
        assert_eq!(serde_json::to_string(&rate).unwrap(), "2069.7");
    }
}
