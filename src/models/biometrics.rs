//! Biometrics model
//!
//! Weight, height and age as entered. Values are not range checked; zero or
//! negative inputs flow straight into the BMR arithmetic.

use serde::{Deserialize, Serialize};

use super::{ActivityLevel, EnergyRate, Gender};
use crate::energy::{compute_bmr, compute_tdee};

/// A person's measurements
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Biometrics {
    pub gender: Gender,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age_years: i32,
}

impl Biometrics {
    pub fn new(gender: Gender, weight_kg: f64, height_cm: f64, age_years: i32) -> Self {
        Self {
            gender,
            weight_kg,
            height_cm,
            age_years,
        }
    }

    pub fn bmr(&self) -> EnergyRate {
        compute_bmr(self.gender, self.weight_kg, self.height_cm, self.age_years)
    }

    pub fn tdee(&self, activity_level: ActivityLevel) -> EnergyRate {
        compute_tdee(self.bmr(), activity_level)
    }
}
