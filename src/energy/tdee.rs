//! Total Daily Energy Expenditure

use crate::models::{ActivityLevel, EnergyRate, InvalidInput};

/// Scale BMR by the activity multiplier
pub fn compute_tdee(bmr: EnergyRate, activity_level: ActivityLevel) -> EnergyRate {
    EnergyRate::from_kcal_per_day(bmr.kcal_per_day() * activity_level.multiplier())
}

/// Same as [`compute_tdee`] for an activity level still held as text
pub fn compute_tdee_checked(bmr: EnergyRate, activity_level: &str) -> Result<EnergyRate, InvalidInput> {
    let level: ActivityLevel = activity_level.parse()?;
    Ok(compute_tdee(bmr, level))
}
