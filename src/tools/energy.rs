//! Energy calculation tools
//!
//! Turn raw tool parameters into calls on the calculators and shape the
//! responses returned to MCP clients.

use serde::Serialize;
use tracing::debug;

use crate::energy::{compute_bmr_checked, compute_tdee};
use crate::form::{EnergyForm, FormError};
use crate::models::{ActivityLevel, EnergyRate, InvalidInput, ACTIVITY_MULTIPLIERS};

#[derive(Debug, Clone, Serialize)]
pub struct BmrResponse {
    pub bmr: EnergyRate,
}

#[derive(Debug, Clone, Serialize)]
pub struct TdeeResponse {
    pub bmr: EnergyRate,
    pub activity_level: ActivityLevel,
    pub multiplier: f64,
    pub tdee: EnergyRate,
}

#[derive(Debug, Clone, Serialize)]
pub struct EnergyResponse {
    pub bmr: EnergyRate,
    pub tdee: EnergyRate,
    /// Same two-line text the form shows
    pub display: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ActivityLevelEntry {
    pub label: &'static str,
    pub multiplier: f64,
}

/// Calculate BMR from biometrics
pub fn calculate_bmr(
    gender: &str,
    weight_kg: f64,
    height_cm: f64,
    age_years: i32,
) -> Result<BmrResponse, InvalidInput> {
    let bmr = compute_bmr_checked(gender, weight_kg, height_cm, age_years)?;
    debug!(gender, weight_kg, height_cm, age_years, bmr = bmr.kcal_per_day(), "calculated BMR");

    Ok(BmrResponse { bmr })
}

/// Calculate TDEE from a BMR value
pub fn calculate_tdee(bmr: f64, activity_level: &str) -> Result<TdeeResponse, InvalidInput> {
    let level: ActivityLevel = activity_level.parse()?;
    let bmr = EnergyRate::from_kcal_per_day(bmr);
    let tdee = compute_tdee(bmr, level);
    debug!(bmr = bmr.kcal_per_day(), activity = level.label(), tdee = tdee.kcal_per_day(), "calculated TDEE");

    Ok(TdeeResponse {
        bmr,
        activity_level: level,
        multiplier: level.multiplier(),
        tdee,
    })
}

/// Run the whole form: text fields in, BMR and TDEE out
pub fn calculate_energy(
    gender: &str,
    weight_kg: &str,
    height_cm: &str,
    age_years: &str,
    activity_level: &str,
) -> Result<EnergyResponse, FormError> {
    let mut form = EnergyForm::new();
    form.set_gender(gender);
    form.set_weight(weight_kg);
    form.set_height(height_cm);
    form.set_age(age_years);
    form.set_activity(activity_level);

    let report = form.calculate()?;

    Ok(EnergyResponse {
        bmr: report.bmr,
        tdee: report.tdee,
        display: form.result().to_string(),
    })
}

/// Activity levels in ascending order of multiplier
pub fn list_activity_levels() -> Vec<ActivityLevelEntry> {
    ACTIVITY_MULTIPLIERS
        .iter()
        .map(|(level, multiplier)| ActivityLevelEntry {
            label: level.label(),
            multiplier: *multiplier,
        })
        .collect()
}
