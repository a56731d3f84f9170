//! Basal Metabolic Rate
//!
//! Harris-Benedict style linear equation:
//! `10 * weight_kg + 6.25 * height_cm - 5 * age_years + constant`

use crate::models::{EnergyRate, Gender, InvalidInput};

/// kcal per kilogram of body weight
pub const WEIGHT_COEFFICIENT: f64 = 10.0;
/// kcal per centimeter of height
pub const HEIGHT_COEFFICIENT: f64 = 6.25;
/// kcal per year of age (subtracted)
pub const AGE_COEFFICIENT: f64 = 5.0;
/// Constant term for men
pub const MALE_CONSTANT: f64 = 5.0;
/// Constant term for women
pub const FEMALE_CONSTANT: f64 = -161.0;

/// Compute BMR in kcal/day. No rounding, no range checks.
pub fn compute_bmr(gender: Gender, weight_kg: f64, height_cm: f64, age_years: i32) -> EnergyRate {
    let constant = match gender {
        Gender::Male => MALE_CONSTANT,
        Gender::Female => FEMALE_CONSTANT,
    };

    let bmr = WEIGHT_COEFFICIENT * weight_kg + HEIGHT_COEFFICIENT * height_cm
        - AGE_COEFFICIENT * f64::from(age_years)
        + constant;

    EnergyRate::from_kcal_per_day(bmr)
}

/// Same as [`compute_bmr`] for a gender still held as text
pub fn compute_bmr_checked(
    gender: &str,
    weight_kg: f64,
    height_cm: f64,
    age_years: i32,
) -> Result<EnergyRate, InvalidInput> {
    let gender: Gender = gender.parse()?;
    Ok(compute_bmr(gender, weight_kg, height_cm, age_years))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_male_bmr() {
        // 700 + 1093.75 - 125 + 5
        let bmr = compute_bmr(Gender::Male, 70.0, 175.0, 25);
        assert_eq!(bmr.kcal_per_day(), 1673.75);
    }

    #[test]
    fn test_female_bmr() {
        // 600 + 1031.25 - 150 - 161
        let bmr = compute_bmr(Gender::Female, 60.0, 165.0, 30);
        assert_eq!(bmr.kcal_per_day(), 1320.25);
    }

    #[test]
    fn test_male_female_difference_is_166() {
        let fixtures = [
            (70.0, 175.0, 25),
            (60.0, 165.0, 30),
            (95.0, 190.0, 52),
            (45.0, 150.0, 18),
        ];
        for (w, h, a) in fixtures {
            let male = compute_bmr(Gender::Male, w, h, a).kcal_per_day();
            let female = compute_bmr(Gender::Female, w, h, a).kcal_per_day();
            assert_eq!(male - female, 166.0);
        }

        let male = compute_bmr(Gender::Male, 72.35, 181.7, 41).kcal_per_day();
        let female = compute_bmr(Gender::Female, 72.35, 181.7, 41).kcal_per_day();
        assert!((male - female - 166.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_rounding() {
        let bmr = compute_bmr(Gender::Male, 70.3, 175.1, 25);
        let expected = 10.0 * 70.3 + 6.25 * 175.1 - 125.0 + 5.0;
        assert_eq!(bmr.kcal_per_day(), expected);
    }

    #[test]
    fn test_out_of_range_inputs_are_not_rejected() {
        assert_eq!(compute_bmr(Gender::Male, 0.0, 0.0, 0).kcal_per_day(), 5.0);
        assert_eq!(compute_bmr(Gender::Female, 0.0, 0.0, 0).kcal_per_day(), -161.0);
        assert_eq!(compute_bmr(Gender::Male, -10.0, 100.0, -4).kcal_per_day(), 550.0);
    }

    #[test]
    fn test_checked_parses_gender() {
        let bmr = compute_bmr_checked("Male", 70.0, 175.0, 25).unwrap();
        assert_eq!(bmr, compute_bmr(Gender::Male, 70.0, 175.0, 25));
    }

    #[test]
    fn test_checked_rejects_unknown_gender() {
        let err = compute_bmr_checked("Other", 70.0, 175.0, 25).unwrap_err();
        assert!(matches!(err, InvalidInput::Gender(ref v) if v == "Other"));
    }

    #[test]
    fn test_idempotent() {
        let first = compute_bmr(Gender::Female, 58.4, 162.0, 37);
        let second = compute_bmr(Gender::Female, 58.4, 162.0, 37);
        assert_eq!(first, second);
    }
}
