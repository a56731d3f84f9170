//! Energy calculation module
//!
//! BMR from biometrics and TDEE from BMR and activity level.

pub mod bmr;
pub mod tdee;

pub use bmr::{compute_bmr, compute_bmr_checked, FEMALE_CONSTANT, MALE_CONSTANT};
pub use tdee::{compute_tdee, compute_tdee_checked};
