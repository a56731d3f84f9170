//! Data models
//!
//! Value types shared by the energy calculations and the shells around them.

mod activity;
mod biometrics;
mod energy_rate;
mod error;
mod gender;

pub use activity::{ActivityLevel, ACTIVITY_MULTIPLIERS};
pub use biometrics::Biometrics;
pub use energy_rate::EnergyRate;
pub use error::InvalidInput;
pub use gender::Gender;
