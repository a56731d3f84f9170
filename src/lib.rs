//! TDEE Calculator Library
//!
//! BMR and TDEE calculations, the form view-model that drives them, and the
//! MCP server exposing them as tools.

pub mod build_info;
pub mod energy;
pub mod form;
pub mod mcp;
pub mod models;
pub mod tools;

pub use energy::{compute_bmr, compute_tdee};
pub use models::{ActivityLevel, Biometrics, EnergyRate, Gender, InvalidInput};
