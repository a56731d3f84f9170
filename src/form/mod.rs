//! Energy form view-model
//!
//! Holds the raw text of each input field plus the result line. A shell owns
//! one `EnergyForm`, writes into the fields, calls [`EnergyForm::calculate`]
//! and renders [`EnergyForm::result`].

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::energy::{compute_bmr, compute_tdee};
use crate::models::{ActivityLevel, EnergyRate, Gender, InvalidInput};

/// Labels offered by the gender selector
pub const GENDER_CHOICES: [&str; 2] = ["Male", "Female"];

/// Labels offered by the activity selector
pub const ACTIVITY_CHOICES: [&str; 5] = ["Sedentary", "Light", "Moderate", "Active", "Very Active"];

pub const DEFAULT_GENDER: &str = "Male";
pub const DEFAULT_ACTIVITY: &str = "Sedentary";

/// Numeric field kinds, named after the conversion that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberKind {
    Float,
    Int,
}

impl fmt::Display for NumberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberKind::Float => f.write_str("float"),
            NumberKind::Int => f.write_str("int"),
        }
    }
}

/// Form error types
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error(transparent)]
    Input(#[from] InvalidInput),

    #[error("could not convert string to {kind}: '{value}'")]
    Number {
        field: &'static str,
        kind: NumberKind,
        value: String,
    },
}

impl FormError {
    /// Heading for the error dialog
    pub fn title(&self) -> &'static str {
        "Input Error"
    }
}

/// Result of one successful calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnergyReport {
    pub bmr: EnergyRate,
    pub tdee: EnergyRate,
}

impl EnergyReport {
    /// Two-line summary rounded to two decimals
    pub fn display_text(&self) -> String {
        format!(
            "BMR: {:.2} kcal/day\nTDEE: {:.2} kcal/day",
            self.bmr.kcal_per_day(),
            self.tdee.kcal_per_day()
        )
    }
}

/// Input fields and result label of the calculator form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnergyForm {
    gender: String,
    weight: String,
    height: String,
    age: String,
    activity: String,
    result: String,
}

impl Default for EnergyForm {
    fn default() -> Self {
        Self {
            gender: DEFAULT_GENDER.to_string(),
            weight: String::new(),
            height: String::new(),
            age: String::new(),
            activity: DEFAULT_ACTIVITY.to_string(),
            result: String::new(),
        }
    }
}

impl EnergyForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gender(&self) -> &str {
        &self.gender
    }

    pub fn set_gender(&mut self, value: impl Into<String>) {
        self.gender = value.into();
    }

    pub fn weight(&self) -> &str {
        &self.weight
    }

    pub fn set_weight(&mut self, value: impl Into<String>) {
        self.weight = value.into();
    }

    pub fn height(&self) -> &str {
        &self.height
    }

    pub fn set_height(&mut self, value: impl Into<String>) {
        self.height = value.into();
    }

    pub fn age(&self) -> &str {
        &self.age
    }

    pub fn set_age(&mut self, value: impl Into<String>) {
        self.age = value.into();
    }

    pub fn activity(&self) -> &str {
        &self.activity
    }

    pub fn set_activity(&mut self, value: impl Into<String>) {
        self.activity = value.into();
    }

    /// Current result label text
    pub fn result(&self) -> &str {
        &self.result
    }

    /// Parse the fields, run both calculators and update the result label.
    ///
    /// Fields are parsed in on-screen order and the first failure is returned.
    /// The result label keeps its previous text on failure.
    pub fn calculate(&mut self) -> Result<EnergyReport, FormError> {
        let gender: Gender = self.gender.parse()?;
        let weight = parse_float("weight", &self.weight)?;
        let height = parse_float("height", &self.height)?;
        let age = parse_int("age", &self.age)?;
        let activity: ActivityLevel = self.activity.parse()?;

        let bmr = compute_bmr(gender, weight, height, age);
        let tdee = compute_tdee(bmr, activity);
        let report = EnergyReport { bmr, tdee };

        self.result = report.display_text();
        Ok(report)
    }

    /// Reset every field and the result to their defaults
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn parse_float(field: &'static str, text: &str) -> Result<f64, FormError> {
    text.trim().parse::<f64>().map_err(|_| FormError::Number {
        field,
        kind: NumberKind::Float,
        value: text.to_string(),
    })
}

fn parse_int(field: &'static str, text: &str) -> Result<i32, FormError> {
    text.trim().parse::<i32>().map_err(|_| FormError::Number {
        field,
        kind: NumberKind::Int,
        value: text.to_string(),
    })
}
