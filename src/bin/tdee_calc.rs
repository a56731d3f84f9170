//! One-shot calculator
//!
//! Usage: tdee_calc <gender> <weight_kg> <height_cm> <age_years> [activity]

use std::process::ExitCode;

use tracing::debug;
use tracing_subscriber::EnvFilter;

use tdee::form::{EnergyForm, ACTIVITY_CHOICES, GENDER_CHOICES};

fn usage() -> String {
    format!(
        "Usage: tdee_calc <gender> <weight_kg> <height_cm> <age_years> [activity]\n  \
         gender:   {}\n  \
         activity: {} (default {})",
        GENDER_CHOICES.join(" | "),
        ACTIVITY_CHOICES.join(" | "),
        tdee::form::DEFAULT_ACTIVITY
    )
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("tdee=warn".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 4 {
        eprintln!("{}", usage());
        return Ok(ExitCode::from(2));
    }

    let mut form = EnergyForm::new();
    form.set_gender(args[0].as_str());
    form.set_weight(args[1].as_str());
    form.set_height(args[2].as_str());
    form.set_age(args[3].as_str());
    // "Very Active" may arrive as two separate arguments
    if args.len() > 4 {
        form.set_activity(args[4..].join(" "));
    }
    debug!(?form, "form loaded from arguments");

    match form.calculate() {
        Ok(_) => {
            println!("{}", form.result());
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("{}: {}", e.title(), e);
            Ok(ExitCode::from(1))
        }
    }
}
