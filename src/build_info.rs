//! Build metadata stamped in by `build.rs`

use serde::Serialize;

/// Package version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Version, build number and compile time of the running binary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BuildStamp {
    pub version: &'static str,
    pub build_number: u64,
    pub compiled_at: &'static str,
}

impl BuildStamp {
    pub fn current() -> Self {
        Self {
            version: VERSION,
            build_number: parse_build_number(option_env!("TDEE_BUILD_NUMBER")),
            compiled_at: option_env!("TDEE_BUILD_TIMESTAMP").unwrap_or("unknown"),
        }
    }

    /// Startup line written to the log
    pub fn banner(&self) -> String {
        format!(
            "TDEE Calculator v{} (build {}, compiled {})",
            self.version, self.build_number, self.compiled_at
        )
    }
}

fn parse_build_number(raw: Option<&str>) -> u64 {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(0)
}
