//! TDEE MCP Server Implementation
//!
//! Exposes the energy calculators as MCP tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::tools::energy;
use crate::tools::status::StatusTracker;

/// TDEE MCP Service
#[derive(Clone)]
pub struct TdeeService {
    status_tracker: Arc<StatusTracker>,
    tool_router: ToolRouter<TdeeService>,
}

impl Default for TdeeService {
    fn default() -> Self {
        Self::new()
    }
}

impl TdeeService {
    pub fn new() -> Self {
        Self {
            status_tracker: Arc::new(StatusTracker::new()),
            tool_router: Self::tool_router(),
        }
    }

    /// Serialize a response, counting it as a served calculation
    fn json_result<T: Serialize>(&self, value: &T) -> Result<CallToolResult, McpError> {
        let json = serde_json::to_string_pretty(value)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        self.status_tracker.record_calculation();
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

fn invalid_params(e: impl std::fmt::Display) -> McpError {
    warn!("rejected tool input: {}", e);
    McpError::invalid_params(e.to_string(), None)
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CalculateBmrParams {
    /// "Male" or "Female"
    pub gender: String,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Age in whole years
    pub age_years: i32,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CalculateTdeeParams {
    /// Basal metabolic rate in kcal/day
    pub bmr: f64,
    /// Sedentary, Light, Moderate, Active, or Very Active
    pub activity_level: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CalculateEnergyParams {
    /// "Male" or "Female" (default Male)
    #[serde(default = "default_gender")]
    pub gender: String,
    /// Weight in kilograms, as entered
    pub weight_kg: String,
    /// Height in centimeters, as entered
    pub height_cm: String,
    /// Age in years, as entered
    pub age_years: String,
    /// Activity level label (default Sedentary)
    #[serde(default = "default_activity_level")]
    pub activity_level: String,
}

fn default_gender() -> String {
    crate::form::DEFAULT_GENDER.to_string()
}

fn default_activity_level() -> String {
    crate::form::DEFAULT_ACTIVITY.to_string()
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl TdeeService {
    #[tool(
        description = "Get the current status of the TDEE service including build info, uptime, and process information"
    )]
    fn tdee_status(&self) -> Result<CallToolResult, McpError> {
        let status = self.status_tracker.get_status();
        let json = serde_json::to_string_pretty(&status)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "List the activity levels and the multiplier each applies to BMR")]
    fn list_activity_levels(&self) -> Result<CallToolResult, McpError> {
        let levels = energy::list_activity_levels();
        let json = serde_json::to_string_pretty(&levels)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(
        description = "Calculate Basal Metabolic Rate (kcal/day) from gender, weight (kg), height (cm), and age (years)"
    )]
    fn calculate_bmr(
        &self,
        Parameters(p): Parameters<CalculateBmrParams>,
    ) -> Result<CallToolResult, McpError> {
        let result = energy::calculate_bmr(&p.gender, p.weight_kg, p.height_cm, p.age_years)
            .map_err(invalid_params)?;
        self.json_result(&result)
    }

    #[tool(
        description = "Calculate Total Daily Energy Expenditure (kcal/day) from a BMR value and an activity level"
    )]
    fn calculate_tdee(
        &self,
        Parameters(p): Parameters<CalculateTdeeParams>,
    ) -> Result<CallToolResult, McpError> {
        let result = energy::calculate_tdee(p.bmr, &p.activity_level).map_err(invalid_params)?;
        self.json_result(&result)
    }

    #[tool(
        description = "Calculate both BMR and TDEE from form-style text inputs. Returns the numbers and the two-line display text."
    )]
    fn calculate_energy(
        &self,
        Parameters(p): Parameters<CalculateEnergyParams>,
    ) -> Result<CallToolResult, McpError> {
        let result = energy::calculate_energy(
            &p.gender,
            &p.weight_kg,
            &p.height_cm,
            &p.age_years,
            &p.activity_level,
        )
        .map_err(invalid_params)?;
        info!(
            bmr = result.bmr.kcal_per_day(),
            tdee = result.tdee.kcal_per_day(),
            "energy calculated"
        );
        self.json_result(&result)
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for TdeeService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "tdee".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("TDEE Calculator".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "TDEE Calculator - Basal Metabolic Rate and Total Daily Energy Expenditure. \
                 calculate_bmr takes gender (Male/Female), weight_kg, height_cm, age_years. \
                 calculate_tdee takes a bmr and an activity_level; call list_activity_levels for the choices. \
                 calculate_energy runs both from raw text fields. \
                 tdee_status reports build and process information."
                    .into(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn json_body(result: &CallToolResult) -> serde_json::Value {
        let text = result.content[0]
            .raw
            .as_text()
            .map(|t| t.text.clone())
            .unwrap();
        serde_json::from_str(&text).unwrap()
    }

    #[test]
    fn test_server_info() {
        let info = TdeeService::new().get_info();
        assert_eq!(info.server_info.name, "tdee");
        assert!(info.capabilities.tools.is_some());
    }

    #[test]
    fn test_successful_tools_are_counted() {
        let service = TdeeService::new();
        let params = CalculateTdeeParams { bmr: 1500.0, activity_level: "Light".into() };
        assert!(service.calculate_tdee(Parameters(params)).is_ok());
        assert_eq!(service.status_tracker.calculations_served(), 1);
    }

    #[test]
    fn test_invalid_input_is_rejected() {
        let service = TdeeService::new();
        let params = CalculateBmrParams {
            gender: "Other".into(),
            weight_kg: 70.0,
            height_cm: 175.0,
            age_years: 25,
        };
        let err = service.calculate_bmr(Parameters(params)).unwrap_err();
        assert_eq!(err.message, "Invalid gender. Choose 'Male' or 'Female'.");
        assert_eq!(service.status_tracker.calculations_served(), 0);
    }

    #[test]
    fn test_energy_params_defaults() {
        let params: CalculateEnergyParams = serde_json::from_str(
            r#"{"weight_kg": "70", "height_cm": "175", "age_years": "25"}"#,
        )
        .unwrap();
        assert_eq!(params.gender, "Male");
        assert_eq!(params.activity_level, "Sedentary");
    }

    #[test]
    fn test_calculate_energy_tool() {
        let service = TdeeService::new();
        let params: CalculateEnergyParams = serde_json::from_str(
            r#"{"gender":"Male","weight_kg":"70","height_cm":"175","age_years":"25","activity_level":"Light"}"#,
        )
        .unwrap();
        let result = service.calculate_energy(Parameters(params)).unwrap();

        let body = json_body(&result);
        assert_eq!(body["bmr"], 1673.75);
        assert_eq!(body["tdee"], 1673.75 * 1.375);
        assert_eq!(body.as_object().unwrap().len(), 3);
        assert!(body["display"].as_str().unwrap().starts_with("BMR: 1673.75 kcal/day"));
    }

    #[test]
    fn test_calculate_bmr_tool_returns_only_bmr() {
        let service = TdeeService::new();
        let params: CalculateBmrParams = serde_json::from_str(
            r#"{"gender":"Female","weight_kg":60,"height_cm":165,"age_years":30}"#,
        )
        .unwrap();
        let result = service.calculate_bmr(Parameters(params)).unwrap();
        assert_eq!(json_body(&result), serde_json::json!({ "bmr": 1320.25 }));
    }

    #[test]
    fn test_list_activity_levels_tool() {
        let service = TdeeService::new();
        let body = json_body(&service.list_activity_levels().unwrap());

        let levels = body.as_array().unwrap();
        assert_eq!(levels.len(), 5);
        assert_eq!(levels[0]["label"], "Sedentary");
        assert_eq!(levels[0]["multiplier"], 1.2);
        assert_eq!(levels[4]["label"], "Very Active");
        assert_eq!(levels[4]["multiplier"], 1.9);
        // listing is not a calculation
        assert_eq!(service.status_tracker.calculations_served(), 0);
    }

    #[test]
    fn test_tdee_status_tool() {
        let service = TdeeService::new();
        let params = CalculateTdeeParams { bmr: 1500.0, activity_level: "Active".into() };
        service.calculate_tdee(Parameters(params)).unwrap();

        let body = json_body(&service.tdee_status().unwrap());
        assert_eq!(body["calculations_served"], 1);
        assert_eq!(body["process_id"], std::process::id());
        assert_eq!(body["build"]["version"], env!("CARGO_PKG_VERSION"));
    }
}
