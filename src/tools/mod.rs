//! MCP tool implementations

pub mod energy;
pub mod status;
