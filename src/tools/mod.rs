//! Intake tools module
//!
//! MCP tool implementations for the intake resolution service.

pub mod intake;
pub mod reference;
pub mod status;
