//! Nutritional Intake Resolution Engine
//!
//! Core functionality for turning free-text food descriptions and
//! structured picker selections into normalized nutrition summaries.

pub mod build_info;
pub mod engine;
pub mod mcp;
pub mod models;
pub mod tools;
