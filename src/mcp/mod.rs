//! MCP server module
//!
//! Exposes the resolution engine over the Model Context Protocol.

pub mod server;

pub use server::IntakeService;
