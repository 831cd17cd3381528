//! Intake MCP Server Implementation
//!
//! Implements the MCP server exposing the resolution engine as tools.
//! This layer is the asynchronous boundary around the engine; it holds
//! no resolution logic of its own.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::Deserialize;
use tokio::sync::Mutex;

use crate::engine::{ReferenceStore, ResolveError};
use crate::models::{LoggedIntake, MealType, NutritionSummary};
use crate::tools::intake;
use crate::tools::reference;
use crate::tools::status::{StatusTracker, LOGGING_INSTRUCTIONS};

/// Intake MCP Service
#[derive(Clone)]
pub struct IntakeService {
    store: Arc<ReferenceStore>,
    status_tracker: Arc<Mutex<StatusTracker>>,
    tool_router: ToolRouter<IntakeService>,
}

impl IntakeService {
    pub fn new(store: ReferenceStore) -> Self {
        let tracker = StatusTracker::new(store.food_count(), store.keyword_count());
        Self {
            store: Arc::new(store),
            status_tracker: Arc::new(Mutex::new(tracker)),
            tool_router: Self::tool_router(),
        }
    }
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ResolveTextParams {
    /// Free-text description of what was eaten, e.g. "2 eggs and a banana"
    pub text: String,
    /// Meal type tag: breakfast, lunch, dinner, snack (default snack)
    pub meal_type: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ResolveSelectionsParams {
    /// Reference keywords selected in the food picker, e.g. ["banana", "oatmeal"]
    pub keys: Vec<String>,
    /// Meal type tag: breakfast, lunch, dinner, snack (default snack)
    pub meal_type: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct DayEntryParams {
    /// Meal type: breakfast, lunch, dinner, snack (default snack)
    pub meal_type: Option<String>,
    /// Display name as previously returned by a resolve tool
    pub display_name: Option<String>,
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
    pub fiber: Option<u32>,
}

impl DayEntryParams {
    fn into_logged_intake(self) -> LoggedIntake {
        LoggedIntake {
            meal_type: self
                .meal_type
                .as_deref()
                .map(MealType::from_str)
                .unwrap_or_default(),
            summary: NutritionSummary {
                display_name: self.display_name.unwrap_or_default(),
                calories: self.calories,
                protein: self.protein,
                carbs: self.carbs,
                fat: self.fat,
                fiber: self.fiber,
                serving_description: String::new(),
            },
        }
    }
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SummarizeDayParams {
    /// Logged entries for one day, as previously returned by the resolve tools
    pub entries: Vec<DayEntryParams>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchReferenceFoodsParams {
    /// Name or keyword fragment to search for
    pub query: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetReferenceFoodParams {
    /// Any keyword of the food, e.g. "eggs"
    pub keyword: String,
}

fn meal_type_from(param: Option<&str>) -> MealType {
    param.map(MealType::from_str).unwrap_or_default()
}

fn resolve_error_to_mcp(e: ResolveError) -> McpError {
    McpError::invalid_params(e.to_string(), None)
}

fn reference_food_json(
    store: &ReferenceStore,
    keyword: &str,
) -> Result<String, serde_json::Error> {
    match reference::get_food(store, keyword) {
        Some(detail) => serde_json::to_string_pretty(&detail),
        None => serde_json::to_string_pretty(&serde_json::json!({
            "error": "Reference food not found",
            "keyword": keyword,
        })),
    }
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl IntakeService {
    // --- Status ---

    #[tool(description = "Get the current status of the intake service including build info, reference table size, and process information")]
    async fn intake_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        let status = tracker.get_status();
        let json = serde_json::to_string_pretty(&status)
            .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Get step-by-step instructions for resolving and logging food intake. Call this when starting a food logging session or when unsure how to use the intake tools.")]
    fn logging_instructions(&self) -> Result<CallToolResult, McpError> {
        Ok(CallToolResult::success(vec![Content::text(LOGGING_INSTRUCTIONS)]))
    }

    // --- Resolution ---

    #[tool(description = "Resolve a free-text food description into a nutrition summary. Returns recognized=false when no food is mentioned; treat the message as ordinary conversation in that case.")]
    async fn resolve_intake_text(
        &self,
        Parameters(p): Parameters<ResolveTextParams>,
    ) -> Result<CallToolResult, McpError> {
        let meal_type = meal_type_from(p.meal_type.as_deref());
        let result = intake::resolve_text(&self.store, &p.text, meal_type);
        {
            let mut tracker = self.status_tracker.lock().await;
            tracker.record_text_resolution(result.recognized);
        }
        let json = serde_json::to_string_pretty(&result)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Resolve an explicit food-picker selection into a nutrition summary. Every key must exist in the reference table; unknown keys and empty selections are rejected.")]
    async fn resolve_intake_selections(
        &self,
        Parameters(p): Parameters<ResolveSelectionsParams>,
    ) -> Result<CallToolResult, McpError> {
        let meal_type = meal_type_from(p.meal_type.as_deref());
        let result = intake::resolve_selections(&self.store, &p.keys, meal_type)
            .map_err(resolve_error_to_mcp)?;
        {
            let mut tracker = self.status_tracker.lock().await;
            tracker.record_selection_resolution();
        }
        let json = serde_json::to_string_pretty(&result)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Compute daily nutrition totals over a day's logged entries, grouped by meal type")]
    fn summarize_day(
        &self,
        Parameters(p): Parameters<SummarizeDayParams>,
    ) -> Result<CallToolResult, McpError> {
        let entries: Vec<LoggedIntake> = p
            .entries
            .into_iter()
            .map(DayEntryParams::into_logged_intake)
            .collect();
        let result = intake::summarize_day(&entries);
        let json = serde_json::to_string_pretty(&result)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    // --- Reference Table ---

    #[tool(description = "List all foods in the reference table with their keywords and per-serving calories")]
    fn list_reference_foods(&self) -> Result<CallToolResult, McpError> {
        let result = reference::list_foods(&self.store);
        let json = serde_json::to_string_pretty(&result)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Search reference foods by name or keyword fragment")]
    fn search_reference_foods(
        &self,
        Parameters(p): Parameters<SearchReferenceFoodsParams>,
    ) -> Result<CallToolResult, McpError> {
        let result = reference::search_foods(&self.store, &p.query);
        let json = serde_json::to_string_pretty(&result)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Get full nutrition facts for one reference food by any of its keywords")]
    fn get_reference_food(
        &self,
        Parameters(p): Parameters<GetReferenceFoodParams>,
    ) -> Result<CallToolResult, McpError> {
        let json = reference_food_json(&self.store, &p.keyword)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}


// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for IntakeService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "intake".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Nutritional Intake Resolution Engine".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Nutritional Intake Resolution Engine - resolves what a user ate into \
                 normalized nutrition summaries (calories, protein, carbs, fat, fiber). \
                 IMPORTANT: Call logging_instructions before the first food logging session. \
                 Free text: resolve_intake_text (recognized=false means not a food log). \
                 Picker selections: resolve_intake_selections with reference keywords. \
                 Daily totals: summarize_day over previously resolved entries. \
                 Reference table: list_reference_foods, search_reference_foods, get_reference_food. \
                 The reference table is fixed at startup; nothing is persisted by this server."
                    .into(),
            ),
        }
    }
}
