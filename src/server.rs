//! MCP server implementation using rmcp.
//!
//! The tool router is written by hand rather than generated: the boundary
//! contract pins unknown tool names to a text payload (`Unknown tool: ...`)
//! instead of a protocol-level error, so dispatch stays explicit.

use crate::config::Config;
use crate::services::CourseCatalog;
use crate::tools;
use rmcp::model::{
    CallToolRequestParam, CallToolResult, Content, JsonObject, ListToolsResult,
    PaginatedRequestParam, ServerCapabilities, ServerInfo, Tool,
};
use rmcp::service::{RequestContext, RoleServer};
use rmcp::ServerHandler;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::future::Future;
use std::sync::Arc;

/// Maximum response size in bytes. Responses exceeding this are truncated
/// to prevent context window exhaustion in LLM consumers.
const MAX_RESPONSE_BYTES: usize = 512 * 1024; // 512KB

/// Truncates a JSON response string at a char boundary before the limit,
/// appending a truncation notice.
fn truncate_response(mut json: String) -> String {
    if json.len() <= MAX_RESPONSE_BYTES {
        return json;
    }
    let original_len = json.len();
    let mut cut = MAX_RESPONSE_BYTES;
    while cut > 0 && !json.is_char_boundary(cut) {
        cut -= 1;
    }
    json.truncate(cut);
    json.push_str(&format!(
        "...\n[TRUNCATED: response exceeded {original_len} bytes, showing first {cut}]"
    ));
    json
}

/// Runs a tool operation and converts the outcome to an MCP result.
///
/// Success serializes to pretty-printed JSON (truncated at the response
/// cap); tool-level failures become `CallToolResult::error` with the
/// error's display text, never a protocol error.
async fn run_tool<T, E, Fut>(fut: Fut) -> Result<CallToolResult, rmcp::Error>
where
    T: Serialize,
    E: std::fmt::Display,
    Fut: Future<Output = Result<T, E>>,
{
    match fut.await {
        Ok(output) => {
            let json = serde_json::to_string_pretty(&output)
                .map_err(|e| rmcp::Error::internal_error(e.to_string(), None))?;
            Ok(CallToolResult::success(vec![Content::text(
                truncate_response(json),
            )]))
        }
        Err(e) => Ok(CallToolResult::error(vec![Content::text(e.to_string())])),
    }
}

/// Generates the JSON input schema for a tool input type.
fn input_schema<T: JsonSchema>() -> Arc<JsonObject> {
    match serde_json::to_value(schemars::schema_for!(T)) {
        Ok(Value::Object(schema)) => Arc::new(schema),
        _ => Arc::new(JsonObject::new()),
    }
}

/// Parses tool arguments into a typed input, defaulting to `{}`.
fn parse_input<T: DeserializeOwned>(arguments: Option<JsonObject>) -> Result<T, String> {
    serde_json::from_value(Value::Object(arguments.unwrap_or_default()))
        .map_err(|e| format!("Invalid arguments: {e}"))
}

/// MCP server for curriculum course search and analysis.
#[derive(Clone)]
pub struct CurriculaServer {
    catalog: Arc<CourseCatalog>,
}

impl CurriculaServer {
    /// Creates a server over the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the upstream HTTP client cannot be built.
    pub fn new(config: Arc<Config>) -> crate::Result<Self> {
        Ok(Self {
            catalog: Arc::new(CourseCatalog::new(config)?),
        })
    }

    /// Declares the five curriculum tools with their input schemas.
    #[must_use]
    pub fn tool_definitions() -> Vec<Tool> {
        vec![
            Tool::new(
                "search_courses",
                "Search for courses based on various criteria",
                input_schema::<tools::SearchInput>(),
            ),
            Tool::new(
                "get_course_details",
                "Get detailed information about a specific course",
                input_schema::<tools::DetailsInput>(),
            ),
            Tool::new(
                "analyze_course_completeness",
                "Analyze how complete a course's information is",
                input_schema::<tools::CompletenessInput>(),
            ),
            Tool::new(
                "compare_courses",
                "Compare two courses side by side",
                input_schema::<tools::CompareInput>(),
            ),
            Tool::new(
                "get_statistics",
                "Get overall statistics about the course data",
                input_schema::<tools::StatsInput>(),
            ),
        ]
    }

    /// Dispatches a tool call by name.
    ///
    /// Malformed arguments and unknown names produce tool-level error
    /// payloads; a tool call never surfaces as a protocol error.
    pub async fn dispatch(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, rmcp::Error> {
        match name {
            "search_courses" => match parse_input(arguments) {
                Ok(input) => run_tool(tools::execute_search(&self.catalog, input)).await,
                Err(msg) => Ok(CallToolResult::error(vec![Content::text(msg)])),
            },
            "get_course_details" => match parse_input(arguments) {
                Ok(input) => run_tool(tools::execute_details(&self.catalog, input)).await,
                Err(msg) => Ok(CallToolResult::error(vec![Content::text(msg)])),
            },
            "analyze_course_completeness" => match parse_input(arguments) {
                Ok(input) => run_tool(tools::execute_completeness(&self.catalog, input)).await,
                Err(msg) => Ok(CallToolResult::error(vec![Content::text(msg)])),
            },
            "compare_courses" => match parse_input(arguments) {
                Ok(input) => run_tool(tools::execute_compare(&self.catalog, input)).await,
                Err(msg) => Ok(CallToolResult::error(vec![Content::text(msg)])),
            },
            "get_statistics" => match parse_input(arguments) {
                Ok(input) => run_tool(tools::execute_stats(&self.catalog, input)).await,
                Err(msg) => Ok(CallToolResult::error(vec![Content::text(msg)])),
            },
            other => Ok(CallToolResult::error(vec![Content::text(format!(
                "Unknown tool: {other}"
            ))])),
        }
    }
}

impl ServerHandler for CurriculaServer {
    fn get_info(&self) -> ServerInfo {
        let instructions = "curricula: Kuali curriculum course search and analysis.\n\n\
             TOOLS:\n\
             - search_courses: filter by subject code, title/description text,\n\
               prerequisites and outcomes presence\n\
             - get_course_details: full record for an exact course code\n\
             - analyze_course_completeness: field-completeness report\n\
             - compare_courses: side-by-side projection of two courses\n\
             - get_statistics: per-subject tallies over the catalog\n\n\
             TIPS:\n\
             - Subject codes accept both 'LE/MECH' and 'MECH'\n\
             - Course lookups are best-effort text searches; use the exact\n\
               code as it appears in search results"
            .to_string();

        ServerInfo {
            instructions: Some(instructions),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, rmcp::Error> {
        Ok(ListToolsResult {
            tools: Self::tool_definitions(),
            next_cursor: None,
            meta: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, rmcp::Error> {
        self.dispatch(&request.name, request.arguments).await
    }
}
