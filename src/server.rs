//! MCP server exposing catalog search over stdio.

use crate::state::CatalogState;
use crate::tools::facets::{ListFacetsRequest, handle_list_facets};
use crate::tools::search::{SearchRequest, handle_search};
use crate::tools::set_catalog::{SetCatalogRequest, format_response, handle_set_catalog};
use rmcp::{
    ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    schemars::{self, JsonSchema, generate::SchemaSettings},
    tool, tool_handler, tool_router,
};
use std::sync::Arc;

/// MCP Server for product catalog queries
#[derive(Clone)]
pub struct CatalogServer {
    /// Shared catalog state (config, default catalog, cache)
    state: Arc<CatalogState>,

    /// Tool router for handling MCP tool calls
    tool_router: ToolRouter<Self>,
}

impl std::fmt::Debug for CatalogServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogServer")
            .field("state", &self.state)
            .finish()
    }
}

#[tool_router]
impl CatalogServer {
    pub fn new(state: Arc<CatalogState>) -> Self {
        Self {
            state,
            tool_router: Self::tool_router(),
        }
    }

    pub fn state(&self) -> &Arc<CatalogState> {
        &self.state
    }

    #[tool(
        description = "Use a products.json file as the default catalog for subsequent searches. Validates and loads the file, then reports product and category counts."
    )]
    async fn set_catalog(
        &self,
        Parameters(request): Parameters<SetCatalogRequest>,
    ) -> std::result::Result<String, String> {
        let (path, catalog) = handle_set_catalog(&self.state, request)
            .await
            .map_err(|e| format!("Failed to set catalog: {}", e))?;

        Ok(format_response(&path, &catalog))
    }

    #[tool(
        description = "Search and browse products. Free-text queries tolerate typos and rank by relevance across title, category and badge. Without a query, products are ordered by the chosen sort mode. Supports category, price range, minimum rating and badge filters, with pagination.",
        input_schema = inline_schema_for_type::<SearchRequest>()
    )]
    async fn search_products(
        &self,
        Parameters(request): Parameters<SearchRequest>,
    ) -> std::result::Result<String, String> {
        handle_search(&self.state, request).await
    }

    #[tool(
        description = "List the filters a catalog supports: categories with product counts, badges, and the price range.",
        input_schema = inline_schema_for_type::<ListFacetsRequest>()
    )]
    async fn list_facets(
        &self,
        Parameters(request): Parameters<ListFacetsRequest>,
    ) -> std::result::Result<String, String> {
        handle_list_facets(&self.state, request).await
    }
}

#[tool_handler]
impl ServerHandler for CatalogServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo::new(ServerCapabilities::builder().enable_tools().build())
            .with_protocol_version(ProtocolVersion::V_2024_11_05)
            .with_server_info(Implementation::from_build_env())
            .with_instructions(
                "catalog-search: typo-tolerant product search over an affiliate catalog. \
                 Configure a catalog with set_catalog (or the config file), explore filters \
                 with list_facets, then query with search_products.",
            )
    }
}

/// Generate an inline JSON schema for MCP tools
///
/// Sets `inline_subschemas = true` so clients render nested types inline
/// instead of following `$ref`s.
pub fn inline_schema_for_type<T: JsonSchema>() -> Arc<JsonObject> {
    let mut settings = SchemaSettings::draft07();
    settings.transforms = vec![Box::new(schemars::transform::AddNullable::default())];
    settings.inline_subschemas = true;

    let generator = settings.into_generator();
    let schema = generator.into_root_schema_for::<T>();
    let object = serde_json::to_value(schema).expect("failed to serialize schema");

    let serde_json::Value::Object(json_object) = object else {
        panic!("Schema serialization produced non-object value")
    };

    Arc::new(json_object)
}
