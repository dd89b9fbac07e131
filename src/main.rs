use anyhow::Context;
use catalog_search::cli::{Cli, Commands};
use catalog_search::config::{SearchConfig, expand_tilde};
use catalog_search::server::CatalogServer;
use catalog_search::state::CatalogState;
use catalog_search::tools::facets::{ListFacetsRequest, handle_list_facets};
use catalog_search::tools::search::{SearchRequest, handle_search};
use clap::Parser;
use rmcp::{ServiceExt, transport::stdio};
use std::path::PathBuf;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    catalog_search::tracing::init();

    let cli = Cli::parse();
    let config = SearchConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    let state = Arc::new(CatalogState::new(config));

    if let Some(path) = cli.catalog {
        let expanded = PathBuf::from(expand_tilde(&path.to_string_lossy()).as_ref());
        state.set_default_catalog(expanded).await;
    }

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(state).await,
        Commands::Search {
            query,
            category,
            min_price,
            max_price,
            min_rating,
            badges,
            sort,
            page,
            page_size,
        } => {
            let request = SearchRequest {
                query: Some(query),
                category,
                min_price,
                max_price,
                min_rating,
                badges,
                sort,
                page: Some(page),
                page_size,
                catalog: None,
            };
            let output = handle_search(&state, request)
                .await
                .map_err(anyhow::Error::msg)?;
            print!("{}", output);
            Ok(())
        }
        Commands::Facets => {
            let output = handle_list_facets(&state, ListFacetsRequest::default())
                .await
                .map_err(anyhow::Error::msg)?;
            print!("{}", output);
            Ok(())
        }
    }
}

async fn serve(state: Arc<CatalogState>) -> anyhow::Result<()> {
    tracing::info!("Starting catalog-search MCP server");

    // Create and serve the MCP server over stdio
    let server = CatalogServer::new(state);
    let service = server.serve(stdio()).await.inspect_err(|e| {
        tracing::error!("Error serving MCP server: {:?}", e);
    })?;

    // Wait for the service to complete
    service.waiting().await?;

    Ok(())
}
