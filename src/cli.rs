use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "catalog-search", version)]
#[command(about = "Typo-tolerant product search for affiliate catalogs", long_about = None)]
pub struct Cli {
    /// Catalog file (products.json) used when a request does not name one
    #[arg(long, global = true, env = "CATALOG_SEARCH_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Config file (TOML); defaults to <config dir>/catalog-search/config.toml
    #[arg(long, global = true, env = "CATALOG_SEARCH_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the MCP tools over stdio (the default)
    Serve,
    /// Print one page of search results
    Search {
        /// Free-text query; omit to browse by sort order
        #[arg(default_value = "")]
        query: String,
        #[arg(short = 'c', long)]
        category: Option<String>,
        #[arg(long)]
        min_price: Option<f64>,
        #[arg(long)]
        max_price: Option<f64>,
        #[arg(short = 'r', long)]
        min_rating: Option<f64>,
        #[arg(short = 'b', long = "badge")]
        badges: Vec<String>,
        #[arg(short, long)]
        sort: Option<String>,
        #[arg(short, long, default_value = "1")]
        page: usize,
        #[arg(short = 'n', long)]
        page_size: Option<usize>,
    },
    /// Print categories, badges and price bounds
    Facets,
}
