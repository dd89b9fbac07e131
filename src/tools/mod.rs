pub mod facets;
pub mod search;
pub mod set_catalog;

pub use facets::*;
pub use search::*;
pub use set_catalog::*;

use crate::catalog::Catalog;
use crate::config::expand_tilde;
use crate::state::CatalogState;
use std::path::PathBuf;
use std::sync::Arc;

/// Load the catalog a request names, or the configured default.
pub(crate) async fn load_catalog(
    state: &Arc<CatalogState>,
    explicit: Option<&str>,
) -> Result<Arc<Catalog>, String> {
    let explicit = explicit
        .filter(|p| !p.trim().is_empty())
        .map(|p| PathBuf::from(expand_tilde(p).as_ref()));

    let Some(path) = state.resolve(explicit.as_deref()).await else {
        return Err("No catalog configured.\n\n\
                    To configure a catalog:\n\
                    • Use set_catalog with a path to a products.json file\n\
                    • Or pass `catalog` with this request\n\
                    • Or set [catalog] path in the config file"
            .to_string());
    };

    state
        .get(&path)
        .await
        .map_err(|e| format!("Failed to load catalog: {}", e))
}
