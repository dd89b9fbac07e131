mod common;

use assert2::{check, let_assert};
use catalog_search::tools::{
    ListFacetsRequest, SearchRequest, SetCatalogRequest, handle_list_facets, handle_search,
    handle_set_catalog,
};
use common::*;
use rstest::rstest;

fn search_in(file: &TempCatalog) -> SearchRequest {
    SearchRequest {
        catalog: Some(file.path().display().to_string()),
        ..SearchRequest::default()
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn test_search_by_relevance(temp_catalog: TempCatalog) {
    let state = empty_state();
    let request = SearchRequest {
        query: Some("wireless".to_string()),
        ..search_in(&temp_catalog)
    };

    let_assert!(Ok(output) = handle_search(&state, request).await);
    check!(output.starts_with("Products matching 'wireless' (by relevance):"));
    check!(output.contains("1. Wireless Headphones [Electronics] - relevance: 55"));
    check!(output.contains("$50.00 (was $79.99, 37% off)"));
    check!(output.contains("Best Seller"));
    check!(output.contains("2. Wireless Mouse [Electronics] - relevance: 55"));
    check!(output.contains("Page 1 of 1 (2 products)"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn test_browse_sorted_page(temp_catalog: TempCatalog) {
    let state = empty_state();
    let request = SearchRequest {
        sort: Some("price-low".to_string()),
        page: Some(2),
        page_size: Some(3),
        ..search_in(&temp_catalog)
    };

    let_assert!(Ok(output) = handle_search(&state, request).await);
    check!(output.starts_with("Products sorted by price-low:"));
    check!(output.contains("4. LED Desk Lamp with USB Charging Port [Home]"));
    check!(output.contains("6. Wireless Headphones"));
    check!(!output.contains("Braided USB-C Cable"));
    check!(!output.contains("relevance:"));
    check!(output.contains("Page 2 of 3 (7 products)"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn test_page_past_end(temp_catalog: TempCatalog) {
    let state = empty_state();
    let request = SearchRequest {
        page: Some(9),
        ..search_in(&temp_catalog)
    };

    let_assert!(Ok(output) = handle_search(&state, request).await);
    check!(output.contains("Page 9 is past the end (1 pages, 7 products)."));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn test_huge_page_number_is_past_the_end(temp_catalog: TempCatalog) {
    let state = empty_state();
    let request = SearchRequest {
        page: Some(usize::MAX),
        page_size: Some(2),
        ..search_in(&temp_catalog)
    };

    let_assert!(Ok(output) = handle_search(&state, request).await);
    check!(output.contains(&format!(
        "Page {} is past the end (4 pages, 7 products).",
        usize::MAX
    )));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn test_no_results_gives_tips(temp_catalog: TempCatalog) {
    let state = empty_state();
    let request = SearchRequest {
        query: Some("zzzzzz".to_string()),
        category: Some("Kitchen".to_string()),
        ..search_in(&temp_catalog)
    };

    let_assert!(Ok(output) = handle_search(&state, request).await);
    check!(output.contains("No products found for 'zzzzzz'."));
    check!(output.contains("Search across all categories"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn test_unknown_category_suggests_close_names(temp_catalog: TempCatalog) {
    let state = empty_state();
    let request = SearchRequest {
        category: Some("Kitchn".to_string()),
        ..search_in(&temp_catalog)
    };

    let_assert!(Ok(output) = handle_search(&state, request).await);
    check!(output.contains("Category 'Kitchn' not found. Did you mean one of these?"));
    check!(output.contains("• `Kitchen`"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn test_unknown_sort_is_rejected(temp_catalog: TempCatalog) {
    let state = empty_state();
    let request = SearchRequest {
        sort: Some("cheapest".to_string()),
        ..search_in(&temp_catalog)
    };

    let_assert!(Err(message) = handle_search(&state, request).await);
    check!(message.contains("Unknown sort mode 'cheapest'"));
    check!(message.contains("price-low"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_search_without_catalog() {
    let state = empty_state();
    let_assert!(Err(message) = handle_search(&state, SearchRequest::default()).await);
    check!(message.contains("No catalog configured"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_search_missing_catalog_file() {
    let state = empty_state();
    let request = SearchRequest {
        catalog: Some("/definitely/not/here/products.json".to_string()),
        ..SearchRequest::default()
    };
    let_assert!(Err(message) = handle_search(&state, request).await);
    check!(message.contains("Failed to load catalog"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn test_set_catalog_becomes_default(temp_catalog: TempCatalog) {
    let state = empty_state();
    let request = SetCatalogRequest {
        path: temp_catalog.path().display().to_string(),
    };

    let_assert!(Ok((path, catalog)) = handle_set_catalog(&state, request).await);
    check!(catalog.len() == 7);
    check!(state.default_catalog().await == Some(path));

    let request = SearchRequest {
        query: Some("kitchen".to_string()),
        ..SearchRequest::default()
    };
    let_assert!(Ok(output) = handle_search(&state, request).await);
    check!(output.contains("1. Chef Knife [Kitchen]"));
    check!(output.contains("2. Electric Kettle [Kitchen]"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_set_catalog_rejects_missing_path() {
    let state = empty_state();
    let request = SetCatalogRequest {
        path: "/definitely/not/here/products.json".to_string(),
    };
    check!(handle_set_catalog(&state, request).await.is_err());
    check!(state.default_catalog().await.is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn test_list_facets(temp_catalog: TempCatalog) {
    let state = empty_state();
    let request = ListFacetsRequest {
        catalog: Some(temp_catalog.path().display().to_string()),
    };

    let_assert!(Ok(output) = handle_list_facets(&state, request).await);
    check!(output.contains("Catalog facets (7 products):"));
    check!(output.contains("  • Electronics (3)"));
    check!(output.contains("  • Kitchen (2)"));
    check!(output.contains("  • Amazon's Choice"));
    check!(output.contains("Price range: $9.99 – $89.00"));
}
