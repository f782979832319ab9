//! HTTP routes for provider endpoints.

use axum::{routing::get, Router};

use super::handlers::{
    detect_location, get_provider, list_cities, search_providers, ProviderHandlers,
};

/// Creates the provider router, to be nested under `/api`.
///
/// `/providers/cities` is registered beside `/providers/:id`; axum prefers
/// the static segment.
pub fn provider_routes(handlers: ProviderHandlers) -> Router {
    Router::new()
        .route("/providers", get(search_providers))
        .route("/providers/cities", get(list_cities))
        .route("/providers/:id", get(get_provider))
        .route("/location", get(detect_location))
        .with_state(handlers)
}
