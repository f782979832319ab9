//! HTTP handlers for provider endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{domain_error_response, invalid_provider_id, ErrorResponse};
use crate::application::handlers::provider::{
    DetectCityHandler, GetProviderHandler, GetProviderQuery, ListCitiesHandler,
    SearchProvidersHandler, SearchProvidersQuery,
};
use crate::domain::foundation::ProviderId;
use crate::domain::search::SearchCriteria;

use super::dto::{CitiesResponse, LocationResponse, ProviderResponse, SearchResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ProviderHandlers {
    search_handler: Arc<SearchProvidersHandler>,
    get_handler: Arc<GetProviderHandler>,
    cities_handler: Arc<ListCitiesHandler>,
    detect_handler: Arc<DetectCityHandler>,
}

impl ProviderHandlers {
    pub fn new(
        search_handler: Arc<SearchProvidersHandler>,
        get_handler: Arc<GetProviderHandler>,
        cities_handler: Arc<ListCitiesHandler>,
        detect_handler: Arc<DetectCityHandler>,
    ) -> Self {
        Self {
            search_handler,
            get_handler,
            cities_handler,
            detect_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/providers - Search providers by location and text
pub async fn search_providers(
    State(handlers): State<ProviderHandlers>,
    Query(criteria): Query<SearchCriteria>,
) -> Response {
    match handlers
        .search_handler
        .handle(SearchProvidersQuery { criteria })
        .await
    {
        Ok(outcome) => {
            let response: SearchResponse = outcome.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/providers/:id - Get provider details
pub async fn get_provider(
    State(handlers): State<ProviderHandlers>,
    Path(provider_id): Path<String>,
) -> Response {
    let provider_id = match provider_id.parse::<ProviderId>() {
        Ok(id) => id,
        Err(error) => return invalid_provider_id(&provider_id, &error),
    };

    match handlers
        .get_handler
        .handle(GetProviderQuery { provider_id })
        .await
    {
        Ok(Some(provider)) => {
            let response: ProviderResponse = provider.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Ok(None) => {
            ErrorResponse::provider_not_found(provider_id).into_response_with(StatusCode::NOT_FOUND)
        }
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/providers/cities - List cities with providers
pub async fn list_cities(State(handlers): State<ProviderHandlers>) -> Response {
    match handlers.cities_handler.handle().await {
        Ok(cities) => (StatusCode::OK, Json(CitiesResponse { cities })).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/location - Detect the visitor's city
pub async fn detect_location(State(handlers): State<ProviderHandlers>) -> Response {
    let city = handlers.detect_handler.handle().await;
    (StatusCode::OK, Json(LocationResponse { city })).into_response()
}
