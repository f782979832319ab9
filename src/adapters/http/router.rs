//! Application router: every endpoint plus the shared middleware stack.

use std::sync::Arc;
use std::time::Duration;

use axum::{http::HeaderValue, routing::get, Router};
use http::{header::CONTENT_TYPE, Method};
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use super::booking::{booking_routes, BookingHandlers};
use super::health::health_handler;
use super::provider::{provider_routes, ProviderHandlers};
use crate::application::handlers::booking::{
    AdvanceBookingHandler, BookingSettings, QuoteBookingHandler, SubmitBookingHandler,
};
use crate::application::handlers::provider::{
    DetectCityHandler, GetProviderHandler, ListCitiesHandler, SearchProvidersHandler,
};
use crate::config::ServerConfig;
use crate::ports::{LocationDetector, ProviderReader};

/// Everything the router needs from the outside.
#[derive(Clone)]
pub struct AppDependencies {
    pub reader: Arc<dyn ProviderReader>,
    pub detector: Arc<dyn LocationDetector>,
    pub settings: BookingSettings,
}

/// Builds the full router.
///
/// API routes live under `/api`; `/health` sits at the root.
pub fn app_router(deps: AppDependencies, server: &ServerConfig) -> Router {
    let provider_handlers = ProviderHandlers::new(
        Arc::new(SearchProvidersHandler::new(deps.reader.clone())),
        Arc::new(GetProviderHandler::new(deps.reader.clone())),
        Arc::new(ListCitiesHandler::new(deps.reader.clone())),
        Arc::new(DetectCityHandler::new(deps.detector)),
    );
    let booking_handlers = BookingHandlers::new(
        Arc::new(AdvanceBookingHandler::new()),
        Arc::new(QuoteBookingHandler::new(
            deps.reader.clone(),
            deps.settings.clone(),
        )),
        Arc::new(SubmitBookingHandler::new(deps.reader, deps.settings)),
    );

    let api = Router::new()
        .merge(provider_routes(provider_handlers))
        .merge(booking_routes(booking_handlers));

    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api)
        .layer(TimeoutLayer::new(Duration::from_secs(
            server.request_timeout_secs,
        )))
        .layer(cors_layer(server))
        .layer(TraceLayer::new_for_http())
}

/// Any origin unless origins are configured.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring unparseable CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        cors.allow_origin(Any)
    } else {
        cors.allow_origin(origins)
    }
}
