//! HTTP adapter for provider listing endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    CitiesResponse, LocationResponse, ProviderResponse, SearchResponse, ServiceRateResponse,
};
pub use handlers::ProviderHandlers;
pub use routes::provider_routes;
