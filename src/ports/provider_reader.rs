//! Provider reader port (read side).
//!
//! Defines how the application reads the provider listing. The listing
//! is read-only: there is no matching repository port for writes.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ProviderId};
use crate::domain::provider::ServiceProvider;

/// Reader port for provider queries.
#[async_trait]
pub trait ProviderReader: Send + Sync {
    /// All providers, in listing source order.
    async fn list_all(&self) -> Result<Vec<ServiceProvider>, DomainError>;

    /// Get a provider by ID.
    ///
    /// Returns `None` if not found. A missing provider is an ordinary
    /// result, not an error.
    async fn get_by_id(&self, id: ProviderId) -> Result<Option<ServiceProvider>, DomainError>;
}
