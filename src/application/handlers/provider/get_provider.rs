//! GetProviderHandler - Query handler for a provider's detail page.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ProviderId};
use crate::domain::provider::ServiceProvider;
use crate::ports::ProviderReader;

/// Query to get a provider by ID.
#[derive(Debug, Clone)]
pub struct GetProviderQuery {
    pub provider_id: ProviderId,
}

/// Handler for retrieving provider details.
pub struct GetProviderHandler {
    reader: Arc<dyn ProviderReader>,
}

impl GetProviderHandler {
    pub fn new(reader: Arc<dyn ProviderReader>) -> Self {
        Self { reader }
    }

    /// Returns `None` when no provider has the id.
    pub async fn handle(&self, query: GetProviderQuery) -> Result<Option<ServiceProvider>, DomainError> {
        let provider = self.reader.get_by_id(query.provider_id).await?;
        if provider.is_none() {
            tracing::debug!(id = %query.provider_id, "Provider not found");
        }
        Ok(provider)
    }
}
