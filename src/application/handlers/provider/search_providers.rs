//! SearchProvidersHandler - Query handler for listing pages.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::search::{match_providers, MatchOutcome, SearchCriteria};
use crate::ports::ProviderReader;

/// Query to search the provider listing.
#[derive(Debug, Clone, Default)]
pub struct SearchProvidersQuery {
    pub criteria: SearchCriteria,
}

/// Handler for provider searches.
pub struct SearchProvidersHandler {
    reader: Arc<dyn ProviderReader>,
}

impl SearchProvidersHandler {
    pub fn new(reader: Arc<dyn ProviderReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, query: SearchProvidersQuery) -> Result<MatchOutcome, DomainError> {
        let providers = self.reader.list_all().await?;
        let outcome = match_providers(&providers, &query.criteria);

        tracing::debug!(
            city = ?query.criteria.city,
            area = ?query.criteria.area,
            results = outcome.providers.len(),
            has_area_match = outcome.has_area_match,
            "Provider search completed"
        );

        Ok(outcome)
    }
}
