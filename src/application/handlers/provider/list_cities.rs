//! ListCitiesHandler - Query handler for the city picker.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::search::list_cities;
use crate::ports::ProviderReader;

/// Handler listing the distinct cities with providers.
pub struct ListCitiesHandler {
    reader: Arc<dyn ProviderReader>,
}

impl ListCitiesHandler {
    pub fn new(reader: Arc<dyn ProviderReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self) -> Result<Vec<String>, DomainError> {
        let providers = self.reader.list_all().await?;
        Ok(list_cities(&providers))
    }
}
