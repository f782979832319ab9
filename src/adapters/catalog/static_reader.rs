//! Provider reader over the compiled-in catalog.
//!
//! The listing is static for the life of the process, so reads never fail
//! and never allocate beyond cloning the requested records.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ProviderId};
use crate::domain::provider::{catalog, ServiceProvider};
use crate::ports::ProviderReader;

/// Serves providers from a fixed slice, by default the built-in catalog.
#[derive(Debug, Clone, Copy)]
pub struct StaticProviderReader {
    providers: &'static [ServiceProvider],
}

impl StaticProviderReader {
    /// Reader over the built-in catalog.
    pub fn new() -> Self {
        Self {
            providers: catalog(),
        }
    }

    /// Reader over an arbitrary static listing.
    pub fn from_slice(providers: &'static [ServiceProvider]) -> Self {
        Self { providers }
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl Default for StaticProviderReader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProviderReader for StaticProviderReader {
    async fn list_all(&self) -> Result<Vec<ServiceProvider>, DomainError> {
        Ok(self.providers.to_vec())
    }

    async fn get_by_id(&self, id: ProviderId) -> Result<Option<ServiceProvider>, DomainError> {
        Ok(self.providers.iter().find(|p| p.id == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn lists_the_whole_catalog_in_order() {
        let reader = StaticProviderReader::new();
        let all = reader.list_all().await.unwrap();

        assert_eq!(all.len(), 10);
        assert_eq!(all[0].name, "Royal Valet Services");
        assert_eq!(reader.len(), 10);
    }

    #[tokio::test]
    async fn finds_provider_by_id() {
        let reader = StaticProviderReader::new();
        let provider = reader
            .get_by_id(ProviderId::new(5).unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(provider.name, "Garden City Protection");
    }

    #[tokio::test]
    async fn unknown_id_is_none() {
        let reader = StaticProviderReader::new();
        let missing = reader.get_by_id(ProviderId::new(11).unwrap()).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn empty_slice_reader() {
        let reader = StaticProviderReader::from_slice(&[]);
        assert!(reader.is_empty());
        assert!(reader.list_all().await.unwrap().is_empty());
    }
}
