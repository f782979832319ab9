//! Provider query handlers.

mod detect_city;
mod get_provider;
mod list_cities;
mod search_providers;

pub use detect_city::DetectCityHandler;
pub use get_provider::{GetProviderHandler, GetProviderQuery};
pub use list_cities::ListCitiesHandler;
pub use search_providers::{SearchProvidersHandler, SearchProvidersQuery};

#[cfg(test)]
pub(crate) mod test_support {
    use async_trait::async_trait;

    use crate::domain::foundation::{DomainError, ErrorCode, ProviderId};
    use crate::domain::provider::{catalog, ServiceProvider};
    use crate::ports::ProviderReader;

    /// Serves a fixed provider list, or fails every call.
    pub struct MockProviderReader {
        providers: Vec<ServiceProvider>,
        fail: bool,
    }

    impl MockProviderReader {
        pub fn with_catalog() -> Self {
            Self {
                providers: catalog().to_vec(),
                fail: false,
            }
        }

        pub fn with_providers(providers: Vec<ServiceProvider>) -> Self {
            Self {
                providers,
                fail: false,
            }
        }

        pub fn failing() -> Self {
            Self {
                providers: Vec::new(),
                fail: true,
            }
        }

        fn check(&self) -> Result<(), DomainError> {
            if self.fail {
                return Err(DomainError::new(ErrorCode::CatalogError, "listing unavailable"));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl ProviderReader for MockProviderReader {
        async fn list_all(&self) -> Result<Vec<ServiceProvider>, DomainError> {
            self.check()?;
            Ok(self.providers.clone())
        }

        async fn get_by_id(&self, id: ProviderId) -> Result<Option<ServiceProvider>, DomainError> {
            self.check()?;
            Ok(self.providers.iter().find(|p| p.id == id).cloned())
        }
    }
}
