use crate::domain::error::SuggestError;
use crate::domain::model::LocationSuggestion;
use async_trait::async_trait;

/// Trait for location-search providers
///
/// Abstracts the upstream geocoding search API so the client logic can run
/// against a stub in tests and so providers can be swapped without touching
/// the caching or debouncing code.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Run one raw search against the provider, restricted to `country_code`.
    /// Returns the unfiltered provider result list in provider order.
    async fn search(
        &self,
        query: &str,
        country_code: &str,
    ) -> Result<Vec<LocationSuggestion>, SuggestError>;
}
