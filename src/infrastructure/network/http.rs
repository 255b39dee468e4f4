// HTTP client utilities
use crate::domain::error::SuggestError;
use crate::infrastructure::config::ProviderConfig;
use reqwest::Client;
use std::time::Duration;

/// Create the shared HTTP client.
///
/// The explicit timeout matters: the suggestion flow never surfaces provider
/// errors to the caller, so a hung request would otherwise stall the
/// autocomplete callback indefinitely.
pub fn create_client(provider: &ProviderConfig) -> Result<Client, SuggestError> {
    Ok(Client::builder()
        .pool_max_idle_per_host(10)
        .pool_idle_timeout(Duration::from_secs(30))
        .timeout(Duration::from_secs(provider.timeout_secs))
        .user_agent(provider.user_agent.clone())
        .build()?)
}
