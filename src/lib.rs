pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

// Re-export for convenience
pub use application::cities::{popular_cities, regional_cities};
pub use application::search::{
    LocationSearchClient, LocationSearchClientBuilder, MIN_QUERY_CHARS,
};
pub use domain::error::SuggestError;
pub use domain::model::LocationSuggestion;
pub use domain::traits::SearchProvider;
pub use infrastructure::config::{load_config, Config, SearchConfig};
pub use infrastructure::network::provider::NominatimProvider;
