use crate::domain::error::SuggestError;
use crate::domain::model::LocationSuggestion;
use crate::domain::traits::SearchProvider;
use crate::infrastructure::config::ProviderConfig;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

// Nominatim search response row. `place_id` is numeric on the wire but kept
// as a string in the domain model for rendering-key use.
#[derive(Deserialize, Debug)]
struct NominatimPlace {
    display_name: String,
    lat: String,
    lon: String,
    place_id: u64,
    #[serde(rename = "type")]
    place_type: String,
    #[serde(default)]
    importance: f64,
}

impl From<NominatimPlace> for LocationSuggestion {
    fn from(place: NominatimPlace) -> Self {
        Self {
            display_name: place.display_name,
            lat: place.lat,
            lon: place.lon,
            place_id: place.place_id.to_string(),
            place_type: place.place_type,
            importance: place.importance,
        }
    }
}

/// Nominatim (OpenStreetMap) search provider.
///
/// The client must carry a descriptive User-Agent per the provider's usage
/// policy; `create_client` sets it from `ProviderConfig`.
pub struct NominatimProvider {
    client: Client,
    config: ProviderConfig,
}

impl NominatimProvider {
    pub fn new(client: Client, config: ProviderConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl SearchProvider for NominatimProvider {
    async fn search(
        &self,
        query: &str,
        country_code: &str,
    ) -> Result<Vec<LocationSuggestion>, SuggestError> {
        let limit = self.config.request_limit.to_string();
        let params = [
            ("q", query),
            ("format", "json"),
            ("addressdetails", "1"),
            ("limit", limit.as_str()),
            ("countrycodes", country_code),
            ("accept-language", "en"),
        ];

        let places = self
            .client
            .get(format!("{}/search", self.config.base_url))
            .query(&params)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<NominatimPlace>>()
            .await?;

        Ok(places.into_iter().map(LocationSuggestion::from).collect())
    }
}
