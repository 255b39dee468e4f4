use serde::{Deserialize, Serialize};

/// One autocomplete candidate, shaped after the Nominatim search response.
///
/// Coordinates stay as strings so they pass through to the UI without
/// precision loss. `place_id` is unique within one provider response only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocationSuggestion {
    pub display_name: String,
    pub lat: String,
    pub lon: String,
    pub place_id: String,
    #[serde(rename = "type")]
    pub place_type: String,
    // Provider relevance score, higher = more relevant. Missing on some
    // rows; such rows can still pass the place-type allowlist.
    #[serde(default)]
    pub importance: f64,
}

impl LocationSuggestion {
    pub fn new(
        display_name: &str,
        lat: &str,
        lon: &str,
        place_id: &str,
        place_type: &str,
        importance: f64,
    ) -> Self {
        Self {
            display_name: display_name.to_string(),
            lat: lat.to_string(),
            lon: lon.to_string(),
            place_id: place_id.to_string(),
            place_type: place_type.to_string(),
            importance,
        }
    }
}
