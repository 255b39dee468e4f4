// Hardcoded default city lists, shown before the user has typed enough for
// a live search. Coordinates are city centroids; importance values mirror
// the ordering the booking UI wants, not provider scores.
use crate::domain::model::LocationSuggestion;
use once_cell::sync::Lazy;

static POPULAR_CITIES: Lazy<Vec<LocationSuggestion>> = Lazy::new(|| {
    vec![
        LocationSuggestion::new(
            "Mumbai, Maharashtra, India",
            "19.0760",
            "72.8777",
            "mumbai",
            "city",
            1.0,
        ),
        LocationSuggestion::new("Delhi, India", "28.7041", "77.1025", "delhi", "city", 1.0),
        LocationSuggestion::new(
            "Bangalore, Karnataka, India",
            "12.9716",
            "77.5946",
            "bangalore",
            "city",
            1.0,
        ),
        LocationSuggestion::new(
            "Ahmedabad, Gujarat, India",
            "23.0225",
            "72.5714",
            "ahmedabad",
            "city",
            1.0,
        ),
        LocationSuggestion::new(
            "Surat, Gujarat, India",
            "21.1702",
            "72.8311",
            "surat",
            "city",
            0.9,
        ),
        LocationSuggestion::new(
            "Vadodara, Gujarat, India",
            "22.3072",
            "73.1812",
            "vadodara",
            "city",
            0.9,
        ),
        LocationSuggestion::new(
            "Pune, Maharashtra, India",
            "18.5204",
            "73.8567",
            "pune",
            "city",
            0.9,
        ),
        LocationSuggestion::new("Goa, India", "15.2993", "74.1240", "goa", "state", 0.9),
    ]
});

static REGIONAL_CITIES: Lazy<Vec<LocationSuggestion>> = Lazy::new(|| {
    vec![
        LocationSuggestion::new(
            "Ahmedabad, Gujarat, India",
            "23.0225",
            "72.5714",
            "ahmedabad",
            "city",
            1.0,
        ),
        LocationSuggestion::new(
            "Surat, Gujarat, India",
            "21.1702",
            "72.8311",
            "surat",
            "city",
            0.9,
        ),
        LocationSuggestion::new(
            "Vadodara, Gujarat, India",
            "22.3072",
            "73.1812",
            "vadodara",
            "city",
            0.9,
        ),
        LocationSuggestion::new(
            "Rajkot, Gujarat, India",
            "22.3039",
            "70.8022",
            "rajkot",
            "city",
            0.8,
        ),
        LocationSuggestion::new(
            "Gandhinagar, Gujarat, India",
            "23.2156",
            "72.6369",
            "gandhinagar",
            "city",
            0.8,
        ),
        LocationSuggestion::new(
            "Bhavnagar, Gujarat, India",
            "21.7645",
            "72.1519",
            "bhavnagar",
            "city",
            0.7,
        ),
    ]
});

/// Popular nationwide cities for quick selection.
pub fn popular_cities() -> Vec<LocationSuggestion> {
    POPULAR_CITIES.clone()
}

/// Gujarat cities for local travel defaults.
pub fn regional_cities() -> Vec<LocationSuggestion> {
    REGIONAL_CITIES.clone()
}
