//! Static default city lists.

use locsuggest::{popular_cities, regional_cities};

#[test]
fn popular_list_has_eight_fixed_entries() {
    let cities = popular_cities();
    assert_eq!(cities.len(), 8);
    assert_eq!(cities[0].display_name, "Mumbai, Maharashtra, India");
    assert_eq!(cities[0].place_id, "mumbai");
    assert_eq!(cities[0].lat, "19.0760");
    assert_eq!(cities[0].lon, "72.8777");
}

#[test]
fn regional_list_has_six_gujarat_entries() {
    let cities = regional_cities();
    assert_eq!(cities.len(), 6);
    for city in &cities {
        assert!(
            city.display_name.contains("Gujarat"),
            "{} is not a Gujarat entry",
            city.display_name
        );
    }
}

#[test]
fn lists_are_pure_across_calls() {
    assert_eq!(popular_cities(), popular_cities());
    assert_eq!(regional_cities(), regional_cities());
}

#[test]
fn list_entries_carry_usable_place_types() {
    // Goa is a state entry; everything else is a city.
    let popular = popular_cities();
    assert_eq!(
        popular
            .iter()
            .filter(|c| c.place_type == "city")
            .count(),
        7
    );
    assert_eq!(popular[7].place_type, "state");
    assert!(regional_cities().iter().all(|c| c.place_type == "city"));
}
