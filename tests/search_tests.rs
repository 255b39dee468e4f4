//! Cache, filtering and failure-absorption behavior of LocationSearchClient.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use locsuggest::{
    LocationSearchClient, LocationSuggestion, SearchConfig, SearchProvider, SuggestError,
};

/// Scripted provider: counts calls, records arguments, optionally fails.
struct StubProvider {
    calls: AtomicUsize,
    fail: AtomicBool,
    results: Mutex<Vec<LocationSuggestion>>,
}

impl StubProvider {
    fn returning(results: Vec<LocationSuggestion>) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            fail: AtomicBool::new(false),
            results: Mutex::new(results),
        })
    }

    fn failing() -> Arc<Self> {
        let stub = Self::returning(Vec::new());
        stub.fail.store(true, Ordering::SeqCst);
        stub
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SearchProvider for StubProvider {
    async fn search(
        &self,
        _query: &str,
        _country_code: &str,
    ) -> Result<Vec<LocationSuggestion>, SuggestError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(SuggestError::Provider("HTTP status 500".to_string()));
        }
        Ok(self.results.lock().unwrap().clone())
    }
}

fn city(name: &str, place_type: &str, importance: f64) -> LocationSuggestion {
    LocationSuggestion::new(name, "23.0", "72.5", "42", place_type, importance)
}

fn client_with(stub: &Arc<StubProvider>) -> LocationSearchClient {
    LocationSearchClient::new(stub.clone(), SearchConfig::default())
}

#[tokio::test]
async fn short_queries_short_circuit_without_provider_call() {
    let stub = StubProvider::returning(vec![city("Ahmedabad, Gujarat, India", "city", 0.9)]);
    let client = client_with(&stub);

    assert!(client.search_locations("", "in").await.is_empty());
    assert!(client.search_locations("a", "in").await.is_empty());
    assert!(client.search_locations("ah", "in").await.is_empty());
    // Two characters even when multi-byte.
    assert!(client.search_locations("अह", "in").await.is_empty());

    assert_eq!(stub.calls(), 0);
}

#[tokio::test]
async fn second_identical_call_is_served_from_cache() {
    let stub = StubProvider::returning(vec![city("Ahmedabad, Gujarat, India", "city", 0.9)]);
    let client = client_with(&stub);

    let first = client.search_locations("ahmedabad", "in").await;
    let second = client.search_locations("ahmedabad", "in").await;

    assert_eq!(first, second);
    assert_eq!(stub.calls(), 1);
}

#[tokio::test]
async fn cache_key_is_case_insensitive_on_query() {
    let stub = StubProvider::returning(vec![city("Ahmedabad, Gujarat, India", "city", 0.9)]);
    let client = client_with(&stub);

    client.search_locations("Ahmedabad", "in").await;
    client.search_locations("AHMEDABAD", "in").await;

    assert_eq!(stub.calls(), 1);
}

#[tokio::test]
async fn different_country_codes_are_distinct_cache_keys() {
    let stub = StubProvider::returning(vec![city("Ahmedabad, Gujarat, India", "city", 0.9)]);
    let client = client_with(&stub);

    client.search_locations("ahmedabad", "in").await;
    client.search_locations("ahmedabad", "us").await;

    assert_eq!(stub.calls(), 2);
}

#[tokio::test(start_paused = true)]
async fn cache_entry_survives_within_ttl_and_expires_after() {
    let stub = StubProvider::returning(vec![city("Ahmedabad, Gujarat, India", "city", 0.9)]);
    let client = client_with(&stub);

    client.search_locations("ahmedabad", "in").await;
    assert_eq!(stub.calls(), 1);

    // Still inside the 5-minute window: cache answers.
    tokio::time::advance(Duration::from_secs(200)).await;
    client.search_locations("ahmedabad", "in").await;
    assert_eq!(stub.calls(), 1);

    // Past the window: the eviction task has removed the entry.
    tokio::time::advance(Duration::from_secs(101)).await;
    tokio::task::yield_now().await;
    client.search_locations("ahmedabad", "in").await;
    assert_eq!(stub.calls(), 2);
}

#[tokio::test(start_paused = true)]
async fn ttl_is_measured_from_the_cache_write() {
    let stub = StubProvider::returning(vec![city("Ahmedabad, Gujarat, India", "city", 0.9)]);
    let client = client_with(&stub);

    client.search_locations("ahmedabad", "in").await;
    assert_eq!(stub.calls(), 1);

    // Jump straight past the TTL without polling the eviction task in
    // between. The deadline is fixed at insert time, so a late first poll
    // must not stretch the entry's lifetime.
    tokio::time::advance(Duration::from_secs(301)).await;
    tokio::task::yield_now().await;
    tokio::task::yield_now().await;

    client.search_locations("ahmedabad", "in").await;
    assert_eq!(stub.calls(), 2);
}

#[tokio::test]
async fn results_obey_filter_sort_and_truncation_laws() {
    let raw = vec![
        city("Low Town", "town", 0.05),
        city("Boundary A", "administrative", 0.8),
        city("Boundary B", "administrative", 0.2),
        city("Big City", "city", 0.95),
        city("Hamlet", "hamlet", 0.1),
        city("Suburb", "suburb", 0.4),
        city("House", "house", 0.01),
        city("Neighbourhood", "neighbourhood", 0.15),
        city("Village", "village", 0.12),
        city("State", "state", 0.5),
        city("County", "county", 0.28),
    ];
    let stub = StubProvider::returning(raw);
    let client = client_with(&stub);

    let results = client.search_locations("anything", "in").await;

    // "Boundary B" (0.2) and "County" (0.28) fail both conditions.
    assert_eq!(results.len(), 8);
    let allowlist = [
        "city",
        "town",
        "village",
        "hamlet",
        "suburb",
        "neighbourhood",
        "house",
    ];
    for s in &results {
        assert!(
            allowlist.contains(&s.place_type.as_str()) || s.importance > 0.3,
            "{} violates the filtering law",
            s.display_name
        );
    }
    for pair in results.windows(2) {
        assert!(pair[0].importance >= pair[1].importance);
    }
}

#[tokio::test]
async fn truncates_to_eight_results() {
    let raw: Vec<LocationSuggestion> = (0..10)
        .map(|i| city(&format!("City {}", i), "city", 0.5))
        .collect();
    let stub = StubProvider::returning(raw);
    let client = client_with(&stub);

    let results = client.search_locations("anything", "in").await;
    assert_eq!(results.len(), 8);
}

#[tokio::test]
async fn spec_example_keeps_city_and_drops_county() {
    let stub = StubProvider::returning(vec![
        city("Ahmedabad, Gujarat, India", "city", 0.9),
        city("Ahmedabad District", "county", 0.25),
    ]);
    let client = client_with(&stub);

    let results = client.search_locations("Ahmed", "in").await;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].display_name, "Ahmedabad, Gujarat, India");
}

#[tokio::test]
async fn provider_failure_yields_empty_and_is_not_cached() {
    let stub = StubProvider::failing();
    let client = client_with(&stub);

    assert!(client.search_locations("ahmedabad", "in").await.is_empty());
    assert_eq!(stub.calls(), 1);

    // Nothing was cached, so the provider recovers on the next call.
    stub.fail.store(false, Ordering::SeqCst);
    *stub.results.lock().unwrap() = vec![city("Ahmedabad, Gujarat, India", "city", 0.9)];

    let results = client.search_locations("ahmedabad", "in").await;
    assert_eq!(results.len(), 1);
    assert_eq!(stub.calls(), 2);
}

#[tokio::test]
async fn provider_failure_invokes_diagnostic_hook() {
    let stub = StubProvider::failing();
    let seen = Arc::new(AtomicUsize::new(0));
    let seen_in_hook = seen.clone();
    let client = locsuggest::LocationSearchClientBuilder::new(stub.clone())
        .options(SearchConfig::default())
        .on_provider_error(move |err| {
            assert!(matches!(err, SuggestError::Provider(_)));
            seen_in_hook.fetch_add(1, Ordering::SeqCst);
        })
        .build();

    assert!(client.search_locations("ahmedabad", "in").await.is_empty());
    assert_eq!(seen.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn empty_provider_result_is_cached_like_any_other() {
    let stub = StubProvider::returning(Vec::new());
    let client = client_with(&stub);

    assert!(client.search_locations("nowhere", "in").await.is_empty());
    assert!(client.search_locations("nowhere", "in").await.is_empty());
    // A legitimate zero-result search caches; only failures skip the cache.
    assert_eq!(stub.calls(), 1);
}

#[tokio::test]
async fn separate_clients_do_not_share_cache() {
    let stub = StubProvider::returning(vec![city("Ahmedabad, Gujarat, India", "city", 0.9)]);
    let a = client_with(&stub);
    let b = client_with(&stub);

    a.search_locations("ahmedabad", "in").await;
    b.search_locations("ahmedabad", "in").await;

    assert_eq!(stub.calls(), 2);
}
