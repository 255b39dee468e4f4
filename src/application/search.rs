use crate::application::cities;
use crate::domain::error::SuggestError;
use crate::domain::model::LocationSuggestion;
use crate::domain::traits::SearchProvider;
use crate::infrastructure::config::SearchConfig;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::AbortHandle;

/// Queries shorter than this never touch the cache or the network. Guards
/// against firing a provider request on every 1–2 character keystroke.
pub const MIN_QUERY_CHARS: usize = 3;

// Place types worth showing in an autocomplete dropdown even when the
// provider scores them low.
const RELEVANT_PLACE_TYPES: [&str; 7] = [
    "city",
    "town",
    "village",
    "hamlet",
    "suburb",
    "neighbourhood",
    "house",
];

type ErrorHook = dyn Fn(&SuggestError) + Send + Sync;

struct CacheEntry {
    suggestions: Vec<LocationSuggestion>,
    cached_at: DateTime<Utc>,
}

struct PendingSearch {
    generation: u64,
    handle: AbortHandle,
}

struct Inner {
    provider: Arc<dyn SearchProvider>,
    options: SearchConfig,
    // Keyed by (lowercased query, country code). Entries are written once
    // and replaced only after TTL eviction, never mutated in place.
    cache: DashMap<String, CacheEntry>,
    // At most one pending debounce task per key; a newer registration
    // aborts and replaces the older one.
    pending: DashMap<String, PendingSearch>,
    generation: AtomicU64,
    on_provider_error: Option<Box<ErrorHook>>,
}

/// Debounced, cached client for a location-search provider.
///
/// Owns its cache and debounce registry; separate instances share nothing.
/// Cheap to clone (all state behind one `Arc`), and the debounce machinery
/// requires a tokio runtime.
///
/// Provider failures never reach the caller: `search_locations` answers an
/// empty list whether the provider is down or genuinely found nothing, and
/// failed lookups are not cached so the next call retries.
#[derive(Clone)]
pub struct LocationSearchClient {
    inner: Arc<Inner>,
}

pub struct LocationSearchClientBuilder {
    provider: Arc<dyn SearchProvider>,
    options: SearchConfig,
    on_provider_error: Option<Box<ErrorHook>>,
}

impl LocationSearchClientBuilder {
    pub fn new(provider: Arc<dyn SearchProvider>) -> Self {
        Self {
            provider,
            options: SearchConfig::default(),
            on_provider_error: None,
        }
    }

    pub fn options(mut self, options: SearchConfig) -> Self {
        self.options = options;
        self
    }

    /// Observe absorbed provider errors (outage monitoring) without changing
    /// the caller-facing contract; a `tracing` warning fires regardless.
    pub fn on_provider_error(
        mut self,
        hook: impl Fn(&SuggestError) + Send + Sync + 'static,
    ) -> Self {
        self.on_provider_error = Some(Box::new(hook));
        self
    }

    pub fn build(self) -> LocationSearchClient {
        LocationSearchClient {
            inner: Arc::new(Inner {
                provider: self.provider,
                options: self.options,
                cache: DashMap::new(),
                pending: DashMap::new(),
                generation: AtomicU64::new(0),
                on_provider_error: self.on_provider_error,
            }),
        }
    }
}

impl LocationSearchClient {
    pub fn new(provider: Arc<dyn SearchProvider>, options: SearchConfig) -> Self {
        LocationSearchClientBuilder::new(provider)
            .options(options)
            .build()
    }

    /// Look up suggestions for a partial query, cache-first.
    ///
    /// Cached results are served for their full TTL without a freshness
    /// check at read time; eviction alone bounds their age.
    pub async fn search_locations(
        &self,
        query: &str,
        country_code: &str,
    ) -> Vec<LocationSuggestion> {
        if query.chars().count() < MIN_QUERY_CHARS {
            return Vec::new();
        }

        let key = cache_key(query, country_code);
        if let Some(entry) = self.inner.cache.get(&key) {
            tracing::debug!(
                key = %key,
                age_secs = (Utc::now() - entry.cached_at).num_seconds(),
                "suggestion cache hit"
            );
            return entry.suggestions.clone();
        }

        match self.inner.provider.search(query, country_code).await {
            Ok(raw) => {
                let results = filter_and_rank(raw, &self.inner.options);
                self.inner.cache.insert(
                    key.clone(),
                    CacheEntry {
                        suggestions: results.clone(),
                        cached_at: Utc::now(),
                    },
                );
                self.schedule_eviction(key);
                results
            }
            Err(e) => {
                tracing::warn!(error = %e, query = %query, "location search provider failed");
                if let Some(hook) = &self.inner.on_provider_error {
                    hook(&e);
                }
                Vec::new()
            }
        }
    }

    /// Register a debounced search using the configured delay.
    pub fn debounced_search<F>(&self, query: &str, country_code: &str, callback: F)
    where
        F: FnOnce(Vec<LocationSuggestion>) + Send + 'static,
    {
        let delay = Duration::from_millis(self.inner.options.debounce_ms);
        self.debounced_search_after(query, country_code, delay, callback);
    }

    /// Register a debounced search with an explicit settle delay.
    ///
    /// Coalesces rapid calls for the same (query, country) key: a pending
    /// registration for that key is aborted and replaced, and only the last
    /// one fires. Keys debounce independently of each other.
    ///
    /// Supersession cancels pending timers only. A request already on the
    /// wire runs to completion and still delivers to its own callback, so a
    /// caller typing fast may see an older result arrive after a newer one;
    /// callers discard deliveries whose query no longer matches the input.
    pub fn debounced_search_after<F>(
        &self,
        query: &str,
        country_code: &str,
        delay: Duration,
        callback: F,
    ) where
        F: FnOnce(Vec<LocationSuggestion>) + Send + 'static,
    {
        let key = cache_key(query, country_code);
        let generation = self.inner.generation.fetch_add(1, Ordering::Relaxed);

        // Build the sleep here so the settle delay counts from registration,
        // not from whenever the scheduler first polls the task.
        let timer = tokio::time::sleep(delay);

        let client = self.clone();
        let query = query.to_string();
        let country = country_code.to_string();
        let task_key = key.clone();

        let handle = tokio::spawn(async move {
            timer.await;
            // Deregister before running, but only our own registration: a
            // newer one may have replaced us between wake-up and here.
            client
                .inner
                .pending
                .remove_if(&task_key, |_, p| p.generation == generation);
            let results = client.search_locations(&query, &country).await;
            callback(results);
        });

        // A zero-ish delay on a multi-thread runtime can fire the task
        // before this insert, parking a finished handle here until the next
        // registration for the key replaces it. Aborting a finished task is
        // a no-op, so the stale entry is harmless.
        if let Some(previous) = self.inner.pending.insert(
            key,
            PendingSearch {
                generation,
                handle: handle.abort_handle(),
            },
        ) {
            previous.handle.abort();
        }
    }

    /// Fixed nationwide city list for the empty-input dropdown state.
    pub fn popular_cities(&self) -> Vec<LocationSuggestion> {
        cities::popular_cities()
    }

    /// Fixed regional city list for short local trips.
    pub fn regional_cities(&self) -> Vec<LocationSuggestion> {
        cities::regional_cities()
    }

    fn schedule_eviction(&self, key: String) {
        let client = self.clone();
        // The deadline must anchor at the cache write, so build the sleep
        // before handing it to the task; a late first poll would otherwise
        // stretch the entry's lifetime past the TTL.
        let timer = tokio::time::sleep(Duration::from_secs(self.inner.options.cache_ttl_secs));
        tokio::spawn(async move {
            timer.await;
            client.inner.cache.remove(&key);
        });
    }
}

fn cache_key(query: &str, country_code: &str) -> String {
    format!("{}_{}", query.to_lowercase(), country_code)
}

/// Drop low-relevance rows, rank by importance, cap the list.
///
/// A row survives if its place type is autocomplete-worthy or its importance
/// clears the threshold; administrative/boundary noise fails both.
fn filter_and_rank(raw: Vec<LocationSuggestion>, options: &SearchConfig) -> Vec<LocationSuggestion> {
    let mut kept: Vec<LocationSuggestion> = raw
        .into_iter()
        .filter(|s| {
            !s.display_name.is_empty()
                && (RELEVANT_PLACE_TYPES.contains(&s.place_type.as_str())
                    || s.importance > options.importance_threshold)
        })
        .collect();
    kept.sort_by(|a, b| b.importance.total_cmp(&a.importance));
    kept.truncate(options.max_results);
    kept
}
