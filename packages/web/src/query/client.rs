//! Stale-while-revalidate query cache

use std::any::Any;
use std::fmt::{self, Display};
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tokio::sync::Notify;
use tracing::{debug, trace};

use super::clock::{elapsed, Clock, SystemClock};
use super::error::QueryError;
use super::key::QueryKey;
use super::policy::QueryOptions;
use super::retry::run_with_retry;

type Payload = Arc<dyn Any + Send + Sync>;

struct CacheEntry {
    data: Payload,
    updated_at: DateTime<Utc>,
    last_accessed: DateTime<Utc>,
    invalidated: bool,
}

/// Freshness of a cached entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    Fresh,
    Stale,
}

/// What the cache currently holds for a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryState<T> {
    Fresh(Arc<T>),
    Stale(Arc<T>),
    Missing,
}

impl<T> QueryState<T> {
    pub fn data(&self) -> Option<&Arc<T>> {
        match self {
            QueryState::Fresh(data) | QueryState::Stale(data) => Some(data),
            QueryState::Missing => None,
        }
    }
}

/// Read-only view of one cache entry, for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryEntrySnapshot {
    pub key: QueryKey,
    pub freshness: Freshness,
    pub updated_at: DateTime<Utc>,
    pub last_accessed: DateTime<Utc>,
}

/// One fetch in progress for a key. Later callers wait on it instead of
/// fetching again.
#[derive(Default)]
struct InflightFetch {
    outcome: Mutex<Option<Result<Payload, QueryError>>>,
    settled: AtomicBool,
    notify: Notify,
}

impl InflightFetch {
    /// Wait for the fetch to settle. `None` means it was dropped before
    /// producing a result.
    async fn wait(&self) -> Option<Result<Payload, QueryError>> {
        // Register before checking so a settle in between is not missed.
        let notified = self.notify.notified();
        if !self.settled.load(Ordering::Acquire) {
            notified.await;
        }
        self.outcome.lock().ok().and_then(|outcome| outcome.clone())
    }
}

/// Held by the caller that runs the fetch. Dropping it releases the key and
/// wakes every waiter, whether or not an outcome was recorded.
struct InflightGuard<'a> {
    inflight: &'a DashMap<QueryKey, Arc<InflightFetch>>,
    key: QueryKey,
    fetch: Arc<InflightFetch>,
}

impl InflightGuard<'_> {
    fn settle(&self, outcome: Result<Payload, QueryError>) {
        if let Ok(mut slot) = self.fetch.outcome.lock() {
            *slot = Some(outcome);
        }
    }
}

impl Drop for InflightGuard<'_> {
    fn drop(&mut self) {
        self.inflight
            .remove_if(&self.key, |_, fetch| Arc::ptr_eq(fetch, &self.fetch));
        self.fetch.settled.store(true, Ordering::Release);
        self.fetch.notify.notify_waiters();
    }
}

enum Flight<'a> {
    Lead(InflightGuard<'a>),
    Join(Arc<InflightFetch>),
}

struct QueryClientInner {
    options: QueryOptions,
    entries: DashMap<QueryKey, CacheEntry>,
    inflight: DashMap<QueryKey, Arc<InflightFetch>>,
    observers: DashMap<QueryKey, usize>,
    clock: Arc<dyn Clock>,
}

/// Shared query cache.
///
/// Cloning is cheap and every clone refers to the same cache. The shell
/// builds exactly one client at startup and hands it down through context.
#[derive(Clone)]
pub struct QueryClient {
    inner: Arc<QueryClientInner>,
}

impl fmt::Debug for QueryClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryClient")
            .field("options", &self.inner.options)
            .field("entries", &self.inner.entries.len())
            .finish()
    }
}

/// Two handles are equal when they share the same cache.
impl PartialEq for QueryClient {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Default for QueryClient {
    fn default() -> Self {
        Self::new(QueryOptions::default())
    }
}

impl QueryClient {
    pub fn new(options: QueryOptions) -> Self {
        Self::with_clock(options, Arc::new(SystemClock))
    }

    pub fn with_clock(options: QueryOptions, clock: Arc<dyn Clock>) -> Self {
        debug!(?options, "Creating query client");
        Self {
            inner: Arc::new(QueryClientInner {
                options,
                entries: DashMap::new(),
                inflight: DashMap::new(),
                observers: DashMap::new(),
                clock,
            }),
        }
    }

    /// Options every query runs with.
    pub fn default_options(&self) -> &QueryOptions {
        &self.inner.options
    }

    /// Whether both handles point at the same cache.
    pub fn ptr_eq(&self, other: &QueryClient) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    pub fn len(&self) -> usize {
        self.inner.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.entries.is_empty()
    }

    fn now(&self) -> DateTime<Utc> {
        self.inner.clock.now()
    }

    fn freshness(&self, entry: &CacheEntry, now: DateTime<Utc>) -> Freshness {
        if entry.invalidated || elapsed(entry.updated_at, now) >= self.inner.options.stale_time {
            Freshness::Stale
        } else {
            Freshness::Fresh
        }
    }

    /// Look up a key, marking it as recently used.
    pub fn query_state<T>(&self, key: &QueryKey) -> Result<QueryState<T>, QueryError>
    where
        T: Send + Sync + 'static,
    {
        self.collect_garbage();
        let now = self.now();

        let Some(mut entry) = self.inner.entries.get_mut(key) else {
            return Ok(QueryState::Missing);
        };
        entry.last_accessed = now;

        let data = downcast(key, entry.data.clone())?;

        Ok(match self.freshness(&entry, now) {
            Freshness::Fresh => QueryState::Fresh(data),
            Freshness::Stale => QueryState::Stale(data),
        })
    }

    /// Cached data for a key regardless of freshness.
    pub fn get_query_data<T>(&self, key: &QueryKey) -> Option<Arc<T>>
    where
        T: Send + Sync + 'static,
    {
        self.query_state::<T>(key)
            .ok()
            .and_then(|state| state.data().cloned())
    }

    /// Store data for a key, resetting its freshness.
    pub fn set_query_data<T>(&self, key: QueryKey, data: T) -> Arc<T>
    where
        T: Send + Sync + 'static,
    {
        let data = Arc::new(data);
        self.store(key, data.clone());
        data
    }

    fn store(&self, key: QueryKey, data: Payload) {
        let now = self.now();
        trace!(%key, "Storing query data");
        self.inner.entries.insert(
            key,
            CacheEntry {
                data,
                updated_at: now,
                last_accessed: now,
                invalidated: false,
            },
        );
    }

    /// Get-or-fetch. Fresh data is returned as is; stale or missing data is
    /// fetched with the client's retry policy and stored on success.
    ///
    /// On failure any previously cached value is kept.
    pub async fn fetch_query<T, E, F, Fut>(&self, key: &QueryKey, fetcher: F) -> Result<Arc<T>, QueryError>
    where
        T: Send + Sync + 'static,
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Display,
    {
        if let QueryState::Fresh(data) = self.query_state::<T>(key)? {
            trace!(%key, "Query cache hit");
            return Ok(data);
        }

        self.refetch_query(key, fetcher).await
    }

    /// Fetch unconditionally and store the result.
    ///
    /// Only one fetch runs per key at a time. A caller that arrives while one
    /// is in flight waits for it and shares its outcome.
    pub async fn refetch_query<T, E, F, Fut>(&self, key: &QueryKey, fetcher: F) -> Result<Arc<T>, QueryError>
    where
        T: Send + Sync + 'static,
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Display,
    {
        loop {
            let fetch = match self.join_or_lead(key) {
                Flight::Lead(guard) => return self.lead(guard, fetcher).await,
                Flight::Join(fetch) => fetch,
            };

            trace!(%key, "Joining in-flight query");
            match fetch.wait().await {
                Some(outcome) => return outcome.and_then(|data| downcast(key, data)),
                // The fetching caller went away; take over.
                None => debug!(%key, "In-flight query dropped, fetching again"),
            }
        }
    }

    fn join_or_lead(&self, key: &QueryKey) -> Flight<'_> {
        match self.inner.inflight.entry(key.clone()) {
            Entry::Occupied(entry) => Flight::Join(entry.get().clone()),
            Entry::Vacant(entry) => {
                let fetch = Arc::new(InflightFetch::default());
                entry.insert(fetch.clone());
                Flight::Lead(InflightGuard {
                    inflight: &self.inner.inflight,
                    key: key.clone(),
                    fetch,
                })
            }
        }
    }

    async fn lead<T, E, F, Fut>(&self, guard: InflightGuard<'_>, fetcher: F) -> Result<Arc<T>, QueryError>
    where
        T: Send + Sync + 'static,
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Display,
    {
        let key = &guard.key;
        debug!(%key, "Fetching query");
        let result = run_with_retry(key, &self.inner.options, fetcher)
            .await
            .map(|value| self.set_query_data(key.clone(), value));

        guard.settle(match &result {
            Ok(data) => Ok(data.clone() as Payload),
            Err(e) => Err(e.clone()),
        });
        result
    }

    /// Register interest in `key`. The entry is never evicted while an
    /// observer is alive; the retention window restarts when the last one
    /// drops.
    pub fn observe(&self, key: &QueryKey) -> QueryObserver {
        *self.inner.observers.entry(key.clone()).or_insert(0) += 1;
        QueryObserver {
            client: self.clone(),
            key: key.clone(),
        }
    }

    pub fn observer_count(&self, key: &QueryKey) -> usize {
        self.inner.observers.get(key).map(|count| *count).unwrap_or(0)
    }

    fn release_observer(&self, key: &QueryKey) {
        if let Entry::Occupied(mut count) = self.inner.observers.entry(key.clone()) {
            let remaining = count.get().saturating_sub(1);
            if remaining > 0 {
                *count.get_mut() = remaining;
                return;
            }
            count.remove();
        }

        let now = self.now();
        if let Some(mut entry) = self.inner.entries.get_mut(key) {
            entry.last_accessed = now;
        }
    }

    /// Mark every entry under `prefix` stale. Returns how many were marked.
    pub fn invalidate_queries(&self, prefix: &QueryKey) -> usize {
        let mut count = 0;
        for mut entry in self.inner.entries.iter_mut() {
            if entry.key().starts_with(prefix) {
                entry.invalidated = true;
                count += 1;
            }
        }
        debug!(%prefix, count, "Invalidated queries");
        count
    }

    /// Drop every entry under `prefix`. Returns how many were dropped.
    pub fn remove_queries(&self, prefix: &QueryKey) -> usize {
        let before = self.inner.entries.len();
        self.inner.entries.retain(|key, _| !key.starts_with(prefix));
        let removed = before.saturating_sub(self.inner.entries.len());
        debug!(%prefix, removed, "Removed queries");
        removed
    }

    /// Evict unobserved entries unused for longer than the retention window.
    pub fn collect_garbage(&self) -> usize {
        let now = self.now();
        let cache_time = self.inner.options.cache_time;
        let observers = &self.inner.observers;
        let before = self.inner.entries.len();
        self.inner.entries.retain(|key, entry| {
            observers.contains_key(key) || elapsed(entry.last_accessed, now) < cache_time
        });
        let evicted = before.saturating_sub(self.inner.entries.len());
        if evicted > 0 {
            debug!(evicted, "Evicted unused queries");
        }
        evicted
    }

    /// Every entry, sorted by key. Does not touch access times.
    pub fn snapshot(&self) -> Vec<QueryEntrySnapshot> {
        let now = self.now();
        let mut entries: Vec<QueryEntrySnapshot> = self
            .inner
            .entries
            .iter()
            .map(|entry| QueryEntrySnapshot {
                key: entry.key().clone(),
                freshness: self.freshness(entry.value(), now),
                updated_at: entry.updated_at,
                last_accessed: entry.last_accessed,
            })
            .collect();
        entries.sort_by(|a, b| a.key.cmp(&b.key));
        entries
    }
}

/// Interest in one key, held by a mounted component.
pub struct QueryObserver {
    client: QueryClient,
    key: QueryKey,
}

impl Drop for QueryObserver {
    fn drop(&mut self) {
        self.client.release_observer(&self.key);
    }
}

fn downcast<T>(key: &QueryKey, data: Payload) -> Result<Arc<T>, QueryError>
where
    T: Send + Sync + 'static,
{
    data.downcast::<T>()
        .map_err(|_| QueryError::TypeMismatch { key: key.clone() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::clock::ManualClock;
    use crate::query::policy::RetryDelay;
    use crate::timer::sleep;
    use std::cell::Cell;
    use std::time::Duration;

    fn client() -> (QueryClient, ManualClock) {
        let clock = ManualClock::default();
        let options = QueryOptions {
            retry_delay: RetryDelay::Fixed(Duration::ZERO),
            ..QueryOptions::default()
        };
        (QueryClient::with_clock(options, Arc::new(clock.clone())), clock)
    }

    #[tokio::test]
    async fn fresh_data_is_served_from_cache() {
        let (client, clock) = client();
        let key = QueryKey::from("skills");
        let calls = Cell::new(0);
        let fetch = || {
            calls.set(calls.get() + 1);
            async { Ok::<_, String>(vec!["rust".to_string()]) }
        };

        client.fetch_query(&key, fetch).await.unwrap();
        clock.advance(Duration::from_secs(4 * 60));
        let data = client.fetch_query(&key, fetch).await.unwrap();

        assert_eq!(calls.get(), 1);
        assert_eq!(*data, vec!["rust".to_string()]);
    }

    #[tokio::test]
    async fn stale_data_is_refetched() {
        let (client, clock) = client();
        let key = QueryKey::from("skills");
        let calls = Cell::new(0);
        let fetch = || {
            calls.set(calls.get() + 1);
            let n = calls.get();
            async move { Ok::<_, String>(n) }
        };

        client.fetch_query(&key, fetch).await.unwrap();
        clock.advance(Duration::from_secs(5 * 60));

        assert!(matches!(client.query_state::<i32>(&key), Ok(QueryState::Stale(_))));
        let data = client.fetch_query(&key, fetch).await.unwrap();
        assert_eq!(*data, 2);
        assert!(matches!(client.query_state::<i32>(&key), Ok(QueryState::Fresh(_))));
    }

    #[tokio::test]
    async fn failed_refetch_keeps_previous_value() {
        let (client, clock) = client();
        let key = QueryKey::from("profile");
        client.set_query_data(key.clone(), "cached".to_string());
        clock.advance(Duration::from_secs(6 * 60));

        let result = client
            .fetch_query::<String, _, _, _>(&key, || async { Err::<String, _>("offline") })
            .await;

        assert!(matches!(result, Err(QueryError::Fetch { attempts: 3, .. })));
        assert_eq!(
            client.get_query_data::<String>(&key).as_deref(),
            Some(&"cached".to_string())
        );
    }

    #[tokio::test(start_paused = true)]
    async fn concurrent_fetches_for_one_key_share_a_request() {
        let (client, _clock) = client();
        let key = QueryKey::from(["api", "health"]);
        let calls = Cell::new(0);
        let fetch = || {
            calls.set(calls.get() + 1);
            async {
                sleep(Duration::from_millis(50)).await;
                Ok::<_, String>("up".to_string())
            }
        };

        let (a, b) = tokio::join!(client.fetch_query(&key, fetch), client.fetch_query(&key, fetch));

        assert_eq!(calls.get(), 1);
        assert_eq!(a.unwrap(), b.unwrap());
        assert!(client.inner.inflight.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn waiting_callers_share_a_failure() {
        let (client, _clock) = client();
        let key = QueryKey::from("profile");
        let calls = Cell::new(0);
        let fetch = || {
            calls.set(calls.get() + 1);
            async {
                sleep(Duration::from_millis(10)).await;
                Err::<u8, _>("offline")
            }
        };

        let (a, b) = tokio::join!(client.fetch_query(&key, fetch), client.fetch_query(&key, fetch));

        assert_eq!(calls.get(), 3);
        assert!(matches!(b, Err(QueryError::Fetch { attempts: 3, .. })));
        assert_eq!(a, b);
    }

    #[tokio::test(start_paused = true)]
    async fn abandoned_fetch_releases_the_key() {
        let (client, _clock) = client();
        let key = QueryKey::from("slow");
        let calls = Cell::new(0);
        let slow = || {
            calls.set(calls.get() + 1);
            async {
                sleep(Duration::from_secs(60)).await;
                Ok::<_, String>(1u8)
            }
        };

        let abandoned = tokio::time::timeout(Duration::from_secs(1), client.fetch_query(&key, slow)).await;
        assert!(abandoned.is_err());

        let data = client
            .fetch_query(&key, || async { Ok::<_, String>(2u8) })
            .await
            .unwrap();
        assert_eq!(*data, 2);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn unused_entries_are_evicted_after_retention_window() {
        let (client, clock) = client();
        client.set_query_data(QueryKey::from("a"), 1u8);
        client.set_query_data(QueryKey::from("b"), 2u8);

        clock.advance(Duration::from_secs(9 * 60));
        assert!(client.get_query_data::<u8>(&QueryKey::from("a")).is_some());

        clock.advance(Duration::from_secs(2 * 60));
        assert_eq!(client.collect_garbage(), 1);
        assert!(client.get_query_data::<u8>(&QueryKey::from("a")).is_some());
        assert!(client.get_query_data::<u8>(&QueryKey::from("b")).is_none());
    }

    #[test]
    fn observed_entries_outlive_the_retention_window() {
        let (client, clock) = client();
        let key = QueryKey::from("dashboard");
        client.set_query_data(key.clone(), 1u8);

        let first = client.observe(&key);
        let second = client.observe(&key);
        assert_eq!(client.observer_count(&key), 2);

        clock.advance(Duration::from_secs(11 * 60));
        assert_eq!(client.collect_garbage(), 0);

        drop(first);
        assert_eq!(client.collect_garbage(), 0);
        drop(second);
        assert_eq!(client.observer_count(&key), 0);

        clock.advance(Duration::from_secs(9 * 60));
        assert_eq!(client.collect_garbage(), 0);
        clock.advance(Duration::from_secs(2 * 60));
        assert_eq!(client.collect_garbage(), 1);
    }

    #[test]
    fn invalidation_marks_prefix_stale() {
        let (client, _clock) = client();
        client.set_query_data(QueryKey::from(["resumes", "1"]), 1u32);
        client.set_query_data(QueryKey::from(["resumes", "2"]), 2u32);
        client.set_query_data(QueryKey::from("skills"), 3u32);

        assert_eq!(client.invalidate_queries(&QueryKey::from("resumes")), 2);
        assert!(matches!(
            client.query_state::<u32>(&QueryKey::from(["resumes", "1"])),
            Ok(QueryState::Stale(_))
        ));
        assert!(matches!(
            client.query_state::<u32>(&QueryKey::from("skills")),
            Ok(QueryState::Fresh(_))
        ));
    }

    #[test]
    fn remove_drops_matching_entries() {
        let (client, _clock) = client();
        client.set_query_data(QueryKey::from(["resumes", "1"]), 1u32);
        client.set_query_data(QueryKey::from("skills"), 3u32);

        assert_eq!(client.remove_queries(&QueryKey::from("resumes")), 1);
        assert_eq!(client.len(), 1);
    }

    #[test]
    fn wrong_type_is_reported() {
        let (client, _clock) = client();
        let key = QueryKey::from("count");
        client.set_query_data(key.clone(), 1u32);

        assert_eq!(
            client.query_state::<String>(&key),
            Err(QueryError::TypeMismatch { key })
        );
    }

    #[test]
    fn clones_share_one_cache() {
        let (client, _clock) = client();
        let other = client.clone();
        other.set_query_data(QueryKey::from("shared"), 7i64);

        assert!(client.ptr_eq(&other));
        assert_eq!(client, other);
        assert_ne!(client, QueryClient::default());
        assert_eq!(client.get_query_data::<i64>(&QueryKey::from("shared")).as_deref(), Some(&7));
    }

    #[test]
    fn snapshot_reports_freshness_without_touching_entries() {
        let (client, clock) = client();
        client.set_query_data(QueryKey::from("b"), 1u8);
        clock.advance(Duration::from_secs(6 * 60));
        client.set_query_data(QueryKey::from("a"), 2u8);

        let snapshot = client.snapshot();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].key, QueryKey::from("a"));
        assert_eq!(snapshot[0].freshness, Freshness::Fresh);
        assert_eq!(snapshot[1].freshness, Freshness::Stale);
        assert!(snapshot[1].last_accessed < snapshot[0].last_accessed);
    }
}
