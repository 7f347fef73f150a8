//! Component-side access to the query cache

use std::fmt::Display;
use std::future::Future;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::prelude::*;
use tracing::trace;

use super::client::QueryClient;
use super::error::QueryError;
use super::key::QueryKey;

const FOCUS_LISTENER: &str = r#"
window.addEventListener("focus", () => dioxus.send(true));
"#;

/// Hook to access the shared query client
pub fn use_query_client() -> QueryClient {
    use_context::<QueryClient>()
}

/// A query observed by a component.
pub struct UseQuery<T: 'static> {
    resource: Resource<Result<Arc<T>, QueryError>>,
    placeholder: Option<Arc<T>>,
    client: QueryClient,
    key: QueryKey,
}

impl<T: 'static> Clone for UseQuery<T> {
    fn clone(&self) -> Self {
        Self {
            resource: self.resource,
            placeholder: self.placeholder.clone(),
            client: self.client.clone(),
            key: self.key.clone(),
        }
    }
}

impl<T: Send + Sync + 'static> UseQuery<T> {
    /// Latest data: the fetch result once it lands, otherwise whatever the
    /// cache held when the component mounted (possibly stale).
    pub fn data(&self) -> Option<Arc<T>> {
        match &*self.resource.read() {
            Some(Ok(data)) => Some(data.clone()),
            _ => self.placeholder.clone(),
        }
    }

    pub fn error(&self) -> Option<QueryError> {
        match &*self.resource.read() {
            Some(Err(e)) => Some(e.clone()),
            _ => None,
        }
    }

    pub fn is_fetching(&self) -> bool {
        !self.resource.finished()
    }

    pub fn key(&self) -> &QueryKey {
        &self.key
    }

    /// Mark the query stale and fetch it again.
    pub fn refetch(&mut self) {
        self.client.invalidate_queries(&self.key);
        self.resource.restart();
    }
}

/// Read a query through the shared cache.
///
/// Cached data shows up immediately; stale or missing data is fetched in
/// the background with the client's retry policy.
pub fn use_query<T, E, F, Fut>(key: impl Into<QueryKey>, fetcher: F) -> UseQuery<T>
where
    T: Send + Sync + 'static,
    E: Display + 'static,
    F: Fn() -> Fut + Clone + 'static,
    Fut: Future<Output = Result<T, E>> + 'static,
{
    let client = use_query_client();
    let key = use_hook(|| key.into());

    // Held for the component's lifetime so the entry is not evicted under it.
    use_hook({
        let client = client.clone();
        let key = key.clone();
        move || Rc::new(client.observe(&key))
    });

    let placeholder = use_hook({
        let client = client.clone();
        let key = key.clone();
        move || client.get_query_data::<T>(&key)
    });

    let resource = use_resource({
        let client = client.clone();
        let key = key.clone();
        move || {
            let client = client.clone();
            let key = key.clone();
            let fetcher = fetcher.clone();
            async move { client.fetch_query(&key, fetcher).await }
        }
    });

    use_refetch_on_focus(resource, client.default_options().refetch_on_window_focus);

    UseQuery {
        resource,
        placeholder,
        client,
        key,
    }
}

fn use_refetch_on_focus<T: 'static>(mut resource: Resource<T>, enabled: bool) {
    use_hook(move || {
        if !enabled {
            return;
        }
        spawn(async move {
            let mut focus = document::eval(FOCUS_LISTENER);
            while focus.recv::<bool>().await.is_ok() {
                trace!("Window focused, revalidating query");
                resource.restart();
            }
        });
    });
}
