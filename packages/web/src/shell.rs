//! The always-present outer layout
//!
//! Services are built once in `main` and handed to every rendered tree as
//! root context. [`AppShell`] re-exposes them as narrow capabilities:
//!
//! ```text
//! QueryClientProvider
//! ├── ThemeProvider
//! │   └── AuthProvider
//! │       └── PageFrame { children }
//! ├── NotificationHost
//! └── QueryDevtools
//! ```

use std::sync::Arc;

use dioxus::prelude::*;
use tracing::debug;

use crate::auth::AuthProvider;
use crate::components::{DocumentHead, PageFrame};
use crate::config::AppConfig;
use crate::metadata::{site_metadata, SiteMetadata};
use crate::notifications::{use_toaster_provider, NotificationHost, ToasterConfig};
use crate::query::{QueryClient, QueryClientProvider, QueryDevtools, QueryOptions};
use crate::theme::{ThemeOptions, ThemeProvider};

/// Everything the shell needs, built at the composition root.
#[derive(Debug, Clone)]
pub struct ShellServices {
    pub config: Arc<AppConfig>,
    pub metadata: Arc<SiteMetadata>,
    pub query_client: QueryClient,
    pub toaster: Arc<ToasterConfig>,
    pub theme: ThemeOptions,
}

impl PartialEq for ShellServices {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.config, &other.config)
            && Arc::ptr_eq(&self.metadata, &other.metadata)
            && self.query_client.ptr_eq(&other.query_client)
    }
}

impl ShellServices {
    pub fn new(config: AppConfig) -> Self {
        let metadata = site_metadata(&config);
        debug!(base = %metadata.metadata_base, "Shell services built");
        Self {
            config: Arc::new(config),
            metadata: Arc::new(metadata),
            query_client: QueryClient::new(QueryOptions::default()),
            toaster: Arc::new(ToasterConfig::default()),
            theme: ThemeOptions::default(),
        }
    }

    /// Same configuration and metadata with an empty cache.
    ///
    /// The server renders each request in its own tree, so each one gets
    /// its own cache and cached user data never crosses requests.
    pub fn fork(&self) -> Self {
        Self {
            query_client: QueryClient::new(*self.query_client.default_options()),
            ..self.clone()
        }
    }
}

/// Hook to access the services injected at launch
pub fn use_shell_services() -> ShellServices {
    use_context::<ShellServices>()
}

/// Root layout wrapping every routed page. Takes only `children`.
#[component]
pub fn AppShell(children: Element) -> Element {
    let services = use_shell_services();
    use_toaster_provider((*services.toaster).clone());

    rsx! {
        DocumentHead {}
        QueryClientProvider {
            client: services.query_client.clone(),
            ThemeProvider {
                options: services.theme,
                AuthProvider {
                    PageFrame { {children} }
                }
            }
            NotificationHost {}
            QueryDevtools { initial_is_open: false }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fork_shares_config_but_not_cache() {
        let services = ShellServices::new(AppConfig::default());
        services.query_client.set_query_data("user".into(), 1u8);

        let forked = services.fork();
        assert!(Arc::ptr_eq(&services.config, &forked.config));
        assert!(Arc::ptr_eq(&services.metadata, &forked.metadata));
        assert!(!services.query_client.ptr_eq(&forked.query_client));
        assert!(forked.query_client.is_empty());
        assert_eq!(
            forked.query_client.default_options(),
            services.query_client.default_options()
        );
    }

    #[test]
    fn services_use_shell_policy() {
        let services = ShellServices::new(AppConfig::default());
        assert_eq!(*services.query_client.default_options(), QueryOptions::default());
        assert_eq!(services.theme, ThemeOptions::default());
        assert_eq!(services.metadata.metadata_base.as_str(), "http://localhost:3000/");
    }
}
