//! Authentication context provider

use dioxus::prelude::*;
use tracing::{debug, warn};

use super::server_fns::{get_current_user, login, logout};
use super::types::{AuthUser, Role};

/// Authentication context that provides user state to the entire app
#[derive(Clone, Copy, PartialEq)]
pub struct AuthContext {
    /// Current authenticated user (if any)
    pub user: Signal<Option<AuthUser>>,
    /// Whether auth state is still loading
    pub loading: Signal<bool>,
}

impl AuthContext {
    pub fn is_authenticated(&self) -> bool {
        self.user.read().is_some()
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.user
            .read()
            .as_ref()
            .is_some_and(|user| user.has_role(role))
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(Role::Admin)
    }

    /// Refresh the auth state from the server
    pub async fn refresh(&self) {
        let (mut user, mut loading) = (self.user, self.loading);
        match get_current_user().await {
            Ok(current) => user.set(current),
            Err(e) => {
                debug!(error = %e, "No session user");
                user.set(None);
            }
        }
        loading.set(false);
    }

    pub async fn login(
        &self,
        username: String,
        password: String,
        remember_me: bool,
    ) -> Result<AuthUser, ServerFnError> {
        let signed_in = login(username, password, remember_me).await?;
        let mut user = self.user;
        user.set(Some(signed_in.clone()));
        Ok(signed_in)
    }

    /// Clears local state even if the server call fails.
    pub async fn logout(&self) {
        if let Err(e) = logout().await {
            warn!(error = %e, "Logout failed");
        }
        self.clear();
    }

    pub fn clear(&self) {
        let mut user = self.user;
        user.set(None);
    }
}

/// Auth provider component that wraps the page frame
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let user = use_signal(|| None::<AuthUser>);
    let loading = use_signal(|| true);

    let auth = use_context_provider(|| AuthContext { user, loading });

    // Load initial auth state once mounted
    use_effect(move || {
        spawn(async move {
            auth.refresh().await;
        });
    });

    children
}

/// Hook to access the auth context
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
}
