//! Server functions for authentication
//!
//! These run on the server: credentials go to the Career OS API and the
//! resulting user and access token live in the visitor's session.

use dioxus::prelude::*;

use super::types::AuthUser;

/// Sign in with a username or email
#[server]
pub async fn login(username: String, password: String, remember_me: bool) -> Result<AuthUser, ServerFnError> {
    use crate::api::auth::{LoginRequest, LoginResponse, LOGIN_PATH};

    let request = LoginRequest {
        username,
        password,
        remember_me,
    };

    let response: LoginResponse = server_api_client()
        .post(LOGIN_PATH, &request)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    set_session(&response.user, &response.access_token).await?;
    tracing::info!(user_id = %response.user.id, "User signed in");

    Ok(response.user)
}

/// Get the current authenticated user from the session
#[server]
pub async fn get_current_user() -> Result<Option<AuthUser>, ServerFnError> {
    get_session_user().await
}

/// Logout - revoke the token upstream and clear the session
#[server]
pub async fn logout() -> Result<(), ServerFnError> {
    use crate::api::auth::LOGOUT_PATH;

    if let Some(token) = get_session_token().await? {
        // The session is cleared even if the API refuses.
        if let Err(e) = server_api_client().with_token(token).post_empty(LOGOUT_PATH).await {
            tracing::warn!(error = %e, "Upstream logout failed");
        }
    }

    clear_session().await
}

// ============================================================================
// Server-only helpers (not exposed as server functions)
// ============================================================================

#[cfg(feature = "server")]
const USER_KEY: &str = "user";
#[cfg(feature = "server")]
const TOKEN_KEY: &str = "access_token";

#[cfg(feature = "server")]
fn server_api_client() -> crate::api::ApiClient {
    static CONFIG: std::sync::OnceLock<crate::config::AppConfig> = std::sync::OnceLock::new();

    let config = CONFIG.get_or_init(crate::config::AppConfig::from_env);
    crate::api::ApiClient::from_config(config)
}

#[cfg(feature = "server")]
async fn session() -> Result<tower_sessions::Session, ServerFnError> {
    dioxus::fullstack::extract()
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to get session: {}", e)))
}

#[cfg(feature = "server")]
async fn set_session(user: &AuthUser, token: &str) -> Result<(), ServerFnError> {
    let session = session().await?;

    session
        .insert(USER_KEY, user)
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to set session: {}", e)))?;
    session
        .insert(TOKEN_KEY, token)
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to set session: {}", e)))?;

    Ok(())
}

#[cfg(feature = "server")]
async fn get_session_user() -> Result<Option<AuthUser>, ServerFnError> {
    session()
        .await?
        .get(USER_KEY)
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to get user from session: {}", e)))
}

#[cfg(feature = "server")]
async fn get_session_token() -> Result<Option<String>, ServerFnError> {
    session()
        .await?
        .get(TOKEN_KEY)
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to get token from session: {}", e)))
}

#[cfg(feature = "server")]
async fn clear_session() -> Result<(), ServerFnError> {
    session()
        .await?
        .flush()
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to clear session: {}", e)))
}
