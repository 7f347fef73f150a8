//! Application configuration loaded from environment variables

use tracing::{debug, warn};
use url::Url;

/// Public base URL of the deployed app, used for canonical and social links.
pub const APP_URL_VAR: &str = "NEXT_PUBLIC_APP_URL";
/// Search-engine ownership token (optional).
pub const SITE_VERIFICATION_VAR: &str = "GOOGLE_SITE_VERIFICATION";
/// Base URL of the Career OS REST API.
pub const API_URL_VAR: &str = "CAREER_OS_API_URL";

pub const DEFAULT_APP_URL: &str = "http://localhost:3000";
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api/v1";

/// Shell configuration. Every field has a fallback, so loading never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub app_url: Url,
    pub google_site_verification: Option<String>,
    pub api_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl AppConfig {
    /// Load configuration from the process environment.
    ///
    /// Native builds read a `.env` file first when present (development).
    /// Browser builds have no process environment, so the values are the
    /// ones baked in at compile time.
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = dotenvy::dotenv();
            Self::from_lookup(|key| std::env::var(key).ok())
        }

        #[cfg(target_arch = "wasm32")]
        {
            Self::from_lookup(build_time_var)
        }
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let app_url = lookup(APP_URL_VAR)
            .and_then(non_blank)
            .and_then(|raw| match Url::parse(&raw) {
                Ok(url) => Some(url),
                Err(e) => {
                    warn!(var = APP_URL_VAR, value = %raw, error = %e, "Malformed app URL, using default");
                    None
                }
            })
            .unwrap_or_else(default_app_url);

        let google_site_verification = lookup(SITE_VERIFICATION_VAR).and_then(non_blank);
        if google_site_verification.is_none() {
            debug!(var = SITE_VERIFICATION_VAR, "Site verification token not set, omitting");
        }

        let api_url = lookup(API_URL_VAR)
            .and_then(non_blank)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Self {
            app_url,
            google_site_verification,
            api_url,
        }
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn default_app_url() -> Url {
    Url::parse(DEFAULT_APP_URL).expect("default app URL is a valid absolute URL")
}

#[cfg(target_arch = "wasm32")]
fn build_time_var(key: &str) -> Option<String> {
    let value = match key {
        APP_URL_VAR => option_env!("NEXT_PUBLIC_APP_URL"),
        SITE_VERIFICATION_VAR => option_env!("GOOGLE_SITE_VERIFICATION"),
        API_URL_VAR => option_env!("CAREER_OS_API_URL"),
        _ => None,
    };
    value.map(str::to_string)
}
