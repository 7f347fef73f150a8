//! Landing page

use dioxus::prelude::*;
use serde::Deserialize;

use crate::api::ApiClient;
use crate::components::PageTitle;
use crate::query::use_query;
use crate::routes::Route;
use crate::shell::use_shell_services;

const HEALTH_PATH: &str = "/auth/health";

#[derive(Debug, Clone, Deserialize)]
struct ApiHealth {
    status: String,
}

#[component]
pub fn Home() -> Element {
    let services = use_shell_services();
    let config = services.config.clone();

    let health = use_query(["api", "health"], move || {
        let client = ApiClient::from_config(&config);
        async move { client.get::<ApiHealth>(HEALTH_PATH).await }
    });

    let (badge_class, badge_text) = match (health.data(), health.error()) {
        (Some(h), _) if h.status.eq_ignore_ascii_case("up") => {
            ("bg-emerald-100 text-emerald-800", "API online".to_string())
        }
        (Some(h), _) => ("bg-amber-100 text-amber-800", format!("API {}", h.status)),
        (None, Some(_)) => ("bg-red-100 text-red-800", "API unreachable".to_string()),
        (None, None) => ("bg-gray-100 text-gray-600", "Checking API…".to_string()),
    };

    rsx! {
        PageTitle {}
        section {
            class: "max-w-5xl mx-auto px-6 py-16",
            span {
                class: "inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium {badge_class}",
                "{badge_text}"
            }
            h1 {
                class: "mt-6 text-4xl md:text-5xl font-extrabold text-gray-900 dark:text-white",
                "Build skills. Get job ready."
            }
            p {
                class: "mt-4 max-w-2xl text-lg text-gray-600 dark:text-gray-300",
                "Personalized learning paths, AI-powered recommendations and an ATS-compliant resume builder in one place."
            }
            div {
                class: "mt-8 flex flex-wrap gap-3",
                Link {
                    to: Route::ResumeBuilder {},
                    class: "px-5 py-3 rounded-lg bg-indigo-600 text-white font-semibold hover:bg-indigo-700",
                    "Start your resume"
                }
            }
        }
    }
}
