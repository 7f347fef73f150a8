//! Root application component

use dioxus::prelude::*;

use crate::routes::Route;

/// Compiled by the Tailwind CLI from `input.css` (see `tailwind.config.js`).
const TAILWIND_STYLESHEET: &str = "/assets/tailwind.css";

/// Root application component
#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: "{TAILWIND_STYLESHEET}" }
        Router::<Route> {}
    }
}
