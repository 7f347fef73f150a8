use chrono::{Datelike, Utc};
use dioxus::prelude::*;

use crate::metadata::SITE_NAME;

#[component]
pub fn Footer() -> Element {
    let year = Utc::now().year();

    rsx! {
        footer {
            class: "border-t border-gray-200 bg-white dark:bg-gray-950 dark:border-gray-800",
            div {
                class: "max-w-7xl mx-auto px-6 py-6 flex flex-col md:flex-row items-center justify-between gap-2 text-sm text-gray-500 dark:text-gray-400",
                p { "© {year} {SITE_NAME}. All rights reserved." }
                p { "Skill development & job readiness" }
            }
        }
    }
}
