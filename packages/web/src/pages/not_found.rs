use dioxus::prelude::*;

use crate::components::PageTitle;
use crate::routes::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        PageTitle { title: "Page not found".to_string() }
        section {
            class: "max-w-3xl mx-auto px-6 py-24 text-center",
            p { class: "text-sm font-semibold text-indigo-600", "404" }
            h1 {
                class: "mt-2 text-3xl font-bold text-gray-900 dark:text-white",
                "Page not found"
            }
            p {
                class: "mt-4 text-gray-600 dark:text-gray-300",
                "Nothing lives at {path}."
            }
            Link {
                to: Route::Home {},
                class: "mt-8 inline-block text-indigo-600 hover:underline",
                "Back home"
            }
        }
    }
}
