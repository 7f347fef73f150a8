//! Query cache inspector for debug builds

use dioxus::prelude::*;

use super::client::Freshness;
use super::hooks::use_query_client;

/// Floating overlay listing cache entries. Renders nothing in release builds.
#[component]
pub fn QueryDevtools(#[props(default = false)] initial_is_open: bool) -> Element {
    if !cfg!(debug_assertions) {
        return rsx! {};
    }

    let client = use_query_client();
    let mut open = use_signal(|| initial_is_open);
    let mut revision = use_signal(|| 0u32);

    if !open() {
        return rsx! {
            button {
                class: "fixed bottom-4 left-4 z-50 px-3 py-1.5 rounded-full bg-gray-900 text-white text-xs font-mono shadow-lg",
                onclick: move |_| open.set(true),
                "Query cache"
            }
        };
    }

    // Re-read the cache whenever "Refresh" is pressed.
    let _ = revision();

    let rows: Vec<(String, &'static str, &'static str, String)> = client
        .snapshot()
        .into_iter()
        .map(|entry| {
            let (label, class) = match entry.freshness {
                Freshness::Fresh => ("fresh", "text-emerald-400"),
                Freshness::Stale => ("stale", "text-amber-400"),
            };
            (
                entry.key.to_string(),
                label,
                class,
                entry.updated_at.format("%H:%M:%S").to_string(),
            )
        })
        .collect();
    let count = rows.len();

    rsx! {
        div {
            class: "fixed bottom-0 inset-x-0 z-50 max-h-72 overflow-y-auto bg-gray-900 text-gray-100 text-xs font-mono shadow-2xl",
            div {
                class: "flex items-center justify-between px-4 py-2 border-b border-gray-700",
                span { "Query cache ({count})" }
                div {
                    class: "flex gap-2",
                    button {
                        class: "px-2 py-1 rounded hover:bg-gray-700",
                        onclick: move |_| revision += 1,
                        "Refresh"
                    }
                    button {
                        class: "px-2 py-1 rounded hover:bg-gray-700",
                        onclick: move |_| open.set(false),
                        "Close"
                    }
                }
            }
            table {
                class: "w-full text-left",
                thead {
                    tr {
                        th { class: "px-4 py-1", "Key" }
                        th { class: "px-4 py-1", "Status" }
                        th { class: "px-4 py-1", "Updated" }
                    }
                }
                tbody {
                    for (key, label, class, updated) in rows {
                        tr {
                            key: "{key}",
                            td { class: "px-4 py-1", "{key}" }
                            td { class: "px-4 py-1 {class}", "{label}" }
                            td { class: "px-4 py-1", "{updated}" }
                        }
                    }
                }
            }
        }
    }
}
