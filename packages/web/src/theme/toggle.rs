use dioxus::prelude::*;

use super::provider::use_theme;
use super::selection::ThemeSelection;

/// Cycles light → dark → system.
#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_theme();
    let selection = theme.selection();
    let mut next = selection.next();
    if next == ThemeSelection::System && !theme.options().enable_system {
        next = next.next();
    }

    let label = match selection {
        ThemeSelection::Light => "Light",
        ThemeSelection::Dark => "Dark",
        ThemeSelection::System => "System",
    };

    rsx! {
        button {
            r#type: "button",
            class: "px-3 py-1.5 rounded-md text-sm font-medium text-gray-600 hover:bg-gray-100 dark:text-gray-300 dark:hover:bg-gray-800",
            title: "Switch to {next} theme",
            onclick: move |_| theme.set_theme(next),
            "{label}"
        }
    }
}
