use dioxus::prelude::*;

use super::{Footer, Navigation};

/// Navigation, a `main` region that fills the remaining height, then the footer.
#[component]
pub fn PageFrame(children: Element) -> Element {
    rsx! {
        div {
            class: "min-h-screen bg-gray-50 dark:bg-gray-900 flex flex-col",
            Navigation {}
            main {
                class: "flex-1",
                {children}
            }
            Footer {}
        }
    }
}
