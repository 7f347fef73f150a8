use dioxus::prelude::*;

use crate::components::PageTitle;
use crate::notifications::use_toaster;

#[component]
pub fn ResumeBuilder() -> Element {
    let toaster = use_toaster();
    let mut headline = use_signal(String::new);

    let save = move |_| {
        if headline.read().trim().is_empty() {
            toaster.error("Add a headline before saving");
        } else {
            toaster.success("Draft saved");
        }
    };

    rsx! {
        PageTitle { title: "Resume Builder".to_string() }
        section {
            class: "max-w-3xl mx-auto px-6 py-12",
            h1 {
                class: "text-3xl font-bold text-gray-900 dark:text-white",
                "Resume Builder"
            }
            p {
                class: "mt-2 text-gray-600 dark:text-gray-300",
                "Write an ATS-friendly resume, section by section."
            }
            div {
                class: "mt-8 space-y-4",
                label {
                    class: "block text-sm font-medium text-gray-700 dark:text-gray-200",
                    r#for: "headline",
                    "Headline"
                }
                input {
                    id: "headline",
                    class: "w-full px-3 py-2 rounded-md border border-gray-300 dark:border-gray-700 dark:bg-gray-800",
                    placeholder: "Backend engineer with 5 years of Rust",
                    value: "{headline}",
                    oninput: move |e| headline.set(e.value()),
                }
                button {
                    class: "px-4 py-2 rounded-md bg-indigo-600 text-white font-medium hover:bg-indigo-700",
                    onclick: save,
                    "Save draft"
                }
            }
        }
    }
}
