//! Top navigation bar

use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::metadata::SITE_NAME;
use crate::notifications::use_toaster;
use crate::routes::Route;
use crate::theme::ThemeToggle;

/// Site navigation bar
#[component]
pub fn Navigation() -> Element {
    let auth = use_auth();
    let toaster = use_toaster();
    let signed_in = auth
        .user
        .read()
        .as_ref()
        .map(|user| user.display_name().to_string());

    let handle_logout = move |_| {
        spawn(async move {
            auth.logout().await;
            toaster.show("Signed out");
        });
    };

    rsx! {
        nav {
            class: "bg-white border-b border-gray-200 dark:bg-gray-950 dark:border-gray-800 px-6 py-3",
            div {
                class: "max-w-7xl mx-auto flex items-center justify-between",

                div {
                    class: "flex items-center gap-6",
                    Link {
                        to: Route::Home {},
                        class: "text-xl font-bold text-indigo-600 dark:text-indigo-400",
                        "{SITE_NAME}"
                    }
                    div {
                        class: "hidden md:flex items-center gap-1",
                        NavLink { to: Route::Home {}, label: "Home" }
                        NavLink { to: Route::ResumeBuilder {}, label: "Resume Builder" }
                    }
                }

                div {
                    class: "flex items-center gap-4",
                    ThemeToggle {}
                    if let Some(name) = signed_in {
                        span {
                            class: "text-sm text-gray-600 dark:text-gray-300",
                            "{name}"
                        }
                        button {
                            class: "text-sm text-gray-600 hover:text-gray-900 dark:text-gray-300 px-3 py-1.5 rounded hover:bg-gray-100 dark:hover:bg-gray-800",
                            onclick: handle_logout,
                            "Sign out"
                        }
                    }
                }
            }
        }
    }
}

/// Client-side link; the shell and its cache stay mounted across pages.
#[component]
fn NavLink(to: Route, label: &'static str) -> Element {
    rsx! {
        Link {
            to,
            class: "px-3 py-2 text-sm font-medium text-gray-600 hover:text-gray-900 hover:bg-gray-100 dark:text-gray-300 dark:hover:text-white dark:hover:bg-gray-800 rounded-md",
            active_class: "bg-indigo-50 text-indigo-700 dark:bg-gray-800 dark:text-white",
            "{label}"
        }
    }
}
