//! Route definitions for the application

use dioxus::prelude::*;

use crate::pages::{Home, NotFound, ResumeBuilder};
use crate::shell::AppShell;

/// All application routes
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(ShellLayout)]
        #[route("/")]
        Home {},

        #[route("/resume-builder")]
        ResumeBuilder {},

        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

/// Every page renders inside the shell.
#[component]
fn ShellLayout() -> Element {
    rsx! {
        AppShell {
            Outlet::<Route> {}
        }
    }
}
