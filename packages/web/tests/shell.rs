//! Server-rendered shell structure

use std::rc::Rc;
use std::sync::{Arc, Mutex};

use career_os_web::auth::use_auth;
use career_os_web::notifications::{use_toaster, NotificationHost};
use career_os_web::query::{use_query_client, QueryClient};
use career_os_web::theme::use_theme;
use career_os_web::{AppConfig, AppShell, ShellServices};
use dioxus::history::MemoryHistory;
use dioxus::prelude::*;

/// Routes that mount test pages inside the real shell.
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
enum Harness {
    #[layout(HarnessShell)]
        #[route("/")]
        PlainPage {},

        #[route("/readers")]
        Readers {},

        #[route("/toasts")]
        Toasts {},
}

#[component]
fn HarnessShell() -> Element {
    rsx! {
        AppShell {
            Outlet::<Harness> {}
        }
    }
}

fn harness_root() -> Element {
    rsx! { Router::<Harness> {} }
}

fn render(path: &str, services: ShellServices) -> String {
    render_with(path, services, Seen::default())
}

fn render_with(path: &str, services: ShellServices, seen: Seen) -> String {
    let history: Rc<dyn History> = Rc::new(MemoryHistory::with_initial_path(path));
    let mut dom = VirtualDom::new(harness_root)
        .with_root_context(services)
        .with_root_context(seen)
        .with_root_context(history);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[derive(Clone, Default)]
struct Seen(Arc<Mutex<Vec<QueryClient>>>);

#[component]
fn CacheReader() -> Element {
    let client = use_query_client();
    // Every outer capability must be reachable from inside the page.
    let _theme = use_theme();
    let _auth = use_auth();
    let _toaster = use_toaster();

    let seen = use_context::<Seen>();
    use_hook(move || seen.0.lock().unwrap().push(client));
    rsx! {}
}

#[component]
fn PlainPage() -> Element {
    rsx! {
        p { id: "page", "Hello page" }
    }
}

#[component]
fn Readers() -> Element {
    rsx! {
        CacheReader {}
        CacheReader {}
    }
}

#[component]
fn RaiseToasts() -> Element {
    let toaster = use_toaster();
    use_hook(move || {
        toaster.success("Draft saved");
        toaster.error("Upload failed");
    });
    rsx! {}
}

#[component]
fn Toasts() -> Element {
    rsx! {
        RaiseToasts {}
        NotificationHost {}
    }
}

#[test]
fn frame_wraps_page_between_navigation_and_footer() {
    let html = render("/", ShellServices::new(AppConfig::default()));

    assert!(html.contains("min-h-screen bg-gray-50 dark:bg-gray-900 flex flex-col"));

    let nav = html.find("<nav").expect("navigation rendered");
    let main = html.find("<main class=\"flex-1\"").expect("main region rendered");
    let page = html.find("Hello page").expect("page rendered");
    let footer = html.find("<footer").expect("footer rendered");

    assert!(nav < main && main < page && page < footer);
}

#[test]
fn navigation_uses_router_links() {
    let html = render("/", ShellServices::new(AppConfig::default()));

    assert!(html.contains("href=\"/resume-builder\""));
    // Router links mark the current page; plain anchors never do.
    assert!(html.contains("aria-current=\"page\""));
}

#[test]
fn theme_init_script_is_rendered_without_a_resolved_theme() {
    let html = render("/", ShellServices::new(AppConfig::default()));

    assert!(html.contains("prefers-color-scheme: dark"));
    // The toggle shows the selection, never a guessed resolved theme.
    assert!(html.contains(">System</button>"));
}

#[test]
fn every_reader_sees_the_injected_cache_client() {
    let services = ShellServices::new(AppConfig::default());
    let seen = Seen::default();
    render_with("/readers", services.clone(), seen.clone());

    let clients = seen.0.lock().unwrap();
    assert_eq!(clients.len(), 2);
    assert!(clients.iter().all(|c| c.ptr_eq(&services.query_client)));
}

#[test]
fn separate_trees_get_separate_caches() {
    let services = ShellServices::new(AppConfig::default());
    let (first, second) = (Seen::default(), Seen::default());

    render_with("/readers", services.fork(), first.clone());
    render_with("/readers", services.fork(), second.clone());

    let a = first.0.lock().unwrap()[0].clone();
    let b = second.0.lock().unwrap()[0].clone();
    assert!(!a.ptr_eq(&b));
}

#[test]
fn toasts_render_once_with_shared_style() {
    let html = render("/toasts", ShellServices::new(AppConfig::default()));

    assert_eq!(html.matches("role=\"status\"").count(), 1);
    assert_eq!(html.matches("Draft saved").count(), 1);
    assert!(html.contains("data-severity=\"success\""));
    assert!(html.contains("data-severity=\"error\""));
    assert!(html.contains("background: #363636; color: #fff;"));
    assert!(html.contains("background: #10b981; color: #fff;"));
    assert!(html.contains("background: #ef4444; color: #fff;"));
}

#[test]
fn devtools_start_closed() {
    let html = render("/", ShellServices::new(AppConfig::default()));

    if cfg!(debug_assertions) {
        assert!(html.contains(">Query cache</button>"));
    }
    assert!(!html.contains("<table"));
}
