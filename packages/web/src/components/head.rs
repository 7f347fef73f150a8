//! Document head: site-wide tags and per-page titles

use dioxus::prelude::*;

use crate::metadata::HeadTag;
use crate::shell::use_shell_services;

/// Emits the site-wide meta and link tags.
#[component]
pub fn DocumentHead() -> Element {
    let services = use_shell_services();
    let tags = services.metadata.head_tags();

    rsx! {
        {tags.into_iter().map(head_tag)}
    }
}

fn head_tag(tag: HeadTag) -> Element {
    match tag {
        HeadTag::Meta { name, content } => rsx! {
            document::Meta { name: "{name}", content: "{content}" }
        },
        HeadTag::Property { property, content } => rsx! {
            document::Meta { property: "{property}", content: "{content}" }
        },
        HeadTag::Link { rel, href } => rsx! {
            document::Link { rel: "{rel}", href: "{href}" }
        },
    }
}

/// Sets the document title through the site template.
///
/// `None` gives the default title.
#[component]
pub fn PageTitle(title: Option<String>) -> Element {
    let services = use_shell_services();
    let full = services.metadata.title.resolve(title.as_deref());

    rsx! {
        document::Title { "{full}" }
    }
}
