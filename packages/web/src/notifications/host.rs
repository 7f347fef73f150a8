//! Toast handle and the on-screen host

use dioxus::prelude::*;
use tracing::{debug, warn};

use super::config::{Severity, ToasterConfig};
use super::queue::{Toast, ToastId, ToastQueue};
use crate::timer::sleep;

/// Handle for raising toasts from anywhere below the shell.
#[derive(Clone, Copy, PartialEq)]
pub struct Toaster {
    queue: Signal<ToastQueue>,
    config: Signal<ToasterConfig>,
    hosts: CopyValue<usize>,
}

impl Toaster {
    pub fn notify(&self, message: impl Into<String>, severity: Severity) -> ToastId {
        let duration = self.config.read().duration_for(severity);
        let mut queue = self.queue;
        let id = queue.write().push(message, severity, duration);
        debug!(%id, ?severity, "Toast queued");
        id
    }

    pub fn show(&self, message: impl Into<String>) -> ToastId {
        self.notify(message, Severity::Default)
    }

    pub fn success(&self, message: impl Into<String>) -> ToastId {
        self.notify(message, Severity::Success)
    }

    pub fn error(&self, message: impl Into<String>) -> ToastId {
        self.notify(message, Severity::Error)
    }

    pub fn dismiss(&self, id: ToastId) {
        let mut queue = self.queue;
        queue.write().dismiss(id);
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.queue.read().iter().cloned().collect()
    }

    pub fn config(&self) -> ToasterConfig {
        self.config.read().clone()
    }
}

/// Create the toaster for this tree and provide it as context.
pub fn use_toaster_provider(config: ToasterConfig) -> Toaster {
    let queue = use_signal(ToastQueue::default);
    let config = use_signal(|| config);
    let hosts = use_hook(|| CopyValue::new(0usize));
    use_context_provider(|| Toaster {
        queue,
        config,
        hosts,
    })
}

/// Hook to access the toaster
pub fn use_toaster() -> Toaster {
    use_context::<Toaster>()
}

/// Renders the toast stack. Only the first mounted host draws anything.
#[component]
pub fn NotificationHost() -> Element {
    let toaster = use_toaster();

    let primary = use_hook(move || {
        let mut hosts = toaster.hosts;
        let claimed = *hosts.read() == 0;
        *hosts.write() += 1;
        if !claimed {
            warn!("A notification host is already mounted; this one stays empty");
        }
        claimed
    });

    use_drop(move || {
        let mut hosts = toaster.hosts;
        let Ok(mut count) = hosts.try_write() else {
            return;
        };
        *count = count.saturating_sub(1);
    });

    if !primary {
        return rsx! {};
    }

    let position = toaster.config.read().position.classes();
    let toasts = toaster.toasts();

    rsx! {
        div {
            class: "fixed z-50 flex flex-col gap-2 pointer-events-none {position}",
            role: "status",
            "aria-live": "polite",
            for toast in toasts {
                ToastView { key: "{toast.id}", toast: toast.clone() }
            }
        }
    }
}

#[component]
fn ToastView(toast: Toast) -> Element {
    let toaster = use_toaster();
    let config = toaster.config.read().clone();
    let id = toast.id;
    let duration = toast.duration;

    use_future(move || async move {
        sleep(duration).await;
        toaster.dismiss(id);
    });

    let style = config.style.css();
    let severity = match toast.severity {
        Severity::Default => "default",
        Severity::Success => "success",
        Severity::Error => "error",
    };
    let icon = config.icon_for(toast.severity).map(|icon| {
        let glyph = match toast.severity {
            Severity::Error => "!",
            _ => "✓",
        };
        (
            format!("background: {}; color: {};", icon.primary, icon.secondary),
            glyph,
        )
    });

    rsx! {
        div {
            class: "pointer-events-auto flex items-center gap-3 min-w-64 max-w-sm px-4 py-3 rounded-lg shadow-lg text-sm",
            style: "{style}",
            "data-severity": "{severity}",
            if let Some((icon_style, glyph)) = icon {
                span {
                    class: "flex items-center justify-center w-5 h-5 rounded-full text-xs font-bold",
                    style: "{icon_style}",
                    "{glyph}"
                }
            }
            span { class: "flex-1", "{toast.message}" }
            button {
                r#type: "button",
                class: "opacity-60 hover:opacity-100",
                onclick: move |_| toaster.dismiss(id),
                "×"
            }
        }
    }
}
