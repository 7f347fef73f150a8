//! Theme context provider

use dioxus::prelude::*;
use tracing::{debug, warn};

use super::script::{apply_script, init_script, persist_script, read_stored_script, SYSTEM_LISTENER};
use super::selection::{ResolvedTheme, ThemeSelection};
use super::state::ThemeState;

/// Provider configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeOptions {
    /// localStorage key holding the selection
    pub storage_key: &'static str,
    pub default_theme: ThemeSelection,
    pub enable_system: bool,
    pub disable_transition_on_change: bool,
    /// `"class"` toggles a class on `<html>`; anything else is set as an attribute
    pub attribute: &'static str,
}

impl Default for ThemeOptions {
    fn default() -> Self {
        Self {
            storage_key: "theme",
            default_theme: ThemeSelection::System,
            enable_system: true,
            disable_transition_on_change: true,
            attribute: "class",
        }
    }
}

/// Theme state shared with the whole tree
#[derive(Clone, Copy, PartialEq)]
pub struct ThemeContext {
    state: Signal<ThemeState>,
    options: ThemeOptions,
}

impl ThemeContext {
    pub fn selection(&self) -> ThemeSelection {
        self.state.read().selection
    }

    /// `None` until the browser has reported its color preference.
    pub fn resolved(&self) -> Option<ResolvedTheme> {
        self.state.read().resolved()
    }

    pub fn options(&self) -> &ThemeOptions {
        &self.options
    }

    /// Select and persist a theme.
    pub fn set_theme(&mut self, selection: ThemeSelection) {
        if !self.state.write().select(selection) {
            warn!(%selection, "System theme is disabled, ignoring selection");
            return;
        }
        debug!(%selection, "Theme selected");
        let _ = document::eval(&persist_script(self.options.storage_key, selection));
        self.apply();
    }

    fn apply(&self) {
        if let Some(resolved) = self.resolved() {
            let _ = document::eval(&apply_script(&self.options, resolved));
        }
    }
}

/// Theme provider component.
///
/// Server renders only emit the pre-paint init script; the stored
/// selection and system preference are read once the client mounts.
#[component]
pub fn ThemeProvider(#[props(default)] options: ThemeOptions, children: Element) -> Element {
    let state = use_signal(|| ThemeState::new(options.default_theme, options.enable_system));
    let ctx = use_context_provider(|| ThemeContext { state, options });
    let init = use_hook(|| init_script(&options));

    use_effect(move || {
        let mut state = ctx.state;
        spawn(async move {
            let mut stored = document::eval(&read_stored_script(options.storage_key));
            match stored.recv::<Option<String>>().await {
                Ok(Some(value)) => match value.parse::<ThemeSelection>() {
                    Ok(selection) => {
                        state.write().select(selection);
                    }
                    Err(e) => warn!(error = %e, "Ignoring stored theme"),
                },
                Ok(None) => {}
                Err(e) => warn!(error = ?e, "Could not read stored theme"),
            }
            ctx.apply();
        });

        if options.enable_system {
            spawn(async move {
                let mut media = document::eval(SYSTEM_LISTENER);
                while let Ok(prefers_dark) = media.recv::<bool>().await {
                    state
                        .write()
                        .observe_system(ResolvedTheme::from_prefers_dark(prefers_dark));
                    ctx.apply();
                }
            });
        }
    });

    rsx! {
        script { dangerous_inner_html: "{init}" }
        {children}
    }
}

/// Hook to access the theme context
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>()
}
