use super::selection::{ResolvedTheme, ThemeSelection};

/// Selection plus whatever the browser has told us about its preference.
///
/// `system` stays `None` until the client reports it, so a server render
/// never guesses the resolved theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeState {
    pub selection: ThemeSelection,
    pub system: Option<ResolvedTheme>,
    pub enable_system: bool,
}

impl ThemeState {
    pub fn new(default: ThemeSelection, enable_system: bool) -> Self {
        let selection = match default {
            ThemeSelection::System if !enable_system => ThemeSelection::Light,
            other => other,
        };
        Self {
            selection,
            system: None,
            enable_system,
        }
    }

    /// Returns false when the selection is refused (system while disabled).
    pub fn select(&mut self, selection: ThemeSelection) -> bool {
        if selection == ThemeSelection::System && !self.enable_system {
            return false;
        }
        self.selection = selection;
        true
    }

    pub fn observe_system(&mut self, theme: ResolvedTheme) {
        self.system = Some(theme);
    }

    pub fn resolved(&self) -> Option<ResolvedTheme> {
        match self.selection {
            ThemeSelection::Light => Some(ResolvedTheme::Light),
            ThemeSelection::Dark => Some(ResolvedTheme::Dark),
            ThemeSelection::System => self.system,
        }
    }
}
