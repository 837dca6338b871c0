//! # Theme State
//!
//! Light/dark theme toggle for the session. Session-scoped only; the
//! default comes from configuration.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

/// UI theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// The other theme.
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Light
    }
}

/// Managed theme state.
#[derive(Debug, Clone)]
pub struct ThemeState {
    theme: Arc<Mutex<Theme>>,
}

impl ThemeState {
    /// Creates theme state with the given initial theme.
    pub fn new(initial: Theme) -> Self {
        ThemeState {
            theme: Arc::new(Mutex::new(initial)),
        }
    }

    /// Returns the current theme.
    pub fn current(&self) -> Theme {
        *self.theme.lock().expect("Theme mutex poisoned")
    }

    /// Flips between light and dark, returning the new theme.
    pub fn toggle(&self) -> Theme {
        let mut guard = self.theme.lock().expect("Theme mutex poisoned");
        *guard = guard.toggled();
        *guard
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        ThemeState::new(Theme::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        let state = ThemeState::new(Theme::Light);
        assert_eq!(state.toggle(), Theme::Dark);
        assert_eq!(state.toggle(), Theme::Light);
        assert_eq!(state.current(), Theme::Light);
    }
}
