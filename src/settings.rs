use serde::{Deserialize, Serialize};
use tokio::sync::watch;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// Runtime UI settings. Nothing here outlives the process.
#[derive(Debug)]
pub struct Settings {
    theme: watch::Sender<Theme>,
}

impl Settings {
    pub fn new(theme: Theme) -> Self {
        let (theme, _) = watch::channel(theme);
        Self { theme }
    }

    pub fn theme(&self) -> Theme {
        *self.theme.borrow()
    }

    pub fn set_theme(&self, theme: Theme) {
        self.theme.send_if_modified(|current| {
            if *current == theme {
                return false;
            }
            log::debug!("Theme changed to {theme:?}");
            *current = theme;
            true
        });
    }

    pub fn toggle_theme(&self) -> Theme {
        let next = Theme::from_dark(!self.theme().is_dark());
        self.set_theme(next);
        next
    }

    pub fn subscribe(&self) -> watch::Receiver<Theme> {
        self.theme.subscribe()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(Theme::Light)
    }
}
