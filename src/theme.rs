use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredPreferences {
    #[serde(default)]
    theme: Theme,
}

/// Theme preference kept in a small JSON file.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    path: PathBuf,
}

impl ThemeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The stored theme. A missing or unreadable file means the default.
    pub fn load(&self) -> Theme {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "No stored theme");
                return Theme::default();
            }
        };

        match serde_json::from_str::<StoredPreferences>(&contents) {
            Ok(prefs) => prefs.theme,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Ignoring malformed theme file");
                Theme::default()
            }
        }
    }

    pub fn save(&self, theme: Theme) -> Result<()> {
        let contents = serde_json::to_string_pretty(&StoredPreferences { theme })?;
        std::fs::write(&self.path, contents)?;
        Ok(())
    }

    /// Flip the stored theme and return the new one.
    pub fn toggle(&self) -> Result<Theme> {
        let theme = self.load().toggled();
        self.save(theme)?;
        Ok(theme)
    }
}
