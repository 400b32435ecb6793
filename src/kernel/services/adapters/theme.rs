use std::path::PathBuf;

use crate::kernel::services::ports::{ThemePalette, ThemeSource};

use super::settings::load_settings_from;

/// Palette backed by the settings file. The host's `themeColors` signal
/// causes a fresh read, so palette edits take effect on the next signal
/// without a restart.
pub struct SettingsThemeSource {
    path: Option<PathBuf>,
    fallback: ThemePalette,
}

impl SettingsThemeSource {
    pub fn new(path: Option<PathBuf>, fallback: ThemePalette) -> Self {
        Self { path, fallback }
    }
}

impl ThemeSource for SettingsThemeSource {
    fn palette(&self) -> ThemePalette {
        match &self.path {
            Some(path) => load_settings_from(path).theme,
            None => self.fallback.clone(),
        }
    }
}
