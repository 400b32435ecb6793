use serde::{Deserialize, Serialize};

/// Editor colors pushed into every widget. Re-derived whenever the host
/// signals `themeColors`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemePalette {
    pub editor_bg: String,
    pub editor_fg: String,
    pub title_bg: String,
    pub title_fg: String,
    pub accent: String,
    pub selection_bg: String,
}

impl Default for ThemePalette {
    fn default() -> Self {
        Self {
            editor_bg: "#1e1e1e".to_string(),
            editor_fg: "#d4d4d4".to_string(),
            title_bg: "#252526".to_string(),
            title_fg: "#cccccc".to_string(),
            accent: "#007acc".to_string(),
            selection_bg: "#264f78".to_string(),
        }
    }
}

/// Where the current palette comes from (host color variables, settings
/// file, test fixture).
pub trait ThemeSource {
    fn palette(&self) -> ThemePalette;
}
