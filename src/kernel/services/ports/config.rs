use serde::{Deserialize, Serialize};

use super::theme::ThemePalette;

/// 画布运行参数（持久化为 setting.json，缺省字段取默认值）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    /// Quiet period shared by both sync debounce timelines.
    pub debounce_ms: u64,
    /// How long suppress-on-type swallows character-triggered requests.
    pub suppress_ms: u64,
    /// Lifetime of a transient suggestion override.
    pub transient_ttl_ms: u64,
    /// Main loop cadence.
    pub tick_ms: u64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub zoom_step: f64,
    /// Diagonal offset between consecutively placed surfaces.
    pub stagger_step: f64,
    pub surface_width: f64,
    pub surface_height: f64,
    pub min_surface_width: f64,
    pub min_surface_height: f64,
    /// Height of the draggable title strip, in world units.
    pub title_height: f64,
    /// Side length of the corner resize handle, in world units.
    pub resize_handle: f64,
    pub theme: ThemePalette,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            debounce_ms: 300,
            suppress_ms: 900,
            transient_ttl_ms: 10_000,
            tick_ms: 16,
            min_zoom: 0.2,
            max_zoom: 3.0,
            zoom_step: 1.1,
            stagger_step: 30.0,
            surface_width: 520.0,
            surface_height: 360.0,
            min_surface_width: 160.0,
            min_surface_height: 120.0,
            title_height: 28.0,
            resize_handle: 14.0,
            theme: ThemePalette::default(),
        }
    }
}

impl CanvasSettings {
    pub fn debounce(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.debounce_ms)
    }

    pub fn suppress(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.suppress_ms)
    }

    pub fn transient_ttl(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.transient_ttl_ms)
    }
}
