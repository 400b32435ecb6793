//! 设置与数据目录
//!
//! 跨平台的配置/日志路径，参照常见编辑器的布局：
//! - macOS: ~/Library/Caches/.zcanvas/setting.json
//! - Linux: $XDG_CACHE_HOME 或 ~/.cache/.zcanvas/setting.json
//! - Windows: %LOCALAPPDATA%\.zcanvas\setting.json

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::kernel::services::ports::CanvasSettings;

const SETTINGS_DIR: &str = ".zcanvas";
const SETTINGS_FILE: &str = "setting.json";
const LOG_DIR: &str = "logs";

pub fn get_settings_path() -> Option<PathBuf> {
    get_cache_dir().map(|dir| dir.join(SETTINGS_DIR).join(SETTINGS_FILE))
}

pub fn ensure_log_dir() -> std::io::Result<PathBuf> {
    let dir = get_cache_dir()
        .map(|dir| dir.join(SETTINGS_DIR).join(LOG_DIR))
        .ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "Cannot determine cache directory")
        })?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// 首次运行时写入默认配置文件。
pub fn ensure_settings_file() -> std::io::Result<PathBuf> {
    let path = get_settings_path().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Cannot determine settings directory",
        )
    })?;
    ensure_settings_file_at(&path)?;
    Ok(path)
}

pub fn ensure_settings_file_at(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    if !path.exists() {
        let content = serde_json::to_string_pretty(&CanvasSettings::default())
            .unwrap_or_else(|_| "{}".to_string());
        std::fs::write(path, content)?;
    }
    Ok(())
}

pub fn load_settings() -> CanvasSettings {
    let Some(path) = get_settings_path() else {
        return CanvasSettings::default();
    };
    load_settings_from(&path)
}

/// Unreadable or malformed settings fall back to defaults; a broken file
/// must never keep the canvas from starting.
pub fn load_settings_from(path: &Path) -> CanvasSettings {
    let data = match std::fs::read_to_string(path) {
        Ok(data) => data,
        Err(_) => return CanvasSettings::default(),
    };
    match serde_json::from_str(&data) {
        Ok(settings) => settings,
        Err(err) => {
            warn!(path = %path.display(), %err, "malformed settings, using defaults");
            CanvasSettings::default()
        }
    }
}

fn get_cache_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        return std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join("Library/Caches"));
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CACHE_HOME") {
            return Some(PathBuf::from(xdg));
        }
        return std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join(".cache"));
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(local) = std::env::var("LOCALAPPDATA") {
            return Some(PathBuf::from(local));
        }
        return std::env::var("APPDATA").ok().map(PathBuf::from);
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn ensure_writes_defaults_once() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(SETTINGS_DIR).join(SETTINGS_FILE);

        ensure_settings_file_at(&path).unwrap();
        assert!(path.exists());
        assert_eq!(load_settings_from(&path), CanvasSettings::default());

        // A customized file is left alone.
        let mut custom = CanvasSettings::default();
        custom.debounce_ms = 500;
        std::fs::write(&path, serde_json::to_string(&custom).unwrap()).unwrap();
        ensure_settings_file_at(&path).unwrap();
        assert_eq!(load_settings_from(&path).debounce_ms, 500);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        std::fs::write(&path, r#"{"debounce_ms": 120}"#).unwrap();

        let settings = load_settings_from(&path);
        assert_eq!(settings.debounce_ms, 120);
        assert_eq!(settings.suppress_ms, CanvasSettings::default().suppress_ms);
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        std::fs::write(&path, "not json").unwrap();
        assert_eq!(load_settings_from(&path), CanvasSettings::default());
    }
}
