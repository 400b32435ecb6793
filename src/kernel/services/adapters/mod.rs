//! Service adapters: OS/runtime specific implementations (IO/async).

pub mod executor;
pub mod rope_widget;
pub mod settings;
pub mod stdio;
pub mod theme;

pub use executor::TokioExecutor;
pub use rope_widget::{RopeWidget, RopeWidgetFactory};
pub use settings::{ensure_settings_file, get_settings_path, load_settings};
pub use stdio::{decode_frame, encode_command, spawn_stdio_host, DriverEvent, Frame, WireError};
pub use theme::SettingsThemeSource;
