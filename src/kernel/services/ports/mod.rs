//! Service ports: traits + data contracts.

pub mod config;
pub mod editor;
pub mod host;
pub mod runtime;
pub mod theme;

pub use config::CanvasSettings;
pub use editor::{EditorWidget, WidgetFactory};
pub use host::{
    CompletionCandidate, CursorPosition, EditOrigin, HostCommand, HostEvent, HostSink, SurfaceId,
};
pub use runtime::{AsyncExecutor, BoxFuture};
pub use theme::{ThemePalette, ThemeSource};
