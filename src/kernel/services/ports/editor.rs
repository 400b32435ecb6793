//! Editor widget capability. The embedded text-editing widget is opaque to
//! the kernel; this is the whole surface the core is allowed to touch.

use super::host::{CompletionCandidate, SurfaceId};
use super::theme::ThemePalette;

pub trait EditorWidget {
    /// Current text of the widget's model.
    fn content(&self) -> String;

    /// User-side edit path: the widget already holds this text after the
    /// user typed; each call is its own undo step.
    fn set_content(&mut self, text: &str);

    /// Programmatic replace of the whole model as one atomic operation
    /// inside a single undo unit, never interleaved with user edits.
    fn replace_content(&mut self, text: &str);

    fn undo(&mut self) -> bool;

    fn show_suggestions(&mut self, items: &[CompletionCandidate]);

    fn visible_suggestions(&self) -> &[CompletionCandidate];

    fn apply_theme(&mut self, palette: &ThemePalette);

    /// Concrete-type access for adapters and tests.
    fn as_any(&self) -> &dyn std::any::Any;
}

pub trait WidgetFactory {
    fn create(&self, id: &SurfaceId, language: &str, text: &str) -> Box<dyn EditorWidget>;
}
