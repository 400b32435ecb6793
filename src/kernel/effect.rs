use compact_str::CompactString;

use super::language::LanguageTag;
use super::services::ports::{CursorPosition, EditOrigin, SurfaceId};

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Ask the host to apply `text` as one edit over the full prior range.
    HostEdit {
        id: SurfaceId,
        text: String,
        origin: EditOrigin,
    },
    RequestCompletions {
        id: SurfaceId,
        position: CursorPosition,
        trigger_char: Option<char>,
    },
    CreateWidget {
        id: SurfaceId,
        name: CompactString,
        language: LanguageTag,
        text: String,
    },
    /// Release the widget and its text model; after this nothing may
    /// reference the id.
    DisposeWidget { id: SurfaceId },
    /// Atomic replace-all, bracketed by undo stops on the widget side.
    ReplaceWidgetContent { id: SurfaceId, text: String },
    /// Invoke the widget's native suggestion-display action.
    ShowSuggestions { id: SurfaceId },
    /// Re-derive editor colors from the host's current variables.
    RefreshTheme,
}
