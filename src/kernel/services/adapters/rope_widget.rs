//! Default editor widget: a rope-backed text model with snapshot undo.
//! Stands in for the embedded editing widget wherever the engine runs
//! without one (the stdio harness, tests).

use ropey::Rope;

use crate::kernel::services::ports::{
    CompletionCandidate, EditorWidget, SurfaceId, ThemePalette, WidgetFactory,
};

pub struct RopeWidget {
    rope: Rope,
    undo: Vec<Rope>,
    language: String,
    suggestions: Vec<CompletionCandidate>,
    palette: ThemePalette,
}

impl RopeWidget {
    pub fn new(language: &str, text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            undo: Vec::new(),
            language: language.to_string(),
            suggestions: Vec::new(),
            palette: ThemePalette::default(),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn palette(&self) -> &ThemePalette {
        &self.palette
    }

    fn snapshot(&mut self) {
        // Rope clones share structure, so snapshots stay cheap.
        self.undo.push(self.rope.clone());
    }
}

impl EditorWidget for RopeWidget {
    fn content(&self) -> String {
        self.rope.to_string()
    }

    fn set_content(&mut self, text: &str) {
        self.snapshot();
        self.rope = Rope::from_str(text);
    }

    fn replace_content(&mut self, text: &str) {
        // One snapshot per programmatic replace keeps the whole apply a
        // single undo unit, never merged with surrounding user edits.
        self.snapshot();
        self.rope = Rope::from_str(text);
    }

    fn undo(&mut self) -> bool {
        match self.undo.pop() {
            Some(prev) => {
                self.rope = prev;
                true
            }
            None => false,
        }
    }

    fn show_suggestions(&mut self, items: &[CompletionCandidate]) {
        self.suggestions = items.to_vec();
    }

    fn visible_suggestions(&self) -> &[CompletionCandidate] {
        &self.suggestions
    }

    fn apply_theme(&mut self, palette: &ThemePalette) {
        self.palette = palette.clone();
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

pub struct RopeWidgetFactory;

impl WidgetFactory for RopeWidgetFactory {
    fn create(&self, _id: &SurfaceId, language: &str, text: &str) -> Box<dyn EditorWidget> {
        Box::new(RopeWidget::new(language, text))
    }
}
