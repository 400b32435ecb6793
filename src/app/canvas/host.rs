use std::time::Instant;

use tracing::debug;

use super::Canvas;
use crate::kernel::services::bus::CanvasMessage;
use crate::kernel::services::ports::HostCommand;
use crate::kernel::{Action, Effect};

impl Canvas {
    pub fn handle_message(&mut self, msg: CanvasMessage) -> bool {
        match msg {
            CanvasMessage::Action(action) => self.handle_action(action),
        }
    }

    pub fn handle_action(&mut self, action: Action) -> bool {
        // Pointer actions carry no timestamp and can emit no time-keyed
        // effect; everything else is stamped at its source.
        let now = match &action {
            Action::Host { now, .. }
            | Action::SurfaceEdited { now, .. }
            | Action::CompletionTrigger { now, .. }
            | Action::Tick { now } => *now,
            _ => Instant::now(),
        };

        // The widget already holds a user edit by the time the action
        // reaches us; mirror it into the harness widget so its model and
        // the kernel snapshot agree.
        if let Action::SurfaceEdited { id, text, .. } = &action {
            if let Some(widget) = self.widgets.get_mut(id) {
                widget.set_content(text);
            }
        }

        let result = self.store.dispatch(action);
        self.run_effects(result.effects, now);
        result.state_changed
    }

    pub(super) fn run_effects(&mut self, effects: Vec<Effect>, now: Instant) {
        for effect in effects {
            match effect {
                Effect::HostEdit { id, text, origin } => {
                    self.sink.send(HostCommand::Edit { id, text, origin });
                }
                Effect::RequestCompletions {
                    id,
                    position,
                    trigger_char,
                } => {
                    self.sink.send(HostCommand::RequestCompletions {
                        id,
                        position,
                        trigger_character: trigger_char,
                    });
                }
                Effect::CreateWidget {
                    id,
                    name: _,
                    language,
                    text,
                } => {
                    let mut widget = self.factory.create(&id, language.as_str(), &text);
                    widget.apply_theme(&self.theme.palette());
                    self.widgets.insert(id, widget);
                }
                Effect::DisposeWidget { id } => {
                    // Dropping the widget releases its text model; no
                    // registry may still reference the id afterwards.
                    if self.widgets.remove(&id).is_none() {
                        debug!(%id, "dispose for unknown widget");
                    }
                }
                Effect::ReplaceWidgetContent { id, text } => {
                    if let Some(widget) = self.widgets.get_mut(&id) {
                        widget.replace_content(&text);
                    }
                }
                Effect::ShowSuggestions { id } => {
                    let items = self.store.provide_completions(&id, now);
                    if let Some(widget) = self.widgets.get_mut(&id) {
                        widget.show_suggestions(&items);
                    }
                }
                Effect::RefreshTheme => {
                    let palette = self.theme.palette();
                    for widget in self.widgets.values_mut() {
                        widget.apply_theme(&palette);
                    }
                }
            }
        }
    }
}
