use std::time::Instant;

use super::action::Action;
use super::effect::Effect;
use super::services::ports::{CanvasSettings, CompletionCandidate, HostEvent, SurfaceId};
use super::state::CanvasState;

mod canvas;
mod completion;
mod sync;

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    pub(crate) fn unchanged() -> Self {
        Self {
            effects: Vec::new(),
            state_changed: false,
        }
    }

    pub(crate) fn changed(effects: Vec<Effect>) -> Self {
        Self {
            effects,
            state_changed: true,
        }
    }
}

pub struct Store {
    state: CanvasState,
}

impl Store {
    pub fn new(config: CanvasSettings) -> Self {
        Self {
            state: CanvasState::new(config),
        }
    }

    pub fn state(&self) -> &CanvasState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::Host { event, now } => match event {
                HostEvent::Init { id, name, text } => self.on_init(id, name, text),
                HostEvent::Close { id } => self.on_close(&id),
                HostEvent::Update {
                    id,
                    text,
                    origin,
                } => self.on_update(&id, text, origin, now),
                HostEvent::Completions { id, items } => self.on_completions(&id, items, now),
                HostEvent::ThemeColors => self.on_theme_colors(),
            },
            Action::SurfaceEdited { id, text, now } => self.on_surface_edited(&id, text, now),
            Action::CompletionTrigger {
                id,
                position,
                trigger_char,
                now,
            } => self.on_completion_trigger(&id, position, trigger_char, now),
            Action::PointerDown { point, button } => self.on_pointer_down(point, button),
            Action::PointerMove { point } => self.on_pointer_move(point),
            Action::PointerUp => self.on_pointer_up(),
            Action::Wheel { point, delta } => self.on_wheel(point, delta),
            Action::DismissCanvas => self.on_dismiss(),
            Action::ReopenCanvas => self.on_reopen(),
            Action::Tick { now } => self.on_tick(now),
        }
    }

    /// Pull side of the suggestion relay: called when the widget opens its
    /// list. An active transient override wins; otherwise the persistent
    /// stash is consumed one-shot.
    pub fn provide_completions(
        &mut self,
        id: &SurfaceId,
        now: Instant,
    ) -> Vec<CompletionCandidate> {
        completion::provide(&mut self.state, id, now)
    }

    fn on_tick(&mut self, now: Instant) -> DispatchResult {
        let mut effects = Vec::new();
        let mut state_changed = false;
        state_changed |= self.poll_sync(now, &mut effects);
        state_changed |= self.poll_completion(now);
        DispatchResult {
            effects,
            state_changed,
        }
    }
}
