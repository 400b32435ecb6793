//! The canvas shell: owns the headless store, the live widget registry,
//! and the outgoing command sink; executes the effects the store emits.

mod host;
mod tick;

#[cfg(test)]
mod tests;

use std::time::Instant;

use compact_str::CompactString;
use rustc_hash::FxHashMap;

use crate::kernel::services::ports::{
    CanvasSettings, EditorWidget, HostEvent, HostSink, SurfaceId, ThemeSource, WidgetFactory,
};
use crate::kernel::{Action, Store};

pub struct Canvas {
    store: Store,
    widgets: FxHashMap<SurfaceId, Box<dyn EditorWidget>>,
    factory: Box<dyn WidgetFactory>,
    theme: Box<dyn ThemeSource>,
    sink: Box<dyn HostSink>,
}

impl Canvas {
    pub fn new(
        config: CanvasSettings,
        factory: Box<dyn WidgetFactory>,
        theme: Box<dyn ThemeSource>,
        sink: Box<dyn HostSink>,
    ) -> Self {
        Self {
            store: Store::new(config),
            widgets: FxHashMap::default(),
            factory,
            theme,
            sink,
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn widget(&self, id: &SurfaceId) -> Option<&dyn EditorWidget> {
        self.widgets.get(id).map(|w| w.as_ref())
    }

    pub fn widget_count(&self) -> usize {
        self.widgets.len()
    }

    /// Materialize a surface per already-open host document. Called once
    /// on activation and again after a reopen.
    pub fn activate<I>(&mut self, documents: I, now: Instant) -> bool
    where
        I: IntoIterator<Item = (SurfaceId, CompactString, String)>,
    {
        let mut changed = false;
        for (id, name, text) in documents {
            changed |= self.handle_action(Action::Host {
                event: HostEvent::Init { id, name, text },
                now,
            });
        }
        changed
    }

    pub fn dismiss(&mut self) -> bool {
        self.handle_action(Action::DismissCanvas)
    }

    /// Clear the manually-closed latch, then re-seed.
    pub fn reopen<I>(&mut self, documents: I, now: Instant) -> bool
    where
        I: IntoIterator<Item = (SurfaceId, CompactString, String)>,
    {
        let mut changed = self.handle_action(Action::ReopenCanvas);
        changed |= self.activate(documents, now);
        changed
    }
}
