//! Sync bridge reducers: two debounce timelines per surface reconciling
//! the widget model against the authoritative host document.

use std::time::Instant;

use tracing::{debug, trace};

use super::{DispatchResult, Store};
use crate::kernel::effect::Effect;
use crate::kernel::services::ports::{EditOrigin, SurfaceId};

impl Store {
    pub(super) fn on_surface_edited(
        &mut self,
        id: &SurfaceId,
        text: String,
        now: Instant,
    ) -> DispatchResult {
        let quiet = self.state.config.debounce();
        let Some(surface) = self.state.surface_mut(id) else {
            return DispatchResult::unchanged();
        };
        surface.content = text;
        // Restarting on every keystroke coalesces a burst into one send.
        surface.sync.outbound.arm(now, quiet);
        DispatchResult::changed(Vec::new())
    }

    pub(super) fn on_update(
        &mut self,
        id: &SurfaceId,
        text: String,
        origin: EditOrigin,
        now: Instant,
    ) -> DispatchResult {
        if origin == EditOrigin::Surface {
            // Wire-level echo of our own outbound edit.
            trace!(%id, "update echo dropped");
            return DispatchResult::unchanged();
        }
        let quiet = self.state.config.debounce();
        let Some(surface) = self.state.surface_mut(id) else {
            debug!(%id, "update for unknown surface");
            return DispatchResult::unchanged();
        };
        surface.sync.pending_inbound = Some(text);
        surface.sync.inbound.arm(now, quiet);
        DispatchResult::changed(Vec::new())
    }

    /// Fire due sync timelines. Within one surface the outbound side runs
    /// first, so an in-flight local edit wins the window before an
    /// external apply lands.
    pub(super) fn poll_sync(&mut self, now: Instant, effects: &mut Vec<Effect>) -> bool {
        let mut changed = false;
        for surface in self.state.surfaces.values_mut() {
            if surface.sync.outbound.fire(now) {
                changed = true;
                if surface.content != surface.sync.last_known_external {
                    surface.sync.last_known_external = surface.content.clone();
                    effects.push(Effect::HostEdit {
                        id: surface.id.clone(),
                        text: surface.content.clone(),
                        origin: EditOrigin::Surface,
                    });
                }
            }

            if surface.sync.inbound.fire(now) {
                changed = true;
                let Some(text) = surface.sync.pending_inbound.take() else {
                    continue;
                };
                // Identical text is skipped outright: replacing the model
                // anyway would disturb cursor and undo state.
                if text == surface.sync.last_known_external {
                    trace!(id = %surface.id, "inbound apply skipped, no divergence");
                    continue;
                }
                surface.content = text.clone();
                surface.sync.last_known_external = text.clone();
                effects.push(Effect::ReplaceWidgetContent {
                    id: surface.id.clone(),
                    text,
                });
            }
        }
        changed
    }
}
