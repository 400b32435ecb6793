//! Canvas manager reducers: surface lifecycle, stacking, drag/resize,
//! pan/zoom.

use compact_str::CompactString;
use tracing::debug;

use super::{DispatchResult, Store};
use crate::kernel::action::PointerButton;
use crate::kernel::effect::Effect;
use crate::kernel::services::ports::SurfaceId;
use crate::kernel::state::{CanvasPhase, PointerCapture};
use crate::kernel::surface::Surface;
use crate::kernel::viewport::ScreenPoint;

impl Store {
    pub(super) fn on_init(
        &mut self,
        id: SurfaceId,
        name: CompactString,
        text: String,
    ) -> DispatchResult {
        if self.state.phase == CanvasPhase::Suppressed {
            debug!(%id, "init dropped, canvas suppressed");
            return DispatchResult::unchanged();
        }
        if self.state.surfaces.contains_key(&id) {
            return DispatchResult::unchanged();
        }

        let rect = self.state.next_placement();
        let z = self.state.next_z();
        let surface = Surface::new(id.clone(), name.clone(), text.clone(), rect, z);
        let language = surface.language;
        self.state.surfaces.insert(id.clone(), surface);

        debug!(%id, z, "surface created");
        DispatchResult::changed(vec![Effect::CreateWidget {
            id,
            name,
            language,
            text,
        }])
    }

    pub(super) fn on_close(&mut self, id: &SurfaceId) -> DispatchResult {
        // Removing the record drops its debounce timelines and any
        // transient provider with it; nothing keyed by the id survives.
        if self.state.surfaces.remove(id).is_none() {
            return DispatchResult::unchanged();
        }
        self.release_capture_of(id);
        debug!(%id, "surface destroyed");
        DispatchResult::changed(vec![Effect::DisposeWidget { id: id.clone() }])
    }

    pub(super) fn on_dismiss(&mut self) -> DispatchResult {
        let mut effects: Vec<Effect> = self
            .state
            .surfaces
            .drain()
            .map(|(id, _)| Effect::DisposeWidget { id })
            .collect();
        effects.sort_by(|a, b| match (a, b) {
            (Effect::DisposeWidget { id: a }, Effect::DisposeWidget { id: b }) => {
                a.as_str().cmp(b.as_str())
            }
            _ => std::cmp::Ordering::Equal,
        });
        self.state.capture = PointerCapture::Idle;
        let was_armed = self.state.phase == CanvasPhase::Armed;
        self.state.phase = CanvasPhase::Suppressed;

        DispatchResult {
            state_changed: was_armed || !effects.is_empty(),
            effects,
        }
    }

    pub(super) fn on_reopen(&mut self) -> DispatchResult {
        if self.state.phase == CanvasPhase::Armed {
            return DispatchResult::unchanged();
        }
        self.state.phase = CanvasPhase::Armed;
        DispatchResult::changed(Vec::new())
    }

    pub(super) fn on_theme_colors(&mut self) -> DispatchResult {
        self.state.theme_epoch += 1;
        DispatchResult::changed(vec![Effect::RefreshTheme])
    }

    pub(super) fn on_pointer_down(
        &mut self,
        point: ScreenPoint,
        button: PointerButton,
    ) -> DispatchResult {
        if button == PointerButton::Middle {
            self.state.capture = PointerCapture::Pan { last: point };
            return DispatchResult::unchanged();
        }

        let world = self.state.viewport.to_world(point);
        let Some(hit) = self.state.top_surface_at(world) else {
            return DispatchResult::unchanged();
        };
        let id = hit.id.clone();
        let rect = hit.rect;

        // Every press raises the surface above the current maximum.
        let z = self.state.next_z();
        let title_height = self.state.config.title_height;
        let handle = self.state.config.resize_handle;
        if let Some(surface) = self.state.surface_mut(&id) {
            surface.z_order = z;
        }

        if rect.handle_contains(world, handle) {
            self.state.capture = PointerCapture::ResizeSurface { id };
        } else if rect.title_contains(world, title_height) {
            self.state.capture = PointerCapture::MoveSurface {
                id,
                grab_x: world.x - rect.x,
                grab_y: world.y - rect.y,
            };
        }
        // A press in the body belongs to the widget; the raise is still ours.

        DispatchResult::changed(Vec::new())
    }

    pub(super) fn on_pointer_move(&mut self, point: ScreenPoint) -> DispatchResult {
        match self.state.capture.clone() {
            PointerCapture::Idle => DispatchResult::unchanged(),
            PointerCapture::MoveSurface { id, grab_x, grab_y } => {
                let world = self.state.viewport.to_world(point);
                let Some(surface) = self.state.surface_mut(&id) else {
                    return DispatchResult::unchanged();
                };
                surface.rect.x = world.x - grab_x;
                surface.rect.y = world.y - grab_y;
                DispatchResult::changed(Vec::new())
            }
            PointerCapture::ResizeSurface { id } => {
                let world = self.state.viewport.to_world(point);
                let min_w = self.state.config.min_surface_width;
                let min_h = self.state.config.min_surface_height;
                let Some(surface) = self.state.surface_mut(&id) else {
                    return DispatchResult::unchanged();
                };
                // The top-left corner stays anchored in world space.
                surface.rect.width = (world.x - surface.rect.x).max(min_w);
                surface.rect.height = (world.y - surface.rect.y).max(min_h);
                DispatchResult::changed(Vec::new())
            }
            PointerCapture::Pan { last } => {
                self.state
                    .viewport
                    .pan_by(point.x - last.x, point.y - last.y);
                self.state.capture = PointerCapture::Pan { last: point };
                DispatchResult::changed(Vec::new())
            }
        }
    }

    pub(super) fn on_pointer_up(&mut self) -> DispatchResult {
        let was_idle = self.state.capture == PointerCapture::Idle;
        self.state.capture = PointerCapture::Idle;
        DispatchResult {
            effects: Vec::new(),
            state_changed: !was_idle,
        }
    }

    pub(super) fn on_wheel(&mut self, point: ScreenPoint, delta: f64) -> DispatchResult {
        let world = self.state.viewport.to_world(point);
        // Wheel over a surface is the surface's own scroll.
        if self.state.top_surface_at(world).is_some() {
            return DispatchResult::unchanged();
        }

        let step = self.state.config.zoom_step;
        let factor = if delta < 0.0 { step } else { 1.0 / step };
        let min = self.state.config.min_zoom;
        let max = self.state.config.max_zoom;
        let before = self.state.viewport;
        self.state.viewport.zoom_about(point, factor, min, max);

        DispatchResult {
            effects: Vec::new(),
            state_changed: self.state.viewport != before,
        }
    }

    fn release_capture_of(&mut self, id: &SurfaceId) {
        let captured = match &self.state.capture {
            PointerCapture::MoveSurface { id: c, .. } => c == id,
            PointerCapture::ResizeSurface { id: c } => c == id,
            _ => false,
        };
        if captured {
            self.state.capture = PointerCapture::Idle;
        }
    }
}
