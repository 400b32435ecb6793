use rustc_hash::FxHashMap;

use super::services::ports::{CanvasSettings, SurfaceId};
use super::surface::{Surface, SurfaceRect};
use super::viewport::{ScreenPoint, Viewport, WorldPoint};

/// Whole-canvas lifecycle: armed canvases materialize surfaces for host
/// lifecycle events; a suppressed canvas (explicitly dismissed by the
/// user) drops them until an explicit reopen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CanvasPhase {
    #[default]
    Armed,
    Suppressed,
}

/// Pointer capture for in-flight drag interactions.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PointerCapture {
    #[default]
    Idle,
    MoveSurface {
        id: SurfaceId,
        /// Pointer-to-origin offset in world space, so on-screen motion
        /// tracks the pointer at any zoom level.
        grab_x: f64,
        grab_y: f64,
    },
    ResizeSurface {
        id: SurfaceId,
    },
    Pan {
        last: ScreenPoint,
    },
}

#[derive(Debug)]
pub struct CanvasState {
    pub phase: CanvasPhase,
    pub surfaces: FxHashMap<SurfaceId, Surface>,
    pub viewport: Viewport,
    pub capture: PointerCapture,
    pub theme_epoch: u64,
    pub config: CanvasSettings,
    next_z: u64,
    placed: u64,
}

impl CanvasState {
    pub fn new(config: CanvasSettings) -> Self {
        Self {
            phase: CanvasPhase::Armed,
            surfaces: FxHashMap::default(),
            viewport: Viewport::default(),
            capture: PointerCapture::Idle,
            theme_epoch: 0,
            config,
            next_z: 0,
            placed: 0,
        }
    }

    pub fn surface(&self, id: &SurfaceId) -> Option<&Surface> {
        self.surfaces.get(id)
    }

    pub fn surface_mut(&mut self, id: &SurfaceId) -> Option<&mut Surface> {
        self.surfaces.get_mut(id)
    }

    pub fn next_z(&mut self) -> u64 {
        self.next_z += 1;
        self.next_z
    }

    /// Staggered diagonal placement so freshly created surfaces never
    /// fully overlap.
    pub fn next_placement(&mut self) -> SurfaceRect {
        let step = self.config.stagger_step;
        let n = self.placed as f64;
        self.placed += 1;
        SurfaceRect {
            x: step * n,
            y: step * n,
            width: self.config.surface_width,
            height: self.config.surface_height,
        }
    }

    /// The topmost surface whose rectangle contains the world point.
    pub fn top_surface_at(&self, p: WorldPoint) -> Option<&Surface> {
        self.surfaces
            .values()
            .filter(|s| s.rect.contains(p))
            .max_by_key(|s| s.z_order)
    }
}
