//! Canvas viewport: pan/zoom transform between screen space (pointer
//! coordinates) and world space (surface rectangles).

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WorldPoint {
    pub x: f64,
    pub y: f64,
}

impl WorldPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// screen = world * zoom + pan
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub pan_x: f64,
    pub pan_y: f64,
    pub zoom: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            pan_x: 0.0,
            pan_y: 0.0,
            zoom: 1.0,
        }
    }
}

impl Viewport {
    pub fn to_world(&self, p: ScreenPoint) -> WorldPoint {
        WorldPoint {
            x: (p.x - self.pan_x) / self.zoom,
            y: (p.y - self.pan_y) / self.zoom,
        }
    }

    pub fn to_screen(&self, p: WorldPoint) -> ScreenPoint {
        ScreenPoint {
            x: p.x * self.zoom + self.pan_x,
            y: p.y * self.zoom + self.pan_y,
        }
    }

    /// Pan moves the whole coordinate frame; deltas are raw screen pixels,
    /// not zoom-scaled.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Zoom about a screen-space anchor: the world point under the anchor
    /// stays under it after the change. Result clamped to [min, max].
    pub fn zoom_about(&mut self, anchor: ScreenPoint, factor: f64, min: f64, max: f64) {
        let world = self.to_world(anchor);
        let next = (self.zoom * factor).clamp(min, max);
        self.zoom = next;
        self.pan_x = anchor.x - world.x * next;
        self.pan_y = anchor.y - world.y * next;
    }
}
