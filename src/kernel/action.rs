use std::time::Instant;

use super::services::ports::{CursorPosition, HostEvent, SurfaceId};
use super::viewport::ScreenPoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Middle,
}

#[derive(Debug, Clone)]
pub enum Action {
    /// A decoded host message, stamped with its arrival time.
    Host { event: HostEvent, now: Instant },
    /// The widget's model changed under user editing.
    SurfaceEdited {
        id: SurfaceId,
        text: String,
        now: Instant,
    },
    /// A suggest gesture on a focused surface. `trigger_char` is set when
    /// the widget re-triggered off a typed character rather than an
    /// explicit key chord.
    CompletionTrigger {
        id: SurfaceId,
        position: CursorPosition,
        trigger_char: Option<char>,
        now: Instant,
    },
    PointerDown {
        point: ScreenPoint,
        button: PointerButton,
    },
    PointerMove {
        point: ScreenPoint,
    },
    PointerUp,
    Wheel {
        point: ScreenPoint,
        delta: f64,
    },
    /// The user dismissed the whole canvas.
    DismissCanvas,
    /// Explicit re-open command; re-arms materialization.
    ReopenCanvas,
    Tick {
        now: Instant,
    },
}
