//! Headless canvas core (state/action/effect).

pub mod action;
pub mod debounce;
pub mod effect;
pub mod language;
pub mod services;
pub mod state;
pub mod store;
pub mod surface;
pub mod viewport;

pub use action::{Action, PointerButton};
pub use debounce::Debounce;
pub use effect::Effect;
pub use language::LanguageTag;
pub use state::{CanvasPhase, CanvasState, PointerCapture};
pub use store::{DispatchResult, Store};
pub use surface::{CompletionState, Surface, SurfaceRect, SyncState, TransientOverride};
pub use viewport::{ScreenPoint, Viewport, WorldPoint};
