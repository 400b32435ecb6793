//! Services layer (ports + adapters).
//!
//! - `ports`: pure contracts/types used across the crate (kernel-facing).
//! - `adapters`: OS/runtime specific implementations (IO/async).

pub mod adapters;
pub mod bus;
pub mod ports;

pub use bus::{canvas_bus, CanvasBusReceiver, CanvasBusSender, CanvasMessage};
