//! One floating editing window bound to a single document identity. The
//! record aggregates ALL per-id state (view, sync, completion) so that
//! destroying a surface is one removal over one structure.

use std::time::Instant;

use compact_str::CompactString;

use super::debounce::Debounce;
use super::language::LanguageTag;
use super::services::ports::{CompletionCandidate, SurfaceId};
use super::viewport::WorldPoint;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl SurfaceRect {
    pub fn contains(&self, p: WorldPoint) -> bool {
        p.x >= self.x && p.x < self.x + self.width && p.y >= self.y && p.y < self.y + self.height
    }

    /// The draggable strip along the top edge.
    pub fn title_contains(&self, p: WorldPoint, title_height: f64) -> bool {
        self.contains(p) && p.y < self.y + title_height
    }

    /// The square resize handle in the bottom-right corner.
    pub fn handle_contains(&self, p: WorldPoint, handle: f64) -> bool {
        self.contains(p)
            && p.x >= self.x + self.width - handle
            && p.y >= self.y + self.height - handle
    }
}

/// Bidirectional reconciliation state between the surface's live content
/// and the authoritative host document.
#[derive(Debug, Clone, Default)]
pub struct SyncState {
    /// The text both sides last agreed on; updated synchronously with
    /// every applied value on both paths (echo prevention).
    pub last_known_external: String,
    pub outbound: Debounce,
    pub inbound: Debounce,
    /// Latest external text waiting for the inbound timeline to fire.
    pub pending_inbound: Option<String>,
}

#[derive(Debug, Clone)]
pub struct TransientOverride {
    pub items: Vec<CompletionCandidate>,
    pub expires_at: Instant,
}

impl TransientOverride {
    pub fn is_active(&self, now: Instant) -> bool {
        self.expires_at > now
    }
}

/// Per-surface suggestion relay state.
#[derive(Debug, Clone, Default)]
pub struct CompletionState {
    /// Trigger-gesture counter; odd gestures fetch, even gestures display.
    pub press_parity: u32,
    /// Completed fetch count, used for previous-round dedup.
    pub fetch_round: u32,
    /// One-shot stash served by the persistent provider.
    pub stash: Vec<CompletionCandidate>,
    /// Labels shown in the most recent round, and nothing older.
    pub last_shown: Vec<CompactString>,
    pub transient: Option<TransientOverride>,
    pub suppress_on_type: Debounce,
}

#[derive(Debug, Clone)]
pub struct Surface {
    pub id: SurfaceId,
    pub display_name: CompactString,
    pub language: LanguageTag,
    pub rect: SurfaceRect,
    pub z_order: u64,
    /// Snapshot of the widget model's current text.
    pub content: String,
    pub sync: SyncState,
    pub completion: CompletionState,
}

impl Surface {
    pub fn new(
        id: SurfaceId,
        display_name: CompactString,
        text: String,
        rect: SurfaceRect,
        z_order: u64,
    ) -> Self {
        let language = LanguageTag::from_display_name(&display_name);
        Self {
            id,
            display_name,
            language,
            rect,
            z_order,
            sync: SyncState {
                last_known_external: text.clone(),
                ..SyncState::default()
            },
            content: text,
            completion: CompletionState::default(),
        }
    }
}
