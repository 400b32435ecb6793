//! Completion relay reducers: press-parity routing between fetch and
//! display gestures, the transient suggestion override, and the
//! suppress-on-type latch.

use std::time::Instant;

use tracing::{debug, trace};

use super::{DispatchResult, Store};
use crate::kernel::effect::Effect;
use crate::kernel::services::ports::{CompletionCandidate, CursorPosition, SurfaceId};
use crate::kernel::state::CanvasState;
use crate::kernel::surface::TransientOverride;

impl Store {
    pub(super) fn on_completion_trigger(
        &mut self,
        id: &SurfaceId,
        position: CursorPosition,
        trigger_char: Option<char>,
        now: Instant,
    ) -> DispatchResult {
        let Some(surface) = self.state.surface_mut(id) else {
            return DispatchResult::unchanged();
        };
        let completion = &mut surface.completion;

        // A second gesture always retires the current override.
        completion.transient = None;

        if trigger_char.is_some() && completion.suppress_on_type.is_active(now) {
            // The widget mechanically re-triggered off a keystroke right
            // after we showed suggestions; swallow it without advancing
            // the fetch/display rhythm.
            completion.suppress_on_type.cancel();
            trace!(%id, "char trigger suppressed");
            return DispatchResult::changed(Vec::new());
        }

        completion.press_parity += 1;
        let effect = if completion.press_parity % 2 == 1 {
            Effect::RequestCompletions {
                id: id.clone(),
                position,
                trigger_char,
            }
        } else {
            Effect::ShowSuggestions { id: id.clone() }
        };
        DispatchResult::changed(vec![effect])
    }

    pub(super) fn on_completions(
        &mut self,
        id: &SurfaceId,
        items: Vec<CompletionCandidate>,
        now: Instant,
    ) -> DispatchResult {
        let ttl = self.state.config.transient_ttl();
        let suppress = self.state.config.suppress();
        let Some(surface) = self.state.surface_mut(id) else {
            debug!(%id, "completions for unknown surface");
            return DispatchResult::unchanged();
        };
        let completion = &mut surface.completion;

        completion.fetch_round += 1;
        let items_to_show: Vec<CompletionCandidate> = if completion.fetch_round >= 3 {
            // Drop labels already shown in the immediately preceding round
            // only; earlier rounds are intentionally not consulted.
            items
                .into_iter()
                .filter(|item| !completion.last_shown.contains(&item.label))
                .collect()
        } else {
            items
        };

        completion.last_shown = items_to_show.iter().map(|item| item.label.clone()).collect();
        completion.stash = items_to_show.clone();
        completion.transient = Some(TransientOverride {
            items: items_to_show,
            expires_at: now + ttl,
        });
        completion.suppress_on_type.arm(now, suppress);

        DispatchResult::changed(vec![Effect::ShowSuggestions { id: id.clone() }])
    }

    /// Expire transient overrides and the suppress latch.
    pub(super) fn poll_completion(&mut self, now: Instant) -> bool {
        let mut changed = false;
        for surface in self.state.surfaces.values_mut() {
            let completion = &mut surface.completion;
            if completion
                .transient
                .as_ref()
                .is_some_and(|t| !t.is_active(now))
            {
                completion.transient = None;
                changed = true;
            }
            changed |= completion.suppress_on_type.fire(now);
        }
        changed
    }
}

pub(super) fn provide(
    state: &mut CanvasState,
    id: &SurfaceId,
    now: Instant,
) -> Vec<CompletionCandidate> {
    let Some(surface) = state.surface_mut(id) else {
        return Vec::new();
    };
    let completion = &mut surface.completion;

    if let Some(transient) = completion.transient.as_ref() {
        if transient.is_active(now) {
            // While the override is live the persistent stash stays silent.
            return transient.items.clone();
        }
        completion.transient = None;
    }
    // One-shot consumption: the stash is forgotten as it is served.
    std::mem::take(&mut completion.stash)
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;
    use crate::kernel::services::ports::{CanvasSettings, HostEvent};
    use crate::kernel::Action;

    fn doc1() -> SurfaceId {
        SurfaceId::new("doc1")
    }

    fn candidate(label: &str) -> CompletionCandidate {
        CompletionCandidate {
            label: label.into(),
            insert_text: label.to_string(),
            kind: None,
            documentation: None,
            sort_text: None,
            filter_text: None,
        }
    }

    fn store_with_doc(now: Instant) -> Store {
        let mut s = Store::new(CanvasSettings::default());
        s.dispatch(Action::Host {
            event: HostEvent::Init {
                id: doc1(),
                name: "a.rs".into(),
                text: String::new(),
            },
            now,
        });
        s
    }

    fn trigger(s: &mut Store, now: Instant) -> Vec<Effect> {
        s.dispatch(Action::CompletionTrigger {
            id: doc1(),
            position: CursorPosition::default(),
            trigger_char: None,
            now,
        })
        .effects
    }

    fn deliver(s: &mut Store, labels: &[&str], now: Instant) -> Vec<Effect> {
        s.dispatch(Action::Host {
            event: HostEvent::Completions {
                id: doc1(),
                items: labels.iter().map(|l| candidate(l)).collect(),
            },
            now,
        })
        .effects
    }

    fn labels(items: &[CompletionCandidate]) -> Vec<&str> {
        items.iter().map(|i| i.label.as_str()).collect()
    }

    #[test]
    fn gestures_alternate_between_fetch_and_display() {
        let t0 = Instant::now();
        let mut s = store_with_doc(t0);

        for (n, expect_fetch) in [(1, true), (2, false), (3, true), (4, false)] {
            let effects = trigger(&mut s, t0 + Duration::from_secs(n));
            assert_eq!(effects.len(), 1, "gesture {n}");
            match (&effects[0], expect_fetch) {
                (Effect::RequestCompletions { .. }, true) => {}
                (Effect::ShowSuggestions { .. }, false) => {}
                (other, _) => panic!("gesture {n}: unexpected {other:?}"),
            }
        }
    }

    #[test]
    fn third_round_excludes_labels_from_the_previous_round_only() {
        let t0 = Instant::now();
        let mut s = store_with_doc(t0);

        // Round 1 and 2 show everything, even repeats.
        deliver(&mut s, &["alpha", "beta"], t0);
        deliver(&mut s, &["alpha", "gamma"], t0 + Duration::from_secs(1));
        let shown = s.provide_completions(&doc1(), t0 + Duration::from_secs(1));
        assert_eq!(labels(&shown), vec!["alpha", "gamma"]);

        // Round 3 drops labels shown in round 2, but "beta" (round 1 only)
        // comes back: the comparison is not cumulative.
        deliver(
            &mut s,
            &["alpha", "beta", "delta"],
            t0 + Duration::from_secs(2),
        );
        let shown = s.provide_completions(&doc1(), t0 + Duration::from_secs(2));
        assert_eq!(labels(&shown), vec!["beta", "delta"]);

        // Round 4 compares against round 3's shown set.
        deliver(
            &mut s,
            &["beta", "epsilon"],
            t0 + Duration::from_secs(3),
        );
        let shown = s.provide_completions(&doc1(), t0 + Duration::from_secs(3));
        assert_eq!(labels(&shown), vec!["epsilon"]);
    }

    #[test]
    fn transient_override_wins_until_expiry_then_stash_is_one_shot() {
        let t0 = Instant::now();
        let mut s = store_with_doc(t0);
        let ttl = s.state().config.transient_ttl();

        deliver(&mut s, &["alpha"], t0);

        // Repeatable while the override is active.
        assert_eq!(labels(&s.provide_completions(&doc1(), t0)), vec!["alpha"]);
        assert_eq!(
            labels(&s.provide_completions(&doc1(), t0 + ttl / 2)),
            vec!["alpha"]
        );

        // Past the TTL the override is gone; the stash serves once.
        let late = t0 + ttl + Duration::from_millis(1);
        assert_eq!(labels(&s.provide_completions(&doc1(), late)), vec!["alpha"]);
        assert!(s.provide_completions(&doc1(), late).is_empty());
    }

    #[test]
    fn tick_expires_the_override() {
        let t0 = Instant::now();
        let mut s = store_with_doc(t0);
        let ttl = s.state().config.transient_ttl();

        deliver(&mut s, &["alpha"], t0);
        s.dispatch(Action::Tick { now: t0 + ttl });

        let surface = s.state().surface(&doc1()).unwrap();
        assert!(surface.completion.transient.is_none());
    }

    #[test]
    fn char_trigger_right_after_display_is_swallowed_once() {
        let t0 = Instant::now();
        let mut s = store_with_doc(t0);

        deliver(&mut s, &["alpha"], t0);

        let swallowed = s.dispatch(Action::CompletionTrigger {
            id: doc1(),
            position: CursorPosition::default(),
            trigger_char: Some('.'),
            now: t0 + Duration::from_millis(100),
        });
        assert!(swallowed.effects.is_empty());
        let parity = s.state().surface(&doc1()).unwrap().completion.press_parity;
        assert_eq!(parity, 0);

        // The latch cleared on consumption; the next char trigger fetches.
        let effects = s
            .dispatch(Action::CompletionTrigger {
                id: doc1(),
                position: CursorPosition::default(),
                trigger_char: Some('.'),
                now: t0 + Duration::from_millis(200),
            })
            .effects;
        assert!(matches!(effects[0], Effect::RequestCompletions { .. }));
    }

    #[test]
    fn suppress_latch_expires_on_its_own() {
        let t0 = Instant::now();
        let mut s = store_with_doc(t0);
        let suppress = Duration::from_millis(s.state().config.suppress_ms);

        deliver(&mut s, &["alpha"], t0);
        s.dispatch(Action::Tick { now: t0 + suppress });

        let effects = s
            .dispatch(Action::CompletionTrigger {
                id: doc1(),
                position: CursorPosition::default(),
                trigger_char: Some('.'),
                now: t0 + suppress + Duration::from_millis(1),
            })
            .effects;
        assert!(matches!(effects[0], Effect::RequestCompletions { .. }));
    }

    #[test]
    fn explicit_gesture_ignores_the_suppress_latch() {
        let t0 = Instant::now();
        let mut s = store_with_doc(t0);

        deliver(&mut s, &["alpha"], t0);

        // A keyboard chord (no trigger character) goes straight through.
        let effects = trigger(&mut s, t0 + Duration::from_millis(100));
        assert!(matches!(effects[0], Effect::RequestCompletions { .. }));
    }

    #[test]
    fn a_new_gesture_tears_down_the_active_override() {
        let t0 = Instant::now();
        let mut s = store_with_doc(t0);

        deliver(&mut s, &["alpha"], t0);
        trigger(&mut s, t0 + Duration::from_secs(1));

        let surface = s.state().surface(&doc1()).unwrap();
        assert!(surface.completion.transient.is_none());
    }

    #[test]
    fn empty_delivery_clears_the_suggestion_surface() {
        // A failed host fetch arrives as an empty list; the UI must not
        // be left holding stale candidates.
        let t0 = Instant::now();
        let mut s = store_with_doc(t0);

        deliver(&mut s, &["alpha"], t0);
        deliver(&mut s, &[], t0 + Duration::from_secs(1));
        assert!(s
            .provide_completions(&doc1(), t0 + Duration::from_secs(1))
            .is_empty());
    }

    #[test]
    fn completions_for_unknown_or_closed_surface_are_dropped() {
        let t0 = Instant::now();
        let mut s = store_with_doc(t0);

        s.dispatch(Action::Host {
            event: HostEvent::Close { id: doc1() },
            now: t0,
        });
        let r = deliver(&mut s, &["alpha"], t0);
        assert!(r.is_empty());
        assert!(s.provide_completions(&doc1(), t0).is_empty());
    }

    #[test]
    fn completion_state_dies_with_its_surface() {
        let t0 = Instant::now();
        let mut s = store_with_doc(t0);

        deliver(&mut s, &["alpha"], t0);
        s.dispatch(Action::Host {
            event: HostEvent::Close { id: doc1() },
            now: t0,
        });

        // Recreating the id starts from a clean parity and empty stash.
        s.dispatch(Action::Host {
            event: HostEvent::Init {
                id: doc1(),
                name: "a.rs".into(),
                text: String::new(),
            },
            now: t0,
        });
        let surface = s.state().surface(&doc1()).unwrap();
        assert_eq!(surface.completion.press_parity, 0);
        assert_eq!(surface.completion.fetch_round, 0);
        assert!(surface.completion.stash.is_empty());
        assert!(surface.completion.transient.is_none());
    }
}
