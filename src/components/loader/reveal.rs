//! Browser host for the reveal state machine.
//!
//! The machine lives in a local [`StoredValue`] and schedules its own timers
//! through [`BrowserTimers`]. After every transition its state is mirrored
//! into signals, outside the machine's borrow, so rendering never touches it.

use leptos::prelude::*;
use vows_core::reveal::visibility;
use vows_core::{RevealEvent, RevealOrchestrator, RevealState, Screen, ScreenVisibility};

use crate::core::BrowserTimers;

type Machine = RevealOrchestrator<BrowserTimers<RevealEvent>>;

/// Reactive view of the reveal sequence.
#[derive(Clone, Copy)]
pub struct RevealHandle {
    pub state: RwSignal<RevealState>,
    pub fading: RwSignal<bool>,
    machine: StoredValue<Option<Machine>, LocalStorage>,
}

impl RevealHandle {
    /// Rendering flags for `screen`, recomputed on every transition.
    pub fn visibility(self, screen: Screen) -> Memo<ScreenVisibility> {
        Memo::new(move |_| visibility(self.state.get(), self.fading.get(), screen))
    }

    /// The "open invitation" button. Ignored unless the hero is showing.
    pub fn open_invitation(self) {
        self.apply(|machine| {
            machine.open_invitation();
        });
    }

    fn dispatch(self, event: RevealEvent) {
        self.apply(|machine| {
            machine.dispatch(event);
        });
    }

    /// Cancel pending timers. Later timer events cannot change the state.
    fn unmount(self) {
        self.machine.try_update_value(|machine| {
            if let Some(machine) = machine {
                machine.unmount();
            }
        });
    }

    fn apply(self, f: impl FnOnce(&mut Machine)) {
        let snapshot = self
            .machine
            .try_update_value(|machine| {
                machine.as_mut().map(|machine| {
                    f(machine);
                    (machine.state(), machine.is_fading())
                })
            })
            .flatten();

        if let Some((state, fading)) = snapshot {
            if self.state.get_untracked() != state {
                self.state.set(state);
            }
            if self.fading.get_untracked() != fading {
                self.fading.set(fading);
            }
        }
    }
}

/// Start the reveal sequence for the current component.
///
/// Pending timers are cancelled when the owning component is cleaned up.
pub fn use_reveal() -> RevealHandle {
    let handle = RevealHandle {
        state: RwSignal::new(RevealState::default()),
        fading: RwSignal::new(false),
        machine: StoredValue::new_local(None),
    };

    let timers = BrowserTimers::new(move |event| handle.dispatch(event));
    handle.machine.set_value(Some(RevealOrchestrator::new(timers)));
    handle.apply(Machine::mount);

    on_cleanup(move || handle.unmount());

    handle
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use gloo_timers::future::TimeoutFuture;
    use vows_core::Scheduler;
    use vows_core::reveal::{FADE_DURATION, LOADING_DURATION};
    use wasm_bindgen_test::*;

    use super::*;
    use crate::core::delay_ms;

    wasm_bindgen_test_configure!(run_in_browser);

    fn pending(handle: RevealHandle) -> usize {
        handle
            .machine
            .with_value(|machine| machine.as_ref().map_or(0, |m| m.scheduler().pending()))
    }

    fn past_fade() -> TimeoutFuture {
        TimeoutFuture::new(delay_ms(LOADING_DURATION + FADE_DURATION) + 200)
    }

    #[wasm_bindgen_test]
    async fn test_sequence_reaches_hero_then_opens() {
        let owner = Owner::new();
        let handle = owner.with(use_reveal);
        assert_eq!(handle.state.get_untracked(), RevealState::Loading);
        assert_eq!(pending(handle), 1);

        past_fade().await;
        assert_eq!(handle.state.get_untracked(), RevealState::Hero);
        assert!(!handle.fading.get_untracked());

        handle.open_invitation();
        assert_eq!(handle.state.get_untracked(), RevealState::Revealed);
        owner.cleanup();
    }

    #[wasm_bindgen_test]
    async fn test_unmount_cancels_timers() {
        let owner = Owner::new();
        let handle = owner.with(use_reveal);

        handle.unmount();
        assert_eq!(pending(handle), 0);

        past_fade().await;
        assert_eq!(handle.state.get_untracked(), RevealState::Loading);
        owner.cleanup();
    }

    #[wasm_bindgen_test]
    fn test_open_ignored_while_loading() {
        let owner = Owner::new();
        let handle = owner.with(use_reveal);

        handle.open_invitation();
        assert_eq!(handle.state.get_untracked(), RevealState::Loading);
        owner.cleanup();
    }
}
